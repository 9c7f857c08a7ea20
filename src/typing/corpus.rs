//! Practice sentences: the built-in English/Japanese list and JSON loading.

use crate::error::{ClickerError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One practice phrase and its display-only translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: u32,
    pub text: String,
    pub translation: String,
}

impl Sentence {
    pub fn new(id: u32, text: &str, translation: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            translation: translation.to_string(),
        }
    }
}

const BUILTIN_SENTENCES: &[(u32, &str, &str)] = &[
    (1, "I like coffee.", "私はコーヒーが好きです。"),
    (2, "Where is the station?", "駅はどこですか？"),
    (3, "It is sunny today.", "今日は晴れです。"),
    (4, "Thank you very much.", "どうもありがとうございます。"),
    (5, "Can you help me?", "手伝ってもらえますか？"),
    (6, "I am learning English.", "私は英語を勉強しています。"),
    (7, "What time is it now?", "今何時ですか？"),
    (8, "This book is interesting.", "この本は面白いです。"),
    (9, "She plays the piano.", "彼女はピアノを弾きます。"),
    (10, "Let's go to the park.", "公園に行きましょう。"),
    (11, "How much is this?", "これはいくらですか？"),
    (12, "I will call you later.", "後で電話します。"),
    (13, "The cat is sleeping.", "猫が寝ています。"),
    (14, "Please open the window.", "窓を開けてください。"),
    (15, "He runs every morning.", "彼は毎朝走ります。"),
    (16, "We had a great time.", "とても楽しい時間を過ごしました。"),
    (17, "Practice makes perfect.", "習うより慣れろ。"),
    (18, "My computer is very fast.", "私のコンピューターはとても速いです。"),
    (19, "Do you have any questions?", "何か質問はありますか？"),
    (20, "See you tomorrow.", "また明日。"),
];

/// A non-empty list of practice sentences, each with something to type.
#[derive(Debug, Clone)]
pub struct SentenceCorpus {
    sentences: Vec<Sentence>,
}

impl SentenceCorpus {
    /// Rejects an empty list and any sentence with empty text. A dealt
    /// sentence that is already complete could never be replaced.
    pub fn new(sentences: Vec<Sentence>) -> Result<Self> {
        if sentences.is_empty() {
            return Err(ClickerError::EmptyCorpus);
        }
        if let Some(blank) = sentences.iter().find(|s| s.text.is_empty()) {
            return Err(ClickerError::EmptySentence(blank.id));
        }
        Ok(Self { sentences })
    }

    pub fn builtin() -> Self {
        Self {
            sentences: BUILTIN_SENTENCES
                .iter()
                .map(|&(id, text, translation)| Sentence::new(id, text, translation))
                .collect(),
        }
    }

    /// Reads a JSON array of `{ "id", "text", "translation" }` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let sentences: Vec<Sentence> = serde_json::from_str(&json)?;
        Self::new(sentences)
    }

    /// Uniform pick; the same sentence may come up twice in a row.
    pub fn choose(&self, rng: &mut impl Rng) -> &Sentence {
        self.sentences
            .choose(rng)
            .expect("corpus is never empty")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }
}
