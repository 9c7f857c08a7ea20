/// Progress through one practice sentence.
///
/// The cursor counts characters, not bytes, so sentences with multi-byte
/// characters advance one keystroke per visible character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingSession {
    target_text: String,
    target_chars: Vec<char>,
    translation_text: String,
    sentence_id: Option<u32>,
    cursor: usize,
}

impl TypingSession {
    pub fn new(target_text: &str, translation_text: &str) -> Self {
        let mut session = Self::default();
        session.set_sentence(target_text, translation_text);
        session
    }

    /// Replaces the sentence and rewinds the cursor.
    pub fn set_sentence(&mut self, target_text: &str, translation_text: &str) {
        self.target_text = target_text.to_string();
        self.target_chars = target_text.chars().collect();
        self.translation_text = translation_text.to_string();
        self.sentence_id = None;
        self.cursor = 0;
    }

    pub(crate) fn set_sentence_id(&mut self, id: u32) {
        self.sentence_id = Some(id);
    }

    /// Advances on an exact (case-sensitive) match.
    ///
    /// Wrong characters leave the cursor where it is. Input after completion
    /// is ignored until a new sentence is set.
    pub fn check_input(&mut self, ch: char) -> bool {
        match self.target_chars.get(self.cursor) {
            Some(&expected) if expected == ch => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.target_chars.len()
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn translation_text(&self) -> &str {
        &self.translation_text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn sentence_id(&self) -> Option<u32> {
        self.sentence_id
    }

    pub fn len(&self) -> usize {
        self.target_chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target_chars.is_empty()
    }

    /// Characters already typed.
    pub fn typed(&self) -> String {
        self.target_chars[..self.cursor].iter().collect()
    }

    /// Characters still to type.
    pub fn remaining(&self) -> String {
        self.target_chars[self.cursor..].iter().collect()
    }
}
