//! Typing practice: sentence corpus and per-sentence progress.

pub mod corpus;
pub mod session;

pub use corpus::{Sentence, SentenceCorpus};
pub use session::TypingSession;
