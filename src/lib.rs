//! Typing Clicker - Terminal Idle Typing Game Library
//!
//! The economy core (progression formulas, game state, session controller),
//! typing practice, persistence and the terminal front end.

pub mod core;
pub mod error;
pub mod input;
pub mod typing;
pub mod ui;
pub mod utils;

pub use crate::core::{
    GameInput, GameState, SessionController, SessionEvent, SessionView, UpgradeSlot,
};
pub use error::ClickerError;
pub use typing::{Sentence, SentenceCorpus, TypingSession};
