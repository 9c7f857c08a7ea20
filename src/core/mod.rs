//! Economy core: progression formulas, game state and the session controller.

#![allow(unused_imports)]

pub mod constants;
pub mod controller;
pub mod game_state;
pub mod progression;
pub mod view;

pub use constants::*;
pub use controller::*;
pub use game_state::*;
pub use progression::*;
pub use view::*;
