//! Turn orchestration: scores, selection, click intents, the AI.
//!
//! The session is the one place game state mutates. It owns the board,
//! serializes move application behind a "move in progress" flag, and
//! translates pointer clicks into select/attempt intents.

pub mod ai;
pub mod game;

pub use game::{ClickOutcome, MoveRecord, MoveResolution, Session, SessionBuilder, TurnError};
