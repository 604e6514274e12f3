//! Core value types: coordinates, directions, players, pawns, RNG.
//!
//! This module contains the fundamental building blocks the board and the
//! rule engine are assembled from. Everything here is a small copyable
//! record with pure operations.

pub mod coord;
pub mod direction;
pub mod pawn;
pub mod player;
pub mod rng;

pub use coord::Coordinate;
pub use direction::Direction;
pub use pawn::{Pawn, PawnId};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
