//! # surakarta-engine
//!
//! A rule engine for the Surakarta board game: a 6×6 grid of nodes joined
//! by eight circular loops at the board's corners, where pawns move to
//! empty adjacent nodes and capture only by traveling through at least one
//! loop without obstruction.
//!
//! ## Design Principles
//!
//! 1. **Pure Rule Core**: Reachability and trajectory construction are
//!    pure functions of `(origin, destination, board occupancy)`. No
//!    rendering state, no I/O, no ambient globals.
//!
//! 2. **Structure Is Immutable**: The board's nodes and loops are built
//!    once per game; only pawn occupancy mutates, through a single
//!    serialized mutation point per turn.
//!
//! 3. **Deterministic Play**: The AI turn selector draws all randomness
//!    from a seeded [`GameRng`], so games replay identically from a seed.
//!
//! ## Architecture
//!
//! The engine decides; the caller animates. A move inquiry produces a
//! [`Trajectory`] of straight segments and loop arcs in grid units, which
//! a rendering adapter may scale and animate. State mutation (capture,
//! relocation, turn advance) happens in the [`session`] layer after the
//! trajectory is produced, with an explicit completion step replacing
//! animation callbacks.
//!
//! ## Modules
//!
//! - `core`: Coordinates, compass directions, players, pawns, RNG
//! - `board`: Node grid, loop curves, track tags, occupancy
//! - `rules`: Reachability, the directional capture walk, trajectories
//! - `session`: Turn orchestration, scoring, click intents, the AI

pub mod board;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Coordinate, Direction, GameRng, GameRngState, Pawn, PawnId, Player};

pub use crate::board::{different_tracks, Board, Curve, Node, Track};

pub use crate::rules::{
    reachable, reachable_via, trajectory, trajectory_via, try_move, MoveError, Segment,
    Trajectory, WALK_STEP_LIMIT,
};

pub use crate::session::{
    ClickOutcome, MoveRecord, MoveResolution, Session, SessionBuilder, TurnError,
};
