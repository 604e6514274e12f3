//! The reachability and path engine.
//!
//! Pure decisions over an occupancy snapshot: whether a destination is
//! reachable, and the exact geometric trajectory a legal move follows.

pub mod engine;
pub mod trajectory;

pub use engine::{reachable, reachable_via, try_move, MoveError, WALK_STEP_LIMIT};
pub use trajectory::{trajectory, trajectory_via, Segment, Trajectory};
