//! The board: node grid, loop curves, track tags, occupancy.

pub mod curve;
pub mod grid;
pub mod node;

pub use curve::{different_tracks, Curve, Track};
pub use grid::Board;
pub use node::Node;
