//! Trajectories: the renderable shape of a legal move.
//!
//! A trajectory is a start coordinate and an ordered run of segments,
//! one per grid step or loop traversal. Everything is in grid units;
//! scaling to pixels belongs to the rendering adapter, not here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Coordinate, Direction, Player};

use super::engine;

/// One piece of a trajectory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// A straight step to the next node on the path.
    Line { to: Coordinate },
    /// A swing around a loop curve to its far endpoint.
    ///
    /// `radius_x`/`radius_y` are the curve's center-to-endpoint radii in
    /// grid units. `large_arc` is always set (the visible loop spans
    /// three quadrants); `sweep` picks the turning sense, derived from
    /// how the exit heading relates to the entry heading.
    Arc {
        radius_x: f64,
        radius_y: f64,
        to: Coordinate,
        large_arc: bool,
        sweep: bool,
    },
}

impl Segment {
    /// The coordinate this segment ends on.
    #[must_use]
    pub fn to(&self) -> Coordinate {
        match *self {
            Segment::Line { to } | Segment::Arc { to, .. } => to,
        }
    }
}

/// The full waypoint sequence of a legal move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub start: Coordinate,
    pub segments: SmallVec<[Segment; 8]>,
}

impl Trajectory {
    pub(crate) fn starting_at(start: Coordinate) -> Self {
        Self {
            start,
            segments: SmallVec::new(),
        }
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Where the trajectory ends; the start itself for an empty one.
    #[must_use]
    pub fn end(&self) -> Coordinate {
        self.segments.last().map_or(self.start, Segment::to)
    }

    /// Whether any segment is a loop arc. True for every capture.
    #[must_use]
    pub fn crosses_loop(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Arc { .. }))
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the trajectory has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Build the trajectory of a legal move from `origin` to `destination`,
/// or `None` when no legal move exists.
///
/// Succeeds exactly when [`engine::reachable`] holds for the same
/// arguments: an adjacent empty destination yields a single straight
/// segment, an enemy-held destination yields the first cardinal capture
/// walk's waypoints.
#[must_use]
pub fn trajectory(board: &Board, origin: Coordinate, destination: Coordinate) -> Option<Trajectory> {
    let from = board.node(origin)?;
    let to = board.node(destination)?;

    if from.owner() == Player::None {
        return None;
    }

    if to.owner() == Player::None && origin.distance(destination) as i32 <= 1 {
        let mut path = Trajectory::starting_at(origin);
        path.push(Segment::Line { to: destination });
        return Some(path);
    }

    if to.owner() != from.owner() {
        return Direction::CARDINALS
            .into_iter()
            .find_map(|direction| engine::capture_walk(board, origin, destination, direction));
    }

    None
}

/// Build the trajectory of a capture walk launched in one cardinal
/// direction, or `None` when that direction yields no capture.
#[must_use]
pub fn trajectory_via(
    board: &Board,
    origin: Coordinate,
    destination: Coordinate,
    direction: Direction,
) -> Option<Trajectory> {
    engine::capture_walk(board, origin, destination, direction)
}
