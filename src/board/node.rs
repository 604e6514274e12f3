//! A single board intersection and its occupancy.

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, Pawn, Player};

/// A playable intersection of the grid.
///
/// The coordinate is fixed for the lifetime of the board; only the
/// occupancy changes, and never more than one pawn at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    coord: Coordinate,
    pawn: Option<Pawn>,
}

impl Node {
    pub(crate) const fn new(coord: Coordinate) -> Self {
        Self { coord, pawn: None }
    }

    /// The node's position.
    #[must_use]
    pub const fn coord(&self) -> Coordinate {
        self.coord
    }

    /// The pawn standing on this node, if any.
    #[must_use]
    pub const fn pawn(&self) -> Option<Pawn> {
        self.pawn
    }

    /// The player owning the pawn on this node, `Player::None` when the
    /// node is empty.
    #[must_use]
    pub fn owner(&self) -> Player {
        self.pawn.map_or(Player::None, |pawn| pawn.player)
    }

    /// Whether no pawn stands here.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pawn.is_none()
    }

    /// Replace the occupancy, returning the previous occupant.
    pub(crate) fn set_pawn(&mut self, pawn: Option<Pawn>) -> Option<Pawn> {
        std::mem::replace(&mut self.pawn, pawn)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node {}", self.coord)
    }
}
