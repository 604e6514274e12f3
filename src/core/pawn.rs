//! Pawns and their stable identities.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Stable identity of a pawn, assigned at board setup.
///
/// Positions change and pawns get captured, but an id is never reused
/// within a game. Rendering collaborators key their sprites on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PawnId(pub u8);

impl PawnId {
    /// Create a pawn id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PawnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pawn({})", self.0)
    }
}

/// A playing piece. The owning player never changes; the position lives
/// in the node that holds the pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pawn {
    pub id: PawnId,
    pub player: Player,
}

impl Pawn {
    /// Create a pawn for a real player.
    #[must_use]
    pub fn new(id: PawnId, player: Player) -> Self {
        assert!(player != Player::None, "A pawn must belong to a player");
        Self { id, player }
    }
}

impl std::fmt::Display for Pawn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.id, self.player)
    }
}
