//! Players and the turn cycle.

use serde::{Deserialize, Serialize};

/// One of the two players, or `None` for an empty node / an unfinished
/// game.
///
/// The turn cycle skips `None`: One and Two alternate, and `None`
/// hands off to One, which is how a fresh game picks its first mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    None,
    One,
    Two,
}

impl Player {
    /// The player who moves after this one.
    ///
    /// ```
    /// use surakarta_engine::Player;
    ///
    /// assert_eq!(Player::None.next(), Player::One);
    /// assert_eq!(Player::One.next(), Player::Two);
    /// assert_eq!(Player::Two.next(), Player::One);
    /// ```
    #[must_use]
    pub const fn next(self) -> Player {
        match self {
            Player::None | Player::Two => Player::One,
            Player::One => Player::Two,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::None => f.write_str("nobody"),
            Player::One => f.write_str("player 1"),
            Player::Two => f.write_str("player 2"),
        }
    }
}
