//! Compass directions and their cyclic arithmetic.
//!
//! Directions rotate clockwise in declaration order, with `None` as an
//! absorbing element: every rotation of `None` is `None`. The wrap
//! arithmetic is deliberately 1-based over the eight real directions
//! rather than a plain modulo; the transition tables in
//! `tests/direction_tests.rs` pin it down.

use serde::{Deserialize, Serialize};

/// One of the eight compass directions, or `None`.
///
/// Each direction carries a `(dx, dy)` grid offset with `x` growing
/// eastward and `y` growing southward, so `North` is `(0, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    None,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, in rotation order. `None` sits at index 0 and is
    /// skipped by the wrap arithmetic.
    pub const VALUES: [Direction; 9] = [
        Direction::None,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four cardinal directions, the only ones a capture walk may
    /// start in.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The `(dx, dy)` grid offset of this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The direction with the given offset, or `None` when no direction
    /// matches (including the `(0, 0)` offset itself).
    ///
    /// ```
    /// use surakarta_engine::Direction;
    ///
    /// assert_eq!(Direction::from_offset(0, -1), Direction::North);
    /// assert_eq!(Direction::from_offset(0, 0), Direction::None);
    /// assert_eq!(Direction::from_offset(2, 0), Direction::None);
    /// ```
    #[must_use]
    pub fn from_offset(dx: i32, dy: i32) -> Direction {
        Self::VALUES
            .into_iter()
            .find(|d| d.offset() == (dx, dy))
            .unwrap_or(Direction::None)
    }

    /// Whether this direction is one of North, East, South, West.
    #[must_use]
    pub const fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }

    /// The opposite direction.
    #[must_use]
    pub fn opposite(self) -> Direction {
        self.nth_next(4)
    }

    /// The next direction, rotating clockwise.
    #[must_use]
    pub fn next(self) -> Direction {
        self.nth_next(1)
    }

    /// The previous direction, rotating counter-clockwise.
    #[must_use]
    pub fn previous(self) -> Direction {
        self.nth_next(-1)
    }

    /// The next cardinal direction clockwise. A cardinal direction skips
    /// over the intercardinal between it and its successor; an
    /// intercardinal lands on the cardinal right after it.
    #[must_use]
    pub fn next_cardinal(self) -> Direction {
        if self.is_cardinal() {
            self.nth_next(2)
        } else {
            self.next()
        }
    }

    /// The previous cardinal direction, counter-clockwise counterpart of
    /// [`Direction::next_cardinal`].
    #[must_use]
    pub fn previous_cardinal(self) -> Direction {
        if self.is_cardinal() {
            self.nth_next(-2)
        } else {
            self.previous()
        }
    }

    /// The n-th next direction in rotation order, `None` absorbing.
    ///
    /// The wrap skips index 0 (`None`), cycling through the eight real
    /// directions with a 1-based wrap rather than a plain modulo.
    #[must_use]
    pub fn nth_next(self, n: i32) -> Direction {
        if self == Direction::None {
            return Direction::None;
        }

        let len = Self::VALUES.len() as i32;
        let mut index = self as i32 + n;

        while index >= len {
            index -= len - 1;
        }

        while index <= 0 {
            index += len - 1;
        }

        Self::VALUES[index as usize]
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::None => "none",
            Direction::North => "north",
            Direction::NorthEast => "north-east",
            Direction::East => "east",
            Direction::SouthEast => "south-east",
            Direction::South => "south",
            Direction::SouthWest => "south-west",
            Direction::West => "west",
            Direction::NorthWest => "north-west",
        };
        f.write_str(name)
    }
}
