//! Board coordinates and the geometry helpers built on them.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A node position on the board.
///
/// Coordinates are 0-based with `x` growing eastward and `y` growing
/// southward, matching the compass offsets of [`Direction`]. A
/// `Coordinate` is a pure value; whether it names an actual node is the
/// board's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in `direction`.
    ///
    /// `Direction::None` is a zero offset, so it returns `self`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Coordinate {
        let (dx, dy) = direction.offset();
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another coordinate, in grid units.
    ///
    /// ```
    /// use surakarta_engine::Coordinate;
    ///
    /// let a = Coordinate::new(0, 0);
    /// assert_eq!(a.distance(Coordinate::new(3, 4)), 5.0);
    /// ```
    #[must_use]
    pub fn distance(self, other: Coordinate) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// The compass direction pointing from `self` toward `other`, with
    /// each axis clamped to its sign.
    ///
    /// Returns `Direction::None` when the coordinates coincide.
    #[must_use]
    pub fn direction_toward(self, other: Coordinate) -> Direction {
        Direction::from_offset((other.x - self.x).signum(), (other.y - self.y).signum())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let c = Coordinate::new(2, 3);
        assert_eq!(c.offset(Direction::North), Coordinate::new(2, 2));
        assert_eq!(c.offset(Direction::SouthWest), Coordinate::new(1, 4));
        assert_eq!(c.offset(Direction::None), c);
    }

    #[test]
    fn test_distance_diagonal_truncates_to_adjacent() {
        // Diagonal neighbors are within simple-move range once truncated.
        let d = Coordinate::new(0, 0).distance(Coordinate::new(1, 1));
        assert_eq!(d as i32, 1);
        let two = Coordinate::new(0, 0).distance(Coordinate::new(0, 2));
        assert_eq!(two as i32, 2);
    }

    #[test]
    fn test_direction_toward() {
        let center = Coordinate::new(0, 0);
        assert_eq!(
            Coordinate::new(0, 1).direction_toward(center),
            Direction::North
        );
        assert_eq!(
            Coordinate::new(1, 0).direction_toward(center),
            Direction::West
        );
        assert_eq!(
            center.direction_toward(Coordinate::new(4, 4)),
            Direction::SouthEast
        );
        assert_eq!(center.direction_toward(center), Direction::None);
    }
}
