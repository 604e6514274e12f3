//! Loop curves: the circular connectors at the board's corners.
//!
//! A curve joins two boundary nodes around a virtual center that is not
//! itself playable. Travel that arrives at one endpoint aligned with the
//! curve's radial axis is redirected: it exits at the far endpoint with a
//! new heading, which is what makes captures possible at all. Travel
//! arriving any other way ignores the curve entirely.
//!
//! Radial directions are computed on demand from the stored coordinates
//! rather than cached, so they cannot drift out of sync with the
//! endpoints.

use serde::{Deserialize, Serialize};

use crate::core::{Coordinate, Direction};

/// One of the two concentric rings of loop-bearing grid lines.
///
/// Rows and columns 1 and 4 form the inner ring, rows and columns 2 and
/// 3 the outer ring. Each curve bridges two lines of a single ring, and a
/// capture walk never leaves the ring it launched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Track {
    Inner,
    Outer,
}

impl Track {
    pub const ALL: [Track; 2] = [Track::Inner, Track::Outer];

    /// The ring a single grid line (row or column index) belongs to.
    #[must_use]
    pub const fn of_line(line: i32) -> Option<Track> {
        match line {
            1 | 4 => Some(Track::Inner),
            2 | 3 => Some(Track::Outer),
            _ => None,
        }
    }

    /// Whether `coord` lies on a line of this ring.
    #[must_use]
    pub fn touches(self, coord: Coordinate) -> bool {
        Track::of_line(coord.x) == Some(self) || Track::of_line(coord.y) == Some(self)
    }
}

/// Whether two nodes share no ring, which rules out any capture between
/// them: a capture walk stays on one ring from origin to destination.
#[must_use]
pub fn different_tracks(a: Coordinate, b: Coordinate) -> bool {
    !Track::ALL
        .into_iter()
        .any(|track| track.touches(a) && track.touches(b))
}

/// A loop connector between two boundary nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curve {
    center: Coordinate,
    a: Coordinate,
    b: Coordinate,
    track: Track,
}

impl Curve {
    /// Create a curve around `center` joining endpoints `a` and `b`.
    ///
    /// Both endpoints must sit on an axis line through the center, so
    /// that their radials are cardinal. Violations are construction bugs
    /// and fail fast.
    #[must_use]
    pub fn new(center: Coordinate, a: Coordinate, b: Coordinate, track: Track) -> Self {
        assert!(a != b, "Curve endpoints must be distinct");
        assert!(
            a != center && b != center,
            "Curve center is virtual and cannot be an endpoint"
        );

        let curve = Self { center, a, b, track };
        assert!(
            curve.radial(a).is_cardinal() && curve.radial(b).is_cardinal(),
            "Curve endpoints must lie on axis lines through the center"
        );

        curve
    }

    /// Endpoint A.
    #[must_use]
    pub const fn a(&self) -> Coordinate {
        self.a
    }

    /// Endpoint B.
    #[must_use]
    pub const fn b(&self) -> Coordinate {
        self.b
    }

    /// The virtual center.
    #[must_use]
    pub const fn center(&self) -> Coordinate {
        self.center
    }

    /// The ring this curve's geometry is wired to.
    #[must_use]
    pub const fn track(&self) -> Track {
        self.track
    }

    /// Whether `coord` is one of the two endpoints.
    #[must_use]
    pub fn is_endpoint(&self, coord: Coordinate) -> bool {
        coord == self.a || coord == self.b
    }

    /// The endpoint opposite to `coord`.
    fn far_endpoint(&self, coord: Coordinate) -> Coordinate {
        if coord == self.a {
            self.b
        } else {
            self.a
        }
    }

    /// The radial of an endpoint: the direction from the endpoint toward
    /// the center, derived from coordinate signs on demand.
    #[must_use]
    pub fn radial(&self, endpoint: Coordinate) -> Direction {
        endpoint.direction_toward(self.center)
    }

    /// The exit direction for travel entering at `node` heading
    /// `direction`, or `Direction::None` when this curve does not
    /// redirect that travel.
    ///
    /// A curve only redirects travel that arrives at an endpoint aligned
    /// with its radial axis: entering at one endpoint heading along the
    /// far endpoint's radial, the travel exits heading opposite the
    /// entering endpoint's radial.
    #[must_use]
    pub fn exit_direction(&self, node: Coordinate, direction: Direction) -> Direction {
        if node == self.b && direction == self.radial(self.a) {
            self.radial(self.b).opposite()
        } else if node == self.a && direction == self.radial(self.b) {
            self.radial(self.a).opposite()
        } else {
            Direction::None
        }
    }

    /// The exit node for travel entering at `node` heading `direction`,
    /// under the same matching rule as [`Curve::exit_direction`].
    #[must_use]
    pub fn exit_node(&self, node: Coordinate, direction: Direction) -> Option<Coordinate> {
        if self.exit_direction(node, direction) == Direction::None {
            None
        } else {
            Some(self.far_endpoint(node))
        }
    }

    /// Exit node and direction together, for travel this curve redirects.
    #[must_use]
    pub fn traverse(
        &self,
        node: Coordinate,
        direction: Direction,
    ) -> Option<(Coordinate, Direction)> {
        let exit_direction = self.exit_direction(node, direction);
        if exit_direction == Direction::None {
            None
        } else {
            Some((self.far_endpoint(node), exit_direction))
        }
    }

    /// The two arc radii in grid units: center-to-A and center-to-B.
    #[must_use]
    pub fn radii(&self) -> (f64, f64) {
        (self.a.distance(self.center), self.b.distance(self.center))
    }
}

impl std::fmt::Display for Curve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "curve {} ~ {} about {}", self.a, self.b, self.center)
    }
}
