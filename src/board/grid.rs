//! The 6×6 board: node storage, loop wiring, occupancy mutation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Coordinate, Direction, Pawn, PawnId, Player};

use super::curve::{Curve, Track};
use super::node::Node;

/// The playing board: 36 nodes and 8 loop curves.
///
/// Structure is immutable after construction; only pawn occupancy
/// changes, through [`Board::place_pawn`] and [`Board::remove_pawn`].
/// Lookups outside the grid return `None` rather than failing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    nodes: Vec<Node>,
    curves: Vec<Curve>,
}

impl Board {
    /// Nodes per side.
    pub const SIZE: i32 = 6;

    /// Total node count.
    pub const NODE_COUNT: usize = (Self::SIZE * Self::SIZE) as usize;

    /// A board with the classical layout: eight corner curves and both
    /// players' pawns on their two back rows (rows 0–1 for player One,
    /// rows 4–5 for player Two).
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();

        let mut next_id = 0u8;
        let mut place_row = |board: &mut Board, y: i32, player: Player| {
            for x in 0..Self::SIZE {
                let pawn = Pawn::new(PawnId::new(next_id), player);
                next_id += 1;
                board.place_pawn(Coordinate::new(x, y), pawn);
            }
        };

        place_row(&mut board, 0, Player::One);
        place_row(&mut board, 1, Player::One);
        place_row(&mut board, 4, Player::Two);
        place_row(&mut board, 5, Player::Two);

        debug!("board initialized with {} pawns", next_id);
        board
    }

    /// A board with the standard curve wiring and no pawns. Useful for
    /// simulation setups that place pawns by hand.
    #[must_use]
    pub fn empty() -> Self {
        let c = Coordinate::new;

        let curves = vec![
            Curve::new(c(0, 0), c(0, 1), c(1, 0), Track::Inner),
            Curve::new(c(0, 0), c(0, 2), c(2, 0), Track::Outer),
            Curve::new(c(5, 0), c(5, 1), c(4, 0), Track::Inner),
            Curve::new(c(5, 0), c(5, 2), c(3, 0), Track::Outer),
            Curve::new(c(5, 5), c(5, 4), c(4, 5), Track::Inner),
            Curve::new(c(5, 5), c(5, 3), c(3, 5), Track::Outer),
            Curve::new(c(0, 5), c(0, 4), c(1, 5), Track::Inner),
            Curve::new(c(0, 5), c(0, 3), c(2, 5), Track::Outer),
        ];

        for curve in &curves {
            for endpoint in [curve.a(), curve.b()] {
                assert!(
                    curve.track().touches(endpoint),
                    "Curve endpoint {endpoint} is off its {:?} ring",
                    curve.track()
                );
            }
        }

        Self::with_curves(curves)
    }

    /// A pawnless board with custom curve wiring. Exists so tests can
    /// exercise geometries the standard board cannot produce.
    pub(crate) fn with_curves(curves: Vec<Curve>) -> Self {
        let mut nodes = Vec::with_capacity(Self::NODE_COUNT);
        for y in 0..Self::SIZE {
            for x in 0..Self::SIZE {
                nodes.push(Node::new(Coordinate::new(x, y)));
            }
        }

        for (i, curve) in curves.iter().enumerate() {
            for endpoint in [curve.a(), curve.b()] {
                assert!(
                    Self::index(endpoint).is_some(),
                    "Curve endpoint {endpoint} is off the board"
                );
                assert!(
                    !curves[..i].iter().any(|other| other.is_endpoint(endpoint)),
                    "Node {endpoint} is an endpoint of more than one curve"
                );
            }
        }

        Self { nodes, curves }
    }

    fn index(coord: Coordinate) -> Option<usize> {
        if (0..Self::SIZE).contains(&coord.x) && (0..Self::SIZE).contains(&coord.y) {
            Some((coord.y * Self::SIZE + coord.x) as usize)
        } else {
            None
        }
    }

    /// The node at `coord`, or `None` outside the grid.
    #[must_use]
    pub fn node(&self, coord: Coordinate) -> Option<&Node> {
        Self::index(coord).map(|i| &self.nodes[i])
    }

    /// The player occupying `coord`, `Player::None` when the node is
    /// empty or the coordinate is off the board.
    #[must_use]
    pub fn owner(&self, coord: Coordinate) -> Player {
        self.node(coord).map_or(Player::None, Node::owner)
    }

    /// The curve having `coord` as a boundary endpoint, if any.
    #[must_use]
    pub fn curve_at(&self, coord: Coordinate) -> Option<&Curve> {
        self.curves.iter().find(|curve| curve.is_endpoint(coord))
    }

    /// All curves, in wiring order.
    #[must_use]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Iterate over all nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// The coordinate one step from `coord` in `direction`, routed
    /// through a curve when the step enters one aligned, or `None` when
    /// the plain step leaves the board.
    #[must_use]
    pub fn neighbor_coord(&self, coord: Coordinate, direction: Direction) -> Option<Coordinate> {
        if let Some(exit) = self
            .curve_at(coord)
            .and_then(|curve| curve.exit_node(coord, direction))
        {
            return Some(exit);
        }

        let stepped = coord.offset(direction);
        Self::index(stepped).map(|_| stepped)
    }

    /// The node one step from `node` in `direction`, loop-transparent:
    /// when `node` is a curve endpoint and `direction` matches that
    /// curve's aligned entry, the curve's far endpoint is returned.
    #[must_use]
    pub fn neighbor(&self, node: &Node, direction: Direction) -> Option<&Node> {
        self.neighbor_coord(node.coord(), direction)
            .and_then(|coord| self.node(coord))
    }

    /// Put `pawn` on the node at `coord`, returning any displaced
    /// occupant. A no-op returning `None` off the board.
    pub fn place_pawn(&mut self, coord: Coordinate, pawn: Pawn) -> Option<Pawn> {
        let index = Self::index(coord)?;
        self.nodes[index].set_pawn(Some(pawn))
    }

    /// Take the pawn off the node at `coord`, returning it.
    pub fn remove_pawn(&mut self, coord: Coordinate) -> Option<Pawn> {
        let index = Self::index(coord)?;
        self.nodes[index].set_pawn(None)
    }

    /// All nodes holding a pawn of `player`, in row-major order.
    #[must_use]
    pub fn player_nodes(&self, player: Player) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|node| node.owner() == player)
            .collect()
    }

    /// How many pawns `player` has on the board.
    #[must_use]
    pub fn pawn_count(&self, player: Player) -> usize {
        self.player_nodes(player).len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
