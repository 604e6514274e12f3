//! Reachability decisions and the directional capture walk.
//!
//! A destination is reachable from an occupied origin in exactly two
//! ways: a simple move onto an empty adjacent node, or a capture of an
//! enemy pawn whose walk passes through at least one loop curve without
//! obstruction. The walk is a deterministic state machine over
//! `(current node, heading)`: grid steps keep the heading, aligned loop
//! entries redirect it, and the first obstruction kills the direction.

use thiserror::Error;
use tracing::{trace, warn};

use crate::board::{different_tracks, Board};
use crate::core::{Coordinate, Direction, Player};

use super::trajectory::{trajectory, Segment, Trajectory};

/// Defensive bound on walk length: twice the node count.
///
/// The board's real wiring always terminates a walk (every ring cycle
/// visits each of its nodes), so the cap only fires on broken geometry,
/// turning a would-be hang into a failed direction.
pub const WALK_STEP_LIMIT: usize = 2 * Board::NODE_COUNT;

/// Why a move request was rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate names no node on the board.
    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coordinate),

    /// The origin node holds no pawn to move.
    #[error("no pawn to move on {0}")]
    VacantOrigin(Coordinate),

    /// No simple move or capture connects the two nodes.
    #[error("{destination} cannot be reached from {origin}")]
    Unreachable {
        origin: Coordinate,
        destination: Coordinate,
    },
}

/// Whether `destination` is reachable from `origin`, in any direction.
///
/// True for a simple move (empty destination at grid distance ≤ 1,
/// diagonals included) and for a capture (enemy-held destination with at
/// least one cardinal direction admitting an unobstructed walk through a
/// loop). A vacant origin is a caller bug and fails closed.
///
/// ```
/// use surakarta_engine::{reachable, Board, Coordinate};
///
/// let board = Board::new();
/// // Fresh board: (0, 1) holds a player One pawn, (0, 2) is empty.
/// assert!(reachable(&board, Coordinate::new(0, 1), Coordinate::new(0, 2)));
/// // (5, 0) holds the same player's pawn: friendly fire is forbidden.
/// assert!(!reachable(&board, Coordinate::new(0, 0), Coordinate::new(5, 0)));
/// ```
#[must_use]
pub fn reachable(board: &Board, origin: Coordinate, destination: Coordinate) -> bool {
    let (Some(from), Some(to)) = (board.node(origin), board.node(destination)) else {
        return false;
    };

    if from.owner() == Player::None {
        trace!(%origin, "reachability query from a vacant origin, failing closed");
        return false;
    }

    if to.owner() == Player::None && origin.distance(destination) as i32 <= 1 {
        trace!(%origin, %destination, "simple move is possible");
        return true;
    }

    if to.owner() != from.owner() {
        for direction in Direction::CARDINALS {
            if reachable_via(board, origin, destination, direction) {
                trace!(%origin, %destination, %direction, "capture is possible");
                return true;
            }
        }
    }

    false
}

/// Whether a capture walk launched from `origin` in `direction` reaches
/// `destination`.
///
/// This is the directional test only: it never considers simple moves,
/// and an empty destination always fails (there is nothing to capture).
#[must_use]
pub fn reachable_via(
    board: &Board,
    origin: Coordinate,
    destination: Coordinate,
    direction: Direction,
) -> bool {
    capture_walk(board, origin, destination, direction).is_some()
}

/// Resolve a move request: the trajectory of a legal move, or the reason
/// it was rejected.
///
/// The caller applies the effects afterwards (remove the captured pawn,
/// relocate the mover); the engine itself never mutates the board.
pub fn try_move(
    board: &Board,
    origin: Coordinate,
    destination: Coordinate,
) -> Result<Trajectory, MoveError> {
    let from = board.node(origin).ok_or(MoveError::OutOfBounds(origin))?;
    board
        .node(destination)
        .ok_or(MoveError::OutOfBounds(destination))?;

    if from.owner() == Player::None {
        return Err(MoveError::VacantOrigin(origin));
    }

    trajectory(board, origin, destination).ok_or(MoveError::Unreachable {
        origin,
        destination,
    })
}

/// Run the capture walk from `origin` toward `destination`, starting in
/// `direction`, accumulating waypoints.
///
/// Returns the trajectory when the walk lands on the destination having
/// crossed at least one loop; `None` on an empty destination, any
/// obstruction, walking off the board, a loopless arrival, or blowing
/// the defensive step cap.
///
/// A node is an obstruction when it shares no ring with the destination
/// or when it is occupied. The origin itself is exempt: the walk may
/// pass through it again after a full circuit of its ring.
pub(crate) fn capture_walk(
    board: &Board,
    origin: Coordinate,
    destination: Coordinate,
    mut direction: Direction,
) -> Option<Trajectory> {
    if board.owner(destination) == Player::None {
        trace!(%destination, "destination is empty, no capture possible");
        return None;
    }

    let mut path = Trajectory::starting_at(origin);
    let mut current = Some(origin);
    let mut loop_crossed = false;
    let mut steps = 0usize;

    while let Some(at) = current {
        if at == destination {
            break;
        }

        steps += 1;
        if steps > WALK_STEP_LIMIT {
            warn!(%origin, %destination, "capture walk exceeded {WALK_STEP_LIMIT} steps, failing safe");
            return None;
        }

        if different_tracks(at, destination) || (at != origin && board.owner(at) != Player::None) {
            trace!(%at, "obstruction, no capture this way");
            return None;
        }

        let crossing = board
            .curve_at(at)
            .and_then(|curve| curve.traverse(at, direction).map(|exit| (curve, exit)));

        if let Some((curve, (exit_node, exit_direction))) = crossing {
            loop_crossed = true;

            let (radius_x, radius_y) = curve.radii();
            path.push(Segment::Arc {
                radius_x,
                radius_y,
                to: exit_node,
                large_arc: true,
                sweep: exit_direction.next_cardinal() == direction,
            });

            trace!(%curve, %exit_direction, previous = %direction, "crossing a loop");
            direction = exit_direction;
            current = Some(exit_node);
        } else {
            current = board.neighbor_coord(at, direction);
            if let Some(next) = current {
                path.push(Segment::Line { to: next });
                trace!(%next, %direction, "straight step");
            }
        }
    }

    (loop_crossed && current.is_some()).then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Curve, Track};
    use crate::core::{Pawn, PawnId};

    /// A curve whose endpoints share a column bounces aligned travel
    /// back and forth forever; the step cap must end the walk.
    #[test]
    fn test_pathological_loop_hits_step_cap() {
        let curve = Curve::new(
            Coordinate::new(0, 2),
            Coordinate::new(0, 1),
            Coordinate::new(0, 3),
            Track::Inner,
        );
        let mut board = Board::with_curves(vec![curve]);

        // The walk from (0, 4) heading north ping-pongs on column 0 and
        // never reaches the enemy pawn at (1, 2), which shares a ring
        // with every visited node so the track check cannot cut it off.
        board.place_pawn(Coordinate::new(0, 4), Pawn::new(PawnId::new(0), Player::One));
        board.place_pawn(Coordinate::new(1, 2), Pawn::new(PawnId::new(1), Player::Two));

        assert!(!reachable_via(
            &board,
            Coordinate::new(0, 4),
            Coordinate::new(1, 2),
            Direction::North,
        ));
    }

    #[test]
    fn test_walk_passes_through_its_own_origin() {
        // A full circuit of the inner ring re-enters the origin node;
        // the origin is exempt from the occupancy obstruction.
        let mut board = Board::empty();
        board.place_pawn(Coordinate::new(1, 1), Pawn::new(PawnId::new(0), Player::One));
        board.place_pawn(Coordinate::new(5, 1), Pawn::new(PawnId::new(1), Player::Two));

        assert!(reachable_via(
            &board,
            Coordinate::new(1, 1),
            Coordinate::new(5, 1),
            Direction::North,
        ));
    }

    #[test]
    fn test_try_move_error_taxonomy() {
        let board = Board::new();

        assert_eq!(
            try_move(&board, Coordinate::new(-1, 0), Coordinate::new(0, 0)),
            Err(MoveError::OutOfBounds(Coordinate::new(-1, 0)))
        );
        assert_eq!(
            try_move(&board, Coordinate::new(3, 3), Coordinate::new(3, 2)),
            Err(MoveError::VacantOrigin(Coordinate::new(3, 3)))
        );
        assert_eq!(
            try_move(&board, Coordinate::new(0, 1), Coordinate::new(0, 3)),
            Err(MoveError::Unreachable {
                origin: Coordinate::new(0, 1),
                destination: Coordinate::new(0, 3),
            })
        );
        assert!(try_move(&board, Coordinate::new(0, 1), Coordinate::new(0, 2)).is_ok());
    }
}
