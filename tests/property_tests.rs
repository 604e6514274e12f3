//! Property tests for the direction cycle and the engine's two views.

use proptest::prelude::*;

use surakarta_engine::{
    reachable, trajectory, Board, Coordinate, Direction, Pawn, PawnId, Player,
};

fn any_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::VALUES.to_vec())
}

fn real_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::VALUES[1..].to_vec())
}

fn cardinal_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::CARDINALS.to_vec())
}

fn any_coordinate() -> impl Strategy<Value = Coordinate> {
    (0..Board::SIZE, 0..Board::SIZE).prop_map(|(x, y)| Coordinate::new(x, y))
}

/// A board with random occupancy: each node independently empty or
/// holding either player's pawn.
fn any_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0u8..3, Board::NODE_COUNT).prop_map(|cells| {
        let mut board = Board::empty();
        let coords: Vec<Coordinate> = board.nodes().map(|node| node.coord()).collect();
        for (id, (coord, cell)) in coords.into_iter().zip(cells).enumerate() {
            let player = match cell {
                1 => Player::One,
                2 => Player::Two,
                _ => continue,
            };
            board.place_pawn(coord, Pawn::new(PawnId::new(id as u8), player));
        }
        board
    })
}

proptest! {
    #[test]
    fn prop_opposite_is_an_involution(d in any_direction()) {
        prop_assert_eq!(d.opposite().opposite(), d);
    }

    #[test]
    fn prop_next_then_previous_is_identity(d in any_direction()) {
        prop_assert_eq!(d.next().previous(), d);
        prop_assert_eq!(d.previous().next(), d);
    }

    #[test]
    fn prop_none_is_absorbing(n in -20i32..20) {
        prop_assert_eq!(Direction::None.nth_next(n), Direction::None);
        prop_assert_eq!(Direction::None.opposite(), Direction::None);
        prop_assert_eq!(Direction::None.next(), Direction::None);
    }

    #[test]
    fn prop_cardinal_rotation_round_trips(d in cardinal_direction()) {
        prop_assert_eq!(d.next_cardinal().previous_cardinal(), d);
        prop_assert!(d.next_cardinal().is_cardinal());
    }

    #[test]
    fn prop_rotation_preserves_realness(d in real_direction()) {
        prop_assert_ne!(d.next(), Direction::None);
        prop_assert_ne!(d.opposite(), Direction::None);
    }

    #[test]
    fn prop_offset_round_trips(d in any_direction()) {
        let (dx, dy) = d.offset();
        prop_assert_eq!(Direction::from_offset(dx, dy), d);
    }

    /// The boolean and path views of the engine never disagree.
    #[test]
    fn prop_reachable_iff_trajectory(
        board in any_board(),
        origin in any_coordinate(),
        destination in any_coordinate(),
    ) {
        let verdict = reachable(&board, origin, destination);
        let path = trajectory(&board, origin, destination);
        prop_assert_eq!(verdict, path.is_some());

        if let Some(path) = path {
            prop_assert_eq!(path.start, origin);
            prop_assert_eq!(path.end(), destination);
            // A capture crosses a loop; a simple move is one segment.
            prop_assert!(path.crosses_loop() || path.len() == 1);
        }
    }

    /// An occupied node can always move onto an empty neighbor.
    #[test]
    fn prop_adjacent_simple_move_is_always_reachable(
        board in any_board(),
        origin in any_coordinate(),
        direction in real_direction(),
    ) {
        let destination = origin.offset(direction);
        let origin_occupied = board.owner(origin) != Player::None;
        let destination_open = board.node(destination).is_some()
            && board.owner(destination) == Player::None;

        if origin_occupied && destination_open {
            prop_assert!(reachable(&board, origin, destination));
        }
    }

    /// Captures require an enemy pawn on the destination, whatever the
    /// geometry.
    #[test]
    fn prop_no_capture_of_empty_or_friendly_nodes(
        board in any_board(),
        origin in any_coordinate(),
        destination in any_coordinate(),
    ) {
        let mover = board.owner(origin);
        let target = board.owner(destination);
        let adjacent = origin.distance(destination) as i32 <= 1;

        if mover != Player::None && target == mover && origin != destination {
            prop_assert!(!reachable(&board, origin, destination));
        }
        if mover != Player::None && target == Player::None && !adjacent {
            prop_assert!(!reachable(&board, origin, destination));
        }
    }
}
