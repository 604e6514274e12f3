//! Reachability rules: simple moves, loop captures, obstructions.

use surakarta_engine::{
    reachable, reachable_via, Board, Coordinate, Direction, Pawn, PawnId, Player,
};

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

fn place(board: &mut Board, coord: Coordinate, id: u8, player: Player) {
    board.place_pawn(coord, Pawn::new(PawnId::new(id), player));
}

#[test]
fn test_fresh_board_simple_move_into_empty_row() {
    let board = Board::new();
    assert!(reachable(&board, c(0, 1), c(0, 2)));
}

#[test]
fn test_fresh_board_diagonal_simple_move() {
    let board = Board::new();
    assert!(reachable(&board, c(0, 1), c(1, 2)));
}

#[test]
fn test_fresh_board_friendly_corner_is_unreachable() {
    let board = Board::new();
    // (5, 0) holds a player One pawn just like (0, 0): never reachable.
    assert!(!reachable(&board, c(0, 0), c(5, 0)));
}

#[test]
fn test_occupied_adjacent_friendly_node_is_unreachable() {
    let board = Board::new();
    assert!(!reachable(&board, c(0, 0), c(0, 1)));
}

#[test]
fn test_simple_move_beyond_one_step_is_unreachable() {
    let board = Board::new();
    // Empty and in a straight line, but two steps away.
    assert!(!reachable(&board, c(0, 1), c(0, 3)));
}

#[test]
fn test_origin_equal_to_destination_is_unreachable() {
    let board = Board::new();
    assert!(!reachable(&board, c(0, 1), c(0, 1)));
}

#[test]
fn test_vacant_origin_fails_closed() {
    let board = Board::new();
    // (3, 3) is empty; even an adjacent empty destination is refused.
    assert!(!reachable(&board, c(3, 3), c(3, 2)));
}

#[test]
fn test_out_of_bounds_is_unreachable() {
    let board = Board::new();
    assert!(!reachable(&board, c(0, 1), c(-1, 1)));
    assert!(!reachable(&board, c(6, 1), c(5, 1)));
}

#[test]
fn test_capture_through_one_loop() {
    let mut board = Board::empty();
    place(&mut board, c(1, 3), 0, Player::One);
    place(&mut board, c(3, 1), 1, Player::Two);

    // North up column 1, around the top-left loop, east along row 1.
    assert!(reachable_via(&board, c(1, 3), c(3, 1), Direction::North));
    assert!(reachable(&board, c(1, 3), c(3, 1)));
}

#[test]
fn test_loopless_line_is_never_a_capture() {
    let mut board = Board::empty();
    place(&mut board, c(0, 1), 0, Player::One);
    place(&mut board, c(3, 1), 1, Player::Two);

    // Row 1 east of the origin is completely clear, but the straight
    // walk crosses no loop.
    assert!(!reachable_via(&board, c(0, 1), c(3, 1), Direction::East));
}

#[test]
fn test_capture_blocked_by_obstruction() {
    let mut board = Board::empty();
    place(&mut board, c(0, 1), 0, Player::One);
    place(&mut board, c(2, 1), 1, Player::Two);

    // The only working direction is west: through the top-left loop,
    // all the way around the inner ring, arriving from the east.
    assert!(reachable_via(&board, c(0, 1), c(2, 1), Direction::West));
    assert!(reachable(&board, c(0, 1), c(2, 1)));

    // A pawn on that ring's final stretch closes the route; no other
    // direction works, so the capture disappears entirely.
    place(&mut board, c(3, 1), 2, Player::One);
    assert!(!reachable_via(&board, c(0, 1), c(2, 1), Direction::West));
    assert!(!reachable(&board, c(0, 1), c(2, 1)));
}

#[test]
fn test_capture_across_tracks_is_unreachable() {
    let mut board = Board::empty();
    place(&mut board, c(1, 1), 0, Player::One);
    place(&mut board, c(2, 2), 1, Player::Two);

    // (1, 1) only touches the inner ring, (2, 2) only the outer.
    assert!(!reachable(&board, c(1, 1), c(2, 2)));
}

#[test]
fn test_capture_from_a_cornered_node_is_impossible() {
    let mut board = Board::empty();
    place(&mut board, c(0, 0), 0, Player::One);
    place(&mut board, c(5, 0), 1, Player::Two);

    // Row 0 and column 0 carry no loops, so (0, 0) can never capture.
    assert!(!reachable(&board, c(0, 0), c(5, 0)));
}

#[test]
fn test_reachability_is_not_symmetric() {
    let mut board = Board::empty();
    place(&mut board, c(2, 2), 0, Player::One);

    // Occupied to empty neighbor: a simple move. The reverse starts on
    // an empty node and fails closed.
    assert!(reachable(&board, c(2, 2), c(2, 3)));
    assert!(!reachable(&board, c(2, 3), c(2, 2)));
}

#[test]
fn test_capture_on_outer_ring() {
    let mut board = Board::empty();
    place(&mut board, c(1, 2), 0, Player::One);
    place(&mut board, c(2, 2), 1, Player::Two);

    // Adjacent but occupied, so no simple move; the capture goes west
    // through the top-left outer loop and down column 2.
    assert!(!reachable_via(&board, c(1, 2), c(2, 2), Direction::East));
    assert!(reachable_via(&board, c(1, 2), c(2, 2), Direction::West));
    assert!(reachable(&board, c(1, 2), c(2, 2)));
}

#[test]
fn test_fresh_board_has_no_captures_for_player_one() {
    let board = Board::new();

    for origin in board.player_nodes(Player::One) {
        for target in board.player_nodes(Player::Two) {
            assert!(
                !reachable(&board, origin.coord(), target.coord()),
                "unexpected opening capture {} -> {}",
                origin.coord(),
                target.coord()
            );
        }
    }
}
