//! The naive AI turn selector: capture first, wander otherwise.
//!
//! The selector shuffles its candidate pawns and directions through the
//! session's seeded RNG, tries every capture before any simple move, and
//! gives up (skipping the turn) only when nothing is legal. Candidate
//! choice is separate from application: the chosen move still flows
//! through [`Session::submit`] like a human's.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Coordinate, Direction};
use crate::rules;

use super::game::{MoveResolution, Session, TurnError};

impl Session {
    /// Pick a move for the player to move, without applying it.
    ///
    /// Captures are preferred: the first shuffled own pawn × enemy pawn
    /// × shuffled cardinal direction admitting a capture walk wins.
    /// Otherwise the first shuffled own pawn × direction whose
    /// loop-aware neighbor accepts a simple move is taken. `None` means
    /// the player cannot move at all.
    pub fn choose_ai_move(&mut self) -> Option<(Coordinate, Coordinate)> {
        let mut own: Vec<Coordinate> = self
            .board()
            .player_nodes(self.current_player())
            .iter()
            .map(|node| node.coord())
            .collect();
        self.rng.shuffle(&mut own);

        let mut directions: SmallVec<[Direction; 9]> =
            SmallVec::from_slice(&Direction::VALUES);
        self.rng.shuffle(&mut directions);

        let enemy: Vec<Coordinate> = self
            .board()
            .player_nodes(self.current_player().next())
            .iter()
            .map(|node| node.coord())
            .collect();

        for &origin in &own {
            for &target in &enemy {
                for &direction in &directions {
                    if direction.is_cardinal()
                        && rules::reachable_via(self.board(), origin, target, direction)
                    {
                        trace!(%origin, %target, %direction, "AI found a capture");
                        return Some((origin, target));
                    }
                }
            }
        }

        for &origin in &own {
            for &direction in &directions {
                if direction == Direction::None {
                    continue;
                }

                if let Some(destination) = self.board().neighbor_coord(origin, direction) {
                    if rules::reachable(self.board(), origin, destination) {
                        trace!(%origin, %destination, "AI found a simple move");
                        return Some((origin, destination));
                    }
                }
            }
        }

        debug!(player = %self.current_player(), "AI has no legal move");
        None
    }

    /// Choose and submit a move for the AI-driven player to move.
    ///
    /// `Ok(None)` means the AI had no legal move and the caller should
    /// just advance the turn with [`Session::finish_move`].
    pub fn play_ai_turn(&mut self) -> Result<Option<MoveResolution>, TurnError> {
        match self.choose_ai_move() {
            Some((origin, destination)) => self.submit(origin, destination).map(Some),
            None => Ok(None),
        }
    }
}
