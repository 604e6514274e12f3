//! The game session: turn state, scoring, and the single mutation point.

use im::Vector;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info};

use crate::board::Board;
use crate::core::{Coordinate, GameRng, Pawn, Player};
use crate::rules::{self, MoveError, Trajectory};

/// Points needed to win: one per captured enemy pawn, all twelve of them.
const DEFAULT_WINNING_SCORE: u32 = 12;

/// Why the session refused a turn action.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TurnError {
    /// A previously accepted move has not been completed yet.
    #[error("a move is still being resolved")]
    MoveInProgress,

    /// Someone already won.
    #[error("the game is over")]
    GameOver,

    /// The origin pawn does not belong to the player to move.
    #[error("the pawn on {0} does not belong to {1}")]
    NotYourTurn(Coordinate, Player),

    /// The engine rejected the move itself.
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// What a successful submission hands to the rendering collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveResolution {
    /// The geometric path the pawn travels.
    pub trajectory: Trajectory,
    /// The enemy pawn taken off the board, if the move was a capture.
    pub captured: Option<Pawn>,
}

/// One applied move, as recorded in the session history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub captured: Option<Pawn>,
}

/// How the session interpreted a pointer click.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// A pawn of the player to move was selected.
    Selected(Coordinate),
    /// A stale selection (not the mover's pawn) was dropped.
    Deselected,
    /// A move was accepted; animate it, then call
    /// [`Session::finish_move`].
    Moved(MoveResolution),
    /// A move was attempted and refused; play a rejection animation.
    Rejected(TurnError),
    /// The click meant nothing in the current state.
    Ignored,
}

/// Configuration for a new session, in builder style.
#[derive(Clone, Debug)]
pub struct SessionBuilder {
    seed: u64,
    ai: Vec<Player>,
    winning_score: u32,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            seed: 0,
            ai: Vec::new(),
            winning_score: DEFAULT_WINNING_SCORE,
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed for the AI's candidate shuffles.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Hand a player to the AI turn selector.
    pub fn ai_player(mut self, player: Player) -> Self {
        assert!(player != Player::None, "Only real players can be AI-driven");
        if !self.ai.contains(&player) {
            self.ai.push(player);
        }
        self
    }

    /// Override the winning score (default 12).
    pub fn winning_score(mut self, score: u32) -> Self {
        assert!(score > 0, "Winning score must be positive");
        self.winning_score = score;
        self
    }

    /// Build the session: fresh board, player One to move.
    #[must_use]
    pub fn build(self) -> Session {
        info!(seed = self.seed, "starting a new game");

        let mut ai_players = FxHashMap::default();
        for player in &self.ai {
            debug!(%player, "player is AI-driven");
            ai_players.insert(*player, true);
        }

        Session {
            board: Board::new(),
            scores: FxHashMap::default(),
            ai_players,
            current_player: Player::None.next(),
            selection: None,
            move_in_progress: false,
            winning_score: self.winning_score,
            history: Vector::new(),
            rng: GameRng::new(self.seed),
        }
    }
}

/// A running game.
///
/// All mutation funnels through [`Session::submit`] and
/// [`Session::finish_move`]; everything else is read-only inspection.
/// The session accepts no new query-and-mutate cycle while a submitted
/// move is still settling.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    scores: FxHashMap<Player, u32>,
    ai_players: FxHashMap<Player, bool>,
    current_player: Player,
    selection: Option<Coordinate>,
    move_in_progress: bool,
    winning_score: u32,
    history: Vector<MoveRecord>,
    pub(crate) rng: GameRng,
}

impl Session {
    /// A session with default configuration.
    #[must_use]
    pub fn new() -> Self {
        SessionBuilder::new().build()
    }

    /// Start configuring a session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for simulation setups. Regular play should
    /// go through [`Session::submit`].
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// A player's capture count.
    #[must_use]
    pub fn score(&self, player: Player) -> u32 {
        self.scores.get(&player).copied().unwrap_or(0)
    }

    /// Whether the player's turns are taken by the AI.
    #[must_use]
    pub fn is_ai(&self, player: Player) -> bool {
        self.ai_players.get(&player).copied().unwrap_or(false)
    }

    /// The currently selected pawn's coordinate, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Coordinate> {
        self.selection
    }

    /// Whether a submitted move is still settling.
    #[must_use]
    pub fn move_in_progress(&self) -> bool {
        self.move_in_progress
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The player who reached the winning score, or `Player::None`.
    #[must_use]
    pub fn winner(&self) -> Player {
        for (player, score) in &self.scores {
            if *score >= self.winning_score {
                return *player;
            }
        }
        Player::None
    }

    /// Translate a pointer-resolved coordinate into an intent and act on
    /// it.
    ///
    /// Clicking the mover's own pawn selects it. With a selection held,
    /// clicking an enemy pawn attempts the capture and clicking an empty
    /// node attempts the move; a selection that no longer belongs to the
    /// mover is dropped first.
    pub fn click(&mut self, coord: Coordinate) -> ClickOutcome {
        if self.move_in_progress {
            return ClickOutcome::Ignored;
        }

        let Some(node) = self.board.node(coord) else {
            return ClickOutcome::Ignored;
        };
        let clicked_owner = node.owner();

        if clicked_owner == Player::None {
            // Empty node: a destination, if anything is selected.
            return match self.selection {
                Some(origin) => self.attempt(origin, coord),
                None => ClickOutcome::Ignored,
            };
        }

        if let Some(origin) = self.selection {
            if self.board.owner(origin) != self.current_player {
                self.selection = None;
                return ClickOutcome::Deselected;
            }

            if clicked_owner != self.current_player {
                // Enemy pawn: a capture attempt.
                return self.attempt(origin, coord);
            }
        }

        if clicked_owner == self.current_player {
            debug!(%coord, "pawn selected");
            self.selection = Some(coord);
            return ClickOutcome::Selected(coord);
        }

        ClickOutcome::Ignored
    }

    fn attempt(&mut self, origin: Coordinate, destination: Coordinate) -> ClickOutcome {
        match self.submit(origin, destination) {
            Ok(resolution) => ClickOutcome::Moved(resolution),
            Err(error) => ClickOutcome::Rejected(error),
        }
    }

    /// Submit a move for the player to move. This is the single
    /// mutation point of a turn.
    ///
    /// On success the board is already updated (captured pawn removed,
    /// mover relocated, score credited) and the session refuses further
    /// submissions until [`Session::finish_move`] signals that the
    /// move's animation has settled.
    pub fn submit(
        &mut self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<MoveResolution, TurnError> {
        if self.move_in_progress {
            return Err(TurnError::MoveInProgress);
        }
        if self.winner() != Player::None {
            return Err(TurnError::GameOver);
        }
        let origin_owner = self
            .board
            .node(origin)
            .ok_or(TurnError::Move(MoveError::OutOfBounds(origin)))?
            .owner();
        if origin_owner != self.current_player {
            return Err(TurnError::NotYourTurn(origin, self.current_player));
        }

        let trajectory = rules::try_move(&self.board, origin, destination)?;

        let mover = self
            .board
            .remove_pawn(origin)
            .ok_or(TurnError::Move(MoveError::VacantOrigin(origin)))?;
        let captured = self.board.place_pawn(destination, mover);

        if let Some(prey) = captured {
            let score = self.scores.entry(self.current_player).or_insert(0);
            *score += 1;
            let score = *score;
            info!(%prey, by = %self.current_player, score, "pawn captured");
        }

        debug!(%origin, %destination, player = %self.current_player, "move applied");
        self.history.push_back(MoveRecord {
            player: self.current_player,
            origin,
            destination,
            captured,
        });

        self.move_in_progress = true;
        Ok(MoveResolution {
            trajectory,
            captured,
        })
    }

    /// Complete the settling move: clear the motion flag and selection,
    /// then advance the turn. If the game just ended, the winner is
    /// returned instead and the turn stays put.
    ///
    /// This is the explicit continuation the rendering collaborator
    /// calls once its animation finishes.
    pub fn finish_move(&mut self) -> Option<Player> {
        self.move_in_progress = false;
        self.selection = None;

        let winner = self.winner();
        if winner != Player::None {
            info!(%winner, "game over");
            return Some(winner);
        }

        self.current_player = self.current_player.next();
        info!(player = %self.current_player, ai = self.is_ai(self.current_player), "next turn");
        None
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
