//! Session module - the live game
//!
//! A [`Session`] owns the board, the active piece, the lifecycle status and
//! the piece source. Every mutation follows the same pattern: simulate the
//! move on a copy, then commit only if the simulation came back valid.
//!
//! Lifecycle: `NotStarted -> Running -> GameOver`. There is no way back from
//! `GameOver`; a new game is a new session.

use log::{debug, info};

use crate::board::Board;
use crate::error::SessionError;
use crate::piece::Piece;
use crate::rng::{PieceSource, SimpleRng};
use crate::rules::{apply_move, clear_lines, lock_piece, simulate_move};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameStatus, MoveDirection, MoveResult, SPAWN_X, SPAWN_Y};

/// What a committed step did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Session is not running; nothing happened
    Idle,
    /// Piece moved or rotated
    Moved,
    /// Move was simulated and refused; nothing changed
    Rejected(MoveResult),
    /// Piece locked, lines cleared, and a new piece spawned
    Locked { lines_cleared: u32 },
    /// Piece locked, but the replacement could not move down
    GameOver { lines_cleared: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<S: PieceSource = SimpleRng> {
    board: Board,
    active: Option<Piece>,
    status: GameStatus,
    source: S,
    seed: u32,
    /// Pieces spawned since start, opening piece included
    pieces_spawned: u32,
    /// Running total of cleared rows (informational, not a score)
    lines_cleared: u32,
}

impl<S: PieceSource> Session<S> {
    /// Create an empty session. Status is `NotStarted` and there is no piece.
    pub fn new(source: S) -> Result<Self, SessionError> {
        let board = Board::try_new()?;
        Ok(Self {
            board,
            active: None,
            status: GameStatus::NotStarted,
            source,
            seed: 0,
            pieces_spawned: 0,
            lines_cleared: 0,
        })
    }

    /// Start the game: clear the board, reseed, spawn the opening piece.
    ///
    /// The opening piece gets one extra rotation when the source flips true.
    pub fn start(&mut self, seed: u32) -> Result<(), SessionError> {
        if self.status != GameStatus::NotStarted {
            return Err(SessionError::AlreadyStarted(self.status));
        }

        self.board.clear();
        self.seed = seed;
        self.source.reseed(seed);

        let mut piece = self.spawn_piece();
        if self.source.flip() {
            piece = piece.rotated();
        }
        self.active = Some(piece);
        self.status = GameStatus::Running;

        info!("game started (seed {}, first piece {})", seed, piece.kind.as_str());
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Simulate a move of the active piece without committing it.
    ///
    /// Returns None when there is no active piece.
    pub fn simulate(&self, direction: MoveDirection) -> Option<MoveResult> {
        self.active
            .map(|piece| simulate_move(&self.board, &piece, direction))
    }

    /// Move or rotate the active piece if the simulation allows it.
    ///
    /// Never locks: a refused `Down` leaves the piece where it is. Returns
    /// None when the session is not running.
    pub fn try_move(&mut self, direction: MoveDirection) -> Option<MoveResult> {
        if !self.is_running() {
            return None;
        }
        let piece = self.active?;
        let result = simulate_move(&self.board, &piece, direction);
        if result.is_valid() {
            self.active = Some(apply_move(&piece, direction));
        }
        Some(result)
    }

    /// Advance the active piece one row, or lock it if it cannot move.
    ///
    /// Locking clears full rows and spawns the next piece. If that piece
    /// cannot move down from its spawn position, the game is over.
    pub fn step_down(&mut self) -> StepOutcome {
        if !self.is_running() {
            return StepOutcome::Idle;
        }
        let Some(piece) = self.active else {
            return StepOutcome::Idle;
        };

        match simulate_move(&self.board, &piece, MoveDirection::Down) {
            MoveResult::Valid => {
                self.active = Some(piece.shifted(0, 1));
                StepOutcome::Moved
            }
            _ => self.lock_and_respawn(piece),
        }
    }

    /// Apply one driver request.
    ///
    /// `Down` is a full gravity step (move or lock); every other direction
    /// is committed only when valid.
    pub fn apply(&mut self, direction: MoveDirection) -> StepOutcome {
        if direction == MoveDirection::Down {
            return self.step_down();
        }
        match self.try_move(direction) {
            None => StepOutcome::Idle,
            Some(MoveResult::Valid) => StepOutcome::Moved,
            Some(result) => StepOutcome::Rejected(result),
        }
    }

    fn lock_and_respawn(&mut self, piece: Piece) -> StepOutcome {
        lock_piece(&mut self.board, &piece);
        let lines = clear_lines(&mut self.board);
        self.lines_cleared += lines;
        debug!(
            "locked {} at ({}, {}), cleared {} line(s)",
            piece.kind.as_str(),
            piece.x,
            piece.y,
            lines
        );

        let next = self.spawn_piece();
        // The refused spawn stays active so it can still be drawn.
        self.active = Some(next);

        if simulate_move(&self.board, &next, MoveDirection::Down) != MoveResult::Valid {
            self.status = GameStatus::GameOver;
            info!(
                "game over after {} pieces, {} line(s) cleared",
                self.pieces_spawned, self.lines_cleared
            );
            return StepOutcome::GameOver {
                lines_cleared: lines,
            };
        }

        StepOutcome::Locked {
            lines_cleared: lines,
        }
    }

    fn spawn_piece(&mut self) -> Piece {
        let kind = self.source.next_kind();
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!("spawn {} (#{})", kind.as_str(), self.pieces_spawned);
        Piece::of_kind(kind, SPAWN_X, SPAWN_Y)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.status = self.status;
        out.seed = self.seed;
        out.pieces_spawned = self.pieces_spawned;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
