//! Game state module - owns one complete match-three session
//!
//! Ties together board, match detection, gravity, move validation, and
//! scoring. A session is an explicitly owned object, not module-level state:
//! one `GameState` serves one game, and every board operation for a player
//! move runs as a single synchronous transaction. A presentation layer that
//! wants to animate stages only the returned `CascadeResult` sequence; the
//! core itself performs no timing or threading.

use serde::{Deserialize, Serialize};

use crate::core::board::{Board, BoardError};
use crate::core::gravity::{self, CascadeResult};
use crate::core::matches::find_matches;
use crate::core::moves;
use crate::core::rng::SimpleRng;
use crate::types::GemMove;

/// Outcome of proposing a swap.
///
/// `Rejected` means the swap would not have produced a match (or the session
/// is over); the board is unchanged. `Committed` carries the full cascade in
/// resolution order for the scoring/animation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapOutcome {
    Rejected,
    Committed {
        cascades: Vec<CascadeResult>,
        score_delta: u32,
    },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    /// Seed the session was created with (for deterministic replay)
    seed: u32,
    score: u32,
    moves_played: u32,
    game_over: bool,
}

impl GameState {
    /// Deal a new session from the given RNG seed.
    ///
    /// The starting board never contains an immediate match. If the deal has
    /// no available move the session starts already over, mirroring how a
    /// dead board is only ever reported as game over.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut board = Board::new();
        board.fill_random(&mut rng);
        let game_over = !moves::has_available_move(&board);

        Self {
            board,
            rng,
            seed,
            score: 0,
            moves_played: 0,
            game_over,
        }
    }

    /// Build a session around a prepared board (fixtures, replay)
    pub fn with_board(board: Board, seed: u32) -> Self {
        let game_over = !moves::has_available_move(&board);
        Self {
            board,
            rng: SimpleRng::new(seed),
            seed,
            score: 0,
            moves_played: 0,
            game_over,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Seed this session was dealt from
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Propose a swap and, if it matches, commit it and resolve the cascade
    /// to its fixed point.
    ///
    /// Runs the whole per-move lifecycle in one call: validate, commit or
    /// reject, then repeat clear/compact/refill until a scan finds no match.
    /// Malformed moves (out of bounds, non-adjacent) error out before any
    /// mutation; matchless moves are rejected with the board unchanged.
    pub fn try_swap(&mut self, mv: GemMove) -> Result<SwapOutcome, BoardError> {
        // Probe first so errors and rejections never touch the board
        if !moves::would_match(&self.board, mv)? {
            return Ok(SwapOutcome::Rejected);
        }
        if self.game_over {
            return Ok(SwapOutcome::Rejected);
        }

        self.board.swap(mv)?;

        let mut cascades = Vec::new();
        let mut score_delta = 0u32;
        loop {
            let matched = find_matches(&self.board);
            if matched.is_empty() {
                break;
            }
            let result = gravity::apply(&mut self.board, &matched, &mut self.rng);
            score_delta = score_delta.saturating_add(result.score);
            cascades.push(result);
        }

        self.score = self.score.saturating_add(score_delta);
        self.moves_played += 1;
        self.game_over = !moves::has_available_move(&self.board);

        Ok(SwapOutcome::Committed {
            cascades,
            score_delta,
        })
    }

    /// Restart the session with a fresh deal
    pub fn restart(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Fill a snapshot in place (no allocation)
    pub fn snapshot_into(&self, out: &mut crate::core::snapshot::GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.score = self.score;
        out.moves_played = self.moves_played;
        out.game_over = self.game_over;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> crate::core::snapshot::GameSnapshot {
        let mut s = crate::core::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
