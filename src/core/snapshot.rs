use serde::{Deserialize, Serialize};

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Plain-data view of a session for renderers and replay tooling.
///
/// The board is a u8 grid (0 = empty, 1..=7 = gem index + 1) so consumers
/// never touch the live `Board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub score: u32,
    pub moves_played: u32,
    pub game_over: bool,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.score = 0;
        self.moves_played = 0;
        self.game_over = false;
        self.seed = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            score: 0,
            moves_played: 0,
            game_over: false,
            seed: 0,
        }
    }
}
