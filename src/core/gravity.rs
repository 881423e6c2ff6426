//! Gravity resolution - clear, compact, refill
//!
//! One resolution pass sets every matched cell empty, slides the surviving
//! gems in each column down to fill the gaps (stable compaction, relative
//! vertical order preserved), then fills the holes left at the top of each
//! column with fresh random gems. Columns are independent; there is no
//! cross-column interaction.
//!
//! Refill gems are unconstrained uniform-random draws: they may themselves
//! form new matches, which is what feeds the cascade loop.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::matches::MatchSet;
use crate::core::rng::SimpleRng;
use crate::core::scoring;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Record of one clear/compact/refill pass, consumed by the scoring and
/// presentation layers and then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeResult {
    /// Coordinates cleared this pass, row-major order
    pub cleared: Vec<(i8, i8)>,
    /// Per-column count of cleared cells; equals the refill count and the
    /// distance the surviving prefix of the column falls
    pub drops: [u8; BOARD_WIDTH as usize],
    /// Coordinates filled with new gems at the top of each column
    pub refilled: Vec<(i8, i8)>,
    /// Score delta for this pass only
    pub score: u32,
}

/// Apply one resolution pass for the given matched set.
///
/// The pass is atomic from the caller's perspective: no partially resolved
/// board is ever observable.
pub fn apply(board: &mut Board, matched: &MatchSet, rng: &mut SimpleRng) -> CascadeResult {
    let mut result = CascadeResult {
        cleared: Vec::with_capacity(matched.cell_count()),
        drops: [0; BOARD_WIDTH as usize],
        refilled: Vec::new(),
        score: scoring::pass_score(matched),
    };

    // Step 1: clear every matched coordinate
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            if matched.contains(x, y) {
                board.set(x, y, None);
                result.cleared.push((x, y));
                result.drops[x as usize] += 1;
            }
        }
    }

    // Step 2: compact each column downward with a two-pointer walk,
    // bottom to top, preserving relative vertical order
    for x in 0..BOARD_WIDTH as i8 {
        let mut write_y = BOARD_HEIGHT as i8 - 1;
        for read_y in (0..BOARD_HEIGHT as i8).rev() {
            if let Some(gem) = board.gem_at(x, read_y) {
                if write_y != read_y {
                    board.set(x, write_y, Some(gem));
                    board.set(x, read_y, None);
                }
                write_y -= 1;
            }
        }

        // Step 3: refill the hole at the top of the column
        for y in 0..=write_y {
            board.set(x, y, Some(rng.next_gem()));
            result.refilled.push((x, y));
        }
    }

    result
}
