//! Move validation - non-destructive swap probing
//!
//! A candidate swap is legal only if it produces at least one match. The
//! probe runs against a copy of the board (64 bytes), so the caller's grid
//! is untouched for every input, including the error paths.

use crate::core::board::{Board, BoardError};
use crate::core::matches::find_matches;
use crate::types::{GemMove, BOARD_HEIGHT, BOARD_WIDTH};

/// Whether committing the swap would produce at least one match.
///
/// Fails with `OutOfBounds`/`NotAdjacent` for malformed moves; the board is
/// never mutated either way.
pub fn would_match(board: &Board, mv: GemMove) -> Result<bool, BoardError> {
    let mut probe = board.clone();
    probe.swap(mv)?;
    Ok(!find_matches(&probe).is_empty())
}

/// Find any swap that would produce a match, sweeping each cell's right and
/// down neighbor. Returns None when the board is dead (game over).
pub fn find_available_move(board: &Board) -> Option<GemMove> {
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            for neighbor in [(x + 1, y), (x, y + 1)] {
                if board.is_out_of_bounds(neighbor.0, neighbor.1) {
                    continue;
                }
                let mv = GemMove::new((x, y), neighbor);
                // In-bounds adjacent pair, so the probe cannot fail
                if would_match(board, mv).unwrap_or(false) {
                    return Some(mv);
                }
            }
        }
    }
    None
}

/// Whether at least one matching move exists on the board
pub fn has_available_move(board: &Board) -> bool {
    find_available_move(board).is_some()
}
