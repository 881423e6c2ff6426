//! Scoring module - match scoring rules
//!
//! A minimal 3-run is worth 10 points and every additional gem in the merged
//! region adds 10 more. Each cascade pass is scored independently; the score
//! delta of a pass is the sum over its regions, and the caller accumulates
//! deltas into the session total.

use crate::core::matches::MatchSet;
use crate::types::{MATCH_BASE_SCORE, MATCH_LENGTH_BONUS, MIN_RUN_LEN};

/// Points for one merged region of the given size
pub fn region_score(region_len: usize) -> u32 {
    if region_len < MIN_RUN_LEN {
        return 0;
    }
    let extra = (region_len - MIN_RUN_LEN) as u32;
    MATCH_BASE_SCORE + extra * MATCH_LENGTH_BONUS
}

/// Score delta for one cascade pass: sum over all merged regions
pub fn pass_score(matched: &MatchSet) -> u32 {
    matched
        .regions()
        .iter()
        .map(|region| region_score(region.len()))
        .sum()
}
