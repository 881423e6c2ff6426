//! Match detection - finds runs of identical gems
//!
//! Scans every row and column for maximal runs of length >= 3. A run of 5 is
//! reported as one 5-run, not as overlapping 3-runs. Horizontal and vertical
//! runs sharing a cell (L and T shapes) merge into one connected region, so a
//! merged region scores once at its combined size.
//!
//! Detection is deterministic: identical grid contents always produce an
//! identical `MatchSet`.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::{GemKind, BOARD_HEIGHT, BOARD_WIDTH, MIN_RUN_LEN};

/// One connected region of matched gems (one or more merged runs)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRegion {
    pub kind: GemKind,
    pub cells: Vec<(i8, i8)>,
}

impl MatchRegion {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The set of matched coordinates found in one scan.
///
/// Keeps a 64-bit occupancy mask over the 8x8 board for cheap membership
/// tests alongside the per-region cell lists used for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    mask: u64,
    regions: Vec<MatchRegion>,
}

#[inline(always)]
fn bit(x: i8, y: i8) -> u64 {
    1u64 << ((y as u32) * (BOARD_WIDTH as u32) + (x as u32))
}

impl MatchSet {
    /// Build a match set from explicit regions (test fixtures, replay tooling)
    pub fn from_regions(regions: Vec<MatchRegion>) -> Self {
        let mut mask = 0u64;
        for region in &regions {
            for &(x, y) in &region.cells {
                mask |= bit(x, y);
            }
        }
        Self { mask, regions }
    }

    /// No qualifying run exists - the cascade termination condition
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Whether the coordinate belongs to any matched region
    pub fn contains(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        self.mask & bit(x, y) != 0
    }

    /// Total number of distinct matched cells
    pub fn cell_count(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// The merged match regions
    pub fn regions(&self) -> &[MatchRegion] {
        &self.regions
    }

    /// Occupancy mask over the board (bit y*8+x)
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Fold a raw run into the set, merging with any region it overlaps
    fn absorb_run(&mut self, kind: GemKind, run_mask: u64, run_cells: &[(i8, i8)]) {
        // Collect every existing region the run touches
        let mut merged = MatchRegion {
            kind,
            cells: Vec::new(),
        };
        let mut merged_mask = run_mask;
        let mut i = 0;
        while i < self.regions.len() {
            let region_mask: u64 = self.regions[i]
                .cells
                .iter()
                .map(|&(x, y)| bit(x, y))
                .sum();
            if region_mask & merged_mask != 0 {
                let region = self.regions.swap_remove(i);
                merged_mask |= region_mask;
                merged.cells.extend(region.cells);
            } else {
                i += 1;
            }
        }

        // Add the run's own cells, skipping any the merge already covers
        for &(x, y) in run_cells {
            if !merged.cells.contains(&(x, y)) {
                merged.cells.push((x, y));
            }
        }

        self.mask |= merged_mask;
        self.regions.push(merged);
    }
}

/// Scan the board for all maximal runs of length >= 3 and merge overlapping
/// runs into connected regions.
pub fn find_matches(board: &Board) -> MatchSet {
    let mut set = MatchSet::default();

    // Horizontal runs
    for y in 0..BOARD_HEIGHT as i8 {
        let mut x = 0i8;
        while x < BOARD_WIDTH as i8 {
            let Some(kind) = board.gem_at(x, y) else {
                x += 1;
                continue;
            };
            let mut run: ArrayVec<(i8, i8), { BOARD_WIDTH as usize }> = ArrayVec::new();
            run.push((x, y));
            while board.gem_at(x + run.len() as i8, y) == Some(kind) {
                run.push((x + run.len() as i8, y));
            }
            if run.len() >= MIN_RUN_LEN {
                let mask = run.iter().map(|&(rx, ry)| bit(rx, ry)).sum();
                set.absorb_run(kind, mask, &run);
            }
            x += run.len() as i8;
        }
    }

    // Vertical runs
    for x in 0..BOARD_WIDTH as i8 {
        let mut y = 0i8;
        while y < BOARD_HEIGHT as i8 {
            let Some(kind) = board.gem_at(x, y) else {
                y += 1;
                continue;
            };
            let mut run: ArrayVec<(i8, i8), { BOARD_HEIGHT as usize }> = ArrayVec::new();
            run.push((x, y));
            while board.gem_at(x, y + run.len() as i8) == Some(kind) {
                run.push((x, y + run.len() as i8));
            }
            if run.len() >= MIN_RUN_LEN {
                let mask = run.iter().map(|&(rx, ry)| bit(rx, ry)).sum();
                set.absorb_run(kind, mask, &run);
            }
            y += run.len() as i8;
        }
    }

    set
}
