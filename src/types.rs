//! Core types shared across the crate
//! This module contains pure data types with no game logic attached

use serde::{Deserialize, Serialize};

/// Board dimensions
pub const BOARD_WIDTH: u8 = 8;
pub const BOARD_HEIGHT: u8 = 8;

/// Number of distinct gem kinds in play
pub const GEM_KIND_COUNT: u8 = 7;

/// Minimum run length that qualifies as a match
pub const MIN_RUN_LEN: usize = 3;

/// Scoring: a minimal 3-run is worth `MATCH_BASE_SCORE`, each extra gem
/// in the merged region adds `MATCH_LENGTH_BONUS`
pub const MATCH_BASE_SCORE: u32 = 10;
pub const MATCH_LENGTH_BONUS: u32 = 10;

/// Gem kinds occupying board cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GemKind {
    Ruby,
    Amber,
    Topaz,
    Emerald,
    Sapphire,
    Amethyst,
    Quartz,
}

/// All gem kinds in index order
pub const GEM_KINDS: [GemKind; GEM_KIND_COUNT as usize] = [
    GemKind::Ruby,
    GemKind::Amber,
    GemKind::Topaz,
    GemKind::Emerald,
    GemKind::Sapphire,
    GemKind::Amethyst,
    GemKind::Quartz,
];

impl GemKind {
    /// Look up a gem kind by its alphabet index
    pub fn from_index(index: u8) -> Option<Self> {
        GEM_KINDS.get(index as usize).copied()
    }

    /// Alphabet index of this gem kind (0-based)
    pub fn index(&self) -> u8 {
        match self {
            GemKind::Ruby => 0,
            GemKind::Amber => 1,
            GemKind::Topaz => 2,
            GemKind::Emerald => 3,
            GemKind::Sapphire => 4,
            GemKind::Amethyst => 5,
            GemKind::Quartz => 6,
        }
    }

    /// Parse gem kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ruby" => Some(GemKind::Ruby),
            "amber" => Some(GemKind::Amber),
            "topaz" => Some(GemKind::Topaz),
            "emerald" => Some(GemKind::Emerald),
            "sapphire" => Some(GemKind::Sapphire),
            "amethyst" => Some(GemKind::Amethyst),
            "quartz" => Some(GemKind::Quartz),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GemKind::Ruby => "ruby",
            GemKind::Amber => "amber",
            GemKind::Topaz => "topaz",
            GemKind::Emerald => "emerald",
            GemKind::Sapphire => "sapphire",
            GemKind::Amethyst => "amethyst",
            GemKind::Quartz => "quartz",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with a gem kind)
pub type Cell = Option<GemKind>;

/// A candidate swap of two board coordinates.
///
/// Transient: exists only while a move is proposed and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GemMove {
    pub from: (i8, i8),
    pub to: (i8, i8),
}

impl GemMove {
    pub fn new(from: (i8, i8), to: (i8, i8)) -> Self {
        Self { from, to }
    }

    /// Whether the two coordinates are orthogonal neighbors
    /// (Manhattan distance exactly 1)
    pub fn is_adjacent(&self) -> bool {
        let dx = (self.from.0 - self.to.0).abs();
        let dy = (self.from.1 - self.to.1).abs();
        dx + dy == 1
    }
}
