//! Core module - pure match-three game logic
//!
//! This module contains all the board rules, cascade resolution, and session
//! state. It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod game_state;
pub mod gravity;
pub mod matches;
pub mod moves;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::{Board, BoardError};
pub use game_state::{GameState, SwapOutcome};
pub use gravity::CascadeResult;
pub use matches::{find_matches, MatchRegion, MatchSet};
pub use moves::{find_available_move, has_available_move, would_match};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
