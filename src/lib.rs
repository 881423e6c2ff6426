//! gem-cascade - match-three board simulation core
//!
//! The discrete state machine underneath a Bejeweled-style game: grid state,
//! match detection, gravity/refill resolution, and move validation. Rendering,
//! input, animation, and frame pacing live in whatever presentation layer sits
//! on top; it consumes board snapshots and `CascadeResult` records and never
//! mutates the grid directly.

pub mod core;
pub mod types;
