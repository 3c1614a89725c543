#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod classify;
pub mod cycle;
pub mod predict;
pub mod rng;
pub mod search;

// Re-exports: stable minimal API surface for external callers
pub use crate::classify::{letters, PartitionTable, Pitch, SWING_TABLE};
pub use crate::cycle::CycleIndex;
pub use crate::predict::{forecast, lever_ready, Forecast, MAX_CANDIDATES};
pub use crate::rng::RngState;
pub use crate::search::{find_matches, Matches};
