//! # sb_core - Live Football Scoreboard
//!
//! In-memory tracking of football matches in progress, with an ordered
//! live summary.
//!
//! ## Features
//! - Match lifecycle state machine (not started → in progress → finished)
//! - Generic entity stores with uniqueness and insertion-order guarantees
//! - Summary ordered by total score, ties broken by most recently added
//! - Scoreboard facades that share stores through injected handles

pub mod error;
pub mod models;
pub mod scoreboard;
pub mod store;

pub use error::{MatchError, Result, ScoreboardError, StoreError};
pub use models::{Match, MatchState, Team};
pub use scoreboard::{Scoreboard, SharedStore, SummaryLine};
pub use store::{Entity, EntityStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
