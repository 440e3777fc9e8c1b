//! Core data types for the scoring engine
//!
//! ## Types
//!
//! - [`Team`]: Team 1 or Team 2
//! - [`MatchFormat`]: Format catalog (games per set, sets to win, super tie-break)
//! - [`MatchInfo`] / [`MatchSetup`]: Passthrough metadata and match configuration
//! - [`MatchSnapshot`]: JSON state pushed to remote displays
//! - [`ScoreRecord`]: SSZ score encoding used for the state root

mod team;
mod info;
pub mod format;
pub mod snapshot;
pub mod record;

// Re-export all types at module level
pub use team::Team;
pub use format::MatchFormat;
pub use info::{MatchInfo, MatchSetup};
pub use snapshot::MatchSnapshot;
pub use record::ScoreRecord;
