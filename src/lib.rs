//! # Padel Score
//!
//! Deterministic scoring engine for two-team padel and tennis matches.
//!
//! ## Architecture
//!
//! - **Types**: Teams, match formats, setup metadata, snapshots
//! - **Engine**: Points, games, sets, super tie-break and match resolution
//! - **Remote**: Command decoding, state publication, single-writer scoreboard
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical point sequences give identical state roots
//! 2. **Total API**: Scoring never fails; disallowed calls are no-ops
//! 3. **No Globals**: Transports are injected as subscribers
//! 4. **Synchronous Execution**: No async, no locks inside the engine
//!
//! ## Supported Formats
//!
//! - One set to 6 games
//! - Pro set to 9 games
//! - Best of 3 sets
//! - Best of 3 sets with a super tie-break (first to 10) instead of a third set

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Team, MatchFormat, MatchSnapshot, ScoreRecord
pub mod types;

/// Scoring state machine
pub mod engine;

/// Remote commands and snapshot subscribers
pub mod remote;

mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use error::{Error, Result};
pub use types::{MatchFormat, MatchInfo, MatchSetup, MatchSnapshot, ScoreRecord, Team};
pub use engine::{MatchAnomaly, MatchEngine, ScoreEvent};
pub use remote::{RemoteCommand, Scoreboard, SnapshotLog, StateSubscriber};
