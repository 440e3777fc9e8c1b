//! Match engine module.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same point sequence always produces the same score
//! 2. **Total Operations**: No call fails; disallowed calls are no-ops
//! 3. **Single Writer**: No internal locking; the owner serializes access
//! 4. **Derived Counts**: Sets won are recomputed from per-set game tallies
//!
//! ## Components
//!
//! - [`PointCounter`]: Points, deuce and advantage for the game in progress
//! - [`SetLedger`]: Games per set and the per-format set rule
//! - [`SuperTiebreak`]: First-to-10 decider replacing a third set
//! - [`MatchEngine`]: Ties the counters together and resolves the match
//!
//! ## Example
//!
//! ```
//! use padel_score::engine::{MatchEngine, ScoreEvent};
//! use padel_score::types::{MatchFormat, Team};
//!
//! let mut engine = MatchEngine::new(MatchFormat::OneSet);
//!
//! for _ in 0..23 {
//!     engine.score_point(Team::Two);
//! }
//! let event = engine.score_point(Team::Two);
//!
//! assert_eq!(event, ScoreEvent::MatchWon { team: Team::Two });
//! assert_eq!(engine.winner(), Some(Team::Two));
//! assert_eq!(engine.match_score(), "0 - 1");
//! ```

pub mod events;
pub mod points;
pub mod sets;
pub mod tiebreak;
pub mod match_engine;

pub use events::{MatchAnomaly, ScoreEvent};
pub use match_engine::MatchEngine;
pub use points::{PointCounter, PointOutcome};
pub use sets::SetLedger;
pub use tiebreak::SuperTiebreak;
