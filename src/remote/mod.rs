//! Remote control and state publication.
//!
//! The engine knows nothing about watches, TVs or HTTP. This module is the
//! seam they plug into:
//!
//! - [`RemoteCommand`]: inbound requests ("team 2 scored", "reset game")
//! - [`StateSubscriber`]: outbound snapshots after each change
//! - [`Scoreboard`]: the single writer that owns the engine
//!
//! ## Example
//!
//! ```
//! use padel_score::remote::{Scoreboard, SnapshotLog};
//! use padel_score::types::MatchSetup;
//!
//! let mut board = Scoreboard::new(MatchSetup::default());
//! let log = SnapshotLog::new();
//! board.subscribe(log.clone());
//!
//! board.handle_message(r#"{"action": "score_point", "team": 1}"#).unwrap();
//!
//! let snapshot = log.latest().unwrap();
//! assert_eq!(snapshot.team1_display, "15");
//! ```

pub mod commands;
pub mod scoreboard;

pub use commands::RemoteCommand;
pub use scoreboard::{Scoreboard, SnapshotLog, StateSubscriber};
