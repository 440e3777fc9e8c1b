//! Serialized views of the match state.
//!
//! ## Two encodings
//!
//! - [`MatchSnapshot`]: JSON document pushed to remote displays after every
//!   mutation. Carries the raw state, the display strings and the opaque
//!   team metadata.
//! - [`ScoreRecord`](crate::types::ScoreRecord): fixed-size SSZ container
//!   holding only the scoring state, hashed into the state root.

use serde::{Deserialize, Serialize};

use crate::engine::MatchAnomaly;
use crate::error::Result;
use crate::types::{MatchFormat, MatchInfo, Team};

// ============================================================================
// JSON snapshot
// ============================================================================

/// Full match state as published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Number of applied mutations since the engine was created
    pub revision: u64,

    pub format: MatchFormat,

    pub team1_points: u32,
    pub team2_points: u32,
    pub is_deuce: bool,
    pub advantage_team: Option<Team>,

    /// Games per set, index 0 = set 1
    pub team1_set_games: Vec<u32>,
    pub team2_set_games: Vec<u32>,
    pub current_set: u32,

    pub is_super_tiebreak: bool,
    pub team1_super_tb_points: u32,
    pub team2_super_tb_points: u32,

    pub is_finished: bool,
    pub winner: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<MatchAnomaly>,

    // Display projections
    pub team1_display: String,
    pub team2_display: String,
    pub current_set_score: String,
    pub match_score: String,
    pub team1_sets_won: u32,
    pub team2_sets_won: u32,

    #[serde(flatten)]
    pub info: MatchInfo,

    /// Hex SHA-256 of the [`ScoreRecord`](crate::types::ScoreRecord)
    pub state_root: String,
}

impl MatchSnapshot {
    /// Encode as a JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Games recorded for a team in a 1-based set, zero if not played
    pub fn games_for_set(&self, set: u32, team: Team) -> u32 {
        let games = match team {
            Team::One => &self.team1_set_games,
            Team::Two => &self.team2_set_games,
        };
        set.checked_sub(1)
            .and_then(|index| games.get(index as usize))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchEngine;

    #[test]
    fn test_snapshot_json_roundtrip() {
        let mut engine = MatchEngine::new(MatchFormat::ProSet);
        engine.score_point(Team::Two);
        let snapshot = engine.snapshot(&MatchInfo::default()).unwrap();

        let json = snapshot.to_json().unwrap();
        assert!(!json.contains("anomaly"));
        assert_eq!(MatchSnapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_snapshot_root_matches_record() {
        let engine = MatchEngine::default();
        let snapshot = engine.snapshot(&MatchInfo::default()).unwrap();
        assert_eq!(snapshot.state_root, engine.record().state_root_hex().unwrap());
    }

    #[test]
    fn test_games_for_set() {
        let mut snapshot = MatchEngine::default()
            .snapshot(&MatchInfo::default())
            .unwrap();
        snapshot.team1_set_games = vec![6, 2];
        assert_eq!(snapshot.games_for_set(2, Team::One), 2);
        assert_eq!(snapshot.games_for_set(0, Team::One), 0);
        assert_eq!(snapshot.games_for_set(3, Team::Two), 0);
    }
}
