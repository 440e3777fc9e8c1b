//! Match metadata and setup.
//!
//! Names, court and championship are carried alongside the score so remote
//! displays can render them. The engine never reads them.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{MatchFormat, Team};

/// Passthrough metadata shown on scoreboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchInfo {
    pub team1_name: String,
    pub team2_name: String,
    pub team1_player1: String,
    pub team1_player2: String,
    pub team2_player1: String,
    pub team2_player2: String,
    pub court_number: String,
    pub championship_name: String,
}

impl Default for MatchInfo {
    fn default() -> Self {
        Self {
            team1_name: "Team 1".to_string(),
            team2_name: "Team 2".to_string(),
            team1_player1: "Player 1".to_string(),
            team1_player2: "Player 2".to_string(),
            team2_player1: "Player 3".to_string(),
            team2_player2: "Player 4".to_string(),
            court_number: "1".to_string(),
            championship_name: String::new(),
        }
    }
}

impl MatchInfo {
    /// Name shown for a team
    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::One => &self.team1_name,
            Team::Two => &self.team2_name,
        }
    }

    /// Both player names for a team
    pub fn players(&self, team: Team) -> [&str; 2] {
        match team {
            Team::One => [&self.team1_player1, &self.team1_player2],
            Team::Two => [&self.team2_player1, &self.team2_player2],
        }
    }
}

/// Everything needed to start a match.
///
/// ```
/// use padel_score::types::{MatchFormat, MatchSetup};
///
/// let setup = MatchSetup::from_json(r#"{"format": "pro_set", "team1_name": "Blue"}"#).unwrap();
/// assert_eq!(setup.format, MatchFormat::ProSet);
/// assert_eq!(setup.info.team1_name, "Blue");
/// assert_eq!(setup.info.team2_name, "Team 2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSetup {
    pub format: MatchFormat,
    #[serde(flatten)]
    pub info: MatchInfo,
}

impl MatchSetup {
    /// Parse a setup document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
