//! Messages sent by remote controls (watch, TV remote, web panel).
//!
//! ## Wire Format
//!
//! JSON objects tagged by `"action"`:
//!
//! ```text
//! {"action": "score_point", "team": 1}
//! {"action": "remove_point", "team": 2}
//! {"action": "reset_game"}
//! {"action": "reset_match"}
//! {"action": "request_state"}
//! {"action": "set_format", "format": "pro_set"}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{MatchFormat, Team};

/// A mutation or query requested from outside the engine owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RemoteCommand {
    ScorePoint { team: Team },
    RemovePoint { team: Team },
    ResetGame,
    ResetMatch,
    /// Ask for the current snapshot without changing anything
    RequestState,
    SetFormat { format: MatchFormat },
}

impl RemoteCommand {
    /// Decode a JSON message
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as a JSON message
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_decode_score_point() {
        let cmd = RemoteCommand::from_json(r#"{"action": "score_point", "team": 2}"#).unwrap();
        assert_eq!(cmd, RemoteCommand::ScorePoint { team: Team::Two });
    }

    #[test]
    fn test_decode_unit_actions() {
        assert_eq!(
            RemoteCommand::from_json(r#"{"action": "reset_game"}"#).unwrap(),
            RemoteCommand::ResetGame
        );
        assert_eq!(
            RemoteCommand::from_json(r#"{"action": "request_state"}"#).unwrap(),
            RemoteCommand::RequestState
        );
    }

    #[test]
    fn test_decode_set_format() {
        let cmd =
            RemoteCommand::from_json(r#"{"action": "set_format", "format": "best_of_3_super_tiebreak"}"#)
                .unwrap();
        assert_eq!(
            cmd,
            RemoteCommand::SetFormat {
                format: MatchFormat::BestOf3WithSuperTiebreak
            }
        );
    }

    #[test]
    fn test_decode_rejects_bad_team() {
        let err = RemoteCommand::from_json(r#"{"action": "score_point", "team": 3}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_decode_rejects_unknown_action() {
        assert!(RemoteCommand::from_json(r#"{"action": "undo_set"}"#).is_err());
    }

    #[test]
    fn test_encode_remove_point() {
        let json = RemoteCommand::RemovePoint { team: Team::One }.to_json().unwrap();
        assert_eq!(json, r#"{"action":"remove_point","team":1}"#);
    }
}
