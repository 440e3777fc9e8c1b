//! What a mutation did.

use serde::{Deserialize, Serialize};

use crate::types::Team;

/// Outcome of a single engine call.
///
/// Only the most significant effect is reported: a point that wins the
/// match is `MatchWon`, not `GameWon` + `SetWon` + `MatchWon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    /// The call had no effect (finished match, subtracting from zero)
    Ignored,
    /// A point was added
    Point { team: Team },
    /// A point was taken back
    Corrected { team: Team },
    /// The point completed a game
    GameWon { team: Team, set: u32 },
    /// The point completed a set and play moves on to `next_set`
    SetWon { team: Team, next_set: u32 },
    /// Sets are level and the super tie-break begins
    SuperTiebreakStarted,
    /// The match is over
    MatchWon { team: Team },
    /// All sets played with sets level; see [`MatchAnomaly`]
    Unresolved,
    /// Game, match or format reset
    Reset,
}

impl ScoreEvent {
    /// Whether the state changed
    pub fn is_applied(&self) -> bool {
        !matches!(self, ScoreEvent::Ignored)
    }
}

/// A state the rules should never reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchAnomaly {
    /// Every set was played and both teams won the same number
    UnresolvedTie { sets_each: u32 },
}

impl MatchAnomaly {
    pub fn to_u8(self) -> u8 {
        match self {
            MatchAnomaly::UnresolvedTie { .. } => 1,
        }
    }
}
