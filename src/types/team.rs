//! Team identifiers.
//!
//! Teams are numbered 1 and 2 on the wire (watch messages, display sync,
//! SSZ record). `Team` is the typed form used everywhere inside the engine.

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// Team enum
// ============================================================================

/// One of the two sides of a match.
///
/// Serialized as the bare integer `1` or `2`:
/// - One = 1
/// - Two = 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Team {
    /// Team 1 (listed first on the scoreboard)
    #[default]
    One,
    /// Team 2
    Two,
}

impl Team {
    /// Both teams, in scoreboard order
    pub const BOTH: [Team; 2] = [Team::One, Team::Two];

    /// Convert to the wire id (1 or 2)
    pub fn to_u8(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }

    /// Convert from the wire id
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Team::One),
            2 => Some(Team::Two),
            _ => None,
        }
    }

    /// Returns the other team
    pub fn opponent(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    /// Zero-based slot for per-team arrays
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }
}

impl TryFrom<u8> for Team {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Team::from_u8(value).ok_or(Error::InvalidTeam(value))
    }
}

impl From<Team> for u8 {
    fn from(team: Team) -> Self {
        team.to_u8()
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.to_u8())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
