//! Match format catalog.
//!
//! Each format is a fixed set of thresholds. They never change during a
//! match; switching format always restarts the match.
//!
//! | Format | Games per set | Sets to win | Max sets | Super tie-break |
//! |--------|---------------|-------------|----------|-----------------|
//! | `OneSet` | 6 | 1 | 1 | no |
//! | `ProSet` | 9 | 1 | 1 | no |
//! | `BestOf3Sets` | 6 | 2 | 3 | no |
//! | `BestOf3WithSuperTiebreak` | 6 | 2 | 3 | yes |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Points needed to take a super tie-break (win by two)
pub const SUPER_TIEBREAK_POINTS: u32 = 10;

/// Largest `max_sets` across all formats
pub const MAX_SETS: usize = 3;

/// How a match is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFormat {
    /// A single set to 6 games
    OneSet,
    /// A single set to 9 games
    ProSet,
    /// First to two sets of 6 games
    #[default]
    #[serde(rename = "best_of_3_sets")]
    BestOf3Sets,
    /// First to two sets; a 1-1 split is decided by a super tie-break
    #[serde(rename = "best_of_3_super_tiebreak")]
    BestOf3WithSuperTiebreak,
}

impl MatchFormat {
    /// Every format, in menu order
    pub const ALL: [MatchFormat; 4] = [
        MatchFormat::OneSet,
        MatchFormat::ProSet,
        MatchFormat::BestOf3Sets,
        MatchFormat::BestOf3WithSuperTiebreak,
    ];

    /// Games needed to take a set
    pub fn games_to_win_set(self) -> u32 {
        match self {
            MatchFormat::ProSet => 9,
            _ => 6,
        }
    }

    /// Sets needed to take the match
    pub fn sets_to_win(self) -> u32 {
        match self {
            MatchFormat::OneSet | MatchFormat::ProSet => 1,
            MatchFormat::BestOf3Sets | MatchFormat::BestOf3WithSuperTiebreak => 2,
        }
    }

    /// Most sets that can be played
    pub fn max_sets(self) -> u32 {
        match self {
            MatchFormat::OneSet | MatchFormat::ProSet => 1,
            MatchFormat::BestOf3Sets | MatchFormat::BestOf3WithSuperTiebreak => 3,
        }
    }

    /// Whether a super tie-break replaces the deciding set
    pub fn has_super_tiebreak(self) -> bool {
        matches!(self, MatchFormat::BestOf3WithSuperTiebreak)
    }

    /// Human-readable name for setup screens
    pub fn label(self) -> &'static str {
        match self {
            MatchFormat::OneSet => "1 Set",
            MatchFormat::ProSet => "Pro Set (9 games)",
            MatchFormat::BestOf3Sets => "Best of 3 Sets",
            MatchFormat::BestOf3WithSuperTiebreak => "Best of 3 (Super Tie-Break)",
        }
    }

    /// Machine name, as accepted by `FromStr` and serde
    pub fn name(self) -> &'static str {
        match self {
            MatchFormat::OneSet => "one_set",
            MatchFormat::ProSet => "pro_set",
            MatchFormat::BestOf3Sets => "best_of_3_sets",
            MatchFormat::BestOf3WithSuperTiebreak => "best_of_3_super_tiebreak",
        }
    }

    /// Convert to u8 for the SSZ record
    pub fn to_u8(self) -> u8 {
        match self {
            MatchFormat::OneSet => 0,
            MatchFormat::ProSet => 1,
            MatchFormat::BestOf3Sets => 2,
            MatchFormat::BestOf3WithSuperTiebreak => 3,
        }
    }

    /// Convert from the SSZ record byte
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(MatchFormat::OneSet),
            1 => Some(MatchFormat::ProSet),
            2 => Some(MatchFormat::BestOf3Sets),
            3 => Some(MatchFormat::BestOf3WithSuperTiebreak),
            _ => None,
        }
    }
}

impl FromStr for MatchFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        MatchFormat::ALL
            .into_iter()
            .find(|format| format.name() == wanted)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

impl std::fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
