//! SSZ score record and state root.
//!
//! [`ScoreRecord`] holds only the scoring state in a fixed-size encoding.
//! Its SHA-256 digest is the *state root*: two devices showing the same
//! score hold the same root, whatever order the points came in.
//!
//! ## SSZ Layout
//!
//! Optional team ids are stored as `u8` with `0` meaning "none", the same
//! way team ids travel on the wire (1 or 2).
//!
//! Keep serde and the crate `Result` alias out of this module. The
//! `SimpleSerialize` derive resolves bare `Serialize`, `Deserialize` and
//! `Result` names against whatever is in scope.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::types::format::MAX_SETS;
use crate::types::Team;

/// Scoring state in a deterministic fixed-size encoding.
///
/// Total size: 52 bytes
/// (1 + 4 + 4 + 1 + 1 + 1 + 12 + 12 + 4 + 1 + 4 + 4 + 1 + 1 + 1)
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct ScoreRecord {
    /// Format as u8 (see `MatchFormat::to_u8`)
    pub format_raw: u8,

    pub team1_points: u32,
    pub team2_points: u32,
    pub is_deuce: bool,

    /// Team id with advantage, 0 = none
    pub advantage_raw: u8,

    /// How many sets have a recorded tally
    pub sets_recorded: u8,
    pub team1_set_games: [u32; MAX_SETS],
    pub team2_set_games: [u32; MAX_SETS],
    pub current_set: u32,

    pub is_super_tiebreak: bool,
    pub team1_super_tb_points: u32,
    pub team2_super_tb_points: u32,

    pub is_finished: bool,

    /// Winning team id, 0 = none
    pub winner_raw: u8,

    /// 0 = none, 1 = unresolved tie
    pub anomaly_raw: u8,
}

impl ScoreRecord {
    /// Team id byte for an optional team
    pub fn team_raw(team: Option<Team>) -> u8 {
        team.map(Team::to_u8).unwrap_or(0)
    }

    /// Encode with SSZ
    pub fn to_bytes(&self) -> crate::Result<Vec<u8>> {
        ssz_rs::serialize(self).map_err(|e| crate::Error::Encoding(format!("{e:?}")))
    }

    /// SHA-256 over the SSZ encoding
    pub fn state_root(&self) -> crate::Result<[u8; 32]> {
        Ok(compute_hash(&self.to_bytes()?))
    }

    /// State root as a hex string
    pub fn state_root_hex(&self) -> crate::Result<String> {
        Ok(hex::encode(self.state_root()?))
    }
}

/// Compute SHA-256 of the given data
pub fn compute_hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

// ============================================================================
// Unit Tests
// ============================================================================
