//! Per-set game ledger.
//!
//! ## Storage
//!
//! Each team owns a growable list of game counts, index 0 = set 1. Lists
//! grow lazily with zero-fill up to the set being played and are never
//! shortened during a match.
//!
//! ## Set Rules
//!
//! - **Pro Set**: first to 9 games with more games than the opponent. At
//!   8-8 the next game decides the set (9-8).
//! - **Everything else**: first to 6 with a two-game lead, or to 7 (a 7-6
//!   finish). At 6-6 the set simply continues; no tiebreak game is played.

use crate::types::{MatchFormat, Team};

/// Games won per team per set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetLedger {
    games: [Vec<u32>; 2],
}

impl SetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from raw per-set tallies
    pub fn from_games(team1: Vec<u32>, team2: Vec<u32>) -> Self {
        Self {
            games: [team1, team2],
        }
    }

    /// Credit a game to `team` in the 1-based `set`
    pub fn record_game(&mut self, team: Team, set: u32) {
        let len = set as usize;
        for games in self.games.iter_mut() {
            if games.len() < len {
                games.resize(len, 0);
            }
        }
        self.games[team.index()][len - 1] += 1;
    }

    /// Games for a team in a 1-based set, zero when nothing is recorded
    pub fn games_for_set(&self, set: u32, team: Team) -> u32 {
        set.checked_sub(1)
            .and_then(|index| self.games[team.index()].get(index as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Raw tallies for a team
    pub fn games(&self, team: Team) -> &[u32] {
        &self.games[team.index()]
    }

    /// Number of sets with a recorded tally
    pub fn sets_recorded(&self) -> usize {
        self.games[0].len().max(self.games[1].len())
    }

    /// Winner of a set under the format's rules, if it is decided
    pub fn set_winner(&self, format: MatchFormat, set: u32) -> Option<Team> {
        set_winner(
            format,
            self.games_for_set(set, Team::One),
            self.games_for_set(set, Team::Two),
        )
    }

    /// Recorded sets that `team` has won
    pub fn count_sets_won(&self, format: MatchFormat, team: Team) -> u32 {
        (1..=self.sets_recorded() as u32)
            .filter(|&set| self.set_winner(format, set) == Some(team))
            .count() as u32
    }
}

/// Decide a set from its game tally
pub fn set_winner(format: MatchFormat, team1: u32, team2: u32) -> Option<Team> {
    let (leader, lead_games, trail_games) = if team1 >= team2 {
        (Team::One, team1, team2)
    } else {
        (Team::Two, team2, team1)
    };
    if lead_games == trail_games {
        return None;
    }

    let target = format.games_to_win_set();
    let won = match format {
        MatchFormat::ProSet => lead_games >= target,
        _ => {
            lead_games >= target && (lead_games - trail_games >= 2 || lead_games >= target + 1)
        }
    };

    won.then_some(leader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_game_zero_fills() {
        let mut ledger = SetLedger::new();
        ledger.record_game(Team::Two, 3);

        assert_eq!(ledger.games(Team::One), &[0, 0, 0]);
        assert_eq!(ledger.games(Team::Two), &[0, 0, 1]);
        assert_eq!(ledger.sets_recorded(), 3);
    }

    #[test]
    fn test_games_for_unrecorded_set_is_zero() {
        let ledger = SetLedger::new();
        assert_eq!(ledger.games_for_set(1, Team::One), 0);
        assert_eq!(ledger.games_for_set(0, Team::One), 0);
        assert_eq!(ledger.games_for_set(9, Team::Two), 0);
    }

    #[test]
    fn test_standard_set_rules() {
        let format = MatchFormat::BestOf3Sets;
        assert_eq!(set_winner(format, 6, 0), Some(Team::One));
        assert_eq!(set_winner(format, 6, 4), Some(Team::One));
        assert_eq!(set_winner(format, 5, 6), None);
        assert_eq!(set_winner(format, 6, 6), None);
        assert_eq!(set_winner(format, 7, 5), Some(Team::One));
        assert_eq!(set_winner(format, 6, 7), Some(Team::Two));
        assert_eq!(set_winner(format, 4, 3), None);
    }

    #[test]
    fn test_pro_set_rules() {
        let format = MatchFormat::ProSet;
        assert_eq!(set_winner(format, 9, 7), Some(Team::One));
        assert_eq!(set_winner(format, 9, 8), Some(Team::One));
        assert_eq!(set_winner(format, 8, 8), None);
        assert_eq!(set_winner(format, 8, 6), None);
        assert_eq!(set_winner(format, 3, 9), Some(Team::Two));
    }

    #[test]
    fn test_count_sets_won_ignores_open_set() {
        let ledger = SetLedger::from_games(vec![6, 3, 5], vec![2, 6, 5]);
        let format = MatchFormat::BestOf3Sets;
        assert_eq!(ledger.count_sets_won(format, Team::One), 1);
        assert_eq!(ledger.count_sets_won(format, Team::Two), 1);
    }
}
