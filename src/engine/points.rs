//! Point counter for the game in progress.
//!
//! ## Game Rules
//!
//! ```text
//! points:   0    1    2    3
//! display: "0" "15" "30" "40"
//! ```
//!
//! - Both sides on 3+ and level: deuce
//! - Both sides on 3+ and one point apart: advantage to the leader
//! - Both sides on 3+ and two points apart: game to the leader
//! - One side reaches 4 while the other is below 3: game to that side
//!
//! A correction that leaves both sides on 3+ re-runs the evaluation, so a
//! winning tally left behind wins the game again. A correction that drops
//! either side below 3 only clears deuce and advantage; the next point
//! settles the game.

use crate::types::Team;

/// Result of touching a counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// Nothing changed (subtracting from zero)
    Unchanged,
    /// The tally changed, nobody won
    Counted,
    /// The tally produced a winner
    Won(Team),
}

/// Per-game point tally with deuce/advantage tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointCounter {
    points: [u32; 2],
    is_deuce: bool,
    advantage: Option<Team>,
}

impl PointCounter {
    /// Create an empty counter (0 - 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a counter from raw points.
    ///
    /// Accepts every tally the counter can hold, including the 4-2 left
    /// behind by a correction. Returns `None` for tallies that would already
    /// be a won game.
    pub fn from_points(team1: u32, team2: u32) -> Option<Self> {
        let mut counter = Self {
            points: [team1, team2],
            ..Self::default()
        };
        if team1 >= 3 && team2 >= 3 {
            match counter.evaluate() {
                PointOutcome::Won(_) => None,
                _ => Some(counter),
            }
        } else if team1.max(team2) <= 4 {
            Some(counter)
        } else {
            None
        }
    }

    /// Points for a team in the current game
    #[inline]
    pub fn points(&self, team: Team) -> u32 {
        self.points[team.index()]
    }

    #[inline]
    pub fn is_deuce(&self) -> bool {
        self.is_deuce
    }

    #[inline]
    pub fn advantage(&self) -> Option<Team> {
        self.advantage
    }

    /// Add a point for `team` and evaluate the game
    pub fn score(&mut self, team: Team) -> PointOutcome {
        let slot = &mut self.points[team.index()];
        *slot = slot.saturating_add(1);
        self.evaluate()
    }

    /// Remove a point from `team`, floored at zero
    pub fn subtract(&mut self, team: Team) -> PointOutcome {
        let slot = &mut self.points[team.index()];
        if *slot == 0 {
            return PointOutcome::Unchanged;
        }
        *slot -= 1;

        let [p1, p2] = self.points;
        if p1 < 3 || p2 < 3 {
            self.is_deuce = false;
            self.advantage = None;
            PointOutcome::Counted
        } else {
            self.evaluate()
        }
    }

    /// Clear the game in progress
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scoreboard text for a team: "0", "15", "30", "40" or "AD"
    pub fn display(&self, team: Team) -> &'static str {
        if self.is_deuce {
            return "40";
        }
        if let Some(leader) = self.advantage {
            return if leader == team { "AD" } else { "40" };
        }
        match self.points(team) {
            0 => "0",
            1 => "15",
            2 => "30",
            _ => "40",
        }
    }

    fn evaluate(&mut self) -> PointOutcome {
        let [p1, p2] = self.points;

        if p1 >= 3 && p2 >= 3 {
            let (leader, lead) = if p1 >= p2 {
                (Team::One, p1 - p2)
            } else {
                (Team::Two, p2 - p1)
            };
            match lead {
                0 => {
                    self.is_deuce = true;
                    self.advantage = None;
                }
                1 => {
                    self.is_deuce = false;
                    self.advantage = Some(leader);
                }
                _ => return self.win(leader),
            }
        } else if p1 >= 4 && p1 >= p2 + 2 {
            return self.win(Team::One);
        } else if p2 >= 4 && p2 >= p1 + 2 {
            return self.win(Team::Two);
        }

        PointOutcome::Counted
    }

    fn win(&mut self, team: Team) -> PointOutcome {
        self.reset();
        PointOutcome::Won(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_at(team1: u32, team2: u32) -> PointCounter {
        PointCounter::from_points(team1, team2).expect("not a won game")
    }

    #[test]
    fn test_display_progression() {
        let mut counter = PointCounter::new();
        assert_eq!(counter.display(Team::One), "0");
        counter.score(Team::One);
        assert_eq!(counter.display(Team::One), "15");
        counter.score(Team::One);
        assert_eq!(counter.display(Team::One), "30");
        counter.score(Team::One);
        assert_eq!(counter.display(Team::One), "40");
        assert_eq!(counter.display(Team::Two), "0");
    }

    #[test]
    fn test_four_straight_points_win() {
        let mut counter = PointCounter::new();
        for _ in 0..3 {
            assert_eq!(counter.score(Team::Two), PointOutcome::Counted);
        }
        assert_eq!(counter.score(Team::Two), PointOutcome::Won(Team::Two));
        assert_eq!(counter, PointCounter::new());
    }

    #[test]
    fn test_forty_thirty_then_point_wins() {
        let mut counter = counter_at(3, 2);
        assert_eq!(counter.score(Team::One), PointOutcome::Won(Team::One));
    }

    #[test]
    fn test_deuce_and_advantage() {
        let mut counter = counter_at(2, 3);
        counter.score(Team::One);
        assert!(counter.is_deuce());
        assert_eq!(counter.advantage(), None);
        assert_eq!(counter.display(Team::One), "40");
        assert_eq!(counter.display(Team::Two), "40");

        counter.score(Team::Two);
        assert!(!counter.is_deuce());
        assert_eq!(counter.advantage(), Some(Team::Two));
        assert_eq!(counter.display(Team::Two), "AD");
        assert_eq!(counter.display(Team::One), "40");

        counter.score(Team::One);
        assert!(counter.is_deuce());

        counter.score(Team::One);
        assert_eq!(counter.score(Team::One), PointOutcome::Won(Team::One));
    }

    #[test]
    fn test_alternating_from_deuce_never_wins() {
        let mut counter = counter_at(3, 3);
        for i in 0..20 {
            let team = if i % 2 == 0 { Team::One } else { Team::Two };
            assert_eq!(counter.score(team), PointOutcome::Counted);
            assert!(counter.is_deuce() || counter.advantage().is_some());
        }
    }

    #[test]
    fn test_subtract_floors_at_zero() {
        let mut counter = PointCounter::new();
        assert_eq!(counter.subtract(Team::One), PointOutcome::Unchanged);
        assert_eq!(counter.points(Team::One), 0);
    }

    #[test]
    fn test_subtract_undoes_score() {
        let mut counter = counter_at(3, 3);
        let before = counter.clone();
        counter.score(Team::Two);
        counter.subtract(Team::Two);
        assert_eq!(counter, before);
    }

    #[test]
    fn test_subtract_below_three_clears_deuce() {
        let mut counter = counter_at(3, 3);
        counter.subtract(Team::One);
        assert!(!counter.is_deuce());
        assert_eq!(counter.advantage(), None);
        assert_eq!(counter.display(Team::One), "30");
        assert_eq!(counter.display(Team::Two), "40");
    }

    #[test]
    fn test_subtract_from_advantage_returns_to_deuce() {
        let mut counter = counter_at(4, 3);
        counter.subtract(Team::One);
        assert!(counter.is_deuce());
        assert_eq!(counter.advantage(), None);
    }

    #[test]
    fn test_subtract_below_three_leaves_tally_unjudged() {
        let mut counter = counter_at(4, 3);
        assert_eq!(counter.subtract(Team::Two), PointOutcome::Counted);
        assert_eq!(counter.advantage(), None);
        assert_eq!(counter.display(Team::One), "40");
        assert_eq!(counter.display(Team::Two), "30");
        assert_eq!(counter.score(Team::One), PointOutcome::Won(Team::One));
    }

    #[test]
    fn test_from_points_rejects_won_game() {
        assert!(PointCounter::from_points(5, 0).is_none());
        assert!(PointCounter::from_points(5, 3).is_none());
        assert!(PointCounter::from_points(4, 2).is_some());
        assert!(PointCounter::from_points(4, 3).is_some());
        assert!(counter_at(5, 5).is_deuce());
    }
}
