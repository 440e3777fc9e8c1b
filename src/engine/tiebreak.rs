//! Super tie-break counter.
//!
//! Replaces the deciding set in `BestOf3WithSuperTiebreak`. Plain point
//! count, first to 10 with a two-point lead. The final tally is kept after
//! the match ends so displays can show it.

use crate::engine::points::PointOutcome;
use crate::types::format::SUPER_TIEBREAK_POINTS;
use crate::types::Team;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuperTiebreak {
    active: bool,
    points: [u32; 2],
}

impl SuperTiebreak {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from raw state
    pub fn from_parts(active: bool, team1: u32, team2: u32) -> Self {
        Self {
            active,
            points: [team1, team2],
        }
    }

    /// Switch scoring over to the tie-break, starting from 0 - 0
    pub fn activate(&mut self) {
        self.active = true;
        self.points = [0, 0];
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn points(&self, team: Team) -> u32 {
        self.points[team.index()]
    }

    pub fn score(&mut self, team: Team) -> PointOutcome {
        let slot = &mut self.points[team.index()];
        *slot = slot.saturating_add(1);
        match self.winner() {
            Some(winner) => PointOutcome::Won(winner),
            None => PointOutcome::Counted,
        }
    }

    pub fn subtract(&mut self, team: Team) -> PointOutcome {
        let slot = &mut self.points[team.index()];
        if *slot == 0 {
            return PointOutcome::Unchanged;
        }
        *slot -= 1;
        match self.winner() {
            Some(winner) => PointOutcome::Won(winner),
            None => PointOutcome::Counted,
        }
    }

    /// Clear the tie-break points, staying in tie-break mode
    pub fn reset_points(&mut self) {
        self.points = [0, 0];
    }

    /// Team that has taken the tie-break, if any
    pub fn winner(&self) -> Option<Team> {
        if !self.active {
            return None;
        }
        let [p1, p2] = self.points;
        let (leader, high, low) = if p1 >= p2 {
            (Team::One, p1, p2)
        } else {
            (Team::Two, p2, p1)
        };
        (high >= SUPER_TIEBREAK_POINTS && high - low >= 2).then_some(leader)
    }

    /// "t1 - t2"
    pub fn score_line(&self) -> String {
        format!("{} - {}", self.points[0], self.points[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_points_wins() {
        let mut tb = SuperTiebreak::new();
        tb.activate();
        for _ in 0..9 {
            assert_eq!(tb.score(Team::One), PointOutcome::Counted);
        }
        assert_eq!(tb.score(Team::One), PointOutcome::Won(Team::One));
        assert_eq!(tb.winner(), Some(Team::One));
        assert_eq!(tb.points(Team::One), 10);
    }

    #[test]
    fn test_needs_two_point_lead() {
        let mut tb = SuperTiebreak::from_parts(true, 9, 9);
        assert_eq!(tb.score(Team::Two), PointOutcome::Counted);
        assert_eq!(tb.score(Team::One), PointOutcome::Counted);
        assert_eq!(tb.score(Team::One), PointOutcome::Counted);
        assert_eq!(tb.score(Team::One), PointOutcome::Won(Team::One));
        assert_eq!(tb.score_line(), "12 - 10");
    }

    #[test]
    fn test_subtract_floors_at_zero() {
        let mut tb = SuperTiebreak::from_parts(true, 1, 0);
        assert_eq!(tb.subtract(Team::Two), PointOutcome::Unchanged);
        assert_eq!(tb.subtract(Team::One), PointOutcome::Counted);
        assert_eq!(tb.points(Team::One), 0);
    }

    #[test]
    fn test_subtract_can_leave_winning_tally() {
        let mut tb = SuperTiebreak::from_parts(true, 10, 9);
        assert_eq!(tb.subtract(Team::Two), PointOutcome::Won(Team::One));
        assert_eq!(tb.score_line(), "10 - 8");
    }

    #[test]
    fn test_extreme_tallies_do_not_overflow() {
        let mut tb = SuperTiebreak::from_parts(true, u32::MAX, u32::MAX);
        assert_eq!(tb.winner(), None);
        assert_eq!(tb.score(Team::One), PointOutcome::Counted);

        let tb = SuperTiebreak::from_parts(true, u32::MAX, u32::MAX - 2);
        assert_eq!(tb.winner(), Some(Team::One));
    }

    #[test]
    fn test_inactive_has_no_winner() {
        let tb = SuperTiebreak::from_parts(false, 10, 0);
        assert_eq!(tb.winner(), None);
    }

    #[test]
    fn test_reset_points_keeps_mode() {
        let mut tb = SuperTiebreak::from_parts(true, 4, 7);
        tb.reset_points();
        assert!(tb.is_active());
        assert_eq!(tb.score_line(), "0 - 0");
    }
}
