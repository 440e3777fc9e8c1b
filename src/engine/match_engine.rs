//! The match engine: one mutable score, one way to change it.
//!
//! ## Flow
//!
//! ```text
//! score_point(team)
//!   -> PointCounter      (or SuperTiebreak once active)
//!   -> SetLedger         on a game win
//!   -> resolve           on a set win: match won, super tie-break, or next set
//! ```
//!
//! All calls are synchronous and total. Calls the rules do not allow
//! (scoring a finished match, subtracting from zero) return
//! [`ScoreEvent::Ignored`] and leave the state untouched.

use tracing::{debug, info, warn};

use crate::engine::events::{MatchAnomaly, ScoreEvent};
use crate::engine::points::{PointCounter, PointOutcome};
use crate::engine::sets::{set_winner, SetLedger};
use crate::engine::tiebreak::SuperTiebreak;
use crate::error::{Error, Result};
use crate::types::format::MAX_SETS;
use crate::types::{MatchFormat, MatchInfo, MatchSnapshot, ScoreRecord, Team};

/// Deterministic scoring state machine for a two-team match.
///
/// ## Example
///
/// ```
/// use padel_score::{MatchEngine, MatchFormat, Team};
///
/// let mut engine = MatchEngine::new(MatchFormat::BestOf3Sets);
///
/// engine.score_point(Team::One);
/// engine.score_point(Team::One);
/// assert_eq!(engine.display_game_score(Team::One), "30");
///
/// engine.score_point(Team::One);
/// engine.score_point(Team::One);
/// assert_eq!(engine.current_set_score(), "1 - 0");
/// assert_eq!(engine.display_game_score(Team::One), "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEngine {
    format: MatchFormat,
    points: PointCounter,
    ledger: SetLedger,
    /// 1-based set being played
    current_set: u32,
    tiebreak: SuperTiebreak,
    is_finished: bool,
    winner: Option<Team>,
    anomaly: Option<MatchAnomaly>,
    /// Applied mutations, for ordering published snapshots
    revision: u64,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchFormat::default())
    }
}

impl MatchEngine {
    /// Create a fresh match
    pub fn new(format: MatchFormat) -> Self {
        Self {
            format,
            points: PointCounter::new(),
            ledger: SetLedger::new(),
            current_set: 1,
            tiebreak: SuperTiebreak::new(),
            is_finished: false,
            winner: None,
            anomaly: None,
            revision: 0,
        }
    }

    /// Rebuild an engine from a received snapshot.
    ///
    /// Deuce and advantage are derived from the point counts rather than
    /// trusted. Display strings and the state root are ignored. The rebuilt
    /// state must be one that play could have reached; anything else is
    /// rejected with [`Error::InvalidSnapshot`].
    pub fn restore(snapshot: &MatchSnapshot) -> Result<Self> {
        let format = snapshot.format;

        if snapshot.team1_set_games.len() != snapshot.team2_set_games.len() {
            return Err(Error::InvalidSnapshot(format!(
                "set tallies differ in length ({} vs {})",
                snapshot.team1_set_games.len(),
                snapshot.team2_set_games.len()
            )));
        }
        if snapshot.team1_set_games.len() > format.max_sets() as usize {
            return Err(Error::InvalidSnapshot(format!(
                "{} sets recorded, {} allows {}",
                snapshot.team1_set_games.len(),
                format,
                format.max_sets()
            )));
        }
        let points = PointCounter::from_points(snapshot.team1_points, snapshot.team2_points)
            .ok_or_else(|| {
                Error::InvalidSnapshot(format!(
                    "points {}-{} are not a game in progress",
                    snapshot.team1_points, snapshot.team2_points
                ))
            })?;

        let engine = Self {
            format,
            points,
            ledger: SetLedger::from_games(
                snapshot.team1_set_games.clone(),
                snapshot.team2_set_games.clone(),
            ),
            current_set: snapshot.current_set,
            tiebreak: SuperTiebreak::from_parts(
                snapshot.is_super_tiebreak,
                snapshot.team1_super_tb_points,
                snapshot.team2_super_tb_points,
            ),
            is_finished: snapshot.is_finished,
            winner: snapshot.winner,
            anomaly: snapshot.anomaly,
            revision: snapshot.revision,
        };
        engine.check_reachable().map_err(Error::InvalidSnapshot)?;
        Ok(engine)
    }

    /// Whether play could have produced this state.
    ///
    /// An unresolved tie is never reachable: it needs a set that closed
    /// without a winner.
    fn check_reachable(&self) -> std::result::Result<(), String> {
        let format = self.format;
        let games_to_win = format.games_to_win_set();

        if self.current_set == 0 || self.current_set > format.max_sets() {
            return Err(format!(
                "current set {} out of range for {}",
                self.current_set, format
            ));
        }
        if self.ledger.sets_recorded() > self.current_set as usize {
            return Err(format!(
                "{} sets recorded while set {} is being played",
                self.ledger.sets_recorded(),
                self.current_set
            ));
        }
        if self.anomaly.is_some() {
            return Err("an unresolved tie cannot follow from decided sets".to_string());
        }
        if self.is_finished != self.winner.is_some() {
            return Err("winner must be set exactly when the match is finished".to_string());
        }

        let game_closed = self.is_finished || self.tiebreak.is_active();
        if game_closed && (self.points.points(Team::One) > 0 || self.points.points(Team::Two) > 0) {
            return Err("game points left over after the last game".to_string());
        }

        // Every set up to the one in play must be decided; the one in play must not be
        let last_closed = if game_closed {
            self.current_set
        } else {
            self.current_set - 1
        };
        for set in 1..=self.current_set {
            let team1 = self.ledger.games_for_set(set, Team::One);
            let team2 = self.ledger.games_for_set(set, Team::Two);
            let decided = set_winner(format, team1, team2).is_some();
            if set <= last_closed {
                if !decided || team1.max(team2) > games_to_win + 1 {
                    return Err(format!("set {} at {}-{} is not a finished set", set, team1, team2));
                }
            } else if decided || team1.max(team2) > games_to_win {
                return Err(format!("set {} at {}-{} is not a set in progress", set, team1, team2));
            }
        }

        if self.tiebreak.is_active() {
            if !format.has_super_tiebreak() {
                return Err(format!("{} has no super tie-break", format));
            }
            let level = self.ledger.count_sets_won(format, Team::One) == 1
                && self.ledger.count_sets_won(format, Team::Two) == 1;
            if self.current_set != 2 || !level {
                return Err("super tie-break needs sets level at 1 - 1 after set 2".to_string());
            }
        } else if self.tiebreak.points(Team::One) > 0 || self.tiebreak.points(Team::Two) > 0 {
            return Err("super tie-break points without a super tie-break".to_string());
        }

        let target = format.sets_to_win();
        let team1 = self.count_sets_won(Team::One);
        let team2 = self.count_sets_won(Team::Two);
        match self.winner {
            Some(team) => {
                if self.count_sets_won(team) != target
                    || self.count_sets_won(team.opponent()) >= target
                {
                    return Err(format!("{} cannot have won at {}-{} in sets", team, team1, team2));
                }
            }
            None => {
                if team1 >= target || team2 >= target {
                    return Err(format!(
                        "match decided at {}-{} in sets but not finished",
                        team1, team2
                    ));
                }
            }
        }

        Ok(())
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Record a point won by `team`
    pub fn score_point(&mut self, team: Team) -> ScoreEvent {
        if !self.accepts_points() {
            debug!(%team, "point ignored, match closed");
            return ScoreEvent::Ignored;
        }
        self.revision += 1;

        if self.tiebreak.is_active() {
            return match self.tiebreak.score(team) {
                PointOutcome::Won(winner) => self.finish(winner),
                _ => ScoreEvent::Point { team },
            };
        }

        match self.points.score(team) {
            PointOutcome::Won(winner) => self.win_game(winner),
            _ => ScoreEvent::Point { team },
        }
    }

    /// Take back a point from `team`.
    ///
    /// Only the game (or tie-break) in progress is affected; games and sets
    /// already recorded stay recorded.
    pub fn subtract_point(&mut self, team: Team) -> ScoreEvent {
        if !self.accepts_points() {
            debug!(%team, "correction ignored, match closed");
            return ScoreEvent::Ignored;
        }

        let outcome = if self.tiebreak.is_active() {
            self.tiebreak.subtract(team)
        } else {
            self.points.subtract(team)
        };

        match outcome {
            PointOutcome::Unchanged => ScoreEvent::Ignored,
            PointOutcome::Counted => {
                self.revision += 1;
                ScoreEvent::Corrected { team }
            }
            PointOutcome::Won(winner) => {
                self.revision += 1;
                if self.tiebreak.is_active() {
                    self.finish(winner)
                } else {
                    self.win_game(winner)
                }
            }
        }
    }

    /// Clear the game (or tie-break) in progress, keeping games and sets
    pub fn reset_game(&mut self) -> ScoreEvent {
        if !self.accepts_points() {
            return ScoreEvent::Ignored;
        }
        self.revision += 1;

        if self.tiebreak.is_active() {
            self.tiebreak.reset_points();
        } else {
            self.points.reset();
        }
        ScoreEvent::Reset
    }

    /// Start over under the current format
    pub fn reset_match(&mut self) -> ScoreEvent {
        let revision = self.revision + 1;
        *self = Self {
            revision,
            ..Self::new(self.format)
        };
        debug!(format = %self.format, "match reset");
        ScoreEvent::Reset
    }

    /// Switch format. Always restarts the match.
    pub fn set_match_format(&mut self, format: MatchFormat) -> ScoreEvent {
        self.format = format;
        self.reset_match()
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    fn accepts_points(&self) -> bool {
        !self.is_finished && self.anomaly.is_none()
    }

    fn win_game(&mut self, team: Team) -> ScoreEvent {
        let set = self.current_set;
        self.ledger.record_game(team, set);
        debug!(
            %team,
            set,
            score = %self.current_set_score(),
            "game won"
        );

        match self.ledger.set_winner(self.format, set) {
            Some(winner) => self.win_set(winner),
            None => ScoreEvent::GameWon { team, set },
        }
    }

    fn win_set(&mut self, team: Team) -> ScoreEvent {
        let set = self.current_set;
        let won = self.ledger.count_sets_won(self.format, team);
        let conceded = self.ledger.count_sets_won(self.format, team.opponent());
        debug!(%team, set, won, conceded, "set won");

        if won >= self.format.sets_to_win() {
            return self.finish(team);
        }

        // The tie-break stands in for set 3, so `current_set` stays at 2
        if self.format.has_super_tiebreak() && set == 2 && won == 1 && conceded == 1 {
            self.tiebreak.activate();
            info!("sets level at 1 - 1, super tie-break");
            return ScoreEvent::SuperTiebreakStarted;
        }

        self.current_set += 1;
        if self.current_set > self.format.max_sets() {
            return self.resolve_after_all_sets();
        }

        ScoreEvent::SetWon {
            team,
            next_set: self.current_set,
        }
    }

    fn resolve_after_all_sets(&mut self) -> ScoreEvent {
        let team1 = self.count_sets_won(Team::One);
        let team2 = self.count_sets_won(Team::Two);

        match team1.cmp(&team2) {
            std::cmp::Ordering::Greater => self.finish(Team::One),
            std::cmp::Ordering::Less => self.finish(Team::Two),
            std::cmp::Ordering::Equal => {
                warn!(
                    sets_each = team1,
                    format = %self.format,
                    "all sets played with sets level, match left unresolved"
                );
                self.anomaly = Some(MatchAnomaly::UnresolvedTie { sets_each: team1 });
                ScoreEvent::Unresolved
            }
        }
    }

    fn finish(&mut self, team: Team) -> ScoreEvent {
        self.is_finished = true;
        self.winner = Some(team);
        info!(%team, sets = %self.match_score(), "match won");
        ScoreEvent::MatchWon { team }
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    #[inline]
    pub fn format(&self) -> MatchFormat {
        self.format
    }

    #[inline]
    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    /// Raw points in the current (non tie-break) game
    #[inline]
    pub fn points(&self, team: Team) -> u32 {
        self.points.points(team)
    }

    #[inline]
    pub fn is_deuce(&self) -> bool {
        self.points.is_deuce()
    }

    #[inline]
    pub fn advantage(&self) -> Option<Team> {
        self.points.advantage()
    }

    #[inline]
    pub fn is_super_tiebreak(&self) -> bool {
        self.tiebreak.is_active()
    }

    #[inline]
    pub fn super_tiebreak_points(&self, team: Team) -> u32 {
        self.tiebreak.points(team)
    }

    #[inline]
    pub fn is_match_finished(&self) -> bool {
        self.is_finished
    }

    #[inline]
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    #[inline]
    pub fn anomaly(&self) -> Option<MatchAnomaly> {
        self.anomaly
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Scoreboard text for the game in progress.
    ///
    /// During a super tie-break this is the raw tie-break count.
    pub fn display_game_score(&self, team: Team) -> String {
        if self.tiebreak.is_active() {
            self.tiebreak.points(team).to_string()
        } else {
            self.points.display(team).to_string()
        }
    }

    /// Games for a team in a 1-based set, zero if never played
    pub fn games_for_set(&self, set: u32, team: Team) -> u32 {
        self.ledger.games_for_set(set, team)
    }

    /// Sets won, recomputed from the recorded tallies.
    ///
    /// A decided super tie-break counts as the deciding set.
    pub fn count_sets_won(&self, team: Team) -> u32 {
        let sets = self.ledger.count_sets_won(self.format, team);
        let tiebreak = u32::from(self.tiebreak.winner() == Some(team));
        sets + tiebreak
    }

    /// "g1 - g2" for the set being played, or the tie-break points
    pub fn current_set_score(&self) -> String {
        if self.tiebreak.is_active() {
            return self.tiebreak.score_line();
        }
        format!(
            "{} - {}",
            self.games_for_set(self.current_set, Team::One),
            self.games_for_set(self.current_set, Team::Two)
        )
    }

    /// "s1 - s2"
    pub fn match_score(&self) -> String {
        format!(
            "{} - {}",
            self.count_sets_won(Team::One),
            self.count_sets_won(Team::Two)
        )
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Fixed-size SSZ record of the scoring state
    pub fn record(&self) -> ScoreRecord {
        let mut team1_set_games = [0u32; MAX_SETS];
        let mut team2_set_games = [0u32; MAX_SETS];
        for (slot, games) in team1_set_games.iter_mut().zip(self.ledger.games(Team::One)) {
            *slot = *games;
        }
        for (slot, games) in team2_set_games.iter_mut().zip(self.ledger.games(Team::Two)) {
            *slot = *games;
        }

        ScoreRecord {
            format_raw: self.format.to_u8(),
            team1_points: self.points.points(Team::One),
            team2_points: self.points.points(Team::Two),
            is_deuce: self.points.is_deuce(),
            advantage_raw: ScoreRecord::team_raw(self.points.advantage()),
            sets_recorded: self.ledger.sets_recorded().min(MAX_SETS) as u8,
            team1_set_games,
            team2_set_games,
            current_set: self.current_set,
            is_super_tiebreak: self.tiebreak.is_active(),
            team1_super_tb_points: self.tiebreak.points(Team::One),
            team2_super_tb_points: self.tiebreak.points(Team::Two),
            is_finished: self.is_finished,
            winner_raw: ScoreRecord::team_raw(self.winner),
            anomaly_raw: self.anomaly.map(MatchAnomaly::to_u8).unwrap_or(0),
        }
    }

    /// SHA-256 over the SSZ record
    pub fn state_root(&self) -> Result<[u8; 32]> {
        self.record().state_root()
    }

    /// Everything a remote display needs, with `info` passed through
    pub fn snapshot(&self, info: &MatchInfo) -> Result<MatchSnapshot> {
        Ok(MatchSnapshot {
            revision: self.revision,
            format: self.format,
            team1_points: self.points.points(Team::One),
            team2_points: self.points.points(Team::Two),
            is_deuce: self.points.is_deuce(),
            advantage_team: self.points.advantage(),
            team1_set_games: self.ledger.games(Team::One).to_vec(),
            team2_set_games: self.ledger.games(Team::Two).to_vec(),
            current_set: self.current_set,
            is_super_tiebreak: self.tiebreak.is_active(),
            team1_super_tb_points: self.tiebreak.points(Team::One),
            team2_super_tb_points: self.tiebreak.points(Team::Two),
            is_finished: self.is_finished,
            winner: self.winner,
            anomaly: self.anomaly,
            team1_display: self.display_game_score(Team::One),
            team2_display: self.display_game_score(Team::Two),
            current_set_score: self.current_set_score(),
            match_score: self.match_score(),
            team1_sets_won: self.count_sets_won(Team::One),
            team2_sets_won: self.count_sets_won(Team::Two),
            info: info.clone(),
            state_root: self.record().state_root_hex()?,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
