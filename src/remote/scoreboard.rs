//! Single owner of a match and its subscribers.
//!
//! Local taps and remote messages both go through [`Scoreboard`], which
//! applies them to the engine one at a time and pushes a fresh snapshot to
//! every subscriber after each applied mutation. Sharing a scoreboard
//! across threads is the caller's job (wrap it in a `Mutex` or feed it from
//! one queue).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::engine::{MatchEngine, ScoreEvent};
use crate::error::Result;
use crate::remote::RemoteCommand;
use crate::types::{MatchInfo, MatchSetup, MatchSnapshot, Team};

/// Receives the match state after every change.
pub trait StateSubscriber {
    fn publish_state(&mut self, snapshot: &MatchSnapshot);
}

impl<F> StateSubscriber for F
where
    F: FnMut(&MatchSnapshot),
{
    fn publish_state(&mut self, snapshot: &MatchSnapshot) {
        self(snapshot)
    }
}

/// Subscriber that buffers the snapshots it receives.
///
/// [`SnapshotLog::new`] keeps everything and is meant for tests and short
/// sessions. [`SnapshotLog::bounded`] keeps only the most recent `limit`
/// snapshots, dropping the oldest first. Clones share the same buffer, so
/// one clone can be handed to the scoreboard while another is read.
#[derive(Debug, Clone, Default)]
pub struct SnapshotLog {
    entries: Arc<Mutex<VecDeque<MatchSnapshot>>>,
    limit: Option<usize>,
}

impl SnapshotLog {
    /// Unbounded log
    pub fn new() -> Self {
        Self::default()
    }

    /// Log holding at most `limit` snapshots (at least one)
    pub fn bounded(limit: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(limit.max(1)))),
            limit: Some(limit.max(1)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<MatchSnapshot>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Buffered snapshots, oldest first
    pub fn snapshots(&self) -> Vec<MatchSnapshot> {
        self.lock().iter().cloned().collect()
    }

    /// Most recent snapshot
    pub fn latest(&self) -> Option<MatchSnapshot> {
        self.lock().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StateSubscriber for SnapshotLog {
    fn publish_state(&mut self, snapshot: &MatchSnapshot) {
        let mut entries = self.lock();
        if let Some(limit) = self.limit {
            while entries.len() >= limit {
                entries.pop_front();
            }
        }
        entries.push_back(snapshot.clone());
    }
}

/// A match, its metadata, and the displays watching it.
pub struct Scoreboard {
    engine: MatchEngine,
    info: MatchInfo,
    subscribers: Vec<Box<dyn StateSubscriber + Send>>,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(MatchSetup::default())
    }
}

impl Scoreboard {
    pub fn new(setup: MatchSetup) -> Self {
        Self {
            engine: MatchEngine::new(setup.format),
            info: setup.info,
            subscribers: Vec::new(),
        }
    }

    /// Attach a display or transport
    pub fn subscribe<S>(&mut self, subscriber: S)
    where
        S: StateSubscriber + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Read-only view of the engine
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn info(&self) -> &MatchInfo {
        &self.info
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Result<MatchSnapshot> {
        self.engine.snapshot(&self.info)
    }

    /// A remote control reported that `team` won the point
    pub fn on_remote_score_request(&mut self, team: Team) -> ScoreEvent {
        self.apply(RemoteCommand::ScorePoint { team })
    }

    /// Apply one command and notify subscribers if anything changed.
    ///
    /// `RequestState` changes nothing but always publishes.
    pub fn apply(&mut self, command: RemoteCommand) -> ScoreEvent {
        let event = match command {
            RemoteCommand::ScorePoint { team } => self.engine.score_point(team),
            RemoteCommand::RemovePoint { team } => self.engine.subtract_point(team),
            RemoteCommand::ResetGame => self.engine.reset_game(),
            RemoteCommand::ResetMatch => self.engine.reset_match(),
            RemoteCommand::SetFormat { format } => self.engine.set_match_format(format),
            RemoteCommand::RequestState => {
                self.publish();
                return ScoreEvent::Ignored;
            }
        };

        debug!(?command, ?event, "command applied");
        if event.is_applied() {
            self.publish();
        }
        event
    }

    /// Decode and apply a JSON command
    pub fn handle_message(&mut self, json: &str) -> Result<ScoreEvent> {
        let command = RemoteCommand::from_json(json)?;
        Ok(self.apply(command))
    }

    /// Change the names shown for both teams
    pub fn rename_teams(&mut self, team1: impl Into<String>, team2: impl Into<String>) {
        self.info.team1_name = team1.into();
        self.info.team2_name = team2.into();
        self.publish();
    }

    /// Replace all passthrough metadata
    pub fn set_info(&mut self, info: MatchInfo) {
        self.info = info;
        self.publish();
    }

    fn publish(&mut self) {
        let snapshot = match self.engine.snapshot(&self.info) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Failed to build snapshot: {}", e);
                return;
            }
        };
        for subscriber in self.subscribers.iter_mut() {
            subscriber.publish_state(&snapshot);
        }
    }
}

impl std::fmt::Debug for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scoreboard")
            .field("engine", &self.engine)
            .field("info", &self.info)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
