//! Background searches.
//!
//! A search runs on its own thread and reports over a channel. Every result
//! carries the controller generation it was started for so the receiver can
//! drop results that no longer describe the live game.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::alpha_beta_searcher::SearchError;
use crate::board::Position;
use crate::stack_search::SearchOutcome;

use super::engine::{Engine, EngineConfig, SearchStats};

const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// What a background search is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskRole {
    /// Choose and play the engine side's move.
    AiMove,
    /// Advise the self side.
    Suggestion,
}

impl fmt::Display for TaskRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskRole::AiMove => write!(f, "ai move"),
            TaskRole::Suggestion => write!(f, "suggestion"),
        }
    }
}

#[derive(Debug)]
pub struct TaskResult {
    pub role: TaskRole,
    pub generation: u64,
    pub outcome: Result<SearchOutcome, SearchError>,
    pub stats: SearchStats,
}

pub enum TaskPoll {
    Pending,
    Finished(TaskResult),
    /// The worker went away without reporting.
    Lost,
}

/// Handle to a running search. Dropping the handle cancels the search.
pub struct SearchTask {
    role: TaskRole,
    generation: u64,
    cancelled: Arc<AtomicBool>,
    receiver: Receiver<TaskResult>,
}

impl SearchTask {
    /// Starts searching `position` after waiting `delay`. The delay only
    /// paces the interaction and is cut short by cancellation.
    pub fn spawn(
        role: TaskRole,
        generation: u64,
        position: Position,
        config: EngineConfig,
        delay: Option<Duration>,
    ) -> std::io::Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        thread::Builder::new()
            .name(format!("search-{}-{}", role, generation))
            .spawn(move || {
                if let Some(delay) = delay {
                    if !sleep_unless_cancelled(delay, &flag) {
                        debug!("{} search for generation {} cancelled", role, generation);
                        return;
                    }
                }

                let mut engine = Engine::with_config(config);
                let outcome = engine.best_move(&position);
                if flag.load(Ordering::SeqCst) {
                    debug!("{} search for generation {} cancelled", role, generation);
                    return;
                }

                let result = TaskResult {
                    role,
                    generation,
                    outcome,
                    stats: engine.get_search_stats(),
                };
                if sender.send(result).is_err() {
                    debug!("{} search for generation {} has no receiver", role, generation);
                }
            })?;

        Ok(Self {
            role,
            generation,
            cancelled,
            receiver,
        })
    }

    pub fn role(&self) -> TaskRole {
        self.role
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn try_result(&self) -> TaskPoll {
        match self.receiver.try_recv() {
            Ok(result) => TaskPoll::Finished(result),
            Err(TryRecvError::Empty) => TaskPoll::Pending,
            Err(TryRecvError::Disconnected) => TaskPoll::Lost,
        }
    }

    /// Blocks until the search reports.
    pub fn wait(&self) -> TaskPoll {
        match self.receiver.recv() {
            Ok(result) => TaskPoll::Finished(result),
            Err(_) => {
                warn!("{} search for generation {} was lost", self.role, self.generation);
                TaskPoll::Lost
            }
        }
    }
}

impl Drop for SearchTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Returns false if cancelled before `delay` elapsed.
fn sleep_unless_cancelled(delay: Duration, cancelled: &AtomicBool) -> bool {
    let deadline = Instant::now() + delay;
    loop {
        if cancelled.load(Ordering::SeqCst) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep(CANCEL_POLL_INTERVAL.min(deadline - now));
    }
}
