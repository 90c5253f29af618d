use std::time::Duration;

use log::{debug, info, warn};

use crate::board::inventory::Inventory;
use crate::board::piece::Size;
use crate::board::player::Player;
use crate::board::{Board, Position};
use crate::evaluate::GameEnding;
use crate::move_generator::Move;
use crate::stack_search::DEFAULT_SEARCH_DEPTH;

use super::engine::{EngineConfig, SearchStats};
use super::error::ControllerError;
use super::mode::Mode;
use super::state::GameState;
use super::task::{SearchTask, TaskPoll, TaskResult, TaskRole};

/// Controller settings. Everything here is read by the controller, none of
/// it is part of the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    pub mode: Mode,
    pub auto_suggest: bool,
    pub search_depth: u8,
    /// Pause before the engine side moves.
    pub ai_delay: Option<Duration>,
    /// Pause before a suggestion is computed.
    pub suggestion_delay: Option<Duration>,
    pub parallel: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Companion,
            auto_suggest: false,
            search_depth: DEFAULT_SEARCH_DEPTH,
            ai_delay: Some(Duration::from_millis(800)),
            suggestion_delay: Some(Duration::from_millis(300)),
            parallel: false,
        }
    }
}

impl ControllerConfig {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            search_depth: self.search_depth,
            parallel: self.parallel,
        }
    }

    fn delay_for(&self, role: TaskRole) -> Option<Duration> {
        match role {
            TaskRole::AiMove => self.ai_delay,
            TaskRole::Suggestion => self.suggestion_delay,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No game has been started, or the last one was reset.
    Idle,
    Playing,
    GameOver,
}

/// A piece chosen ahead of the cell it goes on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingSelection {
    pub player: Player,
    pub size: Size,
}

/// Advice for the self side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub best_move: Move,
    pub score: i16,
    pub immediate_win: bool,
}

/// Owns the live game and drives it.
///
/// Every mutation of the game bumps `generation`. Searches run in the
/// background and are tagged with the generation they were started for;
/// `poll` and `wait_for_tasks` only let a result through if the game has not
/// changed since.
pub struct GameController {
    config: ControllerConfig,
    state: Option<GameState>,
    generation: u64,
    pending: Option<PendingSelection>,
    suggestion: Option<Suggestion>,
    last_engine_move: Option<Move>,
    last_search: Option<SearchStats>,
    ai_task: Option<SearchTask>,
    suggestion_task: Option<SearchTask>,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl GameController {
    /// A search depth below 1 is raised to 1.
    pub fn new(mut config: ControllerConfig) -> Self {
        if config.search_depth < 1 {
            warn!("search depth {} raised to 1", config.search_depth);
            config.search_depth = 1;
        }
        Self {
            config,
            state: None,
            generation: 0,
            pending: None,
            suggestion: None,
            last_engine_move: None,
            last_search: None,
            ai_task: None,
            suggestion_task: None,
        }
    }

    // Commands

    /// Starts a fresh game with full inventories. Any game in progress is
    /// abandoned along with its searches.
    pub fn start_game(&mut self, first: Player) {
        self.start_from_position(Position::new(first));
    }

    /// Starts a game from an arbitrary position.
    pub fn start_from_position(&mut self, position: Position) {
        info!(
            "new {} game, {} to move",
            self.config.mode,
            position.turn()
        );
        self.state = Some(GameState::from_position(position));
        self.pending = None;
        self.last_engine_move = None;
        self.state_changed();
    }

    /// Records the piece the next `attempt_move` will place. Nothing is
    /// validated until then.
    pub fn select_pending_piece(&mut self, player: Player, size: Size) {
        self.pending = Some(PendingSelection { player, size });
    }

    /// Places the pending piece on `cell`.
    pub fn attempt_move(&mut self, cell: usize) -> Result<Move, ControllerError> {
        let selection = self.pending.ok_or_else(|| ControllerError::InvalidMove {
            reason: "no piece selected".to_string(),
        })?;
        self.attempt_move_with(selection, cell)
    }

    /// Places `selection` on `cell` on behalf of a human.
    pub fn attempt_move_with(
        &mut self,
        selection: PendingSelection,
        cell: usize,
    ) -> Result<Move, ControllerError> {
        if self.config.mode == Mode::Training && selection.player == Player::Opponent {
            warn!("rejected a manual move for the engine side");
            return Err(ControllerError::IllegalState {
                reason: "the opponent is played by the engine",
            });
        }

        let mv = Move::new(cell, selection.size);
        self.apply_move(mv, selection.player)?;
        self.pending = None;
        Ok(mv)
    }

    /// Validates and applies `mv` for `player`. A rejected move leaves the
    /// game untouched.
    pub fn apply_move(&mut self, mv: Move, player: Player) -> Result<(), ControllerError> {
        let state = self.state.as_mut().ok_or(ControllerError::IllegalState {
            reason: "no game in progress",
        })?;

        if let Err(error) = state.apply_move(mv, player) {
            warn!("rejected {} for {}: {}", mv, player, error);
            return Err(error);
        }

        info!("{} played {}", player, mv);
        self.state_changed();
        Ok(())
    }

    /// Starts computing a suggestion for the self side. The result shows up
    /// in `suggestion` once `poll` or `wait_for_tasks` picks it up.
    pub fn request_suggestion(&mut self) -> Result<(), ControllerError> {
        let state = self.state.as_ref().ok_or(ControllerError::IllegalState {
            reason: "no game in progress",
        })?;
        if state.is_over() {
            return Err(ControllerError::IllegalState {
                reason: "the game is over",
            });
        }
        if state.turn() != Player::Me {
            return Err(ControllerError::IllegalState {
                reason: "suggestions are only given on your turn",
            });
        }

        self.spawn_task(TaskRole::Suggestion);
        Ok(())
    }

    /// Computes a suggestion and waits for it.
    pub fn suggest_now(&mut self) -> Result<Option<Suggestion>, ControllerError> {
        self.request_suggestion()?;
        self.wait_for_tasks();
        Ok(self.suggestion)
    }

    pub fn set_auto_suggest(&mut self, enabled: bool) {
        if self.config.auto_suggest == enabled {
            return;
        }
        info!("auto-suggest {}", if enabled { "on" } else { "off" });
        self.config.auto_suggest = enabled;

        if enabled {
            self.advance();
        } else {
            self.suggestion_task = None;
        }
    }

    /// Abandons the current game and returns to idle.
    pub fn reset_game(&mut self) {
        info!("game reset");
        self.state = None;
        self.pending = None;
        self.last_engine_move = None;
        self.state_changed();
    }

    /// Collects finished searches without blocking. Returns true if the game
    /// or the suggestion changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for role in [TaskRole::AiMove, TaskRole::Suggestion] {
            let status = match self.task_slot(role).as_ref() {
                Some(task) => task.try_result(),
                None => continue,
            };
            changed |= self.handle_poll(role, status);
        }
        changed
    }

    /// Blocks until no search is outstanding. Results that start new
    /// searches, such as an engine move followed by an auto-suggestion, are
    /// followed through.
    pub fn wait_for_tasks(&mut self) {
        while let Some(role) = self.outstanding_role() {
            let status = match self.task_slot(role).as_ref() {
                Some(task) => task.wait(),
                None => continue,
            };
            self.handle_poll(role, status);
        }
    }

    // Queries

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn auto_suggest(&self) -> bool {
        self.config.auto_suggest
    }

    pub fn phase(&self) -> Phase {
        match &self.state {
            None => Phase::Idle,
            Some(state) if state.is_over() => Phase::GameOver,
            Some(_) => Phase::Playing,
        }
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn board(&self) -> Option<&Board> {
        self.state.as_ref().map(GameState::board)
    }

    pub fn inventory(&self, player: Player) -> Option<&Inventory> {
        self.state.as_ref().map(|state| state.inventory(player))
    }

    pub fn turn(&self) -> Option<Player> {
        self.state.as_ref().map(GameState::turn)
    }

    pub fn winner(&self) -> Option<GameEnding> {
        self.state.as_ref().and_then(GameState::winner)
    }

    pub fn suggestion(&self) -> Option<Suggestion> {
        self.suggestion
    }

    pub fn pending_selection(&self) -> Option<PendingSelection> {
        self.pending
    }

    pub fn last_engine_move(&self) -> Option<Move> {
        self.last_engine_move
    }

    pub fn last_search_stats(&self) -> Option<SearchStats> {
        self.last_search
    }

    /// True while a search is outstanding.
    pub fn is_computing(&self) -> bool {
        self.ai_task.is_some() || self.suggestion_task.is_some()
    }

    /// Changes whenever the game changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // Internals

    fn state_changed(&mut self) {
        self.generation += 1;
        self.suggestion = None;
        self.ai_task = None;
        self.suggestion_task = None;
        self.advance();
    }

    /// Decides what happens next: game over, draw, an engine move or an
    /// automatic suggestion.
    fn advance(&mut self) {
        let state = match self.state.as_mut() {
            Some(state) => state,
            None => return,
        };

        state.check_for_draw();
        if let Some(ending) = state.winner() {
            debug!("game over: {:?}", ending);
            return;
        }

        let turn = state.turn();
        match self.config.mode {
            Mode::Training if turn == Player::Opponent => {
                if self.ai_task.is_none() {
                    self.spawn_task(TaskRole::AiMove);
                }
            }
            Mode::Companion if turn == Player::Me && self.config.auto_suggest => {
                if self.suggestion_task.is_none() && self.suggestion.is_none() {
                    self.spawn_task(TaskRole::Suggestion);
                }
            }
            _ => {}
        }
    }

    fn spawn_task(&mut self, role: TaskRole) {
        let position = match &self.state {
            Some(state) => state.position().clone(),
            None => return,
        };

        // Replacing the handle cancels the previous search for this role.
        *self.task_slot(role) = None;
        if role == TaskRole::Suggestion {
            self.suggestion = None;
        }

        match SearchTask::spawn(
            role,
            self.generation,
            position,
            self.config.engine_config(),
            self.config.delay_for(role),
        ) {
            Ok(task) => {
                debug!("started {} search for generation {}", role, self.generation);
                *self.task_slot(role) = Some(task);
            }
            Err(error) => warn!("could not start {} search: {}", role, error),
        }
    }

    fn task_slot(&mut self, role: TaskRole) -> &mut Option<SearchTask> {
        match role {
            TaskRole::AiMove => &mut self.ai_task,
            TaskRole::Suggestion => &mut self.suggestion_task,
        }
    }

    fn outstanding_role(&self) -> Option<TaskRole> {
        if self.ai_task.is_some() {
            Some(TaskRole::AiMove)
        } else if self.suggestion_task.is_some() {
            Some(TaskRole::Suggestion)
        } else {
            None
        }
    }

    fn handle_poll(&mut self, role: TaskRole, status: TaskPoll) -> bool {
        match status {
            TaskPoll::Pending => false,
            TaskPoll::Lost => {
                *self.task_slot(role) = None;
                false
            }
            TaskPoll::Finished(result) => {
                *self.task_slot(role) = None;
                match self.apply_task_result(result) {
                    Ok(applied) => applied,
                    Err(error) => {
                        debug!("{} result dropped: {}", role, error);
                        false
                    }
                }
            }
        }
    }

    /// Returns whether the result changed anything. A failed search leaves
    /// the game as it was.
    fn apply_task_result(&mut self, result: TaskResult) -> Result<bool, ControllerError> {
        if result.generation != self.generation || self.phase() != Phase::Playing {
            return Err(ControllerError::StaleAsyncResult);
        }

        let outcome = match result.outcome {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!("{} search failed: {}", result.role, error);
                return Ok(false);
            }
        };
        self.last_search = Some(result.stats);

        match result.role {
            TaskRole::AiMove => {
                self.apply_move(outcome.best_move, Player::Opponent)?;
                self.last_engine_move = Some(outcome.best_move);
                Ok(true)
            }
            TaskRole::Suggestion => {
                debug!(
                    "suggesting {} (score {}, immediate win: {})",
                    outcome.best_move, outcome.score, outcome.immediate_win
                );
                self.suggestion = Some(Suggestion {
                    best_move: outcome.best_move,
                    score: outcome.score,
                    immediate_win: outcome.immediate_win,
                });
                Ok(true)
            }
        }
    }
}
