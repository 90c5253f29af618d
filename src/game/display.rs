use crate::board::piece::{Piece, SIZES_DESCENDING};
use crate::board::player::Player;
use crate::evaluate::GameEnding;

use super::controller::{GameController, Phase};

/// Text rendering of the controller's observable state.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
        }
    }

    pub fn render(&mut self, controller: &GameController) {
        self.render_frame(controller);
        print!("{}", self.buffer);
    }

    /// Builds the frame without printing it.
    pub fn render_frame(&mut self, controller: &GameController) -> &str {
        self.buffer.clear();

        let state = match controller.state() {
            Some(state) => state,
            None => {
                self.buffer
                    .push_str("No game in progress. Type 'new [me|opponent|random]' to start.\n");
                return &self.buffer;
            }
        };

        self.buffer.push_str(&state.board().to_ascii());
        self.buffer.push('\n');

        for player in Player::ALL {
            let inventory = state.inventory(player);
            let counts: Vec<String> = SIZES_DESCENDING
                .iter()
                .map(|&size| {
                    let letter = Piece::new(player, size).to_char();
                    format!("{}x{}", letter, inventory.count(size))
                })
                .collect();
            self.buffer
                .push_str(&format!("{}: {}\n", player, counts.join(" ")));
        }

        if let Some(mv) = controller.last_engine_move() {
            self.buffer.push_str(&format!("Engine played: {}\n", mv));
        }

        match (controller.phase(), state.winner()) {
            (Phase::GameOver, Some(GameEnding::Win(Player::Me))) => {
                self.buffer.push_str("You win!\n")
            }
            (Phase::GameOver, Some(GameEnding::Win(Player::Opponent))) => {
                self.buffer.push_str("Opponent wins!\n")
            }
            (Phase::GameOver, _) => self.buffer.push_str("Draw!\n"),
            _ => self
                .buffer
                .push_str(&format!("Turn: {}\n", state.turn())),
        }

        if let Some(suggestion) = controller.suggestion() {
            let note = if suggestion.immediate_win {
                " (wins now)"
            } else {
                ""
            };
            self.buffer.push_str(&format!(
                "Suggestion: {}{} score {}\n",
                suggestion.best_move, note, suggestion.score
            ));
        }

        if let Some(stats) = controller.last_search_stats() {
            self.buffer.push_str(&format!(
                "* Positions searched: {} (depth: {}, cutoffs: {})\n* Search took: {}\n",
                stats.positions_searched,
                stats.depth,
                stats.cutoffs,
                stats
                    .last_search_duration
                    .map_or("-".to_string(), |d| format!("{:?}", d))
            ));
        }

        if controller.is_computing() {
            self.buffer.push_str("thinking...\n");
        }

        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::controller::ControllerConfig;
    use crate::game::mode::Mode;

    #[test]
    fn test_idle_frame() {
        let controller = GameController::default();
        let mut display = GameDisplay::new();
        assert!(display
            .render_frame(&controller)
            .starts_with("No game in progress"));
    }

    #[test]
    fn test_frame_shows_inventories_and_turn() {
        let mut controller = GameController::new(ControllerConfig {
            mode: Mode::Companion,
            ..ControllerConfig::default()
        });
        controller.start_game(Player::Me);

        let mut display = GameDisplay::new();
        let frame = display.render_frame(&controller);
        assert!(frame.contains("me: Lx2 Mx3 Sx3"));
        assert!(frame.contains("opponent: lx2 mx3 sx3"));
        assert!(frame.contains("Turn: me"));
        assert!(!frame.contains("thinking"));
    }
}
