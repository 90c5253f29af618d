use log::warn;

use crate::board::player::Player;
use crate::input_handler::{parse_command_input, CommandInput};

use super::controller::{ControllerConfig, GameController, Phase};
use super::display::GameDisplay;

/// Interactive text session over stdin.
pub struct GameLoop {
    controller: GameController,
    ui: GameDisplay,
    first: Player,
}

impl GameLoop {
    pub fn new(config: ControllerConfig, first: Player) -> Self {
        Self {
            controller: GameController::new(config),
            ui: GameDisplay::new(),
            first,
        }
    }

    pub fn run(&mut self) {
        self.controller.start_game(self.first);

        loop {
            self.ui.render(&self.controller);
            if self.controller.is_computing() {
                self.controller.wait_for_tasks();
                continue;
            }

            match self.controller.phase() {
                Phase::Idle => println!("Enter 'new' to start or 'q' to quit:"),
                Phase::GameOver => println!("Enter 'new' to play again or 'q' to quit:"),
                Phase::Playing => println!(
                    "Enter a move for {} (e.g. L4), 'suggest', 'auto on|off', 'reset' or 'q':",
                    self.current_player()
                ),
            }

            match parse_command_input() {
                Ok(CommandInput::Quit) => break,
                Ok(command) => self.handle(command),
                Err(error) => println!("error: {}", error),
            }
        }
    }

    fn current_player(&self) -> Player {
        self.controller.turn().unwrap_or(self.first)
    }

    fn handle(&mut self, command: CommandInput) {
        let result = match command {
            CommandInput::Place { size, cell } => {
                self.controller
                    .select_pending_piece(self.current_player(), size);
                self.controller.attempt_move(cell).map(|_| ())
            }
            CommandInput::Select { size } => {
                self.controller
                    .select_pending_piece(self.current_player(), size);
                Ok(())
            }
            CommandInput::Cell { cell } => self.controller.attempt_move(cell).map(|_| ()),
            CommandInput::Suggest => self.controller.request_suggestion(),
            CommandInput::AutoSuggest { enabled } => {
                self.controller.set_auto_suggest(enabled);
                Ok(())
            }
            CommandInput::NewGame { first } => {
                if let Some(first) = first {
                    self.first = first;
                }
                self.controller.start_game(self.first);
                Ok(())
            }
            CommandInput::Reset => {
                self.controller.reset_game();
                Ok(())
            }
            CommandInput::Quit => Ok(()),
        };

        if let Err(error) = result {
            warn!("{}", error);
            println!("error: {}", error);
        }
    }
}
