//! Suggest command - print the best move for the side to move.

use stacktoe::board::Position;
use stacktoe::game::{Engine, EngineConfig};
use stacktoe::input_handler::EMPTY_POSITION_NOTATION;
use structopt::StructOpt;

use super::util::parse_depth;
use super::Command;

#[derive(StructOpt)]
pub struct SuggestArgs {
    #[structopt(short, long, default_value = "4", parse(try_from_str = parse_depth))]
    pub depth: u8,
    #[structopt(short, long, default_value = EMPTY_POSITION_NOTATION)]
    pub position: Position,
    #[structopt(long)]
    pub parallel: bool,
}

impl Command for SuggestArgs {
    fn execute(self) {
        if let Some(winner) = self.position.winner() {
            eprintln!("The position is already won by {}.", winner);
            return;
        }

        let mut engine = Engine::with_config(EngineConfig {
            search_depth: self.depth,
            parallel: self.parallel,
        });

        match engine.best_move(&self.position) {
            Ok(outcome) => {
                let stats = engine.get_search_stats();
                println!("{}", outcome.best_move);
                if outcome.immediate_win {
                    println!("* Wins immediately");
                }
                println!(
                    "* Score: {}\n* Positions searched: {} (depth: {})",
                    outcome.score, stats.positions_searched, stats.depth
                );
            }
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
