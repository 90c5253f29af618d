//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    count_positions::CountPositionsArgs, play::PlayArgs, suggest::SuggestArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "stacktoe",
    about = "Tic-tac-toe with stackable pieces, and an engine that plays or advises"
)]
pub enum Stacktoe {
    #[structopt(
        name = "play",
        about = "Play in the terminal. In `--mode companion` (default) you enter both sides' moves and can ask for suggestions; in `--mode training` the engine plays the opponent. Choose who moves first with `--first` (me, opponent or random) and the search depth with `--depth` (default: 4)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "suggest",
        about = "Print the best move for the side to move in the position given with `--position` (default: empty board, me to move). Rows are separated by `/`, cells by `,`; uppercase pieces are yours, e.g. `L,L,./.,.,./s,s,. me`."
    )]
    Suggest(SuggestArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions reachable from the empty board at each depth up to `--depth` (default: 4), and report the time it took to do so."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Stacktoe {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Suggest(cmd),
            CountPositions(cmd),
        }
    }
}
