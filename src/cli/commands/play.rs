//! Play command - run an interactive game in the terminal.

use stacktoe::board::player::Player;
use stacktoe::game::r#loop::GameLoop;
use stacktoe::game::{ControllerConfig, Mode};
use structopt::StructOpt;

use super::util::{delay_from_millis, parse_depth};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "companion")]
    pub mode: Mode,
    #[structopt(short, long, default_value = "me")]
    pub first: Player,
    #[structopt(short, long)]
    pub auto_suggest: bool,
    #[structopt(short, long, default_value = "4", parse(try_from_str = parse_depth))]
    pub depth: u8,
    #[structopt(long, default_value = "800")]
    pub ai_delay_ms: u64,
    #[structopt(long, default_value = "300")]
    pub suggest_delay_ms: u64,
    #[structopt(long)]
    pub parallel: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = ControllerConfig {
            mode: self.mode,
            auto_suggest: self.auto_suggest,
            search_depth: self.depth,
            ai_delay: delay_from_millis(self.ai_delay_ms),
            suggestion_delay: delay_from_millis(self.suggest_delay_ms),
            parallel: self.parallel,
        };
        GameLoop::new(config, self.first).run();
    }
}
