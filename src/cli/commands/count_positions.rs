//! Count positions command - count positions reachable at a given depth.

use std::time::Instant;

use stacktoe::board::player::Player;
use stacktoe::board::Position;
use stacktoe::move_generator::MoveGenerator;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let position = Position::new(Player::Me);

        for depth in 1..=self.depth {
            let start = Instant::now();
            let count = MoveGenerator::count_positions(&position, depth);
            let elapsed = start.elapsed();
            let per_second = count as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
            println!(
                "depth: {}, positions: {}, elapsed: {:?}, positions/s: {:.0}",
                depth, count, elapsed, per_second
            );
        }
    }
}
