mod cli;

use structopt::StructOpt;

use cli::commands::Command;
use cli::Stacktoe;

fn main() {
    env_logger::init();
    #[cfg(feature = "instrumentation")]
    stacktoe::instrumentation::init_tracing();

    Stacktoe::from_args().execute();

    #[cfg(feature = "instrumentation")]
    stacktoe::instrumentation::print_timing_statistics();
}
