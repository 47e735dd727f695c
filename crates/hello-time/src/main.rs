use clap::Parser;

use hello_time::commands::Cli;
use hello_time::common::init_tracing;
use hello_time::handlers;

fn main() {
    let cli = Cli::parse();
    let _telemetry = init_tracing(cli.log_level());

    handlers::dispatch(&cli);
}
