use std::io;
use std::io::Write;

use clap::CommandFactory;
use clap_complete::generate;
use hello_time_core::PrintError;
use hello_time_core::print_local_time;
use hello_time_core::report_write_failure;
use tracing::debug;

use crate::commands::Cli;
use crate::commands::Commands;
use crate::commands::Shell;

/// Runs the parsed command line. Printing the time is the default.
pub fn dispatch(cli: &Cli) {
    match cli.command {
        None | Some(Commands::Now) => handle_now(),
        Some(Commands::Completions { shell }) => handle_completions(shell),
    }
}

pub fn handle_now() {
    debug!("printing local time");
    print_local_time();
}

pub fn handle_completions(shell: Shell) {
    debug!(%shell, "generating completions");
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = write_completions(shell, &mut handle) {
        report_write_failure("completion script", &e);
    }
}

/// Renders the whole script first; `generate` panics on a failed write.
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) -> Result<(), PrintError> {
    let mut script = Vec::new();
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "hello-time", &mut script);

    out.write_all(&script)?;
    out.flush()?;
    Ok(())
}
