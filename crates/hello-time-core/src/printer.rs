use std::io;
use std::io::Write;

use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::error::PrintError;
use crate::format::format_calendar_time;

/// Reads the current time from a [`Clock`] and writes it as one line.
#[derive(Debug, Clone, Default)]
pub struct TimePrinter<C> {
    clock: C,
}

impl<C: Clock> TimePrinter<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Formatted line for the clock's current instant, newline included.
    pub fn render(&self) -> String {
        let instant = self.clock.now();
        let local = self.clock.to_local_calendar(instant);
        trace!(%instant, ?local, "captured current time");
        format_calendar_time(&local)
    }

    /// Writes the rendered line with a single `write_all`, then flushes.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), PrintError> {
        let line = self.render();
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Writes to stdout. Failures are logged, never returned.
    pub fn print(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.write_to(&mut handle) {
            report_write_failure("time", &e);
        }
    }
}

/// Logs a failed stdout write of `what`. A closed reader only rates `debug`.
pub fn report_write_failure(what: &str, err: &PrintError) {
    if err.is_broken_pipe() {
        debug!(error = %err, "stdout closed before {} was written", what);
    } else {
        warn!(error = %err, "failed to write {}", what);
    }
}

/// Prints the host's current local time to stdout, e.g.
/// `Tue Mar  5 14:07:09 2024`.
pub fn print_local_time() {
    TimePrinter::new(SystemClock).print();
}
