use std::io;

use thiserror::Error;

/// Failure while emitting the formatted time.
#[derive(Error, Debug)]
pub enum PrintError {
    #[error("failed to write time to output: {0}")]
    Write(#[from] io::Error),
}

impl PrintError {
    /// The reader went away (e.g. `hello-time | head -c0`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            PrintError::Write(e) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}
