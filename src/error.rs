use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Exit code for a generic failure.
pub const EXIT_FAILURE: i32 = 1;

/// Conventional exit code for a run cancelled with Ctrl-C (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;

/// Everything that can end a launch early.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("PowerShell not found")]
    InterpreterNotFound,

    #[error("PowerShell not available")]
    NoInterpreter,

    #[error("Script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("Script execution timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    #[error("Script execution interrupted by user")]
    Interrupted,

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaunchError {
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Interrupted => EXIT_INTERRUPTED,
            _ => EXIT_FAILURE,
        }
    }
}

pub type LaunchResult<T> = std::result::Result<T, LaunchError>;
