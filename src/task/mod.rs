//! Launching the playlist processing task as a child process.
//!
//! The task is an ordinary executable (by default this binary's own `sync`
//! subcommand) invoked with the library directories and the playlist URL on
//! its command line. Spawning is non-blocking: [`TaskCommand::spawn`] returns
//! a [`TaskHandle`] immediately and the caller decides whether to await the
//! outcome or detach.

mod command;

pub use command::{resolve_program, TaskCommand, TaskHandle, TaskOutput};

/// Failure modes of a task invocation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The task program could not be started.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// The program that was asked for.
        program: String,
        /// The underlying spawn error.
        source: std::io::Error,
    },

    /// The task ran but exited with a non-zero status.
    #[error("task exited with {status}: {stderr}")]
    Failed {
        /// Process exit status.
        status: std::process::ExitStatus,
        /// Captured standard error (trimmed).
        stderr: String,
    },

    /// The task exceeded its configured deadline.
    #[error("task timed out after {limit:?}")]
    Timeout {
        /// The configured deadline.
        limit: std::time::Duration,
    },

    /// An I/O error occurred while waiting for the task.
    #[error("I/O error waiting for task: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Convenience constructor for [`Error::Spawn`].
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Error::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Convenience constructor for [`Error::Failed`].
    pub fn failed(status: std::process::ExitStatus, stderr: impl Into<String>) -> Self {
        Error::Failed {
            status,
            stderr: stderr.into(),
        }
    }

    /// Convenience constructor for [`Error::Timeout`].
    pub fn timeout(limit: std::time::Duration) -> Self {
        Error::Timeout { limit }
    }

    /// The child's exit code, when the task ran and reported one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::Failed { status, .. } => status.code(),
            _ => None,
        }
    }
}

/// Result alias for task operations.
pub type Result<T> = std::result::Result<T, Error>;
