use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failure of a single edit session. Each variant names the step that failed.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("no text editor configured")]
    NoEditor,

    /// The file could not be prepared. Cleanup is not attempted.
    #[error(transparent)]
    Setup(io::Error),

    #[error("failed to run editor command: {command}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("editor command exited unsuccessfully ({status}): {command}")]
    Exit { command: String, status: ExitStatus },

    #[error("failed to read edited file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
