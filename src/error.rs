use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PeekError {
    #[error(
        "cliphist binary not found in PATH.\n\nInstall cliphist from: https://github.com/sentriz/cliphist"
    )]
    CliphistNotFound,

    #[error("cliphist list exited with {0}")]
    ListFailed(ExitStatus),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
