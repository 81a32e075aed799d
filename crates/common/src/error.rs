use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Witness(String),

    #[error("{command} failed ({status}); stderr: {stderr}")]
    ToolInvocation {
        /// Rendered command line, for diagnostics.
        command: String,
        /// Exit code description, or the spawn failure message.
        status: String,
        stdout: String,
        stderr: String,
    },

    #[error("{0}")]
    PostCondition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
