use thiserror::Error;

/// Failure taxonomy shared by all mini-games.
///
/// `Config` and `ExhaustedPool` indicate developer mistakes and fail fast;
/// `Validation` is surfaced inline and leaves the session on its current
/// phase. Nothing here is retried automatically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RiffError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("content pool '{pool}' has no remaining entries")]
    ExhaustedPool { pool: &'static str },
}

impl RiffError {
    pub fn config(msg: impl Into<String>) -> Self {
        RiffError::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        RiffError::Validation(msg.into())
    }
}
