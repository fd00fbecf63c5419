use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("config error: {0}")]
    Config(String),

    /// A metrics provider call failed or timed out.
    #[error("provider error: {0}")]
    Provider(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl From<std::fmt::Error> for MonitorError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Render(e.to_string())
    }
}

pub type Result<T, E = MonitorError> = std::result::Result<T, E>;
