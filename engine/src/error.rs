use thiserror::Error;

/// Failure taxonomy for the engine. Anything recoverable (reverse-direction
/// requests, ticks while paused) is absorbed silently and never surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Impossible grid or session configuration. Fatal, raised at startup.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Malformed raw intent or key binding. Non-fatal: log and ignore.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
