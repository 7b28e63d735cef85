use aufbau::core::constants::ConstantsLoadError;
use aufbau::engine::error::TransitionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Constants(#[from] ConstantsLoadError),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
