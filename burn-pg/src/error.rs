//! Errors raised while rolling out episodes and updating models.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failure reported by the environment, passed through unchanged.
    #[error(transparent)]
    Environment(#[from] anyhow::Error),

    /// The policy scores could not be turned into a categorical distribution.
    #[error("Invalid policy distribution: {0}")]
    Distribution(String),

    /// A loss evaluated to NaN or infinity.
    #[error("Non-finite {name} loss: {value}")]
    NonFiniteLoss { name: &'static str, value: f64 },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
