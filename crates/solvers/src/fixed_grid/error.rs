use thiserror::Error;

use super::{ConfigError, GridError};

/// Errors that can occur during fixed-grid integration.
///
/// `E` is the error type of the derivative being integrated. Derivative
/// failures are passed through unchanged in [`Error::Derivative`].
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error(transparent)]
    Derivative(E),
}

impl<E> Error<E> {
    /// Returns the derivative's error, if that is what failed.
    pub fn into_derivative(self) -> Option<E> {
        match self {
            Self::Derivative(err) => Some(err),
            Self::Config(_) | Self::Grid(_) => None,
        }
    }
}
