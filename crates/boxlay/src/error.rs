#![forbid(unsafe_code)]

//! Unified error type.

use std::fmt;

use boxlay_core::model::ModelError;
use boxlay_runtime::{BindError, ConfigError, InteractionError};

/// Top-level error type for boxlay hosts.
#[derive(Debug)]
pub enum Error {
    /// Binding an overlay failed.
    Bind(BindError),
    /// An invariant broke while handling an event.
    Interaction(InteractionError),
    /// Loading or validating configuration failed.
    Config(ConfigError),
    /// The box model was malformed.
    Model(ModelError),
    /// The global log subscriber could not be installed.
    Logging(String),
}

/// Standard result type for boxlay APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bind(e) => write!(f, "bind error: {e}"),
            Self::Interaction(e) => write!(f, "interaction error: {e}"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::Model(e) => write!(f, "model error: {e}"),
            Self::Logging(msg) => write!(f, "logging setup failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind(e) => Some(e),
            Self::Interaction(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Model(e) => Some(e),
            Self::Logging(_) => None,
        }
    }
}

impl From<BindError> for Error {
    fn from(err: BindError) -> Self {
        Self::Bind(err)
    }
}

impl From<InteractionError> for Error {
    fn from(err: InteractionError) -> Self {
        Self::Interaction(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ModelError> for Error {
    fn from(err: ModelError) -> Self {
        Self::Model(err)
    }
}
