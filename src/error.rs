//! Error types for burrito.

use std::path::PathBuf;
use thiserror::Error;

/// Exit status when no variable names were passed on the command line.
pub const EXIT_NO_PARAMETERS: i32 = 1;
/// Exit status when the output script cannot be written.
pub const EXIT_WRITE_FAILED: i32 = 2;
/// Exit status when no session to the parameter store can be established.
pub const EXIT_SESSION_FAILED: i32 = 3;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No parameters were passed in, please include some parameters")]
    NoParameters,

    #[error("failed to make a new session: {0}")]
    Session(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("could not write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoParameters => EXIT_NO_PARAMETERS,
            Error::Write { .. } => EXIT_WRITE_FAILED,
            Error::Session(_) => EXIT_SESSION_FAILED,
            Error::Lookup(_) | Error::Other(_) => 1,
        }
    }
}

/// A single parameter could not be resolved. Never fatal to the run.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("parameter not found: {key:?}")]
    NotFound { key: String },

    #[error("environment variable {name} is not set")]
    UnsetVariable { name: String },

    #[error("environment variable {name} is not valid unicode")]
    InvalidVariable { name: String },

    #[error("request for {key:?} failed: {message}")]
    Request { key: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
