//! Driver errors.
//!
//! Problems in the source being parsed are diagnostics, never errors here.
//! These cover only what stops the driver from running at all.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("unknown error code: {0}")]
    UnknownCode(String),
}

impl DriverError {
    pub fn usage(message: impl Into<String>) -> Self {
        DriverError::Usage(message.into())
    }
}
