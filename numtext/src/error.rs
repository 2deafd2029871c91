//! Top-level error type for the numtext library.
//!
//! The codec reports its own [`crate::codec::Error`]; this type gathers it
//! with the configuration and I/O failures the binary can run into.

/// Errors returned by the numtext binary and the helpers it calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input was not the decimal form of a value of the target type.
    #[error("could not decode decimal input: {0}")]
    Codec(#[from] crate::codec::Error),
    /// The configuration could not be loaded or was invalid.
    #[error("could not load configuration: {0}")]
    Config(#[from] config::ConfigError),
    /// Reading input or writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Some of the inputs given to a batch command were rejected.
    #[error("{rejected} of {total} inputs were rejected")]
    RejectedInputs {
        /// Number of rejected inputs
        rejected: usize,
        /// Number of inputs processed
        total: usize,
    },
}
