//! Error types for the relayout library.

use thiserror::Error;

/// Result type alias for relayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding records or serializing trees.
///
/// Tree construction itself is total: malformed records degrade to generic
/// blocks and structural ambiguities are resolved by fixed tie-break rules,
/// so building never fails on well-typed input.
#[derive(Error, Debug)]
pub enum Error {
    /// The records payload could not be decoded.
    #[error("invalid layout records: {0}")]
    InvalidRecords(String),

    /// Error serializing the reconstructed tree.
    #[error("rendering error: {0}")]
    Render(String),
}
