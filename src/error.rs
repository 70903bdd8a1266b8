//! Error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A password must have at least one character.
    #[error("invalid configuration: length must be at least 1")]
    InvalidConfiguration,

    /// The platform clipboard could not be reached or refused the write.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
