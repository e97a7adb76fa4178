use thiserror::Error;

/// Errors produced while hashing or verifying a password.
#[derive(Debug, Error)]
pub enum Error {
    /// The stored credential is not valid base64 text.
    #[error("stored credential is not valid base64: {0}")]
    Decoding(#[from] base64::DecodeError),

    /// The stored credential decoded, but its fields cannot be extracted.
    #[error("malformed credential ({len} bytes): {reason}")]
    MalformedArtifact { len: usize, reason: &'static str },

    #[error("OS random generator unavailable: {0}")]
    Entropy(String),

    #[error("invalid iteration policy: {0}")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(len: usize, reason: &'static str) -> Self {
        Error::MalformedArtifact { len, reason }
    }
}
