//! Credential encoding.
//!
//! A credential is the v1 binary layout wrapped in standard base64 so it can
//! be stored in text columns and config files.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Serialize;
use zeroize::Zeroize;

use crate::crypto::{ITER_LEN, KEY_LEN, SALT_LEN};
use crate::error::Result;

pub mod v1;

/// A decoded credential: salt, derived key and the iteration count that
/// produced the key.
pub struct Artifact {
    salt: [u8; SALT_LEN],
    key: [u8; KEY_LEN],
    iterations: u32,
    iteration_width: usize,
}

impl Drop for Artifact {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// Non-secret description of a credential.
#[derive(Debug, Serialize)]
pub struct ArtifactInfo {
    pub algorithm: &'static str,
    pub iterations: u32,
    pub iteration_width: usize,
    pub salt: String,
    pub key_len: usize,
}

impl Artifact {
    pub fn new(salt: [u8; SALT_LEN], key: [u8; KEY_LEN], iterations: u32) -> Self {
        Self {
            salt,
            key,
            iterations,
            iteration_width: ITER_LEN,
        }
    }

    pub(crate) fn with_iteration_width(mut self, width: usize) -> Self {
        self.iteration_width = width;
        self
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Width of the iteration field the credential was read with.
    pub fn iteration_width(&self) -> usize {
        self.iteration_width
    }

    /// Packs the credential into its binary layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        v1::serialize(self)
    }

    /// Unpacks a credential from its binary layout.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        v1::parse(data)
    }

    /// Packs and base64-encodes the credential.
    pub fn encode(&self) -> String {
        let mut bytes = self.to_bytes();
        let encoded = STANDARD.encode(&bytes);
        bytes.zeroize();
        encoded
    }

    /// Decodes a base64 credential.
    ///
    /// Surrounding ASCII whitespace is ignored, so values read back from files or
    /// terminals with a trailing newline still decode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decoding`](crate::Error::Decoding) if the text is not
    /// base64, or [`Error::MalformedArtifact`](crate::Error::MalformedArtifact)
    /// if the decoded bytes cannot be split into fields.
    pub fn decode(stored: &str) -> Result<Self> {
        let mut bytes = STANDARD.decode(stored.trim_ascii())?;
        let artifact = Self::from_bytes(&bytes);
        bytes.zeroize();
        artifact
    }

    pub fn describe(&self) -> ArtifactInfo {
        ArtifactInfo {
            algorithm: "pbkdf2-hmac-sha1",
            iterations: self.iterations,
            iteration_width: self.iteration_width,
            salt: self.salt.iter().map(|b| format!("{b:02x}")).collect(),
            key_len: KEY_LEN,
        }
    }
}
