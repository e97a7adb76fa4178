//! Salted, iterated password hashing.
//!
//! [`hash_password`] turns a plaintext password into a self-contained base64
//! credential; [`verify_password`] checks a guess against one. The credential
//! packs a random 32-byte salt, a 20-byte PBKDF2-HMAC-SHA1 key and the
//! iteration count that produced it:
//!
//! ```text
//! base64( SALT (32) | DERIVED_KEY (20) | ITERATIONS (4, little-endian u32) )
//! ```
//!
//! ```no_run
//! let stored = secpass::hash_password("hunter2")?;
//! assert!(secpass::verify_password("hunter2", &stored)?);
//! assert!(!secpass::verify_password("hunter3", &stored)?);
//! # Ok::<(), secpass::Error>(())
//! ```

pub mod crypto;
mod error;
pub mod format;

pub use crate::crypto::IterationPolicy;
pub use crate::error::{Error, Result};
pub use crate::format::{Artifact, ArtifactInfo};

/// Stateless password hasher.
///
/// Holds only the generation-time [`IterationPolicy`]; verification replays
/// whatever iteration count the stored credential carries, so credentials
/// produced under a different policy keep verifying.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher {
    policy: IterationPolicy,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: IterationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> IterationPolicy {
        self.policy
    }

    /// Hashes a password into a base64 credential.
    ///
    /// `None` and the empty string are hashed identically; password policy
    /// is left to the caller. Two calls with the same password yield
    /// different credentials.
    ///
    /// # Errors
    ///
    /// Fails only if the OS random generator is unavailable.
    pub fn hash<'a>(&self, password: impl Into<Option<&'a str>>) -> Result<String> {
        let password = password.into().unwrap_or_default();

        let salt = crypto::generate_salt()?;
        let iterations = crypto::iteration_count(self.policy)?;
        let key = crypto::derive_key(password, &salt, iterations)?;

        tracing::debug!(iterations, "hashed password");
        Ok(Artifact::new(salt, *key, iterations).encode())
    }

    /// Checks a guess against a stored credential.
    ///
    /// Returns `Ok(false)` for a wrong guess. A corrupt credential is an
    /// error, never `false`, so callers can tell the two apart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decoding`] if `stored` is not base64 and
    /// [`Error::MalformedArtifact`] if it cannot be split into fields.
    pub fn verify<'a>(&self, guess: impl Into<Option<&'a str>>, stored: &str) -> Result<bool> {
        let guess = guess.into().unwrap_or_default();

        let artifact = Artifact::decode(stored)?;
        let key = crypto::derive_key(guess, artifact.salt(), artifact.iterations())?;
        let matched = crypto::constant_time_eq(&key[..], artifact.key());

        tracing::debug!(
            iterations = artifact.iterations(),
            width = artifact.iteration_width(),
            matched,
            "verified password"
        );
        Ok(matched)
    }
}

/// Hashes a password with the default [`IterationPolicy`].
pub fn hash_password<'a>(password: impl Into<Option<&'a str>>) -> Result<String> {
    PasswordHasher::new().hash(password)
}

/// Verifies a guess against a credential produced by [`hash_password`].
pub fn verify_password<'a>(guess: impl Into<Option<&'a str>>, stored: &str) -> Result<bool> {
    PasswordHasher::new().verify(guess, stored)
}
