use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroizing;

use super::KEY_LEN;
use crate::error::{Error, Result};

/// Generation-time bounds for the PBKDF2 iteration count.
///
/// Only consulted when hashing. Verification replays whatever count the
/// stored credential carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationPolicy {
    min: u32,
    max: u32,
}

impl Default for IterationPolicy {
    fn default() -> Self {
        Self {
            min: 10_000,
            max: 50_000,
        }
    }
}

impl IterationPolicy {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        let policy = Self { min, max };
        policy.validate()?;
        Ok(policy)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn validate(&self) -> Result<()> {
        if self.min < 1 {
            return Err(Error::InvalidPolicy("iteration count must be >= 1".into()));
        }
        if self.min > self.max {
            return Err(Error::InvalidPolicy(format!(
                "minimum {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Derive a 20-byte key with PBKDF2-HMAC-SHA1.
pub fn derive_key(
    password: &str,
    salt: &[u8],
    iterations: u32,
) -> Result<Zeroizing<[u8; KEY_LEN]>> {
    if iterations == 0 {
        return Err(Error::malformed(
            salt.len() + KEY_LEN,
            "iteration count must be positive",
        ));
    }

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha1>(password.as_bytes(), salt, iterations, &mut key[..]);
    Ok(key)
}
