use super::{SALT_LEN, kdf::IterationPolicy};
use crate::error::{Error, Result};
use getrandom::fill;

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<()> {
    fill(buf).map_err(|e| Error::Entropy(e.to_string()))
}

fn random_u32() -> Result<u32> {
    let mut buf = [0u8; 4];
    secure_random(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Generate salt
pub fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    secure_random(&mut salt)?;
    Ok(salt)
}

/// Pick an iteration count uniformly from the policy's inclusive range.
///
/// Draws are rejected when they fall into the incomplete bucket at the top
/// of the `u32` range, so every count in `[min, max]` is equally likely.
pub fn iteration_count(policy: IterationPolicy) -> Result<u32> {
    // min >= 1, so the span always fits in a u32
    let span = policy.max() - policy.min() + 1;
    let zone = u32::MAX - (u32::MAX % span);
    loop {
        let draw = random_u32()?;
        if draw < zone {
            return Ok(policy.min() + draw % span);
        }
    }
}
