//! Credential format v1.
//!
//! The layout carries no magic or version byte; field boundaries come purely
//! from the fixed salt and key lengths, and whatever follows is the
//! iteration count:
//! ```text
//! SALT (32) | DERIVED_KEY (20) | ITERATIONS (4, little-endian u32)
//! ```
//! Records written by 64-bit producers carry an 8-byte little-endian count
//! instead. Both are accepted on parse; serialization always writes 4 bytes.

use super::Artifact;
use crate::crypto::{ITER_LEN, KEY_LEN, SALT_LEN, WIDE_ITER_LEN};
use crate::error::{Error, Result};

/// Length of the fixed salt + key prefix.
pub const PREFIX_LEN: usize = SALT_LEN + KEY_LEN;
/// Length of a serialized v1 credential.
pub const LEN: usize = PREFIX_LEN + ITER_LEN;

/// Parses a v1 credential.
///
/// # Errors
///
/// Returns [`Error::MalformedArtifact`] if the data is shorter than the
/// salt + key prefix, the iteration field has an unsupported width, or the
/// iteration count is zero or does not fit in a `u32`.
pub fn parse(data: &[u8]) -> Result<Artifact> {
    let len = data.len();
    if len < PREFIX_LEN {
        return Err(Error::malformed(len, "shorter than salt and key"));
    }

    let mut offset = 0;

    let salt: [u8; SALT_LEN] = data[offset..offset + SALT_LEN]
        .try_into()
        .map_err(|_| Error::malformed(len, "invalid salt length"))?;
    offset += SALT_LEN;

    let key: [u8; KEY_LEN] = data[offset..offset + KEY_LEN]
        .try_into()
        .map_err(|_| Error::malformed(len, "invalid key length"))?;
    offset += KEY_LEN;

    let field = &data[offset..];
    let iterations = parse_iterations(field, len)?;

    Ok(Artifact::new(salt, key, iterations).with_iteration_width(field.len()))
}

fn parse_iterations(field: &[u8], len: usize) -> Result<u32> {
    let iterations = match field.len() {
        ITER_LEN => {
            let bytes: [u8; ITER_LEN] = field
                .try_into()
                .map_err(|_| Error::malformed(len, "invalid iteration field"))?;
            u32::from_le_bytes(bytes)
        }
        WIDE_ITER_LEN => {
            let bytes: [u8; WIDE_ITER_LEN] = field
                .try_into()
                .map_err(|_| Error::malformed(len, "invalid iteration field"))?;
            tracing::warn!("credential uses an 8-byte iteration count");
            u32::try_from(u64::from_le_bytes(bytes))
                .map_err(|_| Error::malformed(len, "iteration count out of range"))?
        }
        0 => return Err(Error::malformed(len, "missing iteration count")),
        _ => return Err(Error::malformed(len, "unsupported iteration count width")),
    };

    if iterations == 0 {
        return Err(Error::malformed(len, "iteration count must be positive"));
    }
    Ok(iterations)
}

/// Serializes a credential to the v1 layout.
pub fn serialize(artifact: &Artifact) -> Vec<u8> {
    let mut buf = Vec::with_capacity(LEN);
    buf.extend_from_slice(artifact.salt());
    buf.extend_from_slice(artifact.key());
    buf.extend_from_slice(&artifact.iterations().to_le_bytes());
    buf
}
