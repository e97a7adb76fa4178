//! Cryptographic primitives for password hashing.
//!
//! Provides salt and work-factor generation, key derivation, and
//! constant-time comparison of derived keys.

pub mod compare;
pub mod kdf;
pub mod random;

pub use compare::constant_time_eq;
pub use kdf::{IterationPolicy, derive_key};
pub use random::{generate_salt, iteration_count};

/// Length of the salt (32 bytes).
pub const SALT_LEN: usize = 32;
/// Length of the derived key (20 bytes, one SHA-1 block of PBKDF2 output).
pub const KEY_LEN: usize = 20;
/// Length of the iteration count field (4 bytes, little-endian `u32`).
pub const ITER_LEN: usize = 4;
/// Width of iteration counts written by 64-bit producers.
pub const WIDE_ITER_LEN: usize = 8;
