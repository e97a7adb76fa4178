use std::hint::black_box;

/// Compare two byte slices without short-circuiting.
///
/// The length difference is folded into the accumulator up front and every
/// byte of the common prefix is visited, so neither a length mismatch nor
/// the position of the first differing byte changes the amount of work.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let mut diff = (a.len() ^ b.len()) as u64;
    for (x, y) in a.iter().zip(b.iter()) {
        diff = black_box(diff | u64::from(x ^ y));
    }
    diff == 0
}
