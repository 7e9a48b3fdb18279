//! tests/common.rs
//! Constants and helpers shared across test files

#![allow(dead_code)] // each test crate uses a different subset

use aescfb::consts::CHUNK_SIZE;

/// Passphrase used by the reference scenario
pub const TEST_PASSPHRASE: &[u8] = b"secret";

pub const TEST_PLAINTEXT: &[u8] = b"hello world";

/// Sizes straddling the 1 MiB chunk boundary
pub const BOUNDARY_SIZES: &[usize] = &[0, 1, CHUNK_SIZE - 1, CHUNK_SIZE, CHUNK_SIZE + 1];

/// Deterministic non-repeating filler so misplaced bytes are detectable.
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8 ^ (i >> 8) as u8).collect()
}
