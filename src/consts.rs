//! # Constants
//!
//! This module defines the sizes and names that fix the on-disk layout
//! and the memory bound of the streaming pipeline.

/// Length of the AES-256 key derived from a passphrase.
///
/// Passphrases longer than this are truncated, shorter ones are zero-padded.
pub const MAX_KEY_SIZE: usize = 32;

/// AES block size, which is also the length of the cleartext IV header.
pub const AES_BLOCK_SIZE: usize = 16;

/// Length of the initialization vector stored at offset 0 of every encrypted file.
pub const IV_SIZE: usize = AES_BLOCK_SIZE;

/// Size of the reusable read buffer (1 MiB).
///
/// Memory use of a transform is bounded by this value regardless of file size.
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Suffix appended to the input filename when no encryption output is given.
pub const ENCRYPTED_SUFFIX: &str = "_encrypted";
