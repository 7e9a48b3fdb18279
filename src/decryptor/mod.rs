// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(input, output, passphrase)?` for a full container.
//! Helper: `read_iv(reader)?` for the 16-byte header alone.

pub(crate) mod decrypt;
pub(crate) mod read;

pub use decrypt::{decrypt, decrypt_stream};
pub use read::read_iv;
