// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`kdf`]: passphrase → 32-byte key
//! - [`rng`]: OS-backed IV generation
//! - [`cfb`]: AES-256 in CFB-128 mode over arbitrary-length chunks

pub mod cfb;
pub mod kdf;
pub mod rng;
