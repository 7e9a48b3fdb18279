// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(input, output, passphrase)?` writes the IV header and ciphertext.
//! Utility: `write_iv(writer, iv)?` for the raw header.

pub(crate) mod encrypt;
pub(crate) mod write;

pub use encrypt::{encrypt, encrypt_stream, encrypt_with_iv};
pub use write::{write_iv, write_octets};
