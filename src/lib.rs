// src/lib.rs

pub mod aliases;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod file_ops;
pub mod naming;
pub mod progress;
pub mod stream;

// High-level API
pub use decryptor::decrypt;
pub use encryptor::{encrypt, encrypt_with_iv};
pub use error::AescfbError;
pub use file_ops::{decrypt_file, encrypt_file, transform_file, FileTransform, TransformReport};

// Pipeline pieces for callers that drive their own I/O
pub use crypto::cfb::{CfbStream, Mode};
pub use crypto::kdf::derive_key;
pub use crypto::rng::generate_iv;
pub use decryptor::read_iv;
pub use encryptor::write_iv;
pub use naming::default_output_path;
pub use progress::{NoProgress, ProgressSink};
