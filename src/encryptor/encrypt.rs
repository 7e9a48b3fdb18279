//! src/encryptor/encrypt.rs
//! Encryption: `[16-byte IV][ciphertext]`, ciphertext length == plaintext length

use crate::aliases::Iv16;
use crate::crypto::cfb::{CfbStream, Mode};
use crate::crypto::kdf::derive_key;
use crate::crypto::rng::generate_iv;
use crate::encryptor::write::write_iv;
use crate::error::AescfbError;
use crate::progress::{NoProgress, ProgressSink};
use crate::stream::pump;
use std::io::{Read, Write};

/// Encrypt `input` into `output` under a freshly generated IV.
///
/// Returns the number of plaintext bytes processed; `output` receives that
/// many bytes plus the 16-byte header.
pub fn encrypt<R, W>(input: R, output: W, passphrase: &[u8]) -> Result<u64, AescfbError>
where
    R: Read,
    W: Write,
{
    let iv = generate_iv()?;
    encrypt_stream(input, output, passphrase, &iv, 0, &mut NoProgress)
}

/// Encrypt with a caller-supplied IV (deterministic; for tests and vectors).
///
/// Never reuse an IV with the same passphrase outside of tests.
pub fn encrypt_with_iv<R, W>(
    input: R,
    output: W,
    passphrase: &[u8],
    iv: &Iv16,
) -> Result<u64, AescfbError>
where
    R: Read,
    W: Write,
{
    encrypt_stream(input, output, passphrase, iv, 0, &mut NoProgress)
}

/// Full-control encryption used by the file layer.
///
/// `total` is the expected plaintext size, only forwarded to `progress`.
pub fn encrypt_stream<R, W, P>(
    mut input: R,
    mut output: W,
    passphrase: &[u8],
    iv: &Iv16,
    total: u64,
    progress: &mut P,
) -> Result<u64, AescfbError>
where
    R: Read,
    W: Write,
    P: ProgressSink + ?Sized,
{
    write_iv(&mut output, iv)?;
    tracing::debug!("IV header written");

    let key = derive_key(passphrase);
    let mut cipher = CfbStream::new(&key, iv, Mode::Encrypt);
    drop(key);

    pump(&mut input, &mut output, &mut cipher, total, progress)
}
