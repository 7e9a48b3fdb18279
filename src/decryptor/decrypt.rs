//! src/decryptor/decrypt.rs
//! Decryption: read the IV header, then stream plaintext
//!
//! There is no integrity check. A wrong passphrase decrypts "successfully"
//! to garbage of the correct length.

use crate::crypto::cfb::{CfbStream, Mode};
use crate::crypto::kdf::derive_key;
use crate::decryptor::read::read_iv;
use crate::error::AescfbError;
use crate::progress::{NoProgress, ProgressSink};
use crate::stream::pump;
use std::io::{Read, Write};

/// Decrypt a `[IV][ciphertext]` container from `input` into `output`.
///
/// Returns the number of plaintext bytes written.
pub fn decrypt<R, W>(input: R, output: W, passphrase: &[u8]) -> Result<u64, AescfbError>
where
    R: Read,
    W: Write,
{
    decrypt_stream(input, output, passphrase, 0, &mut NoProgress)
}

/// Full-control decryption used by the file layer.
///
/// `total` is the expected plaintext size (container size minus 16).
pub fn decrypt_stream<R, W, P>(
    mut input: R,
    mut output: W,
    passphrase: &[u8],
    total: u64,
    progress: &mut P,
) -> Result<u64, AescfbError>
where
    R: Read,
    W: Write,
    P: ProgressSink + ?Sized,
{
    let iv = read_iv(&mut input)?;
    tracing::debug!("IV header read");

    let key = derive_key(passphrase);
    let mut cipher = CfbStream::new(&key, &iv, Mode::Decrypt);
    drop(key);

    pump(&mut input, &mut output, &mut cipher, total, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::Iv16;
    use crate::encryptor::encrypt_with_iv;
    use std::io::Cursor;

    #[test]
    fn roundtrip_with_fixed_iv() {
        let iv = Iv16::new([3u8; 16]);
        let mut encrypted = Vec::new();
        encrypt_with_iv(Cursor::new(b"attack at dawn"), &mut encrypted, b"pw", &iv).unwrap();

        let mut plain = Vec::new();
        let n = decrypt(Cursor::new(&encrypted), &mut plain, b"pw").unwrap();
        assert_eq!(n, 14);
        assert_eq!(plain, b"attack at dawn");
    }

    #[test]
    fn header_only_container_decrypts_to_empty() {
        let mut plain = Vec::new();
        let n = decrypt(Cursor::new([0u8; 16]), &mut plain, b"pw").unwrap();
        assert_eq!(n, 0);
        assert!(plain.is_empty());
    }

    #[test]
    fn truncated_container_writes_nothing() {
        let mut plain = Vec::new();
        let err = decrypt(Cursor::new([0u8; 7]), &mut plain, b"pw").unwrap_err();
        assert!(matches!(
            err,
            AescfbError::TruncatedHeader { found: 7, .. }
        ));
        assert!(plain.is_empty());
    }
}
