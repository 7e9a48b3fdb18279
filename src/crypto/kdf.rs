//! src/crypto/kdf.rs
//! Passphrase → AES-256 key by truncate-or-zero-pad
//!
//! This is not a password-based KDF: there is no salt and no work factor, so
//! short passphrases are cheap to brute-force. The rule is kept because it
//! defines which key decrypts existing files.

use crate::aliases::Aes256Key32;
use crate::consts::MAX_KEY_SIZE;

/// Derive the key directly into a caller buffer.
///
/// - first 32 bytes of `passphrase` are copied
/// - the remainder of `out_key` is zeroed
/// - bytes beyond 32 are ignored
#[inline]
pub fn derive_key_into(passphrase: &[u8], out_key: &mut Aes256Key32) {
    let used = passphrase.len().min(MAX_KEY_SIZE);
    out_key.fill(0);
    out_key[..used].copy_from_slice(&passphrase[..used]);
}

/// Derive a fixed 32-byte key from an arbitrary-length passphrase.
///
/// Never fails. An empty passphrase yields the all-zero key.
#[inline]
pub fn derive_key(passphrase: &[u8]) -> Aes256Key32 {
    let mut key = Aes256Key32::new([0u8; MAX_KEY_SIZE]);
    derive_key_into(passphrase, &mut key);
    key
}
