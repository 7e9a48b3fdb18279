//! # Secret Buffer Aliases
//!
//! Fixed-size and dynamic buffers that hold key material or plaintext.
//! Every alias is a [`Zeroizing`] wrapper, so the contents are wiped on drop.
//!
//! - [`Aes256Key32`] - 32-byte AES-256 key derived from the passphrase
//! - [`Iv16`] - 16-byte initialization vector
//! - [`Block16`] - one AES block (feedback register, keystream block)
//! - [`Passphrase`] - raw passphrase bytes as supplied by the caller
//! - [`ChunkBuffer`] - the reusable streaming buffer

use zeroize::Zeroizing;

pub type SpanBuffer<const N: usize> = Zeroizing<[u8; N]>;

pub type Aes256Key32 = SpanBuffer<32>;
pub type Iv16 = SpanBuffer<16>; // cleartext on disk, wiped anyway
pub type Block16 = SpanBuffer<16>;

pub type Passphrase = Zeroizing<Vec<u8>>;
pub type ChunkBuffer = Zeroizing<Vec<u8>>;
