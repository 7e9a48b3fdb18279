//! src/crypto/cfb.rs
//! AES-256 in full-block cipher feedback mode (CFB-128)
//!
//! The keystream for block `i` is `E_k(C_{i-1})` with `C_{-1} = IV`. The
//! feedback register is filled byte by byte with ciphertext as it is produced
//! (encrypt) or consumed (decrypt), so chunks of any length can be fed in
//! sequence and the output is identical to a single-shot transform.
//!
//! Only the forward cipher is ever used, in both directions.

use crate::aliases::{Aes256Key32, Block16, Iv16};
use crate::consts::AES_BLOCK_SIZE;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};
use std::fmt;

/// Direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => f.write_str("encrypt"),
            Mode::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// Running CFB state for one file.
///
/// Chunk `n` depends on the ciphertext of chunk `n - 1`; the stream must be
/// driven strictly in order and is not `Clone`.
pub struct CfbStream {
    cipher: Aes256Enc,
    mode: Mode,
    // previous ciphertext block, overwritten in place as bytes go through
    register: Block16,
    keystream: Block16,
    // bytes of `keystream` already consumed; AES_BLOCK_SIZE forces a refill
    used: usize,
}

impl CfbStream {
    pub fn new(key: &Aes256Key32, iv: &Iv16, mode: Mode) -> Self {
        let key_bytes: &[u8; 32] = key;
        Self {
            cipher: Aes256Enc::new(key_bytes.into()),
            mode,
            register: Block16::new(**iv),
            keystream: Block16::new([0u8; AES_BLOCK_SIZE]),
            used: AES_BLOCK_SIZE,
        }
    }

    /// Encrypt the feedback register into a fresh keystream block.
    #[inline(always)]
    fn refill(&mut self) {
        let mut aes_block = AesBlock::from(*self.register);
        self.cipher.encrypt_block(&mut aes_block);
        self.keystream.copy_from_slice(aes_block.as_slice());
        self.used = 0;
    }

    /// In-place, length-preserving transform of the next `data.len()` bytes.
    ///
    /// Encrypt feeds the produced ciphertext back into the register; decrypt
    /// feeds back the ciphertext it is about to overwrite.
    pub fn transform(&mut self, data: &mut [u8]) {
        let mut offset = 0;
        while offset < data.len() {
            if self.used == AES_BLOCK_SIZE {
                self.refill();
            }

            let n = (AES_BLOCK_SIZE - self.used).min(data.len() - offset);
            let span = &mut data[offset..offset + n];
            let keystream = &self.keystream[self.used..self.used + n];
            let feedback = &mut self.register[self.used..self.used + n];

            match self.mode {
                Mode::Encrypt => {
                    for ((byte, k), fb) in span.iter_mut().zip(keystream).zip(feedback) {
                        *byte ^= k;
                        *fb = *byte;
                    }
                }
                Mode::Decrypt => {
                    for ((byte, k), fb) in span.iter_mut().zip(keystream).zip(feedback) {
                        *fb = *byte;
                        *byte ^= k;
                    }
                }
            }

            self.used += n;
            offset += n;
        }
    }
}
