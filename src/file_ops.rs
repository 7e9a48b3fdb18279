//! # File Operations
//!
//! File-level encrypt/decrypt. A transform moves through
//! `Opening → HeaderIO → Streaming → Finalizing → Done`; any error aborts it
//! immediately and is returned as is.
//!
//! - Both handles are owned by [`FileTransform`] and closed on every path.
//! - Nothing is retried.
//! - A partially written output file is left on disk.

use crate::consts::IV_SIZE;
use crate::crypto::cfb::Mode;
use crate::crypto::rng::generate_iv;
use crate::decryptor::decrypt_stream;
use crate::encryptor::encrypt_stream;
use crate::error::AescfbError;
use crate::progress::ProgressSink;
use same_file::is_same_file;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Outcome of a completed transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformReport {
    pub mode: Mode,
    /// Payload bytes read and written (plaintext length).
    pub bytes_processed: u64,
    /// Plaintext length predicted from the input size before streaming.
    pub expected_bytes: u64,
}

/// An opened input/output pair, ready to stream.
#[derive(Debug)]
pub struct FileTransform {
    mode: Mode,
    input_path: PathBuf,
    input: File,
    output: File,
    input_len: u64,
}

impl FileTransform {
    /// Open `input`, create or truncate `output`, and stat the input.
    ///
    /// Refuses with [`AescfbError::Argument`] when both paths name the same
    /// existing file, since truncating the output would destroy the input.
    pub fn open(mode: Mode, input: &Path, output: &Path) -> Result<Self, AescfbError> {
        reject_same_file(input, output)?;

        let input_file = File::open(input).map_err(|source| AescfbError::CannotOpen {
            path: input.to_path_buf(),
            source,
        })?;
        let output_file = File::create(output).map_err(|source| AescfbError::CannotCreate {
            path: output.to_path_buf(),
            source,
        })?;
        let input_len = input_file
            .metadata()
            .map_err(|source| AescfbError::CannotStat {
                path: input.to_path_buf(),
                source,
            })?
            .len();

        tracing::debug!(
            %mode,
            input = %input.display(),
            output = %output.display(),
            input_len,
            "files opened"
        );

        Ok(Self {
            mode,
            input_path: input.to_path_buf(),
            input: input_file,
            output: output_file,
            input_len,
        })
    }

    /// Plaintext size implied by the input size.
    ///
    /// For decryption this is the container size minus the 16-byte header
    /// (zero for a container too short to hold one).
    pub fn expected_bytes(&self) -> u64 {
        match self.mode {
            Mode::Encrypt => self.input_len,
            Mode::Decrypt => self.input_len.saturating_sub(IV_SIZE as u64),
        }
    }

    /// Write or read the IV header, stream every chunk, then sync the output.
    pub fn run<P>(self, passphrase: &[u8], progress: &mut P) -> Result<TransformReport, AescfbError>
    where
        P: ProgressSink + ?Sized,
    {
        let expected_bytes = self.expected_bytes();
        let Self {
            mode,
            input_path,
            mut input,
            mut output,
            ..
        } = self;

        let _span =
            tracing::debug_span!("transform", %mode, input = %input_path.display()).entered();

        let bytes_processed = match mode {
            Mode::Encrypt => {
                let iv = generate_iv()?;
                encrypt_stream(
                    &mut input,
                    &mut output,
                    passphrase,
                    &iv,
                    expected_bytes,
                    progress,
                )?
            }
            Mode::Decrypt => {
                decrypt_stream(&mut input, &mut output, passphrase, expected_bytes, progress)?
            }
        };

        output.sync_all().map_err(AescfbError::WriteFailed)?;
        tracing::debug!(bytes_processed, "transform complete");

        Ok(TransformReport {
            mode,
            bytes_processed,
            expected_bytes,
        })
    }
}

/// Open and run a transform in one call.
pub fn transform_file<P>(
    mode: Mode,
    passphrase: &[u8],
    input: &Path,
    output: &Path,
    progress: &mut P,
) -> Result<TransformReport, AescfbError>
where
    P: ProgressSink + ?Sized,
{
    FileTransform::open(mode, input, output)?.run(passphrase, progress)
}

/// Encrypt `input` to `output` as `[IV][ciphertext]`.
pub fn encrypt_file<P>(
    passphrase: &[u8],
    input: &Path,
    output: &Path,
    progress: &mut P,
) -> Result<TransformReport, AescfbError>
where
    P: ProgressSink + ?Sized,
{
    transform_file(Mode::Encrypt, passphrase, input, output, progress)
}

/// Decrypt an `[IV][ciphertext]` container at `input` to `output`.
pub fn decrypt_file<P>(
    passphrase: &[u8],
    input: &Path,
    output: &Path,
    progress: &mut P,
) -> Result<TransformReport, AescfbError>
where
    P: ProgressSink + ?Sized,
{
    transform_file(Mode::Decrypt, passphrase, input, output, progress)
}

// Compares file identity (device + inode / volume + index), so hard links and
// symlinks to the input are caught too. A missing output cannot alias anything.
fn reject_same_file(input: &Path, output: &Path) -> Result<(), AescfbError> {
    if is_same_file(input, output).unwrap_or(false) {
        return Err(AescfbError::Argument(format!(
            "output {} is the same file as the input",
            output.display()
        )));
    }
    Ok(())
}
