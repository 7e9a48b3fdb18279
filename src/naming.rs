//! Default output filenames.
//!
//! Encrypt always appends [`ENCRYPTED_SUFFIX`]; decrypt strips it only when
//! present. The two are deliberately asymmetric: decrypting `notes.txt` with
//! no explicit output targets `notes.txt` itself, which
//! [`FileTransform::open`](crate::file_ops::FileTransform::open) refuses.

use crate::consts::ENCRYPTED_SUFFIX;
use crate::crypto::cfb::Mode;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub fn default_output_path(mode: Mode, input: &Path) -> PathBuf {
    match mode {
        Mode::Encrypt => {
            let mut name = OsString::from(input.as_os_str());
            name.push(ENCRYPTED_SUFFIX);
            PathBuf::from(name)
        }
        // non-UTF-8 paths are left alone
        Mode::Decrypt => input
            .to_str()
            .and_then(|s| s.strip_suffix(ENCRYPTED_SUFFIX))
            .map(PathBuf::from)
            .unwrap_or_else(|| input.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_appends_suffix() {
        assert_eq!(
            default_output_path(Mode::Encrypt, Path::new("dir/report.pdf")),
            PathBuf::from("dir/report.pdf_encrypted")
        );
    }

    #[test]
    fn encrypt_appends_even_when_already_suffixed() {
        assert_eq!(
            default_output_path(Mode::Encrypt, Path::new("a_encrypted")),
            PathBuf::from("a_encrypted_encrypted")
        );
    }

    #[test]
    fn decrypt_strips_trailing_suffix() {
        assert_eq!(
            default_output_path(Mode::Decrypt, Path::new("dir/report.pdf_encrypted")),
            PathBuf::from("dir/report.pdf")
        );
    }

    #[test]
    fn decrypt_without_suffix_is_noop() {
        assert_eq!(
            default_output_path(Mode::Decrypt, Path::new("report.pdf")),
            PathBuf::from("report.pdf")
        );
        // only a trailing suffix counts
        assert_eq!(
            default_output_path(Mode::Decrypt, Path::new("x_encrypted.bak")),
            PathBuf::from("x_encrypted.bak")
        );
    }
}
