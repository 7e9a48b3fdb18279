//! src/decryptor/read.rs
//! Container header parsing

use crate::aliases::Iv16;
use crate::consts::IV_SIZE;
use crate::error::AescfbError;
use std::io::{ErrorKind, Read};

/// Read exactly 16 bytes of IV from the start of a container.
///
/// Short input is reported as [`AescfbError::TruncatedHeader`] with the
/// number of bytes actually found, never as a partial success.
pub fn read_iv<R: Read + ?Sized>(reader: &mut R) -> Result<Iv16, AescfbError> {
    let mut iv = Iv16::new([0u8; IV_SIZE]);
    let mut filled = 0;

    while filled < IV_SIZE {
        match reader.read(&mut iv[filled..]) {
            Ok(0) => {
                return Err(AescfbError::TruncatedHeader {
                    expected: IV_SIZE,
                    found: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(AescfbError::ReadFailed(e)),
        }
    }

    Ok(iv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_first_sixteen_bytes_only() {
        let data: Vec<u8> = (0u8..20).collect();
        let mut reader = Cursor::new(data);
        let iv = read_iv(&mut reader).unwrap();
        assert_eq!(&iv[..], &(0u8..16).collect::<Vec<_>>()[..]);
        assert_eq!(reader.position(), 16);
    }

    #[test]
    fn short_input_is_truncated_header() {
        for len in [0usize, 1, 15] {
            let err = read_iv(&mut Cursor::new(vec![0u8; len])).unwrap_err();
            match err {
                AescfbError::TruncatedHeader { expected, found } => {
                    assert_eq!(expected, 16);
                    assert_eq!(found, len);
                }
                other => panic!("unexpected error for {len} bytes: {other:?}"),
            }
        }
    }
}
