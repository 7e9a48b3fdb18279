//! src/encryptor/write.rs
//! Container write helpers

use crate::aliases::Iv16;
use crate::error::AescfbError;
use std::io::Write;

#[inline]
pub fn write_octets<W: Write + ?Sized>(writer: &mut W, data: &[u8]) -> Result<(), AescfbError> {
    writer.write_all(data).map_err(AescfbError::WriteFailed)
}

/// Write the cleartext IV header (offset 0..16).
#[inline]
pub fn write_iv<W: Write + ?Sized>(writer: &mut W, iv: &Iv16) -> Result<(), AescfbError> {
    write_octets(writer, &iv[..])
}
