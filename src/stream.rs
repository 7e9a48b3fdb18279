//! src/stream.rs
//! Bounded-memory chunk loop shared by both directions
//!
//! One reusable [`CHUNK_SIZE`] buffer: read, transform in place, write.
//! A zero-length read ends the loop; any other read or write error is fatal.

use crate::aliases::ChunkBuffer;
use crate::consts::CHUNK_SIZE;
use crate::crypto::cfb::CfbStream;
use crate::error::AescfbError;
use crate::progress::ProgressSink;
use std::io::{ErrorKind, Read, Write};

/// Drive `cipher` over everything left in `source`, returning the byte count.
///
/// `total` is only passed through to `progress`.
pub fn pump<R, W, P>(
    source: &mut R,
    destination: &mut W,
    cipher: &mut CfbStream,
    total: u64,
    progress: &mut P,
) -> Result<u64, AescfbError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
    P: ProgressSink + ?Sized,
{
    let mut buffer = ChunkBuffer::new(vec![0u8; CHUNK_SIZE]);
    let mut processed: u64 = 0;

    loop {
        let n = match source.read(&mut buffer[..]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(AescfbError::ReadFailed(e)),
        };

        let chunk = &mut buffer[..n];
        cipher.transform(chunk);
        destination
            .write_all(chunk)
            .map_err(AescfbError::WriteFailed)?;

        processed += n as u64;
        progress.update(processed, total);
        tracing::trace!(chunk = n, processed, total, "chunk transformed");
    }

    destination.flush().map_err(AescfbError::WriteFailed)?;
    Ok(processed)
}
