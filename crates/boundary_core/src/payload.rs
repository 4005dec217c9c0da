//! The fixed text payload and the bounded writer.

use crate::error::{CoreError, CoreResult};

/// Text written into caller buffers, without its NUL terminator.
pub const PAYLOAD: &[u8] = b"Hello, World!";

/// Outcome of a bounded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Written {
    /// Payload bytes copied, excluding the terminator.
    pub len: usize,
    /// Whether the payload was cut short to fit.
    pub truncated: bool,
}

/// Returns the capacity needed to hold [`PAYLOAD`] and its terminator.
pub const fn required_capacity() -> usize {
    PAYLOAD.len() + 1
}

/// Copies `src` into `dst` followed by a NUL byte.
///
/// At most `dst.len()` bytes are touched. When `src` does not fit, it is
/// truncated so that the terminator lands on the last byte of `dst`. Bytes
/// after the terminator are left as they were.
pub fn write_terminated(dst: &mut [u8], src: &[u8]) -> CoreResult<Written> {
    let Some(room) = dst.len().checked_sub(1) else {
        return Err(CoreError::BufferTooSmall { capacity: 0 });
    };

    let len = src.len().min(room);
    dst[..len].copy_from_slice(&src[..len]);
    dst[len] = 0;

    Ok(Written {
        len,
        truncated: len < src.len(),
    })
}

/// Writes [`PAYLOAD`] into `dst`.
pub fn write_payload(dst: &mut [u8]) -> CoreResult<Written> {
    write_terminated(dst, PAYLOAD)
}
