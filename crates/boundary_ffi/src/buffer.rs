//! Caller-owned buffer functions.
//!
//! The caller owns the buffer before and after every call here. The library
//! only ever touches the first `min(capacity, boundary_payload_capacity())`
//! bytes at `buf`. Those bytes must be writable; a dangling `buf` or a capacity
//! that overstates a short region is undefined behavior.

use crate::error::{
    clear_last_error, guard, null_pointer, report, set_last_error, BoundaryResult,
};
use boundary_core::{required_capacity, write_payload, CoreError, Written};

/// Borrows the part of the caller's region the payload can occupy.
///
/// Bytes past the terminated payload are never borrowed, even when `capacity`
/// is larger.
///
/// # Safety
///
/// `buf` must be valid for writes of `min(capacity, required_capacity())` bytes.
unsafe fn caller_slice<'a>(buf: *mut u8, capacity: usize) -> Option<&'a mut [u8]> {
    if buf.is_null() || capacity == 0 {
        return None;
    }
    Some(std::slice::from_raw_parts_mut(
        buf,
        capacity.min(required_capacity()),
    ))
}

/// Returns the capacity that holds the payload without truncation.
///
/// Includes the NUL terminator.
#[no_mangle]
pub extern "C" fn boundary_payload_capacity() -> usize {
    required_capacity()
}

/// Writes the payload into a caller buffer as a NUL-terminated string.
///
/// Never writes more than `capacity` bytes. A payload that does not fit is
/// truncated and the last byte of the buffer becomes the terminator. A null
/// `buf` or zero `capacity` writes nothing.
///
/// # Arguments
///
/// * `buf` - Caller-owned buffer
/// * `capacity` - Size of `buf` in bytes
///
/// # Safety
///
/// `buf` must be null or valid for writes of
/// `min(capacity, boundary_payload_capacity())` bytes.
#[no_mangle]
pub unsafe extern "C" fn boundary_fill_buffer(buf: *mut u8, capacity: usize) {
    guard("boundary_fill_buffer", (), || {
        clear_last_error();

        let Some(dst) = caller_slice(buf, capacity) else {
            if buf.is_null() {
                null_pointer("boundary_fill_buffer");
            } else {
                report(&CoreError::BufferTooSmall { capacity });
            }
            return;
        };

        if let Ok(written) = write_payload(dst) {
            trace_written(capacity, written);
        }
    });
}

/// Writes the payload into a caller buffer and reports the outcome.
///
/// # Arguments
///
/// * `buf` - Caller-owned buffer
/// * `capacity` - Size of `buf` in bytes
/// * `out_len` - Optional output for the payload bytes written, excluding NUL
///
/// # Returns
///
/// - `Ok` when the whole payload fit
/// - `Truncated` when it was cut short (buffer still terminated)
/// - `BufferTooSmall` for a zero capacity
/// - `NullPointer` for a null `buf`
///
/// # Safety
///
/// - `buf` must be null or valid for writes of
///   `min(capacity, boundary_payload_capacity())` bytes
/// - `out_len` must be null or a valid pointer
#[no_mangle]
pub unsafe extern "C" fn boundary_fill_buffer_checked(
    buf: *mut u8,
    capacity: usize,
    out_len: *mut usize,
) -> BoundaryResult {
    guard("boundary_fill_buffer_checked", BoundaryResult::Error, || {
        clear_last_error();

        if buf.is_null() {
            return null_pointer("boundary_fill_buffer_checked");
        }

        let written = match caller_slice(buf, capacity)
            .ok_or(CoreError::BufferTooSmall { capacity })
            .and_then(write_payload)
        {
            Ok(written) => written,
            Err(e) => return report(&e),
        };

        trace_written(capacity, written);

        if !out_len.is_null() {
            *out_len = written.len;
        }

        if written.truncated {
            set_last_error(format!(
                "payload truncated to {} of {} bytes",
                written.len,
                required_capacity() - 1
            ));
            BoundaryResult::Truncated
        } else {
            BoundaryResult::Ok
        }
    })
}

fn trace_written(capacity: usize, written: Written) {
    tracing::debug!(
        capacity,
        len = written.len,
        truncated = written.truncated,
        "payload written"
    );
}
