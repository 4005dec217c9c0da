//! Shared record functions.
//!
//! Two ownership shapes cross the boundary here:
//!
//! - `boundary_fill_struct` borrows a caller-owned record for the duration of
//!   the call. The library never frees it.
//! - `boundary_allocate_struct` hands a library-owned record to the caller.
//!   The caller must release it exactly once with `boundary_free_struct`.
//!
//! Allocate and free always go through the same allocator, selected at build
//! time (see [`boundary_allocator_is_libc`]). Releasing a record with any other
//! deallocator, or twice, is undefined behavior. Both allocators are
//! thread-safe, so records may be allocated and freed from any thread.

use crate::error::{clear_last_error, guard, null_pointer, set_static_error, BoundaryResult};
use crate::types::BoundaryRecord;
use std::ptr::NonNull;

#[cfg(not(feature = "libc-alloc"))]
mod allocator {
    use super::BoundaryRecord;
    use std::alloc::{alloc, Layout};
    use std::ptr::NonNull;

    pub(super) fn allocate() -> Option<NonNull<BoundaryRecord>> {
        // SAFETY: the layout has a non-zero size.
        let raw = unsafe { alloc(Layout::new::<BoundaryRecord>()) };
        NonNull::new(raw.cast())
    }

    /// # Safety
    ///
    /// `record` must come from [`allocate`] and not have been released.
    pub(super) unsafe fn release(record: NonNull<BoundaryRecord>) {
        // Allocated by the global allocator with this type's layout, which is
        // exactly what Box expects.
        drop(Box::from_raw(record.as_ptr()));
    }
}

#[cfg(feature = "libc-alloc")]
mod allocator {
    use super::BoundaryRecord;
    use std::mem::size_of;
    use std::ptr::NonNull;

    pub(super) fn allocate() -> Option<NonNull<BoundaryRecord>> {
        // malloc returns memory aligned for any fundamental type.
        // SAFETY: plain C allocation, checked for null below.
        let raw = unsafe { libc::malloc(size_of::<BoundaryRecord>()) };
        NonNull::new(raw.cast())
    }

    /// # Safety
    ///
    /// `record` must come from [`allocate`] (or C `malloc`) and not have been
    /// released.
    pub(super) unsafe fn release(record: NonNull<BoundaryRecord>) {
        libc::free(record.as_ptr().cast());
    }
}

/// Allocates and fully initializes a record, or returns None when out of memory.
///
/// The failure path must not allocate: the heap is already exhausted.
fn allocate_filled() -> Option<NonNull<BoundaryRecord>> {
    let Some(record) = allocator::allocate() else {
        set_static_error(c"out of memory allocating record");
        return None;
    };

    let mut value = BoundaryRecord::zeroed();
    value.fill();
    // SAFETY: freshly allocated, correctly sized and aligned. `write` does not
    // read or drop the uninitialized contents.
    unsafe { record.as_ptr().write(value) };

    tracing::debug!(ptr = ?record, "record allocated");
    Some(record)
}

/// Fills a caller-owned record with the fixed values.
///
/// Both fields are written before the call returns. A null record is ignored.
///
/// # Arguments
///
/// * `record` - Caller-owned record, borrowed for the call
#[no_mangle]
pub extern "C" fn boundary_fill_struct(record: Option<&mut BoundaryRecord>) {
    guard("boundary_fill_struct", (), || {
        clear_last_error();
        match record {
            Some(record) => record.fill(),
            None => {
                null_pointer("boundary_fill_struct");
            }
        }
    });
}

/// Fills a caller-owned record and reports the outcome.
///
/// # Returns
///
/// `BoundaryResult::Ok` on success, `NullPointer` for a null record.
#[no_mangle]
pub extern "C" fn boundary_fill_struct_checked(
    record: Option<&mut BoundaryRecord>,
) -> BoundaryResult {
    guard("boundary_fill_struct_checked", BoundaryResult::Error, || {
        clear_last_error();
        match record {
            Some(record) => {
                record.fill();
                BoundaryResult::Ok
            }
            None => null_pointer("boundary_fill_struct_checked"),
        }
    })
}

/// Allocates a record filled with the fixed values.
///
/// Ownership transfers to the caller, who must release it exactly once with
/// `boundary_free_struct`.
///
/// # Returns
///
/// The new record, or null when allocation fails. A non-null result is always
/// fully initialized.
#[no_mangle]
pub extern "C" fn boundary_allocate_struct() -> Option<NonNull<BoundaryRecord>> {
    guard("boundary_allocate_struct", None, || {
        clear_last_error();
        allocate_filled()
    })
}

/// Allocates a record and reports the outcome.
///
/// # Arguments
///
/// * `out_record` - Output pointer for the new record
///
/// # Returns
///
/// `BoundaryResult::Ok` on success, `OutOfMemory` or `NullPointer` otherwise.
/// `*out_record` is set to null on failure.
///
/// # Safety
///
/// `out_record` must be null or a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn boundary_allocate_struct_checked(
    out_record: *mut *mut BoundaryRecord,
) -> BoundaryResult {
    guard("boundary_allocate_struct_checked", BoundaryResult::Error, || {
        clear_last_error();

        if out_record.is_null() {
            return null_pointer("boundary_allocate_struct_checked");
        }

        match allocate_filled() {
            Some(record) => {
                *out_record = record.as_ptr();
                BoundaryResult::Ok
            }
            None => {
                *out_record = std::ptr::null_mut();
                BoundaryResult::OutOfMemory
            }
        }
    })
}

/// Releases a record allocated by this library.
///
/// # Arguments
///
/// * `record` - The record to release; null is a no-op
///
/// # Safety
///
/// The record must have been returned by `boundary_allocate_struct` or
/// `boundary_allocate_struct_checked`, must not have been released already, and
/// must not be used after this call.
#[no_mangle]
pub unsafe extern "C" fn boundary_free_struct(record: Option<NonNull<BoundaryRecord>>) {
    guard("boundary_free_struct", (), || {
        if let Some(record) = record {
            tracing::debug!(ptr = ?record, "record released");
            allocator::release(record);
        }
    });
}

/// Returns whether records are allocated with libc `malloc`.
///
/// When true, C hosts may also release records with `free()`.
#[no_mangle]
pub extern "C" fn boundary_allocator_is_libc() -> bool {
    cfg!(feature = "libc-alloc")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::boundary_get_last_error;
    use std::ptr;

    #[test]
    fn fill_zeroed_record() {
        let mut record = BoundaryRecord::zeroed();
        boundary_fill_struct(Some(&mut record));
        assert_eq!(record, BoundaryRecord::new(5, 10));

        boundary_fill_struct(Some(&mut record));
        assert_eq!(record, BoundaryRecord::new(5, 10));
    }

    #[test]
    fn fill_null_is_noop() {
        boundary_fill_struct(None);
        assert!(!boundary_get_last_error().is_null());
    }

    #[test]
    fn fill_checked() {
        let mut record = BoundaryRecord::new(1, 2);
        assert_eq!(
            boundary_fill_struct_checked(Some(&mut record)),
            BoundaryResult::Ok
        );
        assert_eq!(record, BoundaryRecord::new(5, 10));

        assert_eq!(boundary_fill_struct_checked(None), BoundaryResult::NullPointer);
    }

    #[test]
    fn allocate_and_free() {
        let record = boundary_allocate_struct().expect("allocation");
        // Safety: just allocated and initialized
        assert_eq!(unsafe { *record.as_ptr() }, BoundaryRecord::new(5, 10));
        assert!(boundary_get_last_error().is_null());

        unsafe { boundary_free_struct(Some(record)) };
    }

    #[test]
    fn allocations_are_distinct() {
        let first = boundary_allocate_struct().expect("allocation");
        let second = boundary_allocate_struct().expect("allocation");
        assert_ne!(first, second);

        unsafe {
            (*first.as_ptr()).x = 99;
            boundary_free_struct(Some(first));
            assert_eq!(*second.as_ptr(), BoundaryRecord::new(5, 10));
            boundary_free_struct(Some(second));
        }
    }

    #[test]
    fn allocate_checked() {
        let mut record: *mut BoundaryRecord = ptr::null_mut();
        let result = unsafe { boundary_allocate_struct_checked(&mut record) };
        assert_eq!(result, BoundaryResult::Ok);
        assert!(!record.is_null());

        unsafe {
            assert_eq!((*record).y, 10);
            boundary_free_struct(NonNull::new(record));
        }

        let result = unsafe { boundary_allocate_struct_checked(ptr::null_mut()) };
        assert_eq!(result, BoundaryResult::NullPointer);
    }

    #[test]
    fn free_null_is_noop() {
        unsafe { boundary_free_struct(None) };
    }

    #[test]
    fn allocator_flag() {
        assert_eq!(boundary_allocator_is_libc(), cfg!(feature = "libc-alloc"));
    }
}
