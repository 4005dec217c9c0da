//! Result codes, the last-error slot, and the panic guard.

use boundary_core::CoreError;
use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::panic::{self, AssertUnwindSafe};

/// Result code for checked FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryResult {
    /// Operation succeeded.
    Ok = 0,
    /// Generic error.
    Error = 1,
    /// Invalid argument.
    InvalidArgument = 2,
    /// Null pointer.
    NullPointer = 3,
    /// Allocation failed.
    OutOfMemory = 4,
    /// Buffer cannot hold the terminator.
    BufferTooSmall = 5,
    /// Payload was cut short; the buffer is still terminated.
    Truncated = 6,
}

impl BoundaryResult {
    /// Returns true if the result indicates success.
    pub fn is_ok(self) -> bool {
        self == BoundaryResult::Ok
    }

    /// Returns true if the result indicates an error.
    ///
    /// `Truncated` counts as an error: the caller got less than the full payload.
    pub fn is_err(self) -> bool {
        self != BoundaryResult::Ok
    }
}

/// Error code type for C compatibility.
pub type ErrorCode = i32;

impl From<BoundaryResult> for ErrorCode {
    fn from(result: BoundaryResult) -> Self {
        result as ErrorCode
    }
}

impl From<ErrorCode> for BoundaryResult {
    fn from(code: ErrorCode) -> Self {
        match code {
            0 => BoundaryResult::Ok,
            2 => BoundaryResult::InvalidArgument,
            3 => BoundaryResult::NullPointer,
            4 => BoundaryResult::OutOfMemory,
            5 => BoundaryResult::BufferTooSmall,
            6 => BoundaryResult::Truncated,
            _ => BoundaryResult::Error,
        }
    }
}

impl From<&CoreError> for BoundaryResult {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::UnknownDiscriminant { .. } => BoundaryResult::InvalidArgument,
            CoreError::BufferTooSmall { .. } => BoundaryResult::BufferTooSmall,
        }
    }
}

/// A last-error message, either formatted at runtime or fixed.
enum LastError {
    Owned(CString),
    Static(&'static CStr),
}

impl LastError {
    fn as_c_str(&self) -> &CStr {
        match self {
            LastError::Owned(s) => s.as_c_str(),
            LastError::Static(s) => *s,
        }
    }
}

// Thread-local storage for last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<LastError>> = const { RefCell::new(None) };
}

/// Sets the last error message.
pub fn set_last_error(message: impl Into<String>) {
    let msg = message.into();
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok().map(LastError::Owned);
    });
}

/// Sets the last error to a fixed message without allocating.
///
/// Used on allocation failure, where building a `CString` would abort.
pub fn set_static_error(message: &'static CStr) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = Some(LastError::Static(message));
    });
}

/// Clears the last error.
pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Records a core error and returns its result code.
pub(crate) fn report(err: &CoreError) -> BoundaryResult {
    set_last_error(err.to_string());
    BoundaryResult::from(err)
}

/// Records a null pointer argument.
pub(crate) fn null_pointer(export: &'static str) -> BoundaryResult {
    tracing::debug!(export, "null pointer argument");
    set_last_error("null pointer argument");
    BoundaryResult::NullPointer
}

/// Runs an export body, converting a panic into `fallback`.
///
/// Unwinding into a C frame is undefined behavior, so no panic may leave an
/// `extern "C"` function.
pub(crate) fn guard<T>(export: &'static str, fallback: T, body: impl FnOnce() -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(export, "panic caught at the C boundary");
            set_last_error(format!("internal panic in {export}"));
            fallback
        }
    }
}

/// Gets the last error message as a C string.
///
/// Returns null if no error is set.
///
/// # Safety
///
/// The returned pointer is valid until the next FFI call on this thread.
#[no_mangle]
pub extern "C" fn boundary_get_last_error() -> *const std::ffi::c_char {
    LAST_ERROR.with(|e| match e.borrow().as_ref() {
        Some(err) => err.as_c_str().as_ptr(),
        None => std::ptr::null(),
    })
}

/// Clears the last error message.
#[no_mangle]
pub extern "C" fn boundary_clear_error() {
    clear_last_error();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_codes() {
        assert_eq!(BoundaryResult::Ok as i32, 0);
        assert_eq!(BoundaryResult::Truncated as i32, 6);
        assert!(BoundaryResult::Ok.is_ok());
        assert!(BoundaryResult::Truncated.is_err());
    }

    #[test]
    fn error_code_conversion() {
        let code: ErrorCode = BoundaryResult::OutOfMemory.into();
        assert_eq!(code, 4);
        assert_eq!(BoundaryResult::from(code), BoundaryResult::OutOfMemory);

        assert_eq!(BoundaryResult::from(1), BoundaryResult::Error);
        assert_eq!(BoundaryResult::from(99), BoundaryResult::Error);
        assert_eq!(BoundaryResult::from(-1), BoundaryResult::Error);
    }

    #[test]
    fn core_error_mapping() {
        let err = CoreError::UnknownDiscriminant { value: 9 };
        assert_eq!(BoundaryResult::from(&err), BoundaryResult::InvalidArgument);

        let err = CoreError::BufferTooSmall { capacity: 0 };
        assert_eq!(report(&err), BoundaryResult::BufferTooSmall);
        let msg = unsafe { std::ffi::CStr::from_ptr(boundary_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "buffer too small: capacity 0");
        clear_last_error();
    }

    #[test]
    fn last_error() {
        clear_last_error();
        assert!(boundary_get_last_error().is_null());

        set_last_error("test error");
        let ptr = boundary_get_last_error();
        assert!(!ptr.is_null());

        // Safety: we just set it
        let msg = unsafe { std::ffi::CStr::from_ptr(ptr) };
        assert_eq!(msg.to_str().unwrap(), "test error");

        boundary_clear_error();
        assert!(boundary_get_last_error().is_null());
    }

    #[test]
    fn static_error() {
        set_static_error(c"fixed message");
        let msg = unsafe { std::ffi::CStr::from_ptr(boundary_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "fixed message");

        set_last_error("owned message");
        let msg = unsafe { std::ffi::CStr::from_ptr(boundary_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "owned message");
        clear_last_error();
    }

    #[test]
    fn guard_catches_panic() {
        clear_last_error();
        let value = guard("test_export", false, || panic!("boom"));
        assert!(!value);

        let msg = unsafe { std::ffi::CStr::from_ptr(boundary_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "internal panic in test_export");
        clear_last_error();
    }

    #[test]
    fn guard_passes_value() {
        assert_eq!(guard("test_export", 0, || 7), 7);
    }
}
