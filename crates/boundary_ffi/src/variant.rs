//! Enum transfer functions.
//!
//! Discriminants arrive as `uint32_t` and are decoded before use, so an
//! out-of-range value from the caller is never materialized as a Rust enum.

use crate::error::{clear_last_error, guard, null_pointer, report, BoundaryResult};
use crate::types::BoundaryEnum;
use boundary_core::Variant;

/// Classifies an enum value: true for `Two`, false otherwise.
///
/// Unknown discriminants fail closed: the result is false and the last error
/// names the rejected value.
#[no_mangle]
pub extern "C" fn boundary_handle_enum(value: BoundaryEnum) -> bool {
    guard("boundary_handle_enum", false, || {
        clear_last_error();
        match Variant::from_discriminant(value) {
            Ok(variant) => variant.classify(),
            Err(e) => {
                tracing::warn!(value, "unknown discriminant, failing closed");
                report(&e);
                false
            }
        }
    })
}

/// Validates a discriminant and returns its canonical value.
///
/// # Arguments
///
/// * `value` - Raw discriminant from the caller
/// * `out_value` - Output for the validated discriminant
///
/// # Returns
///
/// `BoundaryResult::Ok` for a known value, `InvalidArgument` for an unknown
/// one, `NullPointer` if `out_value` is null. `*out_value` is untouched on
/// failure.
///
/// # Safety
///
/// `out_value` must be null or a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn boundary_decode_enum(
    value: BoundaryEnum,
    out_value: *mut BoundaryEnum,
) -> BoundaryResult {
    guard("boundary_decode_enum", BoundaryResult::Error, || {
        clear_last_error();

        if out_value.is_null() {
            return null_pointer("boundary_decode_enum");
        }

        match Variant::from_discriminant(value) {
            Ok(variant) => {
                *out_value = variant.discriminant();
                BoundaryResult::Ok
            }
            Err(e) => report(&e),
        }
    })
}
