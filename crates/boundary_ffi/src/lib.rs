//! # Boundary FFI
//!
//! Stable C ABI for the boundary demonstration library.
//!
//! This crate provides:
//! - Writing a fixed payload into caller-owned buffers
//! - Filling caller-owned records in place
//! - Enum transfer with an explicit `uint32_t` discriminant contract
//! - Library-allocated records with a matching release function
//! - Error code mapping and a per-thread last-error message
//!
//! The C declarations live in `include/boundary.h` at the workspace root.
//!
//! # Ownership conventions
//!
//! | Export | Ownership |
//! |---|---|
//! | `boundary_fill_buffer` | caller owns the buffer before and after |
//! | `boundary_fill_struct` | caller owns the record before and after |
//! | `boundary_handle_enum` | plain value, nothing transferred |
//! | `boundary_allocate_struct` | library allocates, caller owns the result |
//! | `boundary_free_struct` | caller hands the record back |
//!
//! No panic unwinds out of an export. Every function may be called from any
//! thread; the allocator behind records is thread-safe.

#![warn(missing_docs)]

mod buffer;
mod error;
mod record;
mod types;
mod variant;

pub use buffer::{boundary_fill_buffer, boundary_fill_buffer_checked, boundary_payload_capacity};
pub use error::{
    boundary_clear_error, boundary_get_last_error, clear_last_error, set_last_error,
    BoundaryResult, ErrorCode,
};
pub use record::{
    boundary_allocate_struct, boundary_allocate_struct_checked, boundary_allocator_is_libc,
    boundary_fill_struct, boundary_fill_struct_checked, boundary_free_struct,
};
pub use types::{
    BoundaryEnum, BoundaryRecord, BOUNDARY_ONE, BOUNDARY_SOME_CONSTANT, BOUNDARY_THREE,
    BOUNDARY_TWO,
};
pub use variant::{boundary_decode_enum, boundary_handle_enum};
