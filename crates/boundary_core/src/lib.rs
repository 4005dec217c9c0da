//! # Boundary Core
//!
//! Safe semantics behind the boundary C ABI.
//!
//! This crate provides:
//! - The fixed text payload and a bounded, NUL-terminating writer
//! - The fixed record values written into shared structures
//! - The closed enum set, its discriminant decoder and classifier
//! - Error types shared with the FFI layer
//!
//! Nothing here touches raw pointers; `boundary_ffi` turns foreign memory into
//! slices and references before calling in.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod payload;
mod record;
mod variant;

pub use error::{CoreError, CoreResult};
pub use payload::{required_capacity, write_payload, write_terminated, Written, PAYLOAD};
pub use record::{RecordValues, RECORD, SOME_CONSTANT};
pub use variant::Variant;
