//! Runs every boundary operation through the C ABI and collects the results.

use crate::config::HostConfig;
use boundary_core::Variant;
use boundary_ffi::{
    boundary_allocate_struct, boundary_allocator_is_libc, boundary_clear_error,
    boundary_fill_buffer_checked, boundary_fill_struct, boundary_free_struct,
    boundary_get_last_error, boundary_handle_enum, BoundaryRecord, BoundaryResult,
    BOUNDARY_SOME_CONSTANT,
};
use serde::Serialize;
use std::ffi::CStr;
use std::fmt::Write as _;
use tracing::{debug, info};

/// Record fields as reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordReport {
    /// First field.
    pub x: u32,
    /// Second field.
    pub y: u64,
}

impl From<BoundaryRecord> for RecordReport {
    fn from(record: BoundaryRecord) -> Self {
        Self {
            x: record.x,
            y: record.y,
        }
    }
}

/// Outcome of one host run.
#[derive(Debug, Serialize)]
pub struct HostReport {
    /// Capacity of the buffer handed to the library.
    pub capacity: usize,
    /// Buffer contents up to the terminator.
    pub text: String,
    /// Payload bytes written, excluding the terminator.
    pub written: usize,
    /// Result code of the buffer fill.
    pub buffer_result: String,
    /// Caller-owned record after the fill.
    pub record: RecordReport,
    /// Discriminant passed to the classifier.
    pub discriminant: u32,
    /// Name of the variant, when the discriminant is in domain.
    pub variant: Option<String>,
    /// Classifier result.
    pub classified: bool,
    /// Error reported by the classifier, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_error: Option<String>,
    /// Library-allocated record, if allocation succeeded.
    pub allocated: Option<RecordReport>,
    /// Allocator behind library-owned records.
    pub allocator: &'static str,
    /// Constant exported by the library.
    pub some_constant: u64,
}

/// Reads and clears the library's last error message.
fn take_last_error() -> Option<String> {
    let ptr = boundary_get_last_error();
    if ptr.is_null() {
        return None;
    }
    // Safety: non-null and valid until the next library call on this thread
    let message = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    boundary_clear_error();
    Some(message)
}

/// Runs the host scenario.
pub fn run(config: &HostConfig) -> HostReport {
    let mut buf = vec![0u8; config.capacity];
    let mut written = 0usize;
    // Safety: `buf` is valid for `capacity` bytes and `written` is a local
    let result =
        unsafe { boundary_fill_buffer_checked(buf.as_mut_ptr(), buf.len(), &mut written) };
    if let Some(error) = take_last_error() {
        debug!(?result, %error, "buffer fill reported");
    }
    let text = CStr::from_bytes_until_nul(&buf)
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut record = BoundaryRecord::zeroed();
    boundary_fill_struct(Some(&mut record));

    let classified = boundary_handle_enum(config.discriminant);
    let enum_error = take_last_error();

    let allocated = match boundary_allocate_struct() {
        Some(ptr) => {
            // Safety: non-null results are fully initialized and owned by us
            // until released below
            let value = unsafe { *ptr.as_ptr() };
            unsafe { boundary_free_struct(Some(ptr)) };
            Some(RecordReport::from(value))
        }
        None => {
            let error = take_last_error().unwrap_or_default();
            info!(%error, "record allocation failed");
            None
        }
    };

    HostReport {
        capacity: config.capacity,
        text,
        written,
        buffer_result: result_name(result).to_string(),
        record: record.into(),
        discriminant: config.discriminant,
        variant: Variant::try_from(config.discriminant)
            .ok()
            .as_ref()
            .map(ToString::to_string),
        classified,
        enum_error,
        allocated,
        allocator: if boundary_allocator_is_libc() {
            "libc"
        } else {
            "rust"
        },
        some_constant: BOUNDARY_SOME_CONSTANT,
    }
}

fn result_name(result: BoundaryResult) -> &'static str {
    match result {
        BoundaryResult::Ok => "ok",
        BoundaryResult::Error => "error",
        BoundaryResult::InvalidArgument => "invalid_argument",
        BoundaryResult::NullPointer => "null_pointer",
        BoundaryResult::OutOfMemory => "out_of_memory",
        BoundaryResult::BufferTooSmall => "buffer_too_small",
        BoundaryResult::Truncated => "truncated",
    }
}

/// Renders the report the way the C host prints it.
pub fn render_text(report: &HostReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.text);
    let _ = writeln!(out, "{} {}", report.record.x, report.record.y);
    let _ = writeln!(out, "enum test: {}", u8::from(report.classified));
    match report.allocated {
        Some(record) => {
            let _ = writeln!(out, "{} {}", record.x, record.y);
        }
        None => {
            let _ = writeln!(out, "allocation failed");
        }
    }
    out
}
