//! Type definitions for FFI.

use boundary_core::{RecordValues, Variant, SOME_CONSTANT};

/// Record shared with the caller.
///
/// Field order and widths are the layout contract: `uint32_t x` followed by
/// `uint64_t y`, padded per the C rules of the target.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundaryRecord {
    /// First field.
    pub x: u32,
    /// Second field.
    pub y: u64,
}

impl BoundaryRecord {
    /// Creates a record from explicit values.
    pub fn new(x: u32, y: u64) -> Self {
        Self { x, y }
    }

    /// Creates a zeroed record.
    pub fn zeroed() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Overwrites both fields with the fixed record values.
    pub fn fill(&mut self) {
        *self = Self::from(RecordValues::default());
    }
}

impl From<RecordValues> for BoundaryRecord {
    fn from(values: RecordValues) -> Self {
        Self {
            x: values.x,
            y: values.y,
        }
    }
}

/// Enum discriminant as it crosses the boundary.
///
/// A plain `u32` rather than a `#[repr(u32)]` enum: a foreign caller can pass
/// any bit pattern, and an out-of-range Rust enum value is undefined behavior.
pub type BoundaryEnum = u32;

/// Discriminant of `One`.
pub const BOUNDARY_ONE: BoundaryEnum = Variant::One.discriminant();
/// Discriminant of `Two`.
pub const BOUNDARY_TWO: BoundaryEnum = Variant::Two.discriminant();
/// Discriminant of `Three`.
pub const BOUNDARY_THREE: BoundaryEnum = Variant::Three.discriminant();

/// Constant exported for C hosts.
#[no_mangle]
pub static BOUNDARY_SOME_CONSTANT: u64 = SOME_CONSTANT;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn record_layout() {
        assert_eq!(mem::offset_of!(BoundaryRecord, x), 0);
        assert_eq!(
            mem::offset_of!(BoundaryRecord, y),
            mem::align_of::<u64>().max(mem::size_of::<u32>())
        );
        assert_eq!(
            mem::size_of::<BoundaryRecord>(),
            mem::offset_of!(BoundaryRecord, y) + mem::size_of::<u64>()
        );
        assert_eq!(mem::align_of::<BoundaryRecord>(), mem::align_of::<u64>());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn record_layout_64() {
        assert_eq!(mem::size_of::<BoundaryRecord>(), 16);
        assert_eq!(mem::offset_of!(BoundaryRecord, y), 8);
    }

    #[test]
    fn fill_overwrites() {
        let mut record = BoundaryRecord::new(u32::MAX, u64::MAX);
        record.fill();
        assert_eq!(record, BoundaryRecord::new(5, 10));
    }

    #[test]
    fn enum_discriminants() {
        assert_eq!(BOUNDARY_ONE, 1);
        assert_eq!(BOUNDARY_TWO, 2);
        assert_eq!(BOUNDARY_THREE, 3);
    }

    #[test]
    fn some_constant() {
        assert_eq!(BOUNDARY_SOME_CONSTANT, 12_345_678);
    }
}
