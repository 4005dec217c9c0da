//! Fixed values written into shared records.

/// Exported constant carried alongside the record values.
pub const SOME_CONSTANT: u64 = 12_345_678;

/// Field values for a shared record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordValues {
    /// First field, 32-bit.
    pub x: u32,
    /// Second field, 64-bit.
    pub y: u64,
}

/// Values written by both the in-place fill and the heap allocation.
pub const RECORD: RecordValues = RecordValues { x: 5, y: 10 };

impl Default for RecordValues {
    fn default() -> Self {
        RECORD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fixed_record() {
        assert_eq!(RecordValues::default(), RecordValues { x: 5, y: 10 });
    }
}
