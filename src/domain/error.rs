/// Errors raised by [`Universe`](super::Universe) construction and cell access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UniverseError {
    #[error(
        "invalid universe dimensions {width}x{height}: both must be non-zero and their product must fit in memory"
    )]
    InvalidDimensions { width: u32, height: u32 },
    #[error("cell ({row}, {col}) is outside the {width}x{height} universe")]
    IndexOutOfRange {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message_covers_both_causes() {
        let msg = UniverseError::InvalidDimensions { width: u32::MAX, height: u32::MAX }.to_string();
        assert!(msg.contains("non-zero"), "{msg}");
        assert!(msg.contains("fit in memory"), "{msg}");
        assert!(msg.starts_with("invalid universe dimensions 4294967295x4294967295"));
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = UniverseError::IndexOutOfRange { row: 4, col: 0, width: 6, height: 4 };
        assert_eq!(err.to_string(), "cell (4, 0) is outside the 6x4 universe");
    }
}
