//! Error types for list operations.

use core::fmt;

/// Index argument outside the valid range for the operation.
///
/// Accessors (`get`, `remove`) accept `0..len`; `insert` additionally
/// accepts `len` itself. The offending index and the length at the time of
/// the call are carried for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The index that was passed in.
    pub index: usize,
    /// Length of the list when the call was made.
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of bounds for length {}", self.index, self.len)
    }
}

impl std::error::Error for OutOfBounds {}

/// Endpoint access (`first`/`last`) on an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list is empty")
    }
}

impl std::error::Error for Empty {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display() {
        let err = OutOfBounds { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 out of bounds for length 3");
    }

    #[test]
    fn empty_display() {
        assert_eq!(Empty.to_string(), "list is empty");
    }
}
