//! Error type shared by both table variants.

use thiserror::Error;

/// Errors reported by table construction and removal.
///
/// Construction rejects a zero bucket count before allocating anything.
/// A removal miss is recoverable: the table is left untouched and the caller
/// decides what a missing key means. Lookup misses are expressed as
/// `Option::None` rather than an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("capacity must be at least 1")]
    InvalidCapacity,
    #[error("key not found")]
    KeyNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: display text is stable; callers may surface it directly.
    #[test]
    fn display_messages() {
        assert_eq!(
            TableError::InvalidCapacity.to_string(),
            "capacity must be at least 1"
        );
        assert_eq!(TableError::KeyNotFound.to_string(), "key not found");
    }

    /// Invariant: the error converts into a boxed `std::error::Error`, so it
    /// composes with `?` in caller code.
    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = TableError::KeyNotFound.into();
        assert_eq!(err.to_string(), "key not found");
    }
}
