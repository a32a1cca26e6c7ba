//! Error type for invalid solver inputs.

use std::fmt;

/// Errors raised when a solver is called with arguments it cannot honor.
///
/// All variants are construction-time failures: the search itself never
/// fails once it has started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    /// The ring has fewer slots than there are distinct items.
    RingTooSmall {
        /// Number of distinct items.
        items: usize,
        /// Number of ring slots.
        slots: usize,
    },

    /// Exhaustive enumeration was requested for too many items.
    TooManyItems {
        /// Number of distinct items.
        items: usize,
        /// Configured enumeration ceiling.
        max: usize,
    },

    /// A solver configuration failed validation.
    InvalidConfig(String),

    /// An external optimizer returned a vector of the wrong length.
    DimensionMismatch {
        /// One coordinate per item.
        expected: usize,
        /// Length actually returned.
        got: usize,
    },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RingError::RingTooSmall { items, slots } => write!(
                f,
                "ring of {slots} slots cannot hold {items} distinct items"
            ),
            RingError::TooManyItems { items, max } => write!(
                f,
                "exhaustive search supports at most {max} items, got {items}"
            ),
            RingError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            RingError::DimensionMismatch { expected, got } => write!(
                f,
                "optimizer returned {got} coordinates, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for RingError {}

/// Checks that `slots` can host `items` injectively.
pub(crate) fn check_ring(items: usize, slots: usize) -> Result<(), RingError> {
    if slots < items {
        return Err(RingError::RingTooSmall { items, slots });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ring() {
        assert!(check_ring(4, 4).is_ok());
        assert!(check_ring(0, 0).is_ok());
        assert_eq!(
            check_ring(5, 4),
            Err(RingError::RingTooSmall { items: 5, slots: 4 })
        );
    }

    #[test]
    fn test_display() {
        let err = RingError::TooManyItems { items: 12, max: 8 };
        assert_eq!(
            err.to_string(),
            "exhaustive search supports at most 8 items, got 12"
        );
        let err = RingError::InvalidConfig("alpha must be in (0, 1)".into());
        assert!(err.to_string().contains("alpha"));
    }
}
