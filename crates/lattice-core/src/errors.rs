//! Domain error types.

use thiserror::Error;

use crate::domain::Coordinate;

/// Errors raised while building or querying a hyperrectangular domain.
///
/// Precondition violations (indexing a point out of range, placing a cursor
/// outside its bounds) are not represented here; those panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Lower corner exceeds the upper corner on some axis
    #[error("Invalid domain: lower bound {lower} exceeds upper bound {upper} on axis {axis}")]
    InvalidDomain {
        /// First inverted axis
        axis: usize,
        /// Lower bound on that axis
        lower: Coordinate,
        /// Upper bound on that axis
        upper: Coordinate,
    },

    /// The two corners were given with different dimensions
    #[error("Invalid domain: corner dimensions differ ({lower_len} vs {upper_len})")]
    InvalidDomainShape {
        /// Number of lower coordinates
        lower_len: usize,
        /// Number of upper coordinates
        upper_len: usize,
    },

    /// A point does not have the dimension of the domain
    #[error("Dimension mismatch: expected {expected} coordinates, got {actual}")]
    DimensionMismatch {
        /// Dimension of the domain
        expected: usize,
        /// Dimension supplied by the caller
        actual: usize,
    },

    /// The point count cannot be represented exactly
    #[error("Point count of {dimension}-dimensional domain overflows u128")]
    Overflow {
        /// Dimension of the domain
        dimension: usize,
    },
}

impl DomainError {
    /// True for both flavours of rejected construction.
    pub fn is_invalid_domain(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDomain { .. } | DomainError::InvalidDomainShape { .. }
        )
    }
}
