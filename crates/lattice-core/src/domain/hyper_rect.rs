//! # Hyperrectangular Domain
//!
//! Closed axis-aligned box `[lower, upper]` of the integer lattice.
//!
//! INVARIANTS:
//! - `lower[i] <= upper[i]` on every axis, checked at construction
//! - immutable once built; cursors copy the bounds out

use std::fmt;

use tracing::{debug, warn};

use super::cursor::DomainCursor;
use super::point::{Coordinate, Point};
use super::points::Points;
use crate::errors::DomainError;

/// All lattice points between two corners, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HyperRectDomain<const D: usize> {
    lower: Point<D>,
    upper: Point<D>,
}

impl<const D: usize> HyperRectDomain<D> {
    /// Create a domain from its lower and upper corners.
    ///
    /// Fails with [`DomainError::InvalidDomain`] naming the first axis on
    /// which `lower` exceeds `upper`.
    pub fn new(lower: Point<D>, upper: Point<D>) -> Result<Self, DomainError> {
        if let Some(axis) = (0..D).find(|&i| lower[i] > upper[i]) {
            warn!(%lower, %upper, axis, "Rejected inverted domain bounds");
            return Err(DomainError::InvalidDomain {
                axis,
                lower: lower[axis],
                upper: upper[axis],
            });
        }

        debug!(%lower, %upper, dimension = D, "Domain constructed");
        Ok(Self { lower, upper })
    }

    /// Create a domain from runtime-sized corner coordinates.
    ///
    /// Corners of different length are an invalid domain; corners whose
    /// length is not `D` are a dimension mismatch.
    pub fn from_slices(lower: &[Coordinate], upper: &[Coordinate]) -> Result<Self, DomainError> {
        if lower.len() != upper.len() {
            warn!(
                lower_len = lower.len(),
                upper_len = upper.len(),
                "Rejected domain with corners of different dimension"
            );
            return Err(DomainError::InvalidDomainShape {
                lower_len: lower.len(),
                upper_len: upper.len(),
            });
        }
        Self::new(Point::from_slice(lower)?, Point::from_slice(upper)?)
    }

    /// Lower corner, the first point in traversal order.
    pub fn lower(&self) -> &Point<D> {
        &self.lower
    }

    /// Upper corner, the last point in traversal order.
    pub fn upper(&self) -> &Point<D> {
        &self.upper
    }

    /// Number of axes.
    pub const fn dimension(&self) -> usize {
        D
    }

    /// True iff `point` lies inside the closed box.
    #[inline]
    pub fn contains(&self, point: &Point<D>) -> bool {
        (0..D).all(|i| self.lower[i] <= point[i] && point[i] <= self.upper[i])
    }

    /// Membership test for coordinates of unchecked length.
    pub fn contains_slice(&self, coords: &[Coordinate]) -> Result<bool, DomainError> {
        Ok(self.contains(&Point::from_slice(coords)?))
    }

    /// Number of lattice points along `axis`.
    ///
    /// # Panics
    /// Panics if `axis >= D`.
    pub fn extent(&self, axis: usize) -> u128 {
        u128::from(self.upper[axis].abs_diff(self.lower[axis])) + 1
    }

    /// Number of lattice points along every axis.
    pub fn extents(&self) -> [u128; D] {
        std::array::from_fn(|axis| self.extent(axis))
    }

    /// Exact number of lattice points in the domain.
    ///
    /// Fails with [`DomainError::Overflow`] when the product does not fit in
    /// a `u128`. A single extent is at most `2^64`, so one-dimensional
    /// domains never overflow.
    pub fn size(&self) -> Result<u128, DomainError> {
        self.extents()
            .into_iter()
            .try_fold(1u128, |acc, extent| acc.checked_mul(extent))
            .ok_or(DomainError::Overflow { dimension: D })
    }

    /// A valid domain holds at least one point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Cursor on the first point (`lower`).
    pub fn begin(&self) -> DomainCursor<D> {
        DomainCursor::new(self.lower, self.lower, self.upper)
    }

    /// Past-end sentinel.
    pub fn end(&self) -> DomainCursor<D> {
        DomainCursor::past_end(self.lower, self.upper)
    }

    /// Cursor on the last point (`upper`).
    pub fn rbegin(&self) -> DomainCursor<D> {
        DomainCursor::new(self.upper, self.lower, self.upper)
    }

    /// Before-begin sentinel.
    pub fn rend(&self) -> DomainCursor<D> {
        DomainCursor::before_begin(self.lower, self.upper)
    }

    /// Iterate over every point, axis 0 fastest.
    pub fn iter(&self) -> Points<D> {
        Points::new(self)
    }
}

impl<const D: usize> IntoIterator for &HyperRectDomain<D> {
    type Item = Point<D>;
    type IntoIter = Points<D>;

    fn into_iter(self) -> Points<D> {
        self.iter()
    }
}

impl<const D: usize> fmt::Display for HyperRectDomain<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
