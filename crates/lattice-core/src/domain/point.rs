//! # Lattice Point
//!
//! A tuple of `D` signed integer coordinates. The dimension is a const
//! generic, so two points of different dimension are different types.
//! Coordinates arriving from untyped sources go through
//! [`Point::from_slice`], which is where a dimension mismatch is reported.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use crate::errors::DomainError;

/// Integer type of a single coordinate.
pub type Coordinate = i64;

/// A point of the integer lattice `Z^D`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point<const D: usize> {
    coords: [Coordinate; D],
}

impl<const D: usize> Point<D> {
    const NON_EMPTY: () = assert!(D >= 1, "lattice points need at least one coordinate");

    /// Create a point from its coordinates.
    pub const fn new(coords: [Coordinate; D]) -> Self {
        let () = Self::NON_EMPTY;
        Self { coords }
    }

    /// Point with every coordinate set to `value`.
    pub const fn splat(value: Coordinate) -> Self {
        Self::new([value; D])
    }

    /// The origin.
    pub const fn zero() -> Self {
        Self::splat(0)
    }

    /// Build a point from a runtime-sized slice.
    ///
    /// Fails with [`DomainError::DimensionMismatch`] unless the slice holds
    /// exactly `D` coordinates.
    pub fn from_slice(coords: &[Coordinate]) -> Result<Self, DomainError> {
        let coords: [Coordinate; D] =
            coords
                .try_into()
                .map_err(|_| DomainError::DimensionMismatch {
                    expected: D,
                    actual: coords.len(),
                })?;
        Ok(Self::new(coords))
    }

    /// Number of coordinates.
    pub const fn dimension(&self) -> usize {
        D
    }

    /// Coordinate on `axis`.
    ///
    /// # Panics
    /// Panics if `axis >= D`.
    #[inline]
    pub fn get(&self, axis: usize) -> Coordinate {
        self[axis]
    }

    /// Overwrite the coordinate on `axis`.
    ///
    /// # Panics
    /// Panics if `axis >= D`.
    #[inline]
    pub fn set(&mut self, axis: usize, value: Coordinate) {
        self[axis] = value;
    }

    /// All coordinates.
    pub fn coords(&self) -> &[Coordinate; D] {
        &self.coords
    }

    /// Consume the point, returning its coordinate array.
    pub fn into_inner(self) -> [Coordinate; D] {
        self.coords
    }

    /// Iterate over the coordinates, axis 0 first.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coords.iter().copied()
    }

    /// Component-wise sum, or `None` if any coordinate overflows.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        let mut out = *self;
        for (c, &r) in out.coords.iter_mut().zip(rhs.coords.iter()) {
            *c = c.checked_add(r)?;
        }
        Some(out)
    }

    /// Component-wise difference, or `None` if any coordinate overflows.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let mut out = *self;
        for (c, &r) in out.coords.iter_mut().zip(rhs.coords.iter()) {
            *c = c.checked_sub(r)?;
        }
        Some(out)
    }

    /// Component-wise minimum.
    pub fn inf(&self, other: &Self) -> Self {
        let mut out = *self;
        for (c, &o) in out.coords.iter_mut().zip(other.coords.iter()) {
            *c = (*c).min(o);
        }
        out
    }

    /// Component-wise maximum.
    pub fn sup(&self, other: &Self) -> Self {
        let mut out = *self;
        for (c, &o) in out.coords.iter_mut().zip(other.coords.iter()) {
            *c = (*c).max(o);
        }
        out
    }
}

impl<const D: usize> Index<usize> for Point<D> {
    type Output = Coordinate;

    #[inline]
    fn index(&self, axis: usize) -> &Coordinate {
        assert!(axis < D, "axis {axis} out of range for {D}-dimensional point");
        &self.coords[axis]
    }
}

impl<const D: usize> IndexMut<usize> for Point<D> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut Coordinate {
        assert!(axis < D, "axis {axis} out of range for {D}-dimensional point");
        &mut self.coords[axis]
    }
}

impl<const D: usize> From<[Coordinate; D]> for Point<D> {
    fn from(coords: [Coordinate; D]) -> Self {
        Self::new(coords)
    }
}

impl<const D: usize> TryFrom<&[Coordinate]> for Point<D> {
    type Error = DomainError;

    fn try_from(coords: &[Coordinate]) -> Result<Self, Self::Error> {
        Self::from_slice(coords)
    }
}

/// Component-wise sum.
///
/// # Panics
/// Overflows like `i64` addition: panics in debug builds, wraps in release.
/// Use [`Point::checked_add`] near the ends of the coordinate range.
impl<const D: usize> Add for Point<D> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (c, r) in self.coords.iter_mut().zip(rhs.coords) {
            *c += r;
        }
        self
    }
}

/// Component-wise difference.
///
/// # Panics
/// Overflows like `i64` subtraction: panics in debug builds, wraps in
/// release. Use [`Point::checked_sub`] near the ends of the coordinate range.
impl<const D: usize> Sub for Point<D> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (c, r) in self.coords.iter_mut().zip(rhs.coords) {
            *c -= r;
        }
        self
    }
}

impl<const D: usize> fmt::Display for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (axis, c) in self.coords.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
