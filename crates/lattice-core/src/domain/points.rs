//! Std iterator over a domain, built on a pair of cursors.
//!
//! The front cursor walks forward from `lower`, the back cursor walks
//! backward from `upper`; iteration stops once they have met.

use std::iter::FusedIterator;

use super::cursor::DomainCursor;
use super::hyper_rect::HyperRectDomain;
use super::point::Point;

/// Iterator over every point of a [`HyperRectDomain`], axis 0 fastest.
#[derive(Clone, Debug)]
pub struct Points<const D: usize> {
    front: DomainCursor<D>,
    back: DomainCursor<D>,
    done: bool,
}

impl<const D: usize> Points<D> {
    pub(crate) fn new(domain: &HyperRectDomain<D>) -> Self {
        Self {
            front: domain.begin(),
            back: domain.rbegin(),
            done: false,
        }
    }

    /// Points not yet yielded from either end.
    ///
    /// `None` when the count does not fit in a `u128`, as for a
    /// two-dimensional box spanning the full coordinate range (`2^128`
    /// points).
    pub fn remaining(&self) -> Option<u128> {
        if self.done {
            return Some(0);
        }
        let lower = self.front.lower();
        let upper = self.front.upper();
        let first = ordinal(self.front.current(), lower, upper)?;
        let last = ordinal(self.back.current(), lower, upper)?;
        (last - first).checked_add(1)
    }
}

/// Position of `point` in traversal order, counted from `lower`.
fn ordinal<const D: usize>(point: &Point<D>, lower: &Point<D>, upper: &Point<D>) -> Option<u128> {
    let mut index = 0u128;
    let mut stride = 1u128;
    for axis in 0..D {
        let offset = u128::from(point[axis].abs_diff(lower[axis]));
        index = index.checked_add(offset.checked_mul(stride)?)?;
        if axis + 1 < D {
            let extent = u128::from(upper[axis].abs_diff(lower[axis])) + 1;
            stride = stride.checked_mul(extent)?;
        }
    }
    Some(index)
}

impl<const D: usize> Iterator for Points<D> {
    type Item = Point<D>;

    fn next(&mut self) -> Option<Point<D>> {
        if self.done {
            return None;
        }
        let point = *self.front.current();
        if self.front == self.back {
            self.done = true;
        } else {
            self.front.advance();
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::from(!self.done), None),
        }
    }
}

impl<const D: usize> DoubleEndedIterator for Points<D> {
    fn next_back(&mut self) -> Option<Point<D>> {
        if self.done {
            return None;
        }
        let point = *self.back.current();
        if self.front == self.back {
            self.done = true;
        } else {
            self.back.retreat();
        }
        Some(point)
    }
}

impl<const D: usize> FusedIterator for Points<D> {}
