//! # Domain Cursor
//!
//! Bidirectional odometer over the points of a hyperrectangular domain.
//!
//! Each axis is a digit with its own range `[lower[i], upper[i]]`. Axis 0 is
//! the fastest-varying digit, so in 2D the cursor walks a row of `x` values
//! before moving to the next `y`:
//!
//! ```text
//! (0,0) -> (1,0) -> (0,1) -> (1,1) -> past-end
//! ```
//!
//! The cursor owns copies of the bounds and never borrows the domain.
//!
//! ## Terminal states
//!
//! Past the last point the cursor sits at `upper` in [`CursorState::PastEnd`];
//! before the first point it sits at `lower` in [`CursorState::BeforeBegin`].
//! The explicit state keeps the past-end sentinel distinct from the last
//! point even though both carry the coordinates of `upper`.
//!
//! - advancing at `PastEnd` (or retreating at `BeforeBegin`) is a no-op
//! - retreating at `PastEnd` resumes at the last point
//! - advancing at `BeforeBegin` resumes at the first point
//!
//! ## Equality
//!
//! Two cursors are equal when their positions and states are equal. Bounds
//! and carry index are ignored, so cursors taken from *different* domains
//! compare equal whenever their coordinates coincide. Only compare cursors
//! obtained from the same domain.

use tracing::trace;

use super::point::Point;

/// Where a cursor stands relative to its domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// On a point of the domain
    Interior,
    /// One past the last point (forward traversal exhausted)
    PastEnd,
    /// One before the first point (backward traversal exhausted)
    BeforeBegin,
}

/// Value-typed cursor over a hyperrectangular domain.
#[derive(Clone, Copy, Debug)]
pub struct DomainCursor<const D: usize> {
    /// Current point, or the sentinel value at a terminal state
    position: Point<D>,
    /// Copies of the domain limits
    lower: Point<D>,
    upper: Point<D>,
    /// Digit currently being stepped by the odometer
    carry: usize,
    state: CursorState,
}

impl<const D: usize> DomainCursor<D> {
    /// Create a cursor on `position` inside `[lower, upper]`.
    ///
    /// # Panics
    /// Panics if `position` lies outside the bounds.
    pub fn new(position: Point<D>, lower: Point<D>, upper: Point<D>) -> Self {
        assert!(
            (0..D).all(|i| lower[i] <= position[i] && position[i] <= upper[i]),
            "cursor position {position} lies outside [{lower}, {upper}]"
        );
        Self {
            position,
            lower,
            upper,
            carry: 0,
            state: CursorState::Interior,
        }
    }

    pub(crate) fn past_end(lower: Point<D>, upper: Point<D>) -> Self {
        Self {
            position: upper,
            lower,
            upper,
            carry: 0,
            state: CursorState::PastEnd,
        }
    }

    pub(crate) fn before_begin(lower: Point<D>, upper: Point<D>) -> Self {
        Self {
            position: lower,
            lower,
            upper,
            carry: 0,
            state: CursorState::BeforeBegin,
        }
    }

    /// Current position. At a terminal state this is the sentinel value.
    #[inline]
    pub fn current(&self) -> &Point<D> {
        &self.position
    }

    /// Current position, or `None` at a terminal state.
    #[inline]
    pub fn get(&self) -> Option<&Point<D>> {
        match self.state {
            CursorState::Interior => Some(&self.position),
            CursorState::PastEnd | CursorState::BeforeBegin => None,
        }
    }

    /// Where the cursor stands relative to its box.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// True at the past-end sentinel.
    pub fn is_past_end(&self) -> bool {
        self.state == CursorState::PastEnd
    }

    /// True at the before-begin sentinel.
    pub fn is_before_begin(&self) -> bool {
        self.state == CursorState::BeforeBegin
    }

    /// Axis the next step will start from. Zero between steps.
    pub fn carry_index(&self) -> usize {
        self.carry
    }

    /// Lower corner of the box being walked.
    pub fn lower(&self) -> &Point<D> {
        &self.lower
    }

    /// Upper corner of the box being walked.
    pub fn upper(&self) -> &Point<D> {
        &self.upper
    }

    /// Step to the next point in traversal order.
    pub fn advance(&mut self) {
        match self.state {
            CursorState::PastEnd => return,
            CursorState::BeforeBegin => {
                self.resume_at(self.lower);
                return;
            }
            CursorState::Interior => {}
        }

        let i = self.carry;
        if self.position[i] < self.upper[i] {
            self.position[i] += 1;
            self.carry = 0;
            return;
        }

        // Roll saturated digits back to their lower bound.
        while self.carry < D && self.position[self.carry] >= self.upper[self.carry] {
            self.position[self.carry] = self.lower[self.carry];
            self.carry += 1;
        }

        if self.carry < D {
            self.position[self.carry] += 1;
            self.carry = 0;
        } else {
            self.position = self.upper;
            self.carry = 0;
            self.state = CursorState::PastEnd;
            trace!(upper = %self.upper, "Cursor reached past-end sentinel");
        }
    }

    /// Step to the previous point in traversal order.
    pub fn retreat(&mut self) {
        match self.state {
            CursorState::BeforeBegin => return,
            CursorState::PastEnd => {
                self.resume_at(self.upper);
                return;
            }
            CursorState::Interior => {}
        }

        let i = self.carry;
        if self.position[i] > self.lower[i] {
            self.position[i] -= 1;
            self.carry = 0;
            return;
        }

        while self.carry < D && self.position[self.carry] <= self.lower[self.carry] {
            self.position[self.carry] = self.upper[self.carry];
            self.carry += 1;
        }

        if self.carry < D {
            self.position[self.carry] -= 1;
            self.carry = 0;
        } else {
            self.position = self.lower;
            self.carry = 0;
            self.state = CursorState::BeforeBegin;
            trace!(lower = %self.lower, "Cursor reached before-begin sentinel");
        }
    }

    /// Advance and return `self` for chaining.
    pub fn step_forward(&mut self) -> &mut Self {
        self.advance();
        self
    }

    /// Retreat and return `self` for chaining.
    pub fn step_backward(&mut self) -> &mut Self {
        self.retreat();
        self
    }

    fn resume_at(&mut self, position: Point<D>) {
        trace!(%position, from = ?self.state, "Cursor resumed traversal");
        self.position = position;
        self.carry = 0;
        self.state = CursorState::Interior;
    }
}

impl<const D: usize> PartialEq for DomainCursor<D> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.state == other.state
    }
}

impl<const D: usize> Eq for DomainCursor<D> {}
