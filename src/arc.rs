//! Angular span and per-item angle allocation.
//!
//! Items are spread by a constant step over the *effective* arc: an excluded
//! endpoint pulls the boundary inward by one step, so nothing clusters at it.
//!
//! ```text
//!   start ●────●────●────● end      both included, n = 4, segments = 3
//!   start ○──●────●────●──○ end     ≈ neither included, n = 3, segments = 4
//! ```
//!
//! Angles are radians in the mathematical (counter-clockwise) sense and are
//! never normalised, so an arc may run backwards or wrap several turns.

use core::f64::consts::{FRAC_PI_2, PI};

use crate::error::LayoutError;

/// Angular interval the items are distributed over.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcSpan {
    /// Angle of the arc start, radians.
    pub start: f64,
    /// Angle of the arc end, radians. May be less than `start`.
    pub end: f64,
    /// Whether an item sits exactly on `start`.
    pub start_included: bool,
    /// Whether an item sits exactly on `end`.
    pub end_included: bool,
}

impl Default for ArcSpan {
    fn default() -> Self {
        Self::FULL_TURN
    }
}

impl ArcSpan {
    /// One full turn starting at the top, `[-π/2, 3π/2)`.
    ///
    /// The end is excluded so the first and last items don't coincide.
    pub const FULL_TURN: Self = Self {
        start: -FRAC_PI_2,
        end: 3.0 * FRAC_PI_2,
        start_included: true,
        end_included: false,
    };

    /// Upper half, left to right through the top: `[π, 0]`.
    pub const UPPER_HALF: Self = Self {
        start: PI,
        end: 0.0,
        start_included: true,
        end_included: true,
    };

    /// Arc from `start` to `end` with both endpoints included.
    pub const fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            start_included: true,
            end_included: true,
        }
    }

    /// Set whether an item sits on the arc start.
    pub const fn start_included(mut self, included: bool) -> Self {
        self.start_included = included;
        self
    }

    /// Set whether an item sits on the arc end.
    pub const fn end_included(mut self, included: bool) -> Self {
        self.end_included = included;
        self
    }

    /// Reject NaN or infinite endpoints.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.start.is_finite() && self.end.is_finite() {
            Ok(())
        } else {
            Err(LayoutError::NonFiniteArc)
        }
    }

    /// Whether the arc has collapsed to a single angle.
    ///
    /// Layouts stack every item on the origin in that case.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Number of angular steps needed to place `count` items.
    pub fn segments(&self, count: usize) -> usize {
        count.saturating_sub(1)
            + usize::from(!self.start_included)
            + usize::from(!self.end_included)
    }

    /// Angle between consecutive items. Zero when there is nothing to spread.
    pub fn step(&self, count: usize) -> f64 {
        match self.segments(count) {
            0 => 0.0,
            segments => (self.end - self.start) / segments as f64,
        }
    }

    /// The angle of every item, in order.
    pub fn angles(&self, count: usize) -> Angles {
        let step = self.step(count);
        let first = if self.start_included {
            self.start
        } else {
            self.start + step
        };
        Angles {
            first,
            step,
            next: 0,
            count,
        }
    }
}

/// Iterator over item angles produced by [`ArcSpan::angles`].
#[derive(Clone, Debug)]
pub struct Angles {
    first: f64,
    step: f64,
    next: usize,
    count: usize,
}

impl Iterator for Angles {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let angle = self.first + self.next as f64 * self.step;
        self.next += 1;
        Some(angle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Angles {}
