// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed intervals on the real line.

use crate::error::ScaleError;

/// A closed interval `[start, end]` with finite, ordered bounds.
///
/// Immutable once constructed. Both endpoints are contained:
/// [`contains`](Self::contains) is inclusive on both sides, so adjacent
/// intervals in a span table may share an endpoint.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Create an interval, rejecting non-finite or inverted bounds.
    ///
    /// ```rust
    /// use tickline_scale::Interval;
    ///
    /// let iv = Interval::new(0.0, 20.0)?;
    /// assert!(iv.contains(20.0));
    /// assert!(Interval::new(20.0, 0.0).is_err());
    /// assert!(Interval::new(0.0, f64::NAN).is_err());
    /// # Ok::<(), tickline_scale::ScaleError>(())
    /// ```
    pub fn new(start: f64, end: f64) -> Result<Self, ScaleError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ScaleError::NonFinite { start, end });
        }
        if start > end {
            return Err(ScaleError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Lower bound.
    pub const fn start(self) -> f64 {
        self.start
    }

    /// Upper bound.
    pub const fn end(self) -> f64 {
        self.end
    }

    /// Length of the interval (`end - start`, zero for degenerate intervals).
    pub const fn length(self) -> f64 {
        self.end - self.start
    }

    /// Inclusive containment test.
    pub const fn contains(self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }

    /// `x` clamped into the interval.
    pub fn clamp(self, x: f64) -> f64 {
        x.clamp(self.start, self.end)
    }
}
