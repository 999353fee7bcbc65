// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span tables and the piecewise value lookup built on them.
//!
//! ## Overview
//!
//! A [`Span`] pairs a closed domain [`Interval`] with a two-point linear map
//! onto a codomain interval, plus a local slope. A [`PiecewiseMap`] is an
//! ordered, contiguous sequence of spans covering the global domain without
//! gaps or overlaps; adjacent spans share an endpoint exactly.
//!
//! The table is built once at configuration time and immutable afterwards,
//! so it can be shared read-only by every consumer without synchronization.

use alloc::vec::Vec;

use crate::error::ScaleError;
use crate::interval::Interval;

/// One entry of a span table: a domain interval, its linear map, and a slope.
///
/// The slope defaults to the codomain/domain span ratio (the derivative of
/// the linear map) and can be overridden with a constant via
/// [`with_slope`](Self::with_slope) when the responsiveness coefficient
/// intentionally differs from the displayed scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Span {
    domain: Interval,
    codomain: Interval,
    slope: f64,
}

impl Span {
    /// A span mapping `domain` linearly onto `codomain`.
    ///
    /// The slope is the codomain/domain length ratio; a degenerate domain
    /// yields a slope of `0.0` (its map is constant).
    pub fn linear(domain: Interval, codomain: Interval) -> Self {
        let slope = if domain.length() == 0.0 {
            0.0
        } else {
            codomain.length() / domain.length()
        };
        Self {
            domain,
            codomain,
            slope,
        }
    }

    /// Replace the derived slope with a constant.
    pub fn with_slope(self, slope: f64) -> Self {
        Self { slope, ..self }
    }

    /// Domain interval covered by this span.
    pub const fn domain(&self) -> Interval {
        self.domain
    }

    /// Codomain interval this span maps onto.
    pub const fn codomain(&self) -> Interval {
        self.codomain
    }

    /// Local slope (responsiveness coefficient) of this span.
    pub const fn slope(&self) -> f64 {
        self.slope
    }

    /// Apply the two-point linear map to `x`.
    ///
    /// `x` is expected to lie within the domain interval; callers go through
    /// [`PiecewiseMap::value_at`] which guarantees that.
    fn value_at(&self, x: f64) -> f64 {
        if self.domain.length() == 0.0 {
            return self.codomain.start();
        }
        self.codomain.start()
            + (self.codomain.length() / self.domain.length()) * (x - self.domain.start())
    }
}

/// An ordered, contiguous span table with value and slope lookup.
///
/// See the [crate docs](crate) for a worked example.
#[derive(Clone, Debug, PartialEq)]
pub struct PiecewiseMap {
    spans: Vec<Span>,
}

impl PiecewiseMap {
    /// Build a map from spans, validating the table.
    ///
    /// Fails fast on an empty table or on any span whose domain does not
    /// begin exactly at the previous span's end (gaps and overlaps are both
    /// reported as [`ScaleError::Discontiguous`]). Interval bounds were
    /// already validated when the intervals were constructed.
    pub fn new(spans: Vec<Span>) -> Result<Self, ScaleError> {
        if spans.is_empty() {
            return Err(ScaleError::EmptyTable);
        }
        for (i, pair) in spans.windows(2).enumerate() {
            if pair[1].domain.start() != pair[0].domain.end() {
                return Err(ScaleError::Discontiguous { index: i + 1 });
            }
        }
        Ok(Self { spans })
    }

    /// The spans of the table, in domain order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Global domain covered by the table, from the first span's start to the
    /// last span's end.
    pub fn domain(&self) -> Interval {
        // The table is non-empty and contiguous, so the combined domain is
        // itself a valid interval.
        let first = self.spans[0].domain();
        let last = self.spans[self.spans.len() - 1].domain();
        Interval::new(first.start(), last.end()).unwrap_or(first)
    }

    /// Display value at tick coordinate `x`.
    ///
    /// Inclusive containment lookup; on shared endpoints the earlier span
    /// wins (the maps agree there when the table is value-continuous). If no
    /// span contains `x` — it lies outside the global domain, or a
    /// floating-point edge slipped between spans — the input is clamped to
    /// the global domain and the lookup retried exactly once; the clamped
    /// value is guaranteed to lie in the first or last span.
    pub fn value_at(&self, x: f64) -> f64 {
        if let Some(span) = self.find(x) {
            return span.value_at(x);
        }
        let clamped = self.domain().clamp(x);
        match self.find(clamped) {
            Some(span) => span.value_at(clamped),
            // Only reachable for NaN input, which clamps to NaN.
            None => f64::NAN,
        }
    }

    /// Local slope at tick coordinate `x`, or `1.0` if no span contains `x`.
    ///
    /// Unlike [`value_at`](Self::value_at) this does not clamp: the slope is
    /// used as a responsiveness coefficient, and a neutral `1.0` outside the
    /// table is the intended behavior.
    pub fn slope_at(&self, x: f64) -> f64 {
        self.find(x).map_or(1.0, Span::slope)
    }

    fn find(&self, x: f64) -> Option<&Span> {
        self.spans.iter().find(|span| span.domain.contains(x))
    }
}
