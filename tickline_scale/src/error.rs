// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time validation errors.
//!
//! All errors in this crate are raised while building an
//! [`Interval`](crate::Interval) or a [`PiecewiseMap`](crate::PiecewiseMap).
//! Lookups themselves never fail: out-of-domain inputs clamp or fall back as
//! documented on the lookup methods.

/// Why an interval or span table was rejected at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScaleError {
    /// The span table contained no spans.
    EmptyTable,
    /// An interval bound was NaN or infinite.
    NonFinite {
        /// Requested lower bound.
        start: f64,
        /// Requested upper bound.
        end: f64,
    },
    /// An interval's start was greater than its end.
    Inverted {
        /// Requested lower bound.
        start: f64,
        /// Requested upper bound.
        end: f64,
    },
    /// A span's domain did not begin exactly where the previous span ended,
    /// leaving a gap or an overlap in the table.
    Discontiguous {
        /// Index of the offending span in the input order.
        index: usize,
    },
}

impl core::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyTable => write!(f, "span table is empty"),
            Self::NonFinite { start, end } => {
                write!(f, "interval [{start}, {end}] has a non-finite bound")
            }
            Self::Inverted { start, end } => {
                write!(f, "interval [{start}, {end}] has start > end")
            }
            Self::Discontiguous { index } => {
                write!(
                    f,
                    "span {index} does not start exactly at the previous span's end"
                )
            }
        }
    }
}

impl core::error::Error for ScaleError {}
