// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tickline Scale: a piecewise-linear mapping between tick coordinates and display values.
//!
//! ## Overview
//!
//! A slider that moves in whole "tick" units often needs to show values on a
//! different, non-uniform scale: the first twenty ticks might cover 0–100
//! while the next ten cover 100–200. This crate models that as an ordered,
//! contiguous sequence of [`Span`]s, each pairing a closed domain
//! [`Interval`] with a two-point linear map and a local slope.
//!
//! The [`PiecewiseMap`] built from those spans answers two questions:
//!
//! - [`value_at`](PiecewiseMap::value_at): what display value does tick
//!   coordinate `x` map to? Out-of-domain inputs are clamped to the global
//!   domain and the lookup is retried exactly once.
//! - [`slope_at`](PiecewiseMap::slope_at): what is the local slope
//!   (responsiveness coefficient) at `x`? Out-of-domain inputs fall back to
//!   `1.0` — deliberately without clamping, since the slope is only used as a
//!   comparison coefficient rather than a displayed number.
//!
//! Construction validates the span table up front: it must be non-empty, each
//! interval finite and ordered, and adjacent spans must share an endpoint
//! exactly. A malformed table is a configuration error, not something to
//! limp along with at runtime.
//!
//! # Example
//!
//! ```rust
//! use tickline_scale::{Interval, PiecewiseMap, Span};
//!
//! // Three spans covering tick coordinates 0..40, mapping onto 0..400 with
//! // increasing density: 0..20 → 0..100, 20..30 → 100..200, 30..40 → 200..400.
//! let map = PiecewiseMap::new(vec![
//!     Span::linear(Interval::new(0.0, 20.0)?, Interval::new(0.0, 100.0)?),
//!     Span::linear(Interval::new(20.0, 30.0)?, Interval::new(100.0, 200.0)?),
//!     Span::linear(Interval::new(30.0, 40.0)?, Interval::new(200.0, 400.0)?),
//! ])?;
//!
//! assert_eq!(map.value_at(25.0), 150.0);
//! // Shared endpoints agree from both sides.
//! assert_eq!(map.value_at(20.0), 100.0);
//! // Out-of-domain inputs clamp.
//! assert_eq!(map.value_at(-5.0), 0.0);
//! assert_eq!(map.value_at(45.0), 400.0);
//! // Local slope per span; unreachable coordinates fall back to 1.0.
//! assert_eq!(map.slope_at(35.0), 20.0);
//! # Ok::<(), tickline_scale::ScaleError>(())
//! ```
//!
//! A span's slope defaults to the codomain/domain ratio but can be overridden
//! with a constant when the display value and the responsiveness coefficient
//! intentionally differ:
//!
//! ```rust
//! use tickline_scale::{Interval, PiecewiseMap, Span};
//!
//! let map = PiecewiseMap::new(vec![
//!     Span::linear(Interval::new(0.0, 15.0)?, Interval::new(0.0, 45.0)?).with_slope(5.0),
//! ])?;
//! assert_eq!(map.value_at(5.0), 15.0);
//! assert_eq!(map.slope_at(5.0), 5.0);
//! # Ok::<(), tickline_scale::ScaleError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod interval;
pub mod map;

pub use error::ScaleError;
pub use interval::Interval;
pub use map::{PiecewiseMap, Span};
