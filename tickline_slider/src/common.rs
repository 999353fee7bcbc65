// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float function shims for `no_std` builds.
//!
//! With `std` enabled the inherent `f64` methods are used and this module is
//! empty. Without `std`, the [`FloatExt`] trait routes the handful of float
//! functions this crate needs through `libm`, following the same arrangement
//! kurbo uses for its `no_std` support.

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("tickline_slider requires either the `std` or `libm` feature");

/// The float functions used by this crate, backed by `libm`.
#[cfg(not(feature = "std"))]
pub(crate) trait FloatExt: Sized {
    /// Absolute value.
    fn abs(self) -> Self;
    /// Largest integer less than or equal to the value.
    fn floor(self) -> Self;
    /// Smallest integer greater than or equal to the value.
    fn ceil(self) -> Self;
    /// Nearest integer, ties away from zero.
    fn round(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
}

#[cfg(not(feature = "std"))]
impl FloatExt for f64 {
    #[inline]
    fn abs(self) -> Self {
        libm::fabs(self)
    }

    #[inline]
    fn floor(self) -> Self {
        libm::floor(self)
    }

    #[inline]
    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    #[inline]
    fn round(self) -> Self {
        libm::round(self)
    }

    #[inline]
    fn ln(self) -> Self {
        libm::log(self)
    }
}
