// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the slider: motion phases, per-tick visuals, and errors.

use tickline_scale::ScaleError;

/// Phase of the motion state machine.
///
/// Carried by [`SliderState`](crate::state::SliderState); transitions are
/// driven by drag begin/end, decay completion, and [`stop`](crate::state::SliderState::stop).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// At rest; no drag or decay in progress.
    Idle,
    /// A pointer is down and drag samples are being applied.
    Dragging,
    /// A released fling is animating toward its resolved target.
    Decaying,
}

bitflags::bitflags! {
    /// Per-tick classification flags.
    ///
    /// A renderer maps these to colors and bar heights; the core only decides
    /// membership. `OVER` and `SELECTED` are independent: a tick past the
    /// overvalue index keeps its `OVER` flag whether or not it is selected.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TickFlags: u8 {
        /// Major tick (every `highlight_step`-th index).
        const HIGHLIGHTED = 0b0000_0001;
        /// Tick is at or below the current (scaled) position or target value.
        const SELECTED    = 0b0000_0010;
        /// Tick index exceeds the configured overvalue threshold.
        const OVER        = 0b0000_0100;
    }
}

/// One visible tick, recomputed every frame from the current position.
///
/// Ephemeral: derive it, render it, throw it away. Nothing in the core holds
/// on to tick visuals across position changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickVisual {
    /// Tick index in domain coordinates.
    pub index: i64,
    /// Offset from the window center, in the same linear units as spacing.
    pub offset: f64,
    /// Opacity in `[min_alpha, 1]`, fading toward the window edges.
    pub alpha: f64,
    /// Classification flags.
    pub flags: TickFlags,
}

/// Why a slider configuration or restored snapshot was rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The span table failed validation.
    Scale(ScaleError),
    /// The domain was empty or inverted (`max <= min`).
    InvalidDomain {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// Tick spacing must be a positive, finite number.
    InvalidSpacing {
        /// Requested spacing.
        spacing: f64,
    },
    /// The minimum alpha must lie in `[0, 1]`.
    InvalidAlpha {
        /// Requested minimum alpha.
        alpha: f64,
    },
    /// The highlight step must be positive.
    InvalidStep {
        /// Requested step.
        step: i64,
    },
    /// A restored position was NaN or infinite.
    NonFinitePosition {
        /// Requested position.
        position: f64,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Scale(e) => write!(f, "span table: {e}"),
            Self::InvalidDomain { min, max } => {
                write!(f, "domain [{min}, {max}] is empty or inverted")
            }
            Self::InvalidSpacing { spacing } => {
                write!(f, "tick spacing {spacing} is not positive and finite")
            }
            Self::InvalidAlpha { alpha } => {
                write!(f, "minimum alpha {alpha} is outside [0, 1]")
            }
            Self::InvalidStep { step } => write!(f, "highlight step {step} is not positive"),
            Self::NonFinitePosition { position } => {
                write!(f, "restored position {position} is not finite")
            }
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Scale(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScaleError> for ConfigError {
    fn from(e: ScaleError) -> Self {
        Self::Scale(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_flags_compose() {
        let flags = TickFlags::SELECTED | TickFlags::OVER;
        assert!(flags.contains(TickFlags::SELECTED));
        assert!(flags.contains(TickFlags::OVER));
        assert!(!flags.contains(TickFlags::HIGHLIGHTED));
    }

    #[test]
    fn scale_error_converts_and_chains() {
        use core::error::Error;
        let err: ConfigError = ScaleError::EmptyTable.into();
        assert_eq!(err, ConfigError::Scale(ScaleError::EmptyTable));
        assert!(err.source().is_some(), "scale errors should chain");
    }
}
