// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible tick layout: indices, offsets, fade, and classification.
//!
//! ## Overview
//!
//! Given the current position, a window width `W`, and the configured tick
//! spacing `S` (same linear units), [`visible_ticks`] derives everything a
//! renderer needs for one frame:
//!
//! - the visible index window — `floor(W / S) + 1` ticks to each side of the
//!   position (the `+ 1` is one margin tick so edges never pop in), clamped
//!   to the domain;
//! - per-tick offsets from the window center, `(i - position) · S`, with the
//!   extra-tick width pushed onto the last index when the extended tick is
//!   active;
//! - a linear fade toward the window edges, floored at the configured
//!   minimum alpha;
//! - classification flags in one of two mutually exclusive modes: drag mode
//!   compares scaled tick indices against the scaled continuous position,
//!   tap mode against the externally-driven target value (with overvalue
//!   marking).
//!
//! The layout also carries the haptic crossing counter; see
//! [`TickLayout::crossed`] and the facade's pulse logic in
//! [`crate::slider`].
//!
//! Output is ephemeral: recompute on every position change, never store it.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::common::FloatExt;
use crate::config::SliderConfig;
use crate::types::{TickFlags, TickVisual};

/// One frame of tick layout.
#[derive(Clone, Debug)]
pub struct TickLayout {
    /// Visible ticks in index order.
    pub ticks: Vec<TickVisual>,
    /// First visible tick index.
    pub first: i64,
    /// Last visible tick index.
    pub last: i64,
    /// Haptic crossing counter: starts at [`first`](Self::first) and
    /// increments once per selected tick. A change between frames means a
    /// tick boundary was crossed.
    pub crossed: i64,
}

/// Compute the visible ticks for one frame.
///
/// `position` is the continuous motion position; `target_value` is the
/// externally-driven value used for selection in tap mode (ignored in drag
/// mode); `window` is the visible width in the same units as
/// [`tick_spacing`](SliderConfig::tick_spacing).
#[allow(
    clippy::cast_possible_truncation,
    reason = "tick indices are small integers; every cast source was floored or ceiled first"
)]
pub fn visible_ticks(
    config: &SliderConfig,
    position: f64,
    target_value: f64,
    window: f64,
) -> TickLayout {
    let domain = config.domain();
    let min_index = domain.start().floor() as i64;
    let max_index = domain.end().floor() as i64;

    // Both bounds clamp into the domain: with the extended drag envelope the
    // position can sit far past the end, and the window must not follow it
    // out (first > last would yield an empty list and a bogus crossing
    // counter).
    let segments = (window / config.tick_spacing).floor() as i64 + 1;
    let first = (position.ceil() as i64 - segments).clamp(min_index, max_index);
    let last = (position.floor() as i64 + segments).clamp(min_index, max_index);

    let half_window = window / 2.0;
    let (coefficient, reference) = if config.allow_drag {
        (config.map.slope_at(position), position)
    } else {
        (config.map.slope_at(target_value), target_value)
    };

    let mut ticks = Vec::with_capacity(usize::try_from((last - first + 1).max(0)).unwrap_or(0));
    let mut crossed = first;

    for index in first..=last {
        let index_f = index as f64;

        let mut offset = (index_f - position) * config.tick_spacing;
        if index == last && config.extended_tick {
            offset += config.extra_tick_width;
        }

        let fade = if half_window > 0.0 {
            (offset.abs() / half_window).min(1.0)
        } else {
            1.0
        };
        let alpha = 1.0 - (1.0 - config.min_alpha) * fade;

        let mut flags = TickFlags::empty();
        if index.rem_euclid(config.highlight_step) == 0 {
            flags |= TickFlags::HIGHLIGHTED;
        }
        if index_f * coefficient <= reference * coefficient {
            flags |= TickFlags::SELECTED;
            if index == last && config.extended_tick && config.allow_drag {
                // The extra virtual tick only counts as crossed once the
                // position has actually reached the domain end.
                if position >= domain.end() {
                    crossed += 1;
                }
            } else {
                crossed += 1;
            }
        }
        if let Some(overvalue) = config.overvalue_index {
            if !config.allow_drag && index > overvalue {
                flags |= TickFlags::OVER;
            }
        }

        ticks.push(TickVisual {
            index,
            offset,
            alpha,
            flags,
        });
    }

    TickLayout {
        ticks,
        first,
        last,
        crossed,
    }
}
