// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration and named presets.
//!
//! ## Overview
//!
//! A [`SliderConfig`] is a plain data value: one struct carries the span
//! table, the motion flags, and the layout units. Presets are constructor
//! functions returning pre-filled values — there is no configurator type
//! hierarchy and no runtime type dispatch; rendering and updates key purely
//! on fields.
//!
//! Everything here is set once at construction and immutable afterwards.
//! [`validate`](SliderConfig::validate) is the fail-fast gate: a malformed
//! table, domain, spacing, alpha, or step never reaches the motion or layout
//! code.

use alloc::vec;

use tickline_scale::{Interval, PiecewiseMap, Span};

use crate::types::ConfigError;

/// Complete configuration for one slider instance.
#[derive(Clone, Debug)]
pub struct SliderConfig {
    /// Span table mapping tick coordinates to display values and slopes.
    /// Also the single source of the slider's domain bounds.
    pub map: PiecewiseMap,
    /// Decay targets commit to whole ticks instead of resting anywhere.
    pub snap_to_integer: bool,
    /// Render one extra virtual tick past the nominal end, with a wider
    /// drag/decay envelope to reach it.
    pub extended_tick: bool,
    /// Drag mode (continuous position drives selection) versus tap mode
    /// (an externally-set target value drives selection).
    pub allow_drag: bool,
    /// Whether tick crossings may pulse haptics at all.
    pub allow_haptic: bool,
    /// Ticks beyond this index are flagged [`OVER`](crate::types::TickFlags::OVER)
    /// in tap mode.
    pub overvalue_index: Option<i64>,
    /// Every `highlight_step`-th tick is a major tick.
    pub highlight_step: i64,
    /// Distance between adjacent ticks, in window units.
    pub tick_spacing: f64,
    /// Extra offset pushed onto the last visible tick when
    /// [`extended_tick`](Self::extended_tick) is active.
    pub extra_tick_width: f64,
    /// Opacity floor for ticks at the window edges, in `[0, 1]`.
    pub min_alpha: f64,
    /// Position the slider rests at before any interaction.
    pub initial_position: f64,
}

impl SliderConfig {
    /// A configuration over `map` with neutral defaults: drag mode, no
    /// snapping, no extended tick, major tick every 5, full edge opacity.
    pub fn new(map: PiecewiseMap) -> Self {
        Self {
            map,
            snap_to_integer: false,
            extended_tick: false,
            allow_drag: true,
            allow_haptic: true,
            overvalue_index: None,
            highlight_step: 5,
            tick_spacing: 12.0,
            extra_tick_width: 0.0,
            min_alpha: 1.0,
            initial_position: 0.0,
        }
    }

    /// The slider's domain, derived from the span table.
    pub fn domain(&self) -> Interval {
        self.map.domain()
    }

    /// Fail-fast validation of the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let domain = self.domain();
        if domain.end() <= domain.start() {
            return Err(ConfigError::InvalidDomain {
                min: domain.start(),
                max: domain.end(),
            });
        }
        if !(self.tick_spacing.is_finite() && self.tick_spacing > 0.0) {
            return Err(ConfigError::InvalidSpacing {
                spacing: self.tick_spacing,
            });
        }
        if !(0.0..=1.0).contains(&self.min_alpha) {
            return Err(ConfigError::InvalidAlpha {
                alpha: self.min_alpha,
            });
        }
        if self.highlight_step <= 0 {
            return Err(ConfigError::InvalidStep {
                step: self.highlight_step,
            });
        }
        Ok(())
    }

    /// Tap-select preset: domain 0..40 mapped onto display values 0..400
    /// with increasing density, an overvalue threshold at index 35, and
    /// selection driven by an external target value rather than dragging.
    pub fn over() -> Self {
        let map = PiecewiseMap::new(vec![
            span(0.0, 20.0, 0.0, 100.0),
            span(20.0, 30.0, 100.0, 200.0),
            span(30.0, 40.0, 200.0, 400.0),
        ])
        .expect("preset span table is contiguous");
        Self {
            allow_drag: false,
            overvalue_index: Some(35),
            tick_spacing: 60.0,
            ..Self::new(map)
        }
    }

    /// Free-scrolling drag preset: domain 0..15 mapped linearly onto 0..45,
    /// with a constant responsiveness coefficient of 5 and no snapping.
    pub fn linear() -> Self {
        let map = PiecewiseMap::new(vec![span(0.0, 15.0, 0.0, 45.0).with_slope(5.0)])
            .expect("preset span table is contiguous");
        Self {
            min_alpha: 0.1,
            ..Self::new(map)
        }
    }

    /// Snapping drag preset with an extended tick: a four-span table over a
    /// nominal 0..42 domain whose final span carries the extra virtual tick
    /// slightly past the end, flings committing to it by the midpoint rule.
    pub fn linear_extended() -> Self {
        let spacing = 12.0;
        let end = 42.0;
        // The extra tick is rendered (5.38 - 5.2) display units further out,
        // expressed in window units and folded back into tick coordinates for
        // the final span's domain end.
        let extra_tick_width = (5.38 - 5.2) * spacing / (8.0 / end);
        let last_end = end + (extra_tick_width + spacing) / spacing - 1.0;
        let map = PiecewiseMap::new(vec![
            span(0.0, 5.0, 0.1, 0.25).with_slope(1.0),
            span(5.0, 20.0, 0.25, 1.0).with_slope(1.0),
            span(20.0, end - 1.0, 1.0, 5.2).with_slope(1.0),
            span(end - 1.0, last_end, 5.2, 5.38).with_slope(1.0),
        ])
        .expect("preset span table is contiguous");
        Self {
            snap_to_integer: true,
            extended_tick: true,
            tick_spacing: spacing,
            extra_tick_width,
            min_alpha: 0.1,
            ..Self::new(map)
        }
    }
}

/// Shorthand for building a preset span from raw bounds.
///
/// Only used with constants known to be finite and ordered.
fn span(d0: f64, d1: f64, c0: f64, c1: f64) -> Span {
    let domain = Interval::new(d0, d1).expect("preset interval bounds are ordered");
    let codomain = Interval::new(c0, c1).expect("preset interval bounds are ordered");
    Span::linear(domain, codomain)
}
