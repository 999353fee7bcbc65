// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider facade: one value wiring config, motion, layout, and haptics.
//!
//! ## Overview
//!
//! [`Slider`] is the surface a host renderer talks to. Input flows in as raw
//! drag events and frame deltas; output flows back as a scalar position, a
//! displayed value, per-frame tick visuals, and an edge-triggered haptic
//! pulse flag.
//!
//! ## Workflow
//!
//! 1) Build a [`SliderConfig`] (or take a preset) and construct the slider.
//! 2) On pointer down call [`on_drag_start`](Slider::on_drag_start); feed
//!    each move through [`on_drag_sample`](Slider::on_drag_sample); on
//!    release call [`on_drag_end_tracked`](Slider::on_drag_end_tracked) (or
//!    [`on_drag_end`](Slider::on_drag_end) with your own velocity).
//! 3) Drive the decay with [`step`](Slider::step) once per frame until the
//!    state settles.
//! 4) Each frame, read [`visible_ticks`](Slider::visible_ticks),
//!    [`displayed_value`](Slider::displayed_value), and drain
//!    [`should_pulse_haptic`](Slider::should_pulse_haptic).
//!
//! Tap-driven sliders skip the drag path entirely and push their externally
//! chosen value through [`set_target_value`](Slider::set_target_value).
//!
//! # Example
//!
//! ```rust
//! use tickline_slider::{Slider, SliderConfig};
//!
//! let mut slider = Slider::new(SliderConfig::linear())?;
//!
//! // One short drag to the right, then release with the tracked velocity.
//! slider.on_drag_start();
//! for i in 0..5 {
//!     slider.on_drag_sample(-0.4, i * 16);
//! }
//! slider.on_drag_end_tracked();
//!
//! // Drive the decay to rest.
//! while !slider.is_settled() {
//!     slider.step(16.0);
//! }
//! assert!(slider.position() > 2.0);
//! let ticks = slider.visible_ticks(480.0);
//! assert!(!ticks.is_empty());
//! # Ok::<(), tickline_slider::ConfigError>(())
//! ```

use alloc::vec::Vec;

use crate::config::SliderConfig;
use crate::layout::{self, TickLayout};
use crate::state::{SliderState, Snapshot};
use crate::tracker::{self, DragTracker};
use crate::types::{ConfigError, Phase, TickVisual};

/// A complete headless slider instance.
///
/// Owns the motion state machine exclusively; callers influence the position
/// only through the drag/step methods here.
#[derive(Clone, Debug)]
pub struct Slider {
    config: SliderConfig,
    state: SliderState,
    tracker: DragTracker,
    /// Externally-driven value used for selection in tap mode.
    target_value: f64,
    /// Crossing counter at the last haptic pulse (or the first-frame
    /// baseline for tap-driven sliders).
    previous_crossed: i64,
    pulse_pending: bool,
}

impl Slider {
    /// Validate `config` and build a slider resting at its initial position.
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = SliderState::new(
            config.initial_position,
            config.domain(),
            config.snap_to_integer,
            config.extended_tick,
        )?;
        Ok(Self {
            target_value: config.initial_position,
            previous_crossed: 0,
            pulse_pending: false,
            tracker: DragTracker::new(),
            state,
            config,
        })
    }

    /// The immutable configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Read-only view of the motion state machine.
    pub fn state(&self) -> &SliderState {
        &self.state
    }

    /// Current position in tick coordinates.
    pub fn position(&self) -> f64 {
        self.state.position()
    }

    /// Current motion phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// True when no decay is pending and the last one ran to completion.
    pub fn is_settled(&self) -> bool {
        self.state.is_settled()
    }

    /// The displayed value: the piecewise map applied to the continuous
    /// position in drag mode, or to the external target value in tap mode.
    pub fn displayed_value(&self) -> f64 {
        let value = if self.config.allow_drag {
            self.state.position()
        } else {
            self.target_value
        };
        self.config.map.value_at(value)
    }

    /// Set the externally-driven target value (tap mode), clamped to the
    /// domain.
    pub fn set_target_value(&mut self, value: f64) {
        self.target_value = self.config.domain().clamp(value);
    }

    /// Begin a drag: cancels any decay, arms haptics, resets the velocity
    /// window.
    pub fn on_drag_start(&mut self) {
        self.state.begin_drag();
        self.tracker.clear();
    }

    /// Apply one drag sample: `delta_ticks` of pointer travel (positive
    /// moves the content toward earlier ticks) at `timestamp_ms`.
    ///
    /// The position moves opposite the pointer and clamps to the drag
    /// envelope immediately, with no easing.
    pub fn on_drag_sample(&mut self, delta_ticks: f64, timestamp_ms: i64) {
        self.tracker.push(delta_ticks, timestamp_ms);
        let next = self.state.position() - delta_ticks;
        self.state.snap_to(next);
    }

    /// End the drag with an explicit pointer velocity in ticks per second.
    ///
    /// Projects the ballistic end position from the (sign-flipped, since the
    /// position moves opposite the pointer) velocity and starts the decay
    /// toward the resolved target.
    pub fn on_drag_end(&mut self, velocity: f64) {
        let target = tracker::project(self.state.position(), -velocity);
        self.state.decay_to(velocity, target);
    }

    /// End the drag using the velocity estimated from the sample window.
    pub fn on_drag_end_tracked(&mut self) {
        let velocity = self.tracker.velocity();
        self.on_drag_end(velocity);
    }

    /// Advance any in-flight decay by `dt_ms` and return the new position.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        self.state.step(dt_ms)
    }

    /// Halt any in-flight decay, freezing the position where it is.
    pub fn stop(&mut self) {
        self.state.stop();
    }

    /// Compute this frame's visible ticks for a window of the given width
    /// and update the haptic crossing state.
    pub fn visible_ticks(&mut self, window: f64) -> Vec<TickVisual> {
        let layout =
            layout::visible_ticks(&self.config, self.state.position(), self.target_value, window);
        self.update_haptic(&layout);
        layout.ticks
    }

    /// Edge-triggered haptic pulse flag; reading it consumes it.
    pub fn should_pulse_haptic(&mut self) -> bool {
        core::mem::take(&mut self.pulse_pending)
    }

    /// Persist the motion state as a [`Snapshot`] tuple.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Replace the motion state from a validated [`Snapshot`].
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<(), ConfigError> {
        self.state = SliderState::restore(snapshot)?;
        Ok(())
    }

    fn update_haptic(&mut self, layout: &TickLayout) {
        if !self.state.haptic_armed() {
            // Tap-driven sliders have no drag to arm haptics. Arm only after
            // the first layout read, with the crossing counter baselined to
            // it, so the initial selection never pulses.
            if !self.config.allow_drag {
                self.previous_crossed = layout.crossed;
                self.state.arm_haptic();
            }
            return;
        }
        let position = self.state.position();
        // Suppress the pulse when the previous one fired at the final
        // index + 1 and the position has settled back within one tick of the
        // end; a fling that overshoots then corrects at the boundary would
        // otherwise double-pulse.
        let suppressed =
            self.previous_crossed == layout.last + 1 && position >= (layout.last - 1) as f64;
        if layout.crossed != self.previous_crossed && self.config.allow_haptic && !suppressed {
            self.pulse_pending = true;
            self.previous_crossed = layout.crossed;
        }
    }
}
