// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tickline Slider: a headless, `no_std` tick-slider core with inertial motion.
//!
//! ## Overview
//!
//! This crate is the logic behind a horizontally scrolling tick ruler: the
//! user drags it, flings it, or taps a value, and a renderer draws the ticks
//! the crate reports. It owns no pixels and no event loop — the host feeds it
//! drag samples and frame deltas, and reads back positions, tick visuals,
//! display values, and haptic pulses.
//!
//! The pieces:
//!
//! - [`SliderConfig`]: a plain data value holding the span table (from
//!   [`tickline_scale`]), motion flags, and layout units, with named presets
//!   ([`over`](SliderConfig::over), [`linear`](SliderConfig::linear),
//!   [`linear_extended`](SliderConfig::linear_extended)).
//! - [`SliderState`]: the motion state machine — idle, dragging, or decaying
//!   toward a resolved target, with snapping and the extended-tick envelope.
//! - [`DragTracker`]: sliding-window velocity estimation over raw drag
//!   samples, plus ballistic end-position [`projection`](tracker::project).
//! - [`visible_ticks`]: per-frame tick layout — indices, offsets, alpha
//!   fade, and classification flags.
//! - [`Slider`]: the facade wiring all of the above together behind the
//!   drag/step/read surface a host talks to.
//!
//! ## Workflow
//!
//! ```rust
//! use tickline_slider::{Slider, SliderConfig, TickFlags};
//!
//! let mut slider = Slider::new(SliderConfig::linear())?;
//!
//! // Pointer down, a few moves, release.
//! slider.on_drag_start();
//! slider.on_drag_sample(-2.0, 0);
//! slider.on_drag_sample(-2.0, 16);
//! slider.on_drag_end_tracked();
//!
//! // Drive the decay one frame at a time.
//! while !slider.is_settled() {
//!     slider.step(16.0);
//!     let ticks = slider.visible_ticks(480.0);
//!     if slider.should_pulse_haptic() {
//!         // fire haptics
//!     }
//!     for tick in &ticks {
//!         let _selected = tick.flags.contains(TickFlags::SELECTED);
//!         // draw tick at `tick.offset` with opacity `tick.alpha`
//!     }
//! }
//! assert!(slider.position() > 4.0);
//! # Ok::<(), tickline_slider::ConfigError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): use the standard library's float math.
//! - `libm`: required for `no_std` builds without `std`; routes float math
//!   through the `libm` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;

pub mod config;
pub mod layout;
pub mod slider;
pub mod state;
pub mod tracker;
pub mod types;

pub use config::SliderConfig;
pub use layout::{TickLayout, visible_ticks};
pub use slider::Slider;
pub use state::{SliderState, Snapshot};
pub use tracker::DragTracker;
pub use types::{ConfigError, Phase, TickFlags, TickVisual};
