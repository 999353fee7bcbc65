// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-to-select with an overvalue threshold.
//!
//! The tap preset disables dragging: an externally chosen value drives
//! selection, and ticks past the overvalue threshold are marked so a renderer
//! can color them as a warning zone.
//!
//! Run:
//! - `cargo run -p tickline_demos --example slider_tap_select`

use tickline_slider::{ConfigError, Slider, SliderConfig, TickFlags};

fn main() -> Result<(), ConfigError> {
    let mut slider = Slider::new(SliderConfig::over())?;

    for target in [10.0, 25.0, 38.0] {
        slider.set_target_value(target);
        let ticks = slider.visible_ticks(2400.0);

        let selected = ticks
            .iter()
            .filter(|t| t.flags.contains(TickFlags::SELECTED))
            .count();
        let over: Vec<i64> = ticks
            .iter()
            .filter(|t| t.flags.contains(TickFlags::OVER))
            .map(|t| t.index)
            .collect();

        println!(
            "target={:>4}  displayed={:>5.1}  selected={} ticks  over={:?}",
            target,
            slider.displayed_value(),
            selected,
            over
        );
        if slider.should_pulse_haptic() {
            println!("  *tick*");
        }
    }
    Ok(())
}
