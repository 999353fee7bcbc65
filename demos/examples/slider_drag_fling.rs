// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag, fling, decay.
//!
//! This minimal example feeds a short drag gesture into a free-scrolling
//! slider, releases it with the tracked velocity, and steps the decay to rest
//! while printing the position, displayed value, and haptic pulses.
//!
//! Run:
//! - `cargo run -p tickline_demos --example slider_drag_fling`

use tickline_slider::{ConfigError, Slider, SliderConfig};

fn main() -> Result<(), ConfigError> {
    let mut slider = Slider::new(SliderConfig::linear())?;

    println!("== Drag ==");
    slider.on_drag_start();
    for frame in 0..12 {
        slider.on_drag_sample(-0.35, frame * 16);
        let _ = slider.visible_ticks(480.0);
        let pulse = if slider.should_pulse_haptic() {
            "  *tick*"
        } else {
            ""
        };
        println!(
            "  t={:>3}ms  pos={:6.3}  value={:6.2}{}",
            frame * 16,
            slider.position(),
            slider.displayed_value(),
            pulse
        );
    }

    println!("== Fling ==");
    slider.on_drag_end_tracked();
    let mut t = 0;
    while !slider.is_settled() {
        slider.step(16.0);
        let _ = slider.visible_ticks(480.0);
        let pulse = if slider.should_pulse_haptic() {
            "  *tick*"
        } else {
            ""
        };
        println!(
            "  t={:>3}ms  pos={:6.3}  value={:6.2}{}",
            t,
            slider.position(),
            slider.displayed_value(),
            pulse
        );
        t += 16;
    }

    println!("settled at {:.3}", slider.position());
    Ok(())
}
