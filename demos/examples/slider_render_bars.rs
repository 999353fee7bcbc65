// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning tick visuals into renderable geometry.
//!
//! The slider core is headless; this example shows the last mile a renderer
//! would do: convert each tick's center-relative offset into a [`kurbo::Rect`]
//! bar inside a window, with major ticks drawn taller and alpha taken straight
//! from the layout.
//!
//! Run:
//! - `cargo run -p tickline_demos --example slider_render_bars`

use kurbo::Rect;
use tickline_slider::{ConfigError, Slider, SliderConfig, TickFlags, TickVisual};

const WINDOW_WIDTH: f64 = 480.0;
const WINDOW_HEIGHT: f64 = 64.0;
const BAR_WIDTH: f64 = 2.0;

/// Bar geometry for one tick, centered in the window.
fn bar_for_tick(tick: &TickVisual) -> Rect {
    let x = WINDOW_WIDTH / 2.0 + tick.offset;
    let height = if tick.flags.contains(TickFlags::HIGHLIGHTED) {
        WINDOW_HEIGHT * 0.75
    } else {
        WINDOW_HEIGHT * 0.45
    };
    let y0 = (WINDOW_HEIGHT - height) / 2.0;
    Rect::new(x - BAR_WIDTH / 2.0, y0, x + BAR_WIDTH / 2.0, y0 + height)
}

fn main() -> Result<(), ConfigError> {
    let mut slider = Slider::new(SliderConfig::linear_extended())?;

    // Park the slider mid-domain: drag out, release gently.
    slider.on_drag_start();
    for i in 0..10 {
        slider.on_drag_sample(-2.0, i * 16);
    }
    slider.on_drag_end(0.0);
    while !slider.is_settled() {
        slider.step(16.0);
    }

    println!("position {:.1}", slider.position());
    for tick in slider.visible_ticks(WINDOW_WIDTH) {
        let bar = bar_for_tick(&tick);
        // A real renderer would clip; here we just skip offscreen bars.
        if bar.x1 < 0.0 || bar.x0 > WINDOW_WIDTH {
            continue;
        }
        let selected = if tick.flags.contains(TickFlags::SELECTED) {
            " selected"
        } else {
            ""
        };
        println!(
            "  tick {:>2}  rect=({:6.1}, {:4.1})..({:6.1}, {:4.1})  alpha={:.2}{}",
            tick.index, bar.x0, bar.y0, bar.x1, bar.y1, tick.alpha, selected
        );
    }
    Ok(())
}
