//! Scripted end-to-end drag against a headless slider. Run with
//! `RUST_LOG=debug` to watch the state machine commit values.

use anyhow::Result;
use glide_core::{GestureEvent, SliderConfig, SliderController, Vec2};
use glide_ui::SliderFrame;

fn main() -> Result<()> {
    env_logger::init();

    let config = SliderConfig {
        value: 2.0,
        ..SliderConfig::default()
    };
    let mut slider = SliderController::new(config)?
        .on_values_change_start(|| log::info!("drag started"))
        .on_values_change(|vals| log::info!("value -> {}", vals[0]))
        .on_values_change_finish(|vals| log::info!("drag finished at {}", vals[0]));

    // Grab the handle and sweep it right in 14px increments (half a step
    // band each, on the default 0..=10 range over 280px).
    slider.handle(GestureEvent::Start);
    for i in 1..=10 {
        slider.handle(GestureEvent::Move {
            dx: 14.0 * i as f32,
            dy: 0.0,
        });
    }
    slider.handle(GestureEvent::End);

    let frame = SliderFrame::compute(slider.output(), slider.config(), Vec2::default());
    println!(
        "fill {:.0}px, marker at ({:.0}, {:.0}), value {}",
        frame.fill.w, frame.marker.x, frame.marker.y, frame.value
    );
    Ok(())
}
