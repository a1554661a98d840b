//! # Burst
//!
//! Click anywhere: a one-shot firework of fading sparks at the pointer.
//!
//! ## What This Demonstrates
//!
//! - Dynamically adding systems to a running scene (they animate at once)
//! - `number_of_emissions: 1` point-source bursts that die on their own
//! - The `FadeBurst` animation: sparks spin and fade to nothing, and the
//!   scene reaps each finished system automatically
//!
//! ## Try This
//!
//! - Raise the spark count range for bigger fireworks
//! - Make half the bursts spin counter-clockwise
//!
//! Run with: `cargo run --example burst`

use squall::prelude::*;

fn burst_config() -> SystemConfig {
    SystemConfig {
        particle: ParticleConfig {
            size: Property::generated(|| Size::square(random_range(2.0, 5.0))),
            speed: Property::generated(|| random_range(3.0, 8.0)),
            vector: Property::generated(|| random_range(0.0, 360.0)),
            color: Property::generated(random_color),
            shape: Shape::Circle.into(),
            animation: Some(Animation::FadeBurst(FadeBurst::new(4.0, 0.02)).into()),
            ..Default::default()
        },
        emitter: EmitterConfig {
            emit_per_tick: Some(Property::generated(|| random_int(6, 20) as u32)),
            number_of_emissions: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn main() -> Result<(), SceneError> {
    env_logger::init();

    SceneApp::new()
        .with_title("squall - click for bursts")
        .with_background(Color::rgb(0.05, 0.05, 0.08))
        .on_click(|position| system_at(position, burst_config()).ok())
        .run()
}
