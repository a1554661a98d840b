//! # Rain
//!
//! Falling rain from a line source across the top edge.
//!
//! ## What This Demonstrates
//!
//! - A degenerate spawn region (`height: 0`) as a line source
//! - Per-spawn generated speed, so streaks fall at different rates
//! - Rectangles as thin streaks
//!
//! ## Try This
//!
//! - Tilt the fall with `vector: 15.0.into()`
//! - Slow it down and widen the drops for drizzle
//! - Press Space to pause and resume mid-fall
//!
//! Run with: `cargo run --example rain`

use squall::prelude::*;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<(), SceneError> {
    env_logger::init();

    let rain = create_particle_system(SystemConfig {
        particle: ParticleConfig {
            size: Size::new(1.0, 5.0).into(),
            speed: Property::generated(|| random_range(10.0, 28.0)),
            vector: 0.0.into(),
            color: Color::WHITE.into(),
            shape: Shape::Rectangle.into(),
            ..Default::default()
        },
        emitter: EmitterConfig {
            width: WIDTH as f32,
            emit_per_tick: Some(Property::fixed(2)),
            ..Default::default()
        },
        ..Default::default()
    })
    .expect("static demo configuration is valid");

    SceneApp::new()
        .with_title("squall - rain")
        .with_size(WIDTH, HEIGHT)
        .with_background(Color::BLACK)
        .with_system(rain)
        .run()
}
