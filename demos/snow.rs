//! # Snow
//!
//! Slow fluttering flakes, with the sky already full at startup.
//!
//! ## What This Demonstrates
//!
//! - The `Flutter` animation swaying flakes around their fall line
//! - `start_at_tick` fast-forward: the system runs 240 silent ticks on its
//!   first start, so snow is mid-flight the moment the window opens
//! - Generated sizes and phases keeping the flakes out of lockstep
//!
//! ## Try This
//!
//! - Remove `start_at_tick` and watch the sky fill from empty
//! - Raise the flutter amplitude for blizzard wobble
//!
//! Run with: `cargo run --example snow`

use squall::prelude::*;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<(), SceneError> {
    env_logger::init();

    let snow = create_particle_system(SystemConfig {
        particle: ParticleConfig {
            size: Property::generated(|| Size::square(random_range(1.0, 2.5))),
            speed: Property::generated(|| random_range(1.0, 2.0)),
            vector: 0.0.into(),
            color: Color::WHITE.into(),
            shape: Shape::Circle.into(),
            animation: Some(Property::generated(|| {
                let phase = random_range(0.0, std::f32::consts::TAU);
                Animation::Flutter(Flutter::new(0.8, 0.05).with_phase(phase))
            })),
            ..Default::default()
        },
        emitter: EmitterConfig {
            width: WIDTH as f32,
            emit_per_tick: Some(Property::fixed(2)),
            ..Default::default()
        },
        start_at_tick: 240,
    })
    .expect("static demo configuration is valid");

    SceneApp::new()
        .with_title("squall - snow")
        .with_size(WIDTH, HEIGHT)
        .with_background(Color::BLACK)
        .with_system(snow)
        .run()
}
