//! Default demo: a confetti stream from the top-left corner.
//!
//! Run with: `cargo run`

use squall::prelude::*;

fn main() -> Result<(), SceneError> {
    env_logger::init();

    let confetti = create_particle_system(SystemConfig {
        particle: ParticleConfig {
            size: Property::generated(|| {
                let side = random_range(6.0, 13.0);
                Size::square(side)
            }),
            speed: Property::generated(|| random_range(14.0, 18.0)),
            vector: Property::generated(|| random_range(25.0, 65.0)),
            color: Property::generated(random_color),
            shape: Property::generated(|| {
                if random_int(0, 1) == 0 {
                    Shape::Circle
                } else {
                    Shape::Rectangle
                }
            }),
            ..Default::default()
        },
        emitter: EmitterConfig {
            emit_per_tick: Some(Property::fixed(20)),
            max_living_particles: Some(20),
            ..Default::default()
        },
        ..Default::default()
    })
    .expect("static demo configuration is valid");

    SceneApp::new()
        .with_title("squall - confetti")
        .with_background(Color::WHITE)
        .with_system(confetti)
        .run()
}
