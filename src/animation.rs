//! Custom per-tick particle animations.
//!
//! An [`Animation`] replaces the default linear move of a particle. Each
//! supported kind is a variant carrying its own typed state, cloned from the
//! template at spawn so every particle steps its state independently.
//!
//! # Animation Kinds
//!
//! | Kind | Effect |
//! |------|--------|
//! | [`Animation::FadeBurst`] | Spins the travel vector while fading out; dies at zero alpha |
//! | [`Animation::Flutter`] | Sideways sway layered on the linear fall, for snow and leaves |
//!
//! # Example
//!
//! ```ignore
//! // Slow snow that sways as it falls.
//! let snow = ParticleConfig {
//!     animation: Some(Animation::Flutter(Flutter::new(1.2, 0.08))),
//!     ..Default::default()
//! };
//! ```
//!
//! An animation is the sole writer of its own state and may freely rewrite
//! the particle's position, vector, color, or kill it outright.

use crate::particle::Particle;

/// A custom animation and its per-particle state.
#[derive(Clone, Debug)]
pub enum Animation {
    /// Spark-burst motion: spin and fade until invisible.
    FadeBurst(FadeBurst),
    /// Sideways sway on top of the linear fall.
    Flutter(Flutter),
}

impl Animation {
    /// Step the particle once. Invoked from [`Particle::tick`] instead of
    /// the default linear move.
    pub(crate) fn apply(&mut self, particle: &mut Particle) {
        match self {
            Animation::FadeBurst(state) => state.apply(particle),
            Animation::Flutter(state) => state.apply(particle),
        }
    }
}

/// State for [`Animation::FadeBurst`].
///
/// Each tick the particle keeps moving along its vector while the vector
/// itself is rotated by `angular_velocity * direction` degrees and the fill
/// alpha drops by `fade`. The particle dies when its alpha reaches zero, so
/// a burst cleans itself up even far from the surface edges.
#[derive(Clone, Copy, Debug)]
pub struct FadeBurst {
    /// Degrees added to the travel vector per tick.
    pub angular_velocity: f32,
    /// Alpha removed per tick.
    pub fade: f32,
    /// Spin direction, `1.0` clockwise or `-1.0` counter-clockwise.
    pub direction: f32,
}

impl FadeBurst {
    /// Clockwise fade-burst.
    pub fn new(angular_velocity: f32, fade: f32) -> Self {
        Self {
            angular_velocity,
            fade,
            direction: 1.0,
        }
    }

    /// Reverse the spin direction.
    pub fn counter_clockwise(mut self) -> Self {
        self.direction = -1.0;
        self
    }

    fn apply(&mut self, particle: &mut Particle) {
        particle.linear_move();
        particle.vector += self.angular_velocity * self.direction;
        particle.color.a = (particle.color.a - self.fade).max(0.0);
        if particle.color.a <= 0.0 {
            particle.kill();
        }
    }
}

/// State for [`Animation::Flutter`].
///
/// The phase advances by `frequency` radians per tick and the particle is
/// nudged `sin(phase) * amplitude` pixels sideways after its linear move.
#[derive(Clone, Copy, Debug)]
pub struct Flutter {
    /// Peak sideways displacement per tick, in pixels.
    pub amplitude: f32,
    /// Phase advance per tick, in radians.
    pub frequency: f32,
    phase: f32,
}

impl Flutter {
    /// Flutter starting at phase zero.
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    /// Start the sway mid-cycle so a batch does not swing in lockstep.
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    fn apply(&mut self, particle: &mut Particle) {
        particle.linear_move();
        self.phase += self.frequency;
        particle.position.x += self.phase.sin() * self.amplitude;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleConfig;
    use glam::Vec2;

    fn particle_with(animation: Animation) -> Particle {
        Particle::spawn(
            Vec2::new(100.0, 100.0),
            &ParticleConfig {
                animation: Some(animation.into()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_fade_burst_spins_and_fades() {
        let mut p = particle_with(Animation::FadeBurst(FadeBurst::new(10.0, 0.25)));
        let vector_before = p.vector;
        p.tick();
        assert!((p.vector - vector_before - 10.0).abs() < 1e-4);
        assert!((p.color.a - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_fade_burst_dies_at_zero_alpha() {
        let mut p = particle_with(Animation::FadeBurst(FadeBurst::new(0.0, 0.5)));
        p.tick();
        assert!(!p.is_dead());
        p.tick();
        assert!(p.is_dead());
    }

    #[test]
    fn test_flutter_sways_around_the_fall_line() {
        let mut p = particle_with(Animation::Flutter(Flutter::new(3.0, 1.0)));
        p.tick();
        // One tick at phase 1.0 rad pushes the particle sideways.
        assert!((p.position.x - 100.0 - 1.0f32.sin() * 3.0).abs() < 1e-3);
        // The linear fall still happens underneath the sway.
        assert!(p.position.y > 100.0);
    }

    #[test]
    fn test_flutter_state_advances_between_ticks() {
        let mut p = particle_with(Animation::Flutter(Flutter::new(1.0, 0.5)));
        p.tick();
        let first = p.position.x;
        p.tick();
        // Phase moved on, so the sway offset differs from the first tick.
        assert!((p.position.x - first - 0.5f32.sin()).abs() > 1e-6);
    }
}
