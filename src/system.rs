//! A particle system: one emitter plus the particles it has produced.
//!
//! The system advances and culls its population each tick and draws the
//! survivors. Its lifecycle is a small state machine:
//!
//! ```text
//! constructed --start()--> running <--start()/stop()--> stopped
//!                             \________ dead (terminal) ________/
//! ```
//!
//! A system is dead exactly when its emitter is dead and no live particles
//! remain; the state is terminal and the owning scene reaps it on the next
//! frame. `stop` is a pure pause: particles, counters and spawn times all
//! survive a stop/start round trip untouched.

use glam::Vec2;

use crate::emitter::{Emitter, EmitterConfig};
use crate::error::ConfigError;
use crate::particle::{Particle, ParticleConfig};
use crate::surface::{Bounds, RenderSurface};
use crate::visuals::Shape;

/// Everything needed to build a [`ParticleSystem`].
#[derive(Clone, Debug, Default)]
pub struct SystemConfig {
    /// Template for spawned particles.
    pub particle: ParticleConfig,
    /// Emission rules.
    pub emitter: EmitterConfig,
    /// Fast-forward: run this many silent ticks on the very first start so
    /// the population already looks mid-flight (snow that has been falling
    /// for a while). Happens at most once in the system's lifetime.
    pub start_at_tick: u32,
}

/// One emitter and the ordered set of particles it has produced.
#[derive(Debug)]
pub struct ParticleSystem {
    emitter: Emitter,
    particles: Vec<Particle>,
    bounds: Option<Bounds>,
    running: bool,
    dead: bool,
    fast_forward: u32,
    fast_forwarded: bool,
}

impl ParticleSystem {
    /// Build a system from its configuration.
    ///
    /// Configuration problems surface here as [`ConfigError`] and are fatal
    /// to this construction only.
    pub fn new(config: SystemConfig) -> Result<Self, ConfigError> {
        let emitter = Emitter::new(config.particle, config.emitter)?;
        Ok(Self {
            emitter,
            particles: Vec::new(),
            bounds: None,
            running: false,
            dead: false,
            fast_forward: config.start_at_tick,
            fast_forwarded: false,
        })
    }

    /// Begin (or resume) ticking. No-op when already running.
    ///
    /// The very first start runs the configured fast-forward: that many
    /// ticks back-to-back with rendering suppressed. Later starts resume
    /// exactly where [`stop`](Self::stop) left off.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;

        if !self.fast_forwarded {
            self.fast_forwarded = true;
            for _ in 0..self.fast_forward {
                self.advance(None);
            }
        }
    }

    /// Pause ticking without discarding any state.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the system is currently ticking.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the emitter is dead and the last particle is gone.
    /// Terminal; a dead system never animates again.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Number of currently live particles.
    #[inline]
    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    /// The live particles, oldest survivors first.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The system's emitter.
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Adopt the surface bounds used for boundary culling. Called by the
    /// scene when the system is added.
    pub(crate) fn bind(&mut self, bounds: Bounds) {
        self.bounds = Some(bounds);
    }

    /// Run one frame step, drawing survivors onto `surface`.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) {
        self.advance(Some(surface));
    }

    /// One tick, with rendering optional so fast-forward can run silently.
    ///
    /// Order matters and is observable: the emitter sees the live count
    /// before anyone moves; existing particles tick and face the boundary
    /// rule; survivors are drawn oldest-first while the live set is rebuilt;
    /// the fresh batch joins at the end, untouched until the next tick.
    fn advance(&mut self, mut surface: Option<&mut dyn RenderSurface>) {
        if !self.running || self.dead {
            return;
        }

        let fresh = self.emitter.emit(self.particles.len());

        let mut living = Vec::with_capacity(self.particles.len());
        for mut particle in self.particles.drain(..) {
            particle.tick();

            if let Some(bounds) = self.bounds {
                if !bounds.contains(particle.position) {
                    particle.kill();
                }
            }

            if particle.is_dead() {
                continue;
            }
            if let Some(surface) = surface.as_deref_mut() {
                draw_particle(&particle, surface);
            }
            living.push(particle);
        }

        if let Some(batch) = fresh {
            living.extend(batch);
        }
        self.particles = living;

        if self.emitter.is_dead() && self.particles.is_empty() {
            self.dead = true;
            log::debug!("particle system finished: emitter spent and no particles left");
        }
    }
}

fn draw_particle(particle: &Particle, surface: &mut dyn RenderSurface) {
    surface.begin_shape();
    surface.set_fill_color(particle.color);
    match particle.shape {
        Shape::Circle => surface.draw_circle(particle.position, particle.size.w),
        Shape::Rectangle => surface.draw_rect(particle.position, particle.size),
    }
    surface.end_shape();
}

/// Helper for spawning burst-style systems at a point, used by click
/// handlers and demos.
pub fn system_at(position: Vec2, mut config: SystemConfig) -> Result<ParticleSystem, ConfigError> {
    config.emitter.x = position.x;
    config.emitter.y = position.y;
    ParticleSystem::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::Property;

    fn capped_system(cap: usize) -> ParticleSystem {
        ParticleSystem::new(SystemConfig {
            emitter: EmitterConfig {
                emit_per_tick: Some(Property::fixed(5)),
                max_living_particles: Some(cap),
                ..Default::default()
            },
            ..Default::default()
        })
        .unwrap()
    }

    /// Minimal surface for unit tests; integration tests use a recording
    /// double with richer assertions.
    struct NullSurface(Bounds);

    impl RenderSurface for NullSurface {
        fn bounds(&self) -> Bounds {
            self.0
        }
        fn clear(&mut self, _bounds: Bounds) {}
        fn begin_shape(&mut self) {}
        fn end_shape(&mut self) {}
        fn set_fill_color(&mut self, _color: crate::visuals::Color) {}
        fn draw_circle(&mut self, _center: Vec2, _radius: f32) {}
        fn draw_rect(&mut self, _origin: Vec2, _size: crate::visuals::Size) {}
    }

    #[test]
    fn test_tick_does_nothing_until_started() {
        let mut surface = NullSurface(Bounds::new(100.0, 100.0));
        let mut system = capped_system(10);
        system.bind(surface.bounds());

        system.tick(&mut surface);
        assert_eq!(system.live_count(), 0);

        system.start();
        system.tick(&mut surface);
        assert_eq!(system.live_count(), 5);
    }

    #[test]
    fn test_start_twice_fast_forwards_once() {
        let mut system = ParticleSystem::new(SystemConfig {
            emitter: EmitterConfig {
                number_of_emissions: Some(100),
                ..Default::default()
            },
            start_at_tick: 4,
            ..Default::default()
        })
        .unwrap();

        system.start();
        assert_eq!(system.emitter().emissions(), 4);

        system.stop();
        system.start();
        assert_eq!(system.emitter().emissions(), 4);
    }

    #[test]
    fn test_stop_preserves_population() {
        let mut surface = NullSurface(Bounds::new(1000.0, 1000.0));
        let mut system = capped_system(50);
        system.bind(surface.bounds());
        system.start();
        system.tick(&mut surface);
        system.tick(&mut surface);

        let count = system.live_count();
        let positions: Vec<Vec2> = system.particles().iter().map(|p| p.position).collect();

        system.stop();
        system.tick(&mut surface); // ignored while stopped
        system.start();

        assert_eq!(system.live_count(), count);
        let after: Vec<Vec2> = system.particles().iter().map(|p| p.position).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_dead_when_emitter_spent_and_particles_gone() {
        let mut surface = NullSurface(Bounds::new(10.0, 10.0));
        let mut system = ParticleSystem::new(SystemConfig {
            particle: ParticleConfig {
                speed: 100.0.into(), // leaves a 10x10 surface in one tick
                ..Default::default()
            },
            emitter: EmitterConfig {
                number_of_emissions: Some(1),
                ..Default::default()
            },
            ..Default::default()
        })
        .unwrap();
        system.bind(surface.bounds());
        system.start();

        system.tick(&mut surface); // emits the single batch
        assert!(!system.is_dead());

        system.tick(&mut surface); // particle exits bounds and is culled
        assert!(system.is_dead());
        assert_eq!(system.live_count(), 0);
    }

    #[test]
    fn test_system_at_repositions_emitter() {
        let mut surface = NullSurface(Bounds::new(500.0, 500.0));
        let mut system = system_at(
            Vec2::new(250.0, 100.0),
            SystemConfig {
                emitter: EmitterConfig {
                    number_of_emissions: Some(1),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .unwrap();
        system.bind(surface.bounds());
        system.start();
        system.tick(&mut surface);

        assert_eq!(system.particles()[0].position, Vec2::new(250.0, 100.0));
    }
}
