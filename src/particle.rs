//! A single animated particle and its spawn template.
//!
//! Particles are built from a [`ParticleConfig`] template plus a spawn
//! position handed over by an emitter. Template attributes are
//! [`Property`] values, so a single config can describe a whole population
//! of differing particles: each generator is consulted once per spawn.
//!
//! Once spawned, a particle owns plain resolved values and advances itself
//! one [`tick`](Particle::tick) at a time until something kills it: its own
//! time-to-live, a custom animation, or the system's boundary rule.

use std::time::{Duration, Instant};

use glam::Vec2;

use crate::animation::Animation;
use crate::error::SpawnError;
use crate::spawn::Property;
use crate::visuals::{Color, Shape, Size};

/// Template for spawning particles.
///
/// Each attribute is either a fixed value or a generator invoked once per
/// particle, so a batch spawned in the same tick still comes out varied.
///
/// # Example
///
/// ```ignore
/// use squall::prelude::*;
///
/// // Rain: thin white streaks, each with its own speed.
/// let rain = ParticleConfig {
///     size: Size::new(1.0, 5.0).into(),
///     speed: Property::generated(|| random_range(10.0, 28.0)),
///     vector: 0.0.into(), // straight down
///     color: Color::WHITE.into(),
///     shape: Shape::Rectangle.into(),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct ParticleConfig {
    /// Width and height; `w` doubles as the radius for circles.
    pub size: Property<Size>,
    /// Surface pixels traversed per tick.
    pub speed: Property<f32>,
    /// Direction of travel in degrees: 0 is straight down, growing
    /// clockwise. 0, 360 and 720 all fall straight down; angles are never
    /// wrapped.
    pub vector: Property<f32>,
    /// Fill color.
    pub color: Property<Color>,
    /// Drawn shape.
    pub shape: Property<Shape>,
    /// Custom per-tick animation replacing the default linear motion.
    /// Generated properties give each particle its own starting state
    /// (a snow batch with decorrelated flutter phases).
    pub animation: Option<Property<Animation>>,
    /// Wall-clock lifespan; once elapsed the particle dies on its next tick.
    pub time_to_live: Option<Property<Duration>>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            size: Size::square(2.0).into(),
            speed: 1.0.into(),
            vector: 0.0.into(),
            color: Color::WHITE.into(),
            shape: Shape::Circle.into(),
            animation: None,
            time_to_live: None,
        }
    }
}

/// A live particle.
///
/// The motion and appearance fields are public so custom animations can
/// rewrite them freely; death is a one-way transition behind
/// [`kill`](Particle::kill).
#[derive(Clone, Debug)]
pub struct Particle {
    /// Position on the surface, origin top-left, pixels.
    pub position: Vec2,
    /// Width and height; `w` is the radius when drawn as a circle.
    pub size: Size,
    /// Pixels traversed per tick.
    pub speed: f32,
    /// Travel direction in degrees, 0 straight down, clockwise-positive.
    pub vector: f32,
    /// Fill color.
    pub color: Color,
    /// Drawn shape.
    pub shape: Shape,
    dead: bool,
    animation: Option<Animation>,
    time_to_live: Option<Duration>,
    spawn_time: Instant,
}

impl Particle {
    /// Resolve `config` into a concrete particle at `position`.
    ///
    /// Every generator attribute is invoked at most once, so particles
    /// spawned back-to-back from one template still differ. A failing
    /// generator abandons this spawn attempt; nothing partial is returned.
    pub fn spawn(position: Vec2, config: &ParticleConfig) -> Result<Self, SpawnError> {
        let size = config.size.resolve()?;
        let speed = config.speed.resolve()?;
        let vector = config.vector.resolve()?;
        let color = config.color.resolve()?;
        let shape = config.shape.resolve()?;
        let animation = match &config.animation {
            Some(animation) => Some(animation.resolve()?),
            None => None,
        };
        let time_to_live = match &config.time_to_live {
            Some(ttl) => Some(ttl.resolve()?),
            None => None,
        };

        Ok(Self {
            position,
            size,
            speed,
            vector,
            color,
            shape,
            dead: false,
            animation,
            time_to_live,
            spawn_time: Instant::now(),
        })
    }

    /// Advance the particle by one tick.
    ///
    /// Runs the configured animation if there is one, otherwise the default
    /// linear move; afterwards the time-to-live check may kill the particle.
    pub fn tick(&mut self) {
        match self.animation.take() {
            Some(mut animation) => {
                animation.apply(self);
                self.animation = Some(animation);
            }
            None => self.linear_move(),
        }

        if let Some(ttl) = self.time_to_live {
            if self.spawn_time.elapsed() > ttl {
                self.dead = true;
            }
        }
    }

    /// Move one step along `vector` at `speed`.
    ///
    /// With the canvas origin top-left and `y` growing down, 0 degrees is
    /// straight down and 90 degrees is straight right. Custom animations can
    /// call this and then layer their own effects on top.
    pub fn linear_move(&mut self) {
        let radians = self.vector.to_radians();
        self.position.x += radians.sin() * self.speed;
        self.position.y += radians.cos() * self.speed;
    }

    /// Mark the particle dead. Irreversible; a dead particle is dropped from
    /// the live set at the end of the tick that killed it.
    pub fn kill(&mut self) {
        self.dead = true;
    }

    /// True once the particle has died.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// When the particle was spawned.
    #[inline]
    pub fn spawn_time(&self) -> Instant {
        self.spawn_time
    }

    /// Wall-clock time since spawn.
    #[inline]
    pub fn age(&self) -> Duration {
        self.spawn_time.elapsed()
    }

    /// The resolved lifespan, if one was configured.
    #[inline]
    pub fn time_to_live(&self) -> Option<Duration> {
        self.time_to_live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::thread;

    fn at_origin(config: &ParticleConfig) -> Particle {
        Particle::spawn(Vec2::ZERO, config).unwrap()
    }

    #[test]
    fn test_zero_vector_falls_straight_down() {
        let mut p = at_origin(&ParticleConfig {
            speed: 5.0.into(),
            ..Default::default()
        });
        p.tick();
        assert!(p.position.x.abs() < 1e-4);
        assert!((p.position.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_quarter_turn_moves_right() {
        let mut p = at_origin(&ParticleConfig {
            speed: 2.0.into(),
            vector: 90.0.into(),
            ..Default::default()
        });
        p.tick();
        assert!((p.position.x - 2.0).abs() < 1e-4);
        assert!(p.position.y.abs() < 1e-4);
    }

    #[test]
    fn test_vector_past_full_turn_wraps_in_effect() {
        let mut a = at_origin(&ParticleConfig {
            vector: 0.0.into(),
            speed: 3.0.into(),
            ..Default::default()
        });
        let mut b = at_origin(&ParticleConfig {
            vector: 720.0.into(),
            speed: 3.0.into(),
            ..Default::default()
        });
        a.tick();
        b.tick();
        assert!((a.position - b.position).length() < 1e-3);
    }

    #[test]
    fn test_generators_resolve_once_per_particle() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let config = ParticleConfig {
            speed: Property::generated(move || counter.fetch_add(1, Ordering::SeqCst) as f32),
            ..Default::default()
        };

        let batch: Vec<Particle> = (0..5).map(|_| at_origin(&config)).collect();

        assert_eq!(calls.load(Ordering::SeqCst), 5);
        let speeds: Vec<f32> = batch.iter().map(|p| p.speed).collect();
        assert_eq!(speeds, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_time_to_live_expiry_kills() {
        let mut p = at_origin(&ParticleConfig {
            time_to_live: Some(Duration::from_millis(5).into()),
            ..Default::default()
        });

        p.tick();
        assert!(!p.is_dead());

        thread::sleep(Duration::from_millis(10));
        p.tick();
        assert!(p.is_dead());
    }

    #[test]
    fn test_kill_is_permanent() {
        let mut p = at_origin(&ParticleConfig::default());
        p.kill();
        p.tick();
        assert!(p.is_dead());
    }

    #[test]
    fn test_failing_generator_spawns_nothing() {
        let config = ParticleConfig {
            color: Property::try_generated(|| Err(SpawnError::new("palette empty"))),
            ..Default::default()
        };
        assert!(Particle::spawn(Vec2::ZERO, &config).is_err());
    }
}
