//! Particle emitters: when, where, and how many particles spawn.
//!
//! An [`Emitter`] owns a particle template and a spawn region, and decides on
//! every tick whether an emission happens. Cadence comes in two styles that
//! share one accumulator:
//!
//! | Knob | Meaning |
//! |------|---------|
//! | `emit_per_tick` | Particles per emission, and the accumulator's advance per tick |
//! | `emission_frequency` | 1..=100, mapped to the tick threshold `100 / frequency` |
//! | `number_of_emissions` | Finite budget; the emitter dies when it is spent |
//! | `max_living_particles` | Admission cap; emission waits for headroom |
//!
//! The accumulator advances by the resolved per-tick rate on every `emit`
//! call and resets only on a successful emission. An attempt blocked by the
//! admission cap keeps its accumulated credit, so the emitter retries every
//! subsequent tick until the cap clears rather than waiting out a whole
//! interval again.
//!
//! # Example
//!
//! ```ignore
//! // A one-shot burst of 6..20 sparks at a point.
//! let burst = EmitterConfig {
//!     x: 320.0,
//!     y: 240.0,
//!     emit_per_tick: Some(Property::generated(|| random_int(6, 20) as u32)),
//!     number_of_emissions: Some(1),
//!     ..Default::default()
//! };
//! ```

use glam::Vec2;
use rand::rngs::SmallRng;

use crate::error::ConfigError;
use crate::particle::{Particle, ParticleConfig};
use crate::spawn::{sample_axis, seed_rng, Property};

/// Template for an [`Emitter`].
///
/// The spawn region is the rectangle from `(x, y)` extending `width` by
/// `height`; each particle gets an independent uniform-random position
/// inside it. A zero extent pins that axis, so `width: 0, height: 0` is a
/// point source and `height: 0` alone is a horizontal line source.
#[derive(Clone, Debug)]
pub struct EmitterConfig {
    /// Left edge of the spawn region.
    pub x: f32,
    /// Top edge of the spawn region.
    pub y: f32,
    /// Horizontal extent of the spawn region.
    pub width: f32,
    /// Vertical extent of the spawn region.
    pub height: f32,
    /// Particles per emission; resolved once at emitter construction.
    /// Defaults to 1 when unset.
    pub emit_per_tick: Option<Property<u32>>,
    /// Emission cadence knob, 1..=100. 100 emits every tick; 50 every
    /// second tick. Defaults to 100.
    pub emission_frequency: Option<u32>,
    /// Finite emission budget. The emitter dies permanently once this many
    /// emissions have succeeded. `None` means unlimited.
    pub number_of_emissions: Option<u32>,
    /// Admission cap on simultaneously living particles in the owning
    /// system. `None` means uncapped.
    pub max_living_particles: Option<usize>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            emit_per_tick: None,
            emission_frequency: None,
            number_of_emissions: None,
            max_living_particles: None,
        }
    }
}

/// Spawns particles into its owning system on a configured cadence.
///
/// Owned by exactly one [`ParticleSystem`](crate::system::ParticleSystem),
/// which passes in its live count each tick and takes ownership of whatever
/// batch comes back.
pub struct Emitter {
    particle_config: ParticleConfig,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    emit_per_tick: u32,
    emission_threshold: f32,
    ticks_since_last_emission: f32,
    emissions: u32,
    emission_budget: Option<u32>,
    max_living: Option<usize>,
    dead: bool,
    rng: SmallRng,
}

impl Emitter {
    /// Validate the configuration and resolve the cadence.
    ///
    /// `emit_per_tick` generators run here, exactly once; a failure is a
    /// [`ConfigError`], not a spawn error, because no particle exists yet.
    pub fn new(particle: ParticleConfig, config: EmitterConfig) -> Result<Self, ConfigError> {
        if !config.width.is_finite() || !config.height.is_finite() || config.width < 0.0 || config.height < 0.0 {
            return Err(ConfigError::InvalidRegion {
                width: config.width,
                height: config.height,
            });
        }

        let frequency = config.emission_frequency.unwrap_or(100);
        if !(1..=100).contains(&frequency) {
            return Err(ConfigError::EmissionFrequency(frequency));
        }

        let emit_per_tick = match &config.emit_per_tick {
            Some(property) => property.resolve()?,
            None => 1,
        };
        if emit_per_tick == 0 {
            return Err(ConfigError::ZeroEmitPerTick);
        }

        if config.number_of_emissions == Some(0) {
            return Err(ConfigError::ZeroEmissionBudget);
        }
        if config.max_living_particles == Some(0) {
            return Err(ConfigError::ZeroParticleCap);
        }

        Ok(Self {
            particle_config: particle,
            x: config.x,
            y: config.y,
            width: config.width,
            height: config.height,
            emit_per_tick,
            emission_threshold: 100.0 / frequency as f32,
            ticks_since_last_emission: 0.0,
            emissions: 0,
            emission_budget: config.number_of_emissions,
            max_living: config.max_living_particles,
            dead: false,
            rng: seed_rng(emit_per_tick as u64),
        })
    }

    /// Run one emission opportunity.
    ///
    /// Returns `None` when no emission happens this tick (not due, blocked
    /// by the cap, or already dead) and `Some(batch)` on a successful
    /// emission. A particle whose generator fails is dropped from the batch
    /// with a warning while the emission itself still counts against the
    /// budget, so a flaky generator cannot stall the cadence.
    pub fn emit(&mut self, current_live: usize) -> Option<Vec<Particle>> {
        if self.dead || !self.should_emit(current_live) {
            return None;
        }

        let count = self.emission_count(current_live);
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            let position = self.sample_position();
            match Particle::spawn(position, &self.particle_config) {
                Ok(particle) => batch.push(particle),
                Err(e) => log::warn!("spawn attempt abandoned: {}", e),
            }
        }

        self.emissions += 1;
        if let Some(budget) = self.emission_budget {
            if self.emissions >= budget {
                self.dead = true;
                log::debug!("emitter exhausted its budget of {} emissions", budget);
            }
        }

        Some(batch)
    }

    /// True once the emission budget is spent. A dead emitter never emits
    /// again, whatever its system's particles are still doing.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Successful emissions so far.
    #[inline]
    pub fn emissions(&self) -> u32 {
        self.emissions
    }

    fn should_emit(&mut self, current_live: usize) -> bool {
        self.ticks_since_last_emission += self.emit_per_tick as f32;

        if self.ticks_since_last_emission < self.emission_threshold {
            return false;
        }
        if let Some(cap) = self.max_living {
            // Blocked by the cap: keep the accumulated credit and retry
            // next tick instead of waiting out another full interval.
            if current_live >= cap {
                return false;
            }
        }

        self.ticks_since_last_emission = 0.0;
        true
    }

    /// Batch size for a permitted emission, clamped to the cap headroom so
    /// the live count can never land above `max_living_particles`.
    fn emission_count(&self, current_live: usize) -> usize {
        let count = self.emit_per_tick as usize;
        match self.max_living {
            Some(cap) => count.min(cap.saturating_sub(current_live)),
            None => count,
        }
    }

    fn sample_position(&mut self) -> Vec2 {
        Vec2::new(
            sample_axis(&mut self.rng, self.x, self.width),
            sample_axis(&mut self.rng, self.y, self.height),
        )
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("region", &(self.x, self.y, self.width, self.height))
            .field("emit_per_tick", &self.emit_per_tick)
            .field("emission_threshold", &self.emission_threshold)
            .field("emissions", &self.emissions)
            .field("dead", &self.dead)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpawnError;

    fn emitter(config: EmitterConfig) -> Emitter {
        Emitter::new(ParticleConfig::default(), config).unwrap()
    }

    #[test]
    fn test_default_cadence_emits_every_tick() {
        let mut e = emitter(EmitterConfig::default());
        for _ in 0..5 {
            let batch = e.emit(0).expect("default cadence is due every tick");
            assert_eq!(batch.len(), 1);
        }
    }

    #[test]
    fn test_frequency_fifty_emits_every_second_tick() {
        let mut e = emitter(EmitterConfig {
            emission_frequency: Some(50),
            ..Default::default()
        });
        let pattern: Vec<bool> = (0..6).map(|_| e.emit(0).is_some()).collect();
        assert_eq!(pattern, vec![false, true, false, true, false, true]);
    }

    #[test]
    fn test_emission_budget_then_dead_forever() {
        let mut e = emitter(EmitterConfig {
            number_of_emissions: Some(3),
            ..Default::default()
        });
        let successes = (0..10).filter(|_| e.emit(0).is_some()).count();
        assert_eq!(successes, 3);
        assert!(e.is_dead());
        assert!(e.emit(0).is_none());
    }

    #[test]
    fn test_cap_blocks_without_losing_credit() {
        let mut e = emitter(EmitterConfig {
            emission_frequency: Some(50),
            max_living_particles: Some(1),
            ..Default::default()
        });

        assert!(e.emit(0).is_none()); // accumulator at 1 of 2
        assert!(e.emit(1).is_none()); // due, but blocked by the cap
        // Cap cleared: the kept credit emits immediately instead of
        // waiting out another full interval.
        assert!(e.emit(0).is_some());
    }

    #[test]
    fn test_batch_clamped_to_cap_headroom() {
        let mut e = emitter(EmitterConfig {
            emit_per_tick: Some(Property::fixed(10)),
            max_living_particles: Some(12),
            ..Default::default()
        });

        assert_eq!(e.emit(0).unwrap().len(), 10);
        assert_eq!(e.emit(8).unwrap().len(), 4);
    }

    #[test]
    fn test_point_source_pins_positions() {
        let mut e = emitter(EmitterConfig {
            x: 40.0,
            y: 60.0,
            ..Default::default()
        });
        let batch = e.emit(0).unwrap();
        assert_eq!(batch[0].position, Vec2::new(40.0, 60.0));
    }

    #[test]
    fn test_line_source_varies_only_one_axis() {
        let mut e = emitter(EmitterConfig {
            width: 600.0,
            emit_per_tick: Some(Property::fixed(20)),
            ..Default::default()
        });
        let batch = e.emit(0).unwrap();
        assert!(batch.iter().all(|p| p.position.y == 0.0));
        assert!(batch.iter().all(|p| (0.0..=600.0).contains(&p.position.x)));
    }

    #[test]
    fn test_emit_per_tick_resolved_once_at_construction() {
        let mut calls = 0u32;
        // Property generators are Fn, so count through a Cell.
        let counter = std::sync::Arc::new(std::sync::atomic::AtomicU32::new(0));
        let c = counter.clone();
        let mut e = emitter(EmitterConfig {
            emit_per_tick: Some(Property::generated(move || {
                c.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                3
            })),
            ..Default::default()
        });
        for _ in 0..4 {
            calls += e.emit(0).map(|b| b.len() as u32).unwrap_or(0);
        }
        assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(calls, 12);
    }

    #[test]
    fn test_failed_spawn_still_counts_as_emission() {
        let particle = ParticleConfig {
            speed: Property::try_generated(|| Err(SpawnError::new("broken"))),
            ..Default::default()
        };
        let mut e = Emitter::new(
            particle,
            EmitterConfig {
                number_of_emissions: Some(1),
                ..Default::default()
            },
        )
        .unwrap();

        let batch = e.emit(0).expect("emission event still happens");
        assert!(batch.is_empty());
        assert_eq!(e.emissions(), 1);
        assert!(e.is_dead());
    }

    #[test]
    fn test_config_validation() {
        let bad_frequency = Emitter::new(
            ParticleConfig::default(),
            EmitterConfig {
                emission_frequency: Some(0),
                ..Default::default()
            },
        );
        assert!(matches!(bad_frequency, Err(ConfigError::EmissionFrequency(0))));

        let bad_region = Emitter::new(
            ParticleConfig::default(),
            EmitterConfig {
                width: -5.0,
                ..Default::default()
            },
        );
        assert!(matches!(bad_region, Err(ConfigError::InvalidRegion { .. })));

        let zero_cap = Emitter::new(
            ParticleConfig::default(),
            EmitterConfig {
                max_living_particles: Some(0),
                ..Default::default()
            },
        );
        assert!(matches!(zero_cap, Err(ConfigError::ZeroParticleCap)));

        let zero_budget = Emitter::new(
            ParticleConfig::default(),
            EmitterConfig {
                number_of_emissions: Some(0),
                ..Default::default()
            },
        );
        assert!(matches!(zero_budget, Err(ConfigError::ZeroEmissionBudget)));
    }
}
