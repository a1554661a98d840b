//! Spawn-time resolution of particle attributes.
//!
//! Every attribute in a particle or emitter configuration is a [`Property`]:
//! either a fixed value shared by the whole batch, or a generator invoked
//! once per spawned particle so that particles built from the same template
//! come out decorrelated (every raindrop its own speed).
//!
//! # Example
//!
//! ```ignore
//! use squall::spawn::{random_range, Property};
//!
//! let speed: Property<f32> = Property::generated(|| random_range(14.0, 18.0));
//! let vector: Property<f32> = 0.0.into(); // straight down for every particle
//! ```

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::SpawnError;
use crate::visuals::Color;

/// A generator closure producing one attribute value per invocation.
///
/// Generators take no arguments; anything they need (ranges, palettes, their
/// own RNG) is captured. A failing generator aborts only the particle it was
/// resolving, never the surrounding tick.
pub type Generator<T> = Arc<dyn Fn() -> Result<T, SpawnError> + Send + Sync>;

/// A configuration attribute: a concrete value or a per-spawn generator.
///
/// Resolution happens exactly once per particle, at construction. After that
/// the particle carries plain values and the generator is never consulted
/// again for it.
#[derive(Clone)]
pub enum Property<T> {
    /// The same value for every particle spawned from this template.
    Fixed(T),
    /// Invoked once per particle at spawn time.
    Generated(Generator<T>),
}

impl<T: Clone> Property<T> {
    /// A fixed value.
    pub fn fixed(value: T) -> Self {
        Property::Fixed(value)
    }

    /// An infallible generator.
    pub fn generated<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Property::Generated(Arc::new(move || Ok(f())))
    }

    /// A generator that may refuse to produce a value.
    pub fn try_generated<F>(f: F) -> Self
    where
        F: Fn() -> Result<T, SpawnError> + Send + Sync + 'static,
    {
        Property::Generated(Arc::new(f))
    }

    /// Resolve to a concrete value, invoking the generator at most once.
    pub fn resolve(&self) -> Result<T, SpawnError> {
        match self {
            Property::Fixed(value) => Ok(value.clone()),
            Property::Generated(f) => f(),
        }
    }
}

impl<T: Clone> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Property::Fixed(value)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Property::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Property::Generated(_) => f.write_str("Generated(..)"),
        }
    }
}

// ========== Random helpers for generator closures ==========

/// Random f32 in `min..=max`.
pub fn random_range(min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rand::thread_rng().gen_range(min..=max)
}

/// Random i32 in `min..=max`.
pub fn random_int(min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rand::thread_rng().gen_range(min..=max)
}

/// Random opaque RGB color.
pub fn random_color() -> Color {
    let mut rng = rand::thread_rng();
    Color::rgb(rng.gen(), rng.gen(), rng.gen())
}

/// Seed a small, fast RNG for an emitter.
///
/// Seeded from the wall clock so runs differ, mixed with a caller-supplied
/// salt so emitters constructed in the same instant diverge.
pub(crate) fn seed_rng(salt: u64) -> SmallRng {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42);
    SmallRng::seed_from_u64(nanos ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Uniform sample along one spawn-region axis.
///
/// A degenerate extent (zero width or height) pins the coordinate to the
/// origin, which is how line and point sources are modeled.
pub(crate) fn sample_axis(rng: &mut SmallRng, origin: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        origin
    } else {
        rng.gen_range(origin..=origin + extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_fixed_resolves_to_value() {
        let p = Property::fixed(7.5f32);
        assert_eq!(p.resolve().unwrap(), 7.5);
        assert_eq!(p.resolve().unwrap(), 7.5);
    }

    #[test]
    fn test_generated_invoked_once_per_resolve() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let p = Property::generated(move || counter.fetch_add(1, Ordering::SeqCst));

        assert_eq!(p.resolve().unwrap(), 0);
        assert_eq!(p.resolve().unwrap(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_try_generated_propagates_failure() {
        let p: Property<f32> = Property::try_generated(|| Err(SpawnError::new("no value")));
        assert!(p.resolve().is_err());
    }

    #[test]
    fn test_from_value_is_fixed() {
        let p: Property<f32> = 3.0.into();
        assert!(matches!(p, Property::Fixed(_)));
    }

    #[test]
    fn test_random_range_bounds() {
        for _ in 0..100 {
            let v = random_range(2.0, 4.0);
            assert!((2.0..=4.0).contains(&v));
        }
    }

    #[test]
    fn test_sample_axis_degenerate_extent_is_fixed() {
        let mut rng = seed_rng(1);
        assert_eq!(sample_axis(&mut rng, 12.5, 0.0), 12.5);
    }

    #[test]
    fn test_sample_axis_stays_in_region() {
        let mut rng = seed_rng(2);
        for _ in 0..100 {
            let v = sample_axis(&mut rng, 10.0, 5.0);
            assert!((10.0..=15.0).contains(&v));
        }
    }
}
