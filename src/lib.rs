//! # Squall
//!
//! 2D particle scenes with a simple, declarative API.
//!
//! Squall animates transient visual particles (rain, snow, sparks, bursts)
//! onto a shared drawing surface, driven by a per-frame tick loop. You
//! describe populations with config templates; the engine handles emission
//! scheduling, per-particle updates, culling and draw order.
//!
//! ## Quick Start
//!
//! ```ignore
//! use squall::prelude::*;
//!
//! fn main() -> Result<(), SceneError> {
//!     let rain = create_particle_system(SystemConfig {
//!         particle: ParticleConfig {
//!             size: Size::new(1.0, 5.0).into(),
//!             speed: Property::generated(|| random_range(10.0, 28.0)),
//!             vector: 0.0.into(),
//!             color: Color::WHITE.into(),
//!             shape: Shape::Rectangle.into(),
//!             ..Default::default()
//!         },
//!         emitter: EmitterConfig {
//!             width: 800.0, // line source across the top edge
//!             emit_per_tick: Some(Property::fixed(2)),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     })?;
//!
//!     SceneApp::new().with_title("rain").with_system(rain).run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! A [`ParticleConfig`] is a template: every attribute is a [`Property`],
//! either fixed or generated per spawn, so one template yields a varied
//! population. A particle moves along its `vector` (degrees, 0 = straight
//! down, clockwise-positive) at `speed` pixels per tick, unless a custom
//! [`Animation`] takes over.
//!
//! ### Emitters
//!
//! An [`EmitterConfig`] gives the spawn rectangle (degenerate extents make
//! line and point sources), the cadence (`emit_per_tick`,
//! `emission_frequency`), an optional finite budget
//! (`number_of_emissions`), and an optional admission cap
//! (`max_living_particles`).
//!
//! ### Systems and Scenes
//!
//! A [`ParticleSystem`] couples one emitter with the particles it has
//! produced; a [`Scene`] owns the drawing surface and ticks its systems in
//! insertion order, clearing the surface exactly once per frame. Dead
//! systems (emitter spent, particles gone) are reaped automatically.
//!
//! ### Capabilities
//!
//! The engine draws through the [`RenderSurface`] trait and paces itself
//! through [`FrameScheduler`]; the built-in [`gpu::Canvas`] and
//! [`window::SceneApp`] provide wgpu/winit-backed implementations, and
//! tests plug in plain in-memory doubles.

pub mod animation;
pub mod emitter;
pub mod error;
pub mod gpu;
pub mod particle;
pub mod scene;
pub mod spawn;
pub mod surface;
pub mod system;
pub mod time;
pub mod visuals;
pub mod window;

pub use animation::{Animation, FadeBurst, Flutter};
pub use emitter::{Emitter, EmitterConfig};
pub use error::{ConfigError, SceneError, SpawnError, SurfaceError};
pub use glam::Vec2;
pub use particle::{Particle, ParticleConfig};
pub use scene::Scene;
pub use spawn::Property;
pub use surface::{Bounds, FrameScheduler, RenderSurface};
pub use system::{system_at, ParticleSystem, SystemConfig};
pub use visuals::{Color, Shape, Size};

/// Build a particle system from one configuration bundle.
///
/// Entry point for external wiring (presets, UI handlers); equivalent to
/// [`ParticleSystem::new`].
pub fn create_particle_system(config: SystemConfig) -> Result<ParticleSystem, ConfigError> {
    ParticleSystem::new(config)
}

/// Build a scene over a drawing surface and an initial set of systems.
///
/// Entry point for external wiring; equivalent to [`Scene::new`].
pub fn create_particle_scene<S: RenderSurface>(
    surface: S,
    scheduler: impl FrameScheduler + 'static,
    systems: Vec<ParticleSystem>,
) -> Result<Scene<S>, SceneError> {
    Scene::new(surface, scheduler, systems)
}

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use squall::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::{Animation, FadeBurst, Flutter};
    pub use crate::emitter::{Emitter, EmitterConfig};
    pub use crate::error::{ConfigError, SceneError, SpawnError, SurfaceError};
    pub use crate::particle::{Particle, ParticleConfig};
    pub use crate::scene::Scene;
    pub use crate::spawn::{random_color, random_int, random_range, Property};
    pub use crate::surface::{Bounds, FrameScheduler, RenderSurface};
    pub use crate::system::{system_at, ParticleSystem, SystemConfig};
    pub use crate::time::FrameClock;
    pub use crate::visuals::{Color, Shape, Size};
    pub use crate::window::SceneApp;
    pub use crate::{create_particle_scene, create_particle_system};
    pub use glam::Vec2;
}
