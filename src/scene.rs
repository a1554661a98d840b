//! A scene: one shared drawing surface, many particle systems, one loop.
//!
//! The scene owns the render surface and an ordered collection of systems.
//! Each frame it clears the surface exactly once, ticks every live running
//! system in insertion order (which is also draw order), reaps dead ones,
//! and asks the frame scheduler for the next frame. Systems added while the
//! scene is running start immediately, so a burst spawned from a click
//! animates without waiting for anything.
//!
//! # Example
//!
//! ```ignore
//! let mut scene = Scene::new(canvas, scheduler, vec![rain])?;
//! scene.start();          // starts systems, schedules the first frame
//! // host calls scene.frame() once per display refresh
//! scene.stop();           // the loop simply stops rescheduling
//! ```

use crate::error::SceneError;
use crate::surface::{FrameScheduler, RenderSurface};
use crate::system::ParticleSystem;

/// Owns the surface and the systems drawn onto it.
pub struct Scene<S: RenderSurface> {
    surface: S,
    scheduler: Box<dyn FrameScheduler>,
    systems: Vec<ParticleSystem>,
    running: bool,
    frames: u64,
}

impl<S: RenderSurface> Scene<S> {
    /// Build a scene over `surface`, adopting `systems` in order.
    ///
    /// Fails with [`SceneError::UnusableSurface`] when the surface reports
    /// empty or non-finite bounds; there is nothing meaningful to animate
    /// onto such a target.
    pub fn new(
        surface: S,
        scheduler: impl FrameScheduler + 'static,
        systems: Vec<ParticleSystem>,
    ) -> Result<Self, SceneError> {
        let bounds = surface.bounds();
        if !bounds.is_drawable() {
            return Err(SceneError::UnusableSurface {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let mut scene = Self {
            surface,
            scheduler: Box::new(scheduler),
            systems: Vec::new(),
            running: false,
            frames: 0,
        };
        for system in systems {
            scene.add_system(system);
        }
        Ok(scene)
    }

    /// Append a system, binding the surface bounds into it.
    ///
    /// On a running scene the system starts immediately; otherwise it waits
    /// for the next [`start`](Self::start).
    pub fn add_system(&mut self, mut system: ParticleSystem) {
        system.bind(self.surface.bounds());
        if self.running {
            system.start();
        }
        log::debug!("scene adopted a system ({} total)", self.systems.len() + 1);
        self.systems.push(system);
    }

    /// Start every owned system and schedule the frame loop. No-op when
    /// already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        for system in &mut self.systems {
            system.start();
        }
        self.running = true;
        log::debug!("scene started with {} systems", self.systems.len());
        self.scheduler.schedule_next_frame();
    }

    /// Stop every owned system and halt the loop.
    ///
    /// State is retained: a later `start` resumes particles and emitter
    /// counters exactly where they were.
    pub fn stop(&mut self) {
        self.running = false;
        for system in &mut self.systems {
            system.stop();
        }
        log::debug!("scene stopped");
    }

    /// Run one frame of the loop. Invoked by the host once per scheduled
    /// frame; does nothing when the scene is not running.
    ///
    /// The surface is cleared exactly once per frame here, never per
    /// system. Dead and non-running systems are stopped and dropped;
    /// survivors keep their insertion order, which fixes the draw order.
    pub fn frame(&mut self) {
        if !self.running {
            return;
        }

        let bounds = self.surface.bounds();
        self.surface.clear(bounds);

        let systems = std::mem::take(&mut self.systems);
        let mut living = Vec::with_capacity(systems.len());
        for mut system in systems {
            if !system.is_dead() && system.is_running() {
                system.tick(&mut self.surface);
                living.push(system);
            } else {
                system.stop();
                log::debug!("scene reaped a finished system");
            }
        }
        self.systems = living;
        self.frames += 1;

        self.scheduler.schedule_next_frame();
    }

    /// Whether the frame loop is active.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of systems currently owned.
    #[inline]
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// The owned systems, in insertion (and draw) order.
    pub fn systems(&self) -> &[ParticleSystem] {
        &self.systems
    }

    /// Frames run since construction.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The owned render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the owned render surface, for backends that need
    /// host-side calls (resize, present) between frames.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
