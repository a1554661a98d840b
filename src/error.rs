//! Error types for squall.
//!
//! This module provides error types for configuration validation, particle
//! spawning, and surface/window acquisition. Expected lifecycle transitions
//! (a particle leaving the canvas, an emitter exhausting its budget, a system
//! going dead) are not errors and never appear here.

use std::fmt;

/// Errors raised while validating a particle or emitter configuration.
///
/// Raised at system construction and fatal to that construction call only;
/// other systems in the same scene are unaffected.
#[derive(Debug)]
pub enum ConfigError {
    /// `emission_frequency` must be in the range 1..=100.
    EmissionFrequency(u32),
    /// `emit_per_tick` resolved to zero particles per emission.
    ZeroEmitPerTick,
    /// `number_of_emissions` was set to zero; use `None` for unlimited.
    ZeroEmissionBudget,
    /// `max_living_particles` was set to zero; use `None` for uncapped.
    ZeroParticleCap,
    /// Spawn region extents must be finite and non-negative.
    InvalidRegion { width: f32, height: f32 },
    /// A generator failed while resolving emitter cadence at construction.
    Resolve(SpawnError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmissionFrequency(v) => {
                write!(f, "emission_frequency must be 1..=100, got {}", v)
            }
            ConfigError::ZeroEmitPerTick => {
                write!(f, "emit_per_tick resolved to 0; an emission must spawn at least one particle")
            }
            ConfigError::ZeroEmissionBudget => {
                write!(f, "number_of_emissions must be at least 1; use None for unlimited emissions")
            }
            ConfigError::ZeroParticleCap => {
                write!(f, "max_living_particles must be at least 1; use None for no cap")
            }
            ConfigError::InvalidRegion { width, height } => {
                write!(f, "spawn region extents must be finite and non-negative, got {}x{}", width, height)
            }
            ConfigError::Resolve(e) => write!(f, "failed to resolve emitter configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Resolve(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpawnError> for ConfigError {
    fn from(e: SpawnError) -> Self {
        ConfigError::Resolve(e)
    }
}

/// A generator field failed while resolving a particle at spawn time.
///
/// The individual spawn attempt is abandoned (no partial particle enters the
/// live set) and the surrounding tick carries on; emission bookkeeping still
/// advances as if the attempt had succeeded.
#[derive(Debug, Clone)]
pub struct SpawnError {
    message: String,
}

impl SpawnError {
    /// Create a spawn error with the given reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "particle generator failed: {}", self.message)
    }
}

impl std::error::Error for SpawnError {}

/// Errors that can occur while acquiring a GPU-backed drawing surface.
#[derive(Debug)]
pub enum SurfaceError {
    /// Failed to create a surface for the window.
    Creation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create the GPU device.
    Device(wgpu::RequestDeviceError),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Creation(e) => write!(f, "failed to create drawing surface: {}", e),
            SurfaceError::NoAdapter => write!(
                f,
                "no compatible GPU adapter found; the drawing surface cannot be acquired"
            ),
            SurfaceError::Device(e) => write!(f, "failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurfaceError::Creation(e) => Some(e),
            SurfaceError::Device(e) => Some(e),
            SurfaceError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for SurfaceError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        SurfaceError::Creation(e)
    }
}

impl From<wgpu::RequestDeviceError> for SurfaceError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        SurfaceError::Device(e)
    }
}

/// Errors that can occur when building or running a scene.
#[derive(Debug)]
pub enum SceneError {
    /// The render surface reported empty or non-finite bounds.
    UnusableSurface { width: f32, height: f32 },
    /// Surface acquisition failed.
    Surface(SurfaceError),
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::UnusableSurface { width, height } => {
                write!(f, "render surface bounds {}x{} are unusable", width, height)
            }
            SceneError::Surface(e) => write!(f, "surface error: {}", e),
            SceneError::EventLoop(e) => write!(f, "failed to create event loop: {}", e),
            SceneError::Window(e) => write!(f, "failed to create window: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Surface(e) => Some(e),
            SceneError::EventLoop(e) => Some(e),
            SceneError::Window(e) => Some(e),
            SceneError::UnusableSurface { .. } => None,
        }
    }
}

impl From<SurfaceError> for SceneError {
    fn from(e: SurfaceError) -> Self {
        SceneError::Surface(e)
    }
}

impl From<winit::error::EventLoopError> for SceneError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SceneError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SceneError {
    fn from(e: winit::error::OsError) -> Self {
        SceneError::Window(e)
    }
}
