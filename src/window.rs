//! Windowed harness for running scenes.
//!
//! [`SceneApp`] owns the winit plumbing so a demo is just configuration:
//! build systems, hand them over, call [`run`](SceneApp::run). The harness
//! creates the window, attaches a [`Canvas`], drives [`Scene::frame`] from
//! redraw events, and presents after every frame.
//!
//! Interaction wiring mirrors the classic canvas demos: Space toggles
//! play/pause, and an optional click handler can inject a new system (a
//! burst at the pointer) into the running scene.
//!
//! # Example
//!
//! ```ignore
//! SceneApp::new()
//!     .with_title("rain")
//!     .with_system(rain_system()?)
//!     .run()?;
//! ```

use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::error::SceneError;
use crate::gpu::Canvas;
use crate::scene::Scene;
use crate::surface::FrameScheduler;
use crate::surface::RenderSurface;
use crate::system::ParticleSystem;
use crate::time::FrameClock;
use crate::visuals::Color;

/// Frame scheduler backed by winit redraw requests.
pub struct RedrawScheduler {
    window: Arc<Window>,
}

impl FrameScheduler for RedrawScheduler {
    fn schedule_next_frame(&mut self) {
        self.window.request_redraw();
    }
}

type ClickHandler = Box<dyn FnMut(Vec2) -> Option<ParticleSystem>>;

/// Builder-style application wrapper around one windowed scene.
pub struct SceneApp {
    title: String,
    size: (u32, u32),
    background: Color,
    pending: Vec<ParticleSystem>,
    on_click: Option<ClickHandler>,
    window: Option<Arc<Window>>,
    scene: Option<Scene<Canvas>>,
    clock: FrameClock,
    cursor: Vec2,
    error: Option<SceneError>,
}

impl SceneApp {
    /// An app with no systems yet, black background, 800x600 window.
    pub fn new() -> Self {
        Self {
            title: "squall".to_string(),
            size: (800, 600),
            background: Color::BLACK,
            pending: Vec::new(),
            on_click: None,
            window: None,
            scene: None,
            clock: FrameClock::new(),
            cursor: Vec2::ZERO,
            error: None,
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set the clear color behind the particles.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Add a system to start with.
    pub fn with_system(mut self, system: ParticleSystem) -> Self {
        self.pending.push(system);
        self
    }

    /// Called on left click with the pointer position; a returned system is
    /// added to the running scene and animates immediately.
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: FnMut(Vec2) -> Option<ParticleSystem> + 'static,
    {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Open the window and block until it closes.
    pub fn run(mut self) -> Result<(), SceneError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SceneError> {
        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.size.0, self.size.1));

        let window = Arc::new(event_loop.create_window(attrs)?);
        self.window = Some(window.clone());

        let mut canvas = pollster::block_on(Canvas::new(window.clone()))?;
        canvas.set_background(self.background);

        let scheduler = RedrawScheduler { window };
        let mut scene = Scene::new(canvas, scheduler, std::mem::take(&mut self.pending))?;
        scene.start();
        self.scene = Some(scene);

        Ok(())
    }
}

impl Default for SceneApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for SceneApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("failed to open scene window: {}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(scene) = &mut self.scene {
                    scene.surface_mut().resize(physical_size);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left && state == ElementState::Pressed {
                    let cursor = self.cursor;
                    if let (Some(handler), Some(scene)) = (&mut self.on_click, &mut self.scene) {
                        if let Some(system) = handler(cursor) {
                            scene.add_system(system);
                        }
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Space)
                {
                    if let Some(scene) = &mut self.scene {
                        if scene.is_running() {
                            scene.stop();
                        } else {
                            scene.start();
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(scene) = &mut self.scene {
                    scene.frame();

                    self.clock.frame();
                    if self.clock.frames() % 300 == 0 {
                        log::debug!(
                            "{:.1} fps, {} systems",
                            self.clock.fps(),
                            scene.system_count()
                        );
                    }

                    match scene.surface_mut().present() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            let bounds = scene.surface().bounds();
                            scene.surface_mut().resize(winit::dpi::PhysicalSize::new(
                                bounds.width as u32,
                                bounds.height as u32,
                            ));
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("present failed: {:?}", e),
                    }
                }
            }
            _ => {}
        }
    }
}
