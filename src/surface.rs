//! Capabilities the engine consumes but does not implement.
//!
//! The core draws onto an abstract [`RenderSurface`] and paces itself through
//! an abstract [`FrameScheduler`]; the [`gpu`](crate::gpu) and
//! [`window`](crate::window) modules provide wgpu/winit-backed
//! implementations, and tests substitute in-memory doubles.
//!
//! Within one scene frame the surface is cleared exactly once and then drawn
//! to by each system in insertion order, so implementations never need
//! internal locking under the engine's single-threaded tick model.

use glam::Vec2;

use crate::visuals::{Color, Size};

/// Width and height of a drawing surface, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Bounds from a width and height.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both extents are finite and strictly positive.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// True when the point lies inside the closed `[0,w] x [0,h]` rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// A drawable target for particle shapes.
///
/// The coordinate system is canvas-like: origin at the top-left corner,
/// `x` growing right, `y` growing down, units in surface pixels.
pub trait RenderSurface {
    /// Current surface extents.
    fn bounds(&self) -> Bounds;

    /// Erase the given region. The scene calls this once per frame with the
    /// full bounds, before any system draws.
    fn clear(&mut self, bounds: Bounds);

    /// Begin an individual shape.
    fn begin_shape(&mut self);

    /// Finish the shape begun by [`RenderSurface::begin_shape`].
    fn end_shape(&mut self);

    /// Set the fill color for subsequent shapes.
    fn set_fill_color(&mut self, color: Color);

    /// Fill a circle centered at `center`.
    fn draw_circle(&mut self, center: Vec2, radius: f32);

    /// Fill an axis-aligned rectangle with its top-left corner at `origin`.
    fn draw_rect(&mut self, origin: Vec2, size: Size);
}

/// Host-driven frame pacing.
///
/// A scene asks for the next frame; the host later answers by invoking
/// [`Scene::frame`](crate::scene::Scene::frame) once, roughly per display
/// refresh. A stopped scene simply never asks again, which is the whole of
/// cooperative cancellation here.
pub trait FrameScheduler {
    /// Request that the host run one more frame.
    fn schedule_next_frame(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_closed_interval() {
        let b = Bounds::new(100.0, 50.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(100.0, 50.0)));
        assert!(!b.contains(Vec2::new(100.1, 25.0)));
        assert!(!b.contains(Vec2::new(50.0, -0.1)));
    }

    #[test]
    fn test_drawable_rejects_degenerate_bounds() {
        assert!(Bounds::new(640.0, 480.0).is_drawable());
        assert!(!Bounds::new(0.0, 480.0).is_drawable());
        assert!(!Bounds::new(f32::NAN, 480.0).is_drawable());
        assert!(!Bounds::new(640.0, f32::INFINITY).is_drawable());
    }
}
