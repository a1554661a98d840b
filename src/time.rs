//! Frame timing for the window harness.
//!
//! [`FrameClock`] tracks per-frame delta time and a smoothed
//! frames-per-second figure, updated on a fixed interval so the number is
//! readable rather than jittering every frame.

use std::time::{Duration, Instant};

const FPS_WINDOW: Duration = Duration::from_millis(500);

/// Tracks frame cadence for logging and pacing.
#[derive(Debug)]
pub struct FrameClock {
    started: Instant,
    last_frame: Instant,
    delta: Duration,
    frames: u64,
    fps: f32,
    window_start: Instant,
    window_frames: u64,
}

impl FrameClock {
    /// A clock starting now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            delta: Duration::ZERO,
            frames: 0,
            fps: 0.0,
            window_start: now,
            window_frames: 0,
        }
    }

    /// Record a frame. Call once per frame; returns the delta since the
    /// previous one.
    pub fn frame(&mut self) -> Duration {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;
        self.window_frames += 1;

        let window = now.duration_since(self.window_start);
        if window >= FPS_WINDOW {
            self.fps = self.window_frames as f32 / window.as_secs_f32();
            self.window_start = now;
            self.window_frames = 0;
        }

        self.delta
    }

    /// Time since the previous frame.
    #[inline]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Total frames recorded.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Smoothed frames per second, `0.0` until the first window completes.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Time since the clock was created.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_clock_is_zeroed() {
        let clock = FrameClock::new();
        assert_eq!(clock.frames(), 0);
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.delta(), Duration::ZERO);
    }

    #[test]
    fn test_frame_advances_counters() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(5));
        let delta = clock.frame();

        assert!(delta >= Duration::from_millis(5));
        assert_eq!(clock.frames(), 1);
        assert!(clock.elapsed() >= delta);
    }

    #[test]
    fn test_fps_updates_after_window() {
        let mut clock = FrameClock::new();
        // Spin fake frames past the smoothing window.
        let deadline = Instant::now() + FPS_WINDOW + Duration::from_millis(50);
        while Instant::now() < deadline {
            clock.frame();
            thread::sleep(Duration::from_millis(10));
        }
        assert!(clock.fps() > 0.0);
    }
}
