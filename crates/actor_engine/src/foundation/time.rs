//! Time management utilities

use std::time::{Duration, Instant};

/// Frame timer that paces the main loop and produces clamped delta times
///
/// Every tick waits until at least `min_frame` has passed since the previous
/// tick, then reports the elapsed time in seconds, clamped to `max_delta` so a
/// debugger pause or a long hitch cannot push the simulation through a huge
/// step.
pub struct FrameTimer {
    last_frame: Instant,
    min_frame: Duration,
    max_delta: f32,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(16), 0.05)
    }
}

impl FrameTimer {
    /// Create a new timer
    pub fn new(min_frame: Duration, max_delta: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            min_frame,
            max_delta,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Restart measuring from now without touching the counters
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Wait for the minimum frame interval, then advance by the measured time
    ///
    /// Returns the clamped delta time in seconds.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.min_frame {
            std::thread::sleep(self.min_frame - elapsed);
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    /// Advance by an explicitly measured elapsed time
    ///
    /// Returns the clamped delta time in seconds.
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        self.delta_time = self.clamp(elapsed);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    /// Convert an elapsed duration into a simulation step
    pub fn clamp(&self, elapsed: Duration) -> f32 {
        elapsed.as_secs_f32().min(self.max_delta)
    }

    /// Get the time step of the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total simulated time
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the maximum step a single frame may simulate
    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    /// Get the minimum wall-clock interval between frames
    pub fn min_frame(&self) -> Duration {
        self.min_frame
    }

    /// Get the average simulated FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}
