//! Frame-rate limiter
//!
//! Sleeps away whatever is left of a 1/fps budget since the previous tick,
//! and keeps a rolling FPS figure over the last 60 frames.

use std::time::{Duration, Instant};

/// Number of frame samples in the FPS window
const FPS_WINDOW: usize = 60;

/// Self-paced frame clock
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    frame_times: [Duration; FPS_WINDOW],
    frame_index: usize,
    samples: usize,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frame_times: [Duration::ZERO; FPS_WINDOW],
            frame_index: 0,
            samples: 0,
        }
    }

    /// Frame budget for a target rate
    pub fn budget(target_fps: u32) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)))
    }

    /// Sleep out the remaining budget and return the full frame time
    pub fn tick(&mut self, target_fps: u32) -> Duration {
        let budget = Self::budget(target_fps);
        let busy = self.last_tick.elapsed();
        if let Some(remaining) = budget.checked_sub(busy) {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        let elapsed = now - self.last_tick;
        self.last_tick = now;
        self.record(elapsed);
        elapsed
    }

    fn record(&mut self, elapsed: Duration) {
        self.frame_times[self.frame_index] = elapsed;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.samples = (self.samples + 1).min(FPS_WINDOW);
    }

    /// Average frames per second over the recorded window
    pub fn fps(&self) -> f32 {
        if self.samples == 0 {
            return 0.0;
        }
        let total: Duration = self.frame_times.iter().take(self.samples).sum();
        if total.is_zero() {
            return 0.0;
        }
        self.samples as f32 / total.as_secs_f32()
    }
}
