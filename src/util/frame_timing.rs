use web_time::Instant;

/// Frame timing with a smoothed FPS estimate.
///
/// The backdrop relies on the host's frame scheduling for throttling, so
/// there is no frame limiter here; the timer only tracks a smoothed FPS
/// for periodic debug logging.
pub struct FrameTiming {
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a new frame timer.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Call once per rendered frame to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed).
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_reasonable_default() {
        let timing = FrameTiming::new();
        assert_eq!(timing.fps(), 60.0);
    }

    #[test]
    fn end_frame_updates_smoothed_fps() {
        let mut timing = FrameTiming::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        timing.end_frame();
        // One 5ms+ frame nudges the EMA away from the 60 FPS seed.
        assert_ne!(timing.fps(), 60.0);
        assert!(timing.fps() > 0.0);
    }
}
