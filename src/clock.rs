/// Turns host timestamps (milliseconds) into frame deltas (seconds).
#[derive(Debug, Clone)]
pub struct FrameClock {
    max_delta: f32,
    last_ms: Option<f64>,
    window_start_ms: f64,
    frames_in_window: u32,
    fps: u32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            max_delta,
            last_ms: None,
            window_start_ms: 0.0,
            frames_in_window: 0,
            fps: 0,
        }
    }

    /// Seconds since the previous tick, capped at `max_delta`. The first tick
    /// returns zero.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            self.window_start_ms = now_ms;
            return 0.0;
        };

        self.frames_in_window += 1;
        if now_ms - self.window_start_ms >= 1000.0 {
            self.fps = self.frames_in_window;
            self.frames_in_window = 0;
            self.window_start_ms = now_ms;
        }

        let dt = ((now_ms - last) / 1000.0).max(0.0) as f32;
        if dt > self.max_delta {
            log::warn!("frame took {:.3}s, clamping to {:.3}s", dt, self.max_delta);
            return self.max_delta;
        }
        dt
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
