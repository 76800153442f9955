use std::time::{Duration, Instant};

/// Frame pacing: measures the wall-clock time between ticks and reports how
/// long to wait to hold the target rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_time: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / fps.max(1),
            last_tick: None,
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Seconds since the previous tick; 0 on the first tick
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last_tick {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        dt
    }

    /// Wait remaining before the next frame is due
    pub fn until_next_frame(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => (last + self.frame_time).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }
}
