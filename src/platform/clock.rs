//! Fixed frame-rate pacing

use std::thread;
use std::time::{Duration, Instant};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Sleeps out the remainder of each frame and measures the achieved rate
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_duration: Duration,
    last_tick: Option<Instant>,
    // FPS tracking
    frame_times: [Option<Instant>; FPS_WINDOW],
    frame_index: usize,
    fps: f32,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_duration: Duration::from_secs(1) / frame_rate.max(1),
            last_tick: None,
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
            fps: 0.0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Block until one frame has passed since the previous tick.
    ///
    /// Returns the time elapsed since that previous tick (zero on the first).
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = match self.last_tick {
            Some(last) => {
                let spent = now.duration_since(last);
                if spent < self.frame_duration {
                    thread::sleep(self.frame_duration - spent);
                }
                Instant::now().duration_since(last)
            }
            None => Duration::ZERO,
        };
        let now = Instant::now();
        self.last_tick = Some(now);
        self.record(now);
        elapsed
    }

    fn record(&mut self, now: Instant) {
        // The slot about to be overwritten holds the oldest sample
        let oldest = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        if let Some(oldest) = oldest {
            let window = now.duration_since(oldest).as_secs_f32();
            if window > 0.0 {
                self.fps = FPS_WINDOW as f32 / window;
            }
        }
    }

    /// Average frame rate over the last `FPS_WINDOW` frames (0 until filled)
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Window caption text
    pub fn caption(&self) -> String {
        format!("{:.1} FPS", self.fps)
    }
}
