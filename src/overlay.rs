//! Headless stand-in for the on-screen overlay: particle count and tick rate

use emergence_simulation::{FrameSink, FrameSnapshot};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling window of frame times
const FRAME_WINDOW: usize = 100;

pub struct OverlaySink {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    last_report: Instant,
    report_every: Duration,
}

impl OverlaySink {
    pub fn new(report_every: Duration) -> Self {
        let now = Instant::now();
        Self {
            frame_times: VecDeque::with_capacity(FRAME_WINDOW),
            last_frame: now,
            last_report: now,
            report_every,
        }
    }

    /// Average frames per second over the window
    pub fn fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let avg_frame_time = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        if avg_frame_time > 0.0 {
            1000.0 / avg_frame_time
        } else {
            0.0
        }
    }
}

impl FrameSink for OverlaySink {
    fn present(&mut self, frame: &FrameSnapshot<'_>) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FRAME_WINDOW {
            self.frame_times.pop_front();
        }

        if now.duration_since(self.last_report) >= self.report_every {
            self.last_report = now;
            let kinetic: f64 = frame
                .particles
                .iter()
                .map(|p| 0.5 * p.velocity.length_squared())
                .sum();
            log::info!(
                "Particles: {} | Fps: {:.0} | tick {} | kinetic {:.3e}",
                frame.particle_count(),
                self.fps(),
                frame.tick,
                kinetic
            );
        }
    }
}
