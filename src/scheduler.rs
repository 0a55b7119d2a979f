//! Frame pacing for the live viewer.
//!
//! Owns the elapsed-time clock, the pause flag and the optional frame cap.
//! The renderer only ever sees the absolute elapsed time this hands out,
//! so dropped or skipped ticks need no catching up.

use std::time::Duration;

pub struct Scheduler {
    elapsed: f64,
    paused: bool,
    frame_interval: Option<Duration>,
    since_last_frame: Duration,
    redraw: bool,
}

impl Scheduler {
    /// `fps_cap` of `None` or `Some(0)` renders on every tick.
    pub fn new(fps_cap: Option<u32>, start_seconds: f64) -> Self {
        let frame_interval = fps_cap
            .filter(|&fps| fps > 0)
            .map(|fps| Duration::from_secs_f64(1.0 / f64::from(fps)));
        Self {
            elapsed: start_seconds.max(0.0),
            paused: false,
            frame_interval,
            since_last_frame: Duration::ZERO,
            // First tick always draws
            redraw: true,
        }
    }

    /// Feed wall-clock time. Returns the elapsed time to render at when a
    /// frame is due.
    pub fn advance(&mut self, dt: Duration) -> Option<f64> {
        if !self.paused {
            self.elapsed += dt.as_secs_f64();
        }

        if std::mem::take(&mut self.redraw) {
            self.since_last_frame = Duration::ZERO;
            return Some(self.elapsed);
        }

        if self.paused {
            return None;
        }

        let Some(interval) = self.frame_interval else {
            return Some(self.elapsed);
        };

        self.since_last_frame += dt;
        if self.since_last_frame < interval {
            return None;
        }
        self.since_last_frame -= interval;
        // Fell more than a frame behind: don't try to burst-render to catch up
        if self.since_last_frame >= interval {
            self.since_last_frame = Duration::ZERO;
        }
        Some(self.elapsed)
    }

    /// Draw on the next tick even if paused or capped (resize, rescale, unpause)
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.redraw = true;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
