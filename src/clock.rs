//! Animation clock: absolute elapsed time and the derived cycle phase.

use std::f64::consts::TAU;

use crate::constants::CYCLE_SECONDS;

/// Position within the repeating cycle, in [0, 1).
pub fn phase(elapsed_seconds: f64) -> f64 {
    let p = elapsed_seconds.rem_euclid(CYCLE_SECONDS) / CYCLE_SECONDS;
    if p >= 1.0 {
        0.0
    } else {
        p
    }
}

/// Time values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    pub elapsed: f64,
    pub phase: f64,
}

impl FrameTime {
    pub fn new(elapsed_seconds: f64) -> Self {
        Self {
            elapsed: elapsed_seconds,
            phase: phase(elapsed_seconds),
        }
    }

    /// Angle of a wave turning at `rate` rad/s, reduced into [0, 2π)
    /// so sinusoids stay well conditioned at very large elapsed times.
    /// Elapsed time is reduced by the wave period first, so the product
    /// never overflows.
    #[inline]
    pub fn angle(&self, rate: f64) -> f64 {
        if rate == 0.0 || !self.elapsed.is_finite() {
            return 0.0;
        }
        let period = TAU / rate.abs();
        let angle = (self.elapsed.rem_euclid(period) * rate).rem_euclid(TAU);
        if angle >= TAU {
            0.0
        } else {
            angle
        }
    }
}
