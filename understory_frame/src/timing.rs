// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-animation frame timing.

use core::time::Duration;

/// Timing record handed to an animation callback on every tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameTiming {
    /// Time accumulated since the animation was last started.
    pub elapsed: Duration,
    /// Time since the previous tick (zero on the first tick after a start at the same instant).
    pub delta: Duration,
    /// Instantaneous rate in frames per second, `1 / delta`.
    ///
    /// A zero `delta` carries no rate information, so the previous value is kept.
    pub frame_rate: f64,
    /// Host timestamp of the most recent tick (or of the start).
    pub last_time: Duration,
}

impl FrameTiming {
    /// A fresh baseline at `now`.
    pub const fn starting_at(now: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            delta: Duration::ZERO,
            frame_rate: 0.0,
            last_time: now,
        }
    }

    /// Advance to the tick at `now`.
    ///
    /// A `now` earlier than the last tick is treated as no time passing.
    pub fn advance(&mut self, now: Duration) {
        let delta = now.saturating_sub(self.last_time);
        self.delta = delta;
        self.last_time = now;
        self.elapsed += delta;
        if !delta.is_zero() {
            self.frame_rate = 1.0 / delta.as_secs_f64();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates() {
        let mut t = FrameTiming::starting_at(Duration::from_millis(100));
        t.advance(Duration::from_millis(116));
        t.advance(Duration::from_millis(136));
        assert_eq!(t.delta, Duration::from_millis(20));
        assert_eq!(t.elapsed, Duration::from_millis(36));
        assert_eq!(t.last_time, Duration::from_millis(136));
        assert!((t.frame_rate - 50.0).abs() < 1e-9);
    }

    #[test]
    fn zero_delta_keeps_previous_rate() {
        let mut t = FrameTiming::starting_at(Duration::ZERO);
        t.advance(Duration::from_millis(10));
        t.advance(Duration::from_millis(10));
        assert_eq!(t.delta, Duration::ZERO);
        assert!(t.frame_rate.is_finite());
        assert!((t.frame_rate - 100.0).abs() < 1e-9);
    }

    #[test]
    fn time_going_backwards_is_clamped() {
        let mut t = FrameTiming::starting_at(Duration::from_millis(50));
        t.advance(Duration::from_millis(40));
        assert_eq!(t.delta, Duration::ZERO);
        assert_eq!(t.elapsed, Duration::ZERO);
    }
}
