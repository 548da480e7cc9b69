//! Frame timing
//!
//! The display callback hands us wall-clock milliseconds. The simulation wants
//! deltas measured in nominal frames so its speed does not depend on refresh
//! rate.

use crate::consts::NOMINAL_FRAME_MS;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: f64,
    /// Optional ceiling on a single delta (in nominal frames)
    max_delta: Option<f32>,
}

impl FrameClock {
    /// Start counting from `start_ms`
    pub fn new(start_ms: f64) -> Self {
        Self {
            last_ms: start_ms,
            max_delta: None,
        }
    }

    /// Cap long stalls (tab switches, debugger pauses) at `max_delta` frames
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = Some(max_delta);
        self
    }

    /// Delta since the previous call, in nominal frames. Never negative.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let elapsed = (now_ms - self.last_ms).max(0.0);
        self.last_ms = now_ms.max(self.last_ms);
        let dt = (elapsed / NOMINAL_FRAME_MS) as f32;
        match self.max_delta {
            Some(max) => dt.min(max),
            None => dt,
        }
    }

    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_frame_is_one() {
        let mut clock = FrameClock::new(1000.0);
        let dt = clock.advance(1000.0 + NOMINAL_FRAME_MS);
        assert!((dt - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_refresh_rate_independent() {
        // Two 120 Hz frames cover the same time as one 60 Hz frame
        let mut fast = FrameClock::new(0.0);
        let total: f32 = (1..=2).map(|i| fast.advance(i as f64 * 8.33335)).sum();
        assert!((total - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_long_stall_tolerated_unless_capped() {
        let mut clock = FrameClock::new(0.0);
        assert!((clock.advance(5000.0) - 300.0).abs() < 0.01);

        let mut capped = FrameClock::new(0.0).with_max_delta(4.0);
        assert_eq!(capped.advance(5000.0), 4.0);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let mut clock = FrameClock::new(100.0);
        assert_eq!(clock.advance(50.0), 0.0);
        assert_eq!(clock.last_ms(), 100.0);
    }
}
