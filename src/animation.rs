//! Frame clock for decorative motion
//!
//! Everything that moves (scan line, pulsing glows, the wobbling chef hat) is a
//! pure function of time since launch, sampled on a fixed tick.

use iced::time::{self, Instant};
use iced::Subscription;
use std::f32::consts::TAU;
use std::time::Duration;

/// ~30 fps is plenty for glows and a scan line
pub const FRAME: Duration = Duration::from_millis(33);

/// Time-based subscription driving animations and toast expiry
pub fn frames() -> Subscription<Instant> {
    time::every(FRAME)
}

/// Position within a repeating cycle, in `0..1`
pub fn cycle(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 0.0;
    }
    let period = period.as_secs_f32();
    (elapsed.as_secs_f32() % period) / period
}

/// Smooth back-and-forth between 0 and 1 (starts and ends at 0)
pub fn pulse(elapsed: Duration, period: Duration) -> f32 {
    (1.0 - (cycle(elapsed, period) * TAU).cos()) / 2.0
}

/// Linear interpolation between two values following a pulse
pub fn breathe(elapsed: Duration, period: Duration, low: f32, high: f32) -> f32 {
    low + (high - low) * pulse(elapsed, period)
}

/// Signed swing in `-1..=1`, for side-to-side motion
pub fn swing(elapsed: Duration, period: Duration) -> f32 {
    (cycle(elapsed, period) * TAU).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(2);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_cycle_wraps() {
        assert!(approx(cycle(Duration::from_millis(500), PERIOD), 0.25));
        assert!(approx(cycle(Duration::from_millis(2500), PERIOD), 0.25));
        assert_eq!(cycle(Duration::from_secs(1), Duration::ZERO), 0.0);
    }

    #[test]
    fn test_pulse_peaks_mid_cycle() {
        assert!(approx(pulse(Duration::ZERO, PERIOD), 0.0));
        assert!(approx(pulse(Duration::from_secs(1), PERIOD), 1.0));
        assert!(approx(breathe(Duration::from_secs(1), PERIOD, 0.6, 1.0), 1.0));
        assert!(approx(breathe(Duration::ZERO, PERIOD, 0.6, 1.0), 0.6));
    }

    #[test]
    fn test_swing_quarter_turns() {
        assert!(approx(swing(Duration::from_millis(500), PERIOD), 1.0));
        assert!(approx(swing(Duration::from_millis(1500), PERIOD), -1.0));
    }
}
