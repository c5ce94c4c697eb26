//! Transient notifications

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
    shown_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration: Duration, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            visible: true,
            shown_at: now,
            duration,
        }
    }

    /// Fraction of display time left, `1.0` when just shown. A zero duration
    /// means the toast stays until closed.
    pub fn remaining(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.shown_at);
        1.0 - (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        !self.duration.is_zero() && now.saturating_duration_since(self.shown_at) >= self.duration
    }

    pub fn has_timer(&self) -> bool {
        !self.duration.is_zero()
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_duration() {
        let start = Instant::now();
        let toast = Toast::new("Added egg!", ToastKind::Success, Duration::from_millis(3000), start);

        assert!(!toast.is_expired(start + Duration::from_millis(2999)));
        assert!(toast.is_expired(start + Duration::from_millis(3000)));
        assert!((toast.remaining(start + Duration::from_millis(1500)) - 0.5).abs() < 1e-3);
        assert_eq!(toast.remaining(start + Duration::from_secs(10)), 0.0);
    }

    #[test]
    fn test_zero_duration_never_expires() {
        let start = Instant::now();
        let toast = Toast::new("sticky", ToastKind::Error, Duration::ZERO, start);
        assert!(!toast.is_expired(start + Duration::from_secs(3600)));
        assert_eq!(toast.remaining(start + Duration::from_secs(3600)), 1.0);
    }
}
