//! Release animation.

use std::time::{Duration, Instant};

use crate::px::Px;

/// Linear mapping.
/// Input: linear progress in [0.0, 1.0].
/// Output: the same progress, clamped.
pub(crate) fn linear(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0)
}

/// A linear tween of a thumb offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: Px,
    to: Px,
    duration: Duration,
    started_at: Instant,
}

impl Tween {
    /// Creates a tween from `from` to `to`, starting at `started_at`.
    pub fn new(from: Px, to: Px, duration: Duration, started_at: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            started_at,
        }
    }

    /// Start offset.
    pub fn from(&self) -> Px {
        self.from
    }

    /// Target offset.
    pub fn to(&self) -> Px {
        self.to
    }

    /// Linear progress at `now`, in `[0.0, 1.0]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        linear(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Offset at `now`. Lands exactly on the target once finished.
    pub fn sample(&self, now: Instant) -> Px {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * progress
    }

    /// Returns `true` once the tween has reached its target.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_linearly() {
        let start = Instant::now();
        let tween = Tween::new(Px(106.0), Px(110.0), Duration::from_millis(10), start);

        assert_eq!(tween.sample(start), Px(106.0));
        assert_eq!(tween.sample(start + Duration::from_millis(5)), Px(108.0));
        assert!(!tween.is_finished(start + Duration::from_millis(5)));
        assert_eq!(tween.sample(start + Duration::from_millis(10)), Px(110.0));
        assert_eq!(tween.sample(start + Duration::from_secs(1)), Px(110.0));
        assert!(tween.is_finished(start + Duration::from_millis(10)));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let start = Instant::now();
        let tween = Tween::new(Px(0.0), Px(50.0), Duration::ZERO, start);
        assert!(tween.is_finished(start));
        assert_eq!(tween.sample(start), Px(50.0));
    }

    #[test]
    fn frames_before_start_stay_at_origin() {
        let start = Instant::now() + Duration::from_millis(50);
        let tween = Tween::new(Px(10.0), Px(0.0), Duration::from_millis(10), start);
        assert_eq!(tween.sample(Instant::now()), Px(10.0));
    }
}
