//! Draw-rate throttling for hosts that step physics unthrottled.

use std::time::Duration;

/// Decides when a frame is due. Physics can be ticked as often as the host
/// likes; drawing happens at most once per `interval`.
///
/// The time a frame is granted is snapped back by the overshoot past the
/// interval, so the cadence does not drift late.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLimiter {
    interval: Duration,
    last: Option<Duration>,
}

impl FrameLimiter {
    /// # Panics
    /// If `fps` is not a positive finite number.
    pub fn new(fps: f64) -> Self {
        assert!(fps.is_finite() && fps > 0.0, "fps must be positive, got {fps}");
        Self::from_interval(Duration::from_secs_f64(1.0 / fps))
    }

    pub fn from_interval(interval: Duration) -> Self {
        FrameLimiter {
            interval: interval.max(Duration::from_nanos(1)),
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// `now` is any monotonic clock reading (e.g. time since start). The
    /// first call always grants a frame.
    pub fn ready(&mut self, now: Duration) -> bool {
        let Some(then) = self.last else {
            self.last = Some(now);
            return true;
        };

        let elapsed = now.saturating_sub(then);
        if elapsed <= self.interval {
            return false;
        }
        let overshoot = elapsed.as_nanos() % self.interval.as_nanos();
        self.last = Some(now - Duration::from_nanos(overshoot as u64));
        true
    }

    /// Forgets the last frame; the next `ready` call grants one.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_first_call_is_ready() {
        let mut limiter = FrameLimiter::from_interval(ms(10));
        assert!(limiter.ready(ms(0)));
    }

    #[test]
    fn test_throttles_within_interval() {
        let mut limiter = FrameLimiter::from_interval(ms(10));
        assert!(limiter.ready(ms(0)));
        assert!(!limiter.ready(ms(3)));
        assert!(!limiter.ready(ms(10)));
        assert!(limiter.ready(ms(11)));
    }

    #[test]
    fn test_overshoot_is_carried() {
        let mut limiter = FrameLimiter::from_interval(ms(10));
        limiter.ready(ms(0));
        // 14 ms elapsed: frame granted and clock snapped back to 10
        assert!(limiter.ready(ms(14)));
        assert!(!limiter.ready(ms(20)));
        assert!(limiter.ready(ms(21)));
    }

    #[test]
    fn test_clock_going_backwards_is_not_ready() {
        let mut limiter = FrameLimiter::from_interval(ms(10));
        limiter.ready(ms(100));
        assert!(!limiter.ready(ms(50)));
    }

    #[test]
    fn test_new_from_fps() {
        let limiter = FrameLimiter::new(100.0);
        assert_eq!(limiter.interval(), ms(10));
    }

    #[test]
    fn test_reset() {
        let mut limiter = FrameLimiter::from_interval(ms(10));
        limiter.ready(ms(0));
        limiter.reset();
        assert!(limiter.ready(ms(1)));
    }

    #[test]
    #[should_panic]
    fn test_zero_fps_panics() {
        FrameLimiter::new(0.0);
    }
}
