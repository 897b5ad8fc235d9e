// ABOUTME: Time-based tweens for stepper transitions
// Easing curves plus a retargetable animated scalar sampled at draw time

use std::time::{Duration, Instant};

/// Animation easing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start, fast middle, slow end.
    #[default]
    EaseInOut,
    /// Cubic ease-in-out.
    EaseInOutCubic,
}

impl Easing {
    /// Apply easing function to normalized time (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A scalar that eases toward its target over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    from: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl AnimatedValue {
    /// A value resting at `value` with no transition in flight
    pub fn settled(value: f32, duration: Duration) -> Self {
        Self {
            from: value,
            target: value,
            started_at: None,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Begin easing toward `target`, starting from wherever the value is at `now`
    pub fn set_target(&mut self, target: f32, now: Instant) {
        if (target - self.target).abs() < f32::EPSILON {
            return;
        }

        self.from = self.value_at(now);
        self.target = target;
        self.started_at = if self.duration.is_zero() {
            None
        } else {
            Some(now)
        };
    }

    /// Jump straight to `value`, dropping any transition in flight
    pub fn snap_to(&mut self, value: f32) {
        self.from = value;
        self.target = value;
        self.started_at = None;
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.target;
        };

        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration {
            return self.target;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.target - self.from) * self.easing.apply(t)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|started_at| now.saturating_duration_since(started_at) < self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOut, Easing::EaseInOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-6);
            // Clamped outside the unit interval
            assert_eq!(easing.apply(-1.0), 0.0);
            assert!((easing.apply(2.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_in_out_is_monotonic_and_slow_at_edges() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = Easing::EaseInOut.apply(step as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
        assert!(Easing::EaseInOut.apply(0.1) < 0.1);
        assert!(Easing::EaseInOut.apply(0.9) > 0.9);
    }

    #[test]
    fn test_animated_value_progresses_to_target() {
        let start = Instant::now();
        let mut value = AnimatedValue::settled(0.0, Duration::from_millis(100));

        value.set_target(1.0, start);

        assert!(value.is_animating(start));
        assert_eq!(value.value_at(start), 0.0);
        let mid = value.value_at(start + Duration::from_millis(50));
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(value.value_at(start + Duration::from_millis(100)), 1.0);
        assert!(!value.is_animating(start + Duration::from_millis(150)));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let start = Instant::now();
        let mut value =
            AnimatedValue::settled(0.0, Duration::from_millis(100)).with_easing(Easing::Linear);

        value.set_target(1.0, start);
        let midway = start + Duration::from_millis(50);
        value.set_target(0.0, midway);

        assert!((value.value_at(midway) - 0.5).abs() < 1e-3);
        assert_eq!(value.value_at(midway + Duration::from_millis(100)), 0.0);
    }

    #[test]
    fn test_zero_duration_applies_immediately() {
        let now = Instant::now();
        let mut value = AnimatedValue::settled(0.0, Duration::ZERO);

        value.set_target(1.0, now);

        assert!(!value.is_animating(now));
        assert_eq!(value.value_at(now), 1.0);
    }
}
