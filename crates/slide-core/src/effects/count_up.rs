//! Animated counter for statistics

/// Counter updates per second
const FRAMES_PER_SECOND: u64 = 60;

/// Ease-out curve used by the counter
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Animation {
    target: f64,
    started_at: u64,
}

/// A number that counts from `start` up to a target, frame by frame
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    start: f64,
    duration_ms: u64,
    decimals: usize,
    prefix: String,
    suffix: String,
    animation: Option<Animation>,
}

impl Default for CountUp {
    fn default() -> Self {
        Self {
            start: 0.0,
            duration_ms: 2000,
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
            animation: None,
        }
    }
}

impl CountUp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Start counting towards `target` at `now_ms`
    pub fn count_to(&mut self, target: f64, now_ms: u64) {
        self.animation = Some(Animation {
            target,
            started_at: now_ms,
        });
    }

    /// Back to the start value, not animating
    pub fn reset(&mut self) {
        self.animation = None;
    }

    pub fn has_started(&self) -> bool {
        self.animation.is_some()
    }

    fn total_frames(&self) -> u64 {
        ((self.duration_ms * FRAMES_PER_SECOND + 500) / 1000).max(1)
    }

    fn frame_at(&self, animation: &Animation, now_ms: u64) -> u64 {
        now_ms.saturating_sub(animation.started_at) * FRAMES_PER_SECOND / 1000
    }

    /// Current value; exactly the target once the last frame has passed
    pub fn value_at(&self, now_ms: u64) -> f64 {
        let Some(animation) = &self.animation else {
            return self.start;
        };
        let total = self.total_frames();
        let frame = self.frame_at(animation, now_ms);
        if frame >= total {
            return animation.target;
        }
        let progress = ease_out_quart(frame as f64 / total as f64);
        self.start + (animation.target - self.start) * progress
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|animation| self.frame_at(animation, now_ms) < self.total_frames())
    }

    /// Value with prefix, suffix and fixed decimals, e.g. `"$12.5M"`
    pub fn formatted(&self, now_ms: u64) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix,
            self.decimals,
            self.value_at(now_ms),
            self.suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_with_easing() {
        let mut counter = CountUp::new().with_suffix("+");
        assert_eq!(counter.formatted(0), "0+");
        assert!(!counter.is_animating(0));

        counter.count_to(100.0, 1000);
        assert_eq!(counter.value_at(1000), 0.0);
        assert!(counter.is_animating(1000));

        // Halfway through the frames: 1 - 0.5^4
        assert_eq!(counter.value_at(2000), 93.75);
        assert_eq!(counter.formatted(2000), "94+");

        assert_eq!(counter.value_at(3000), 100.0);
        assert!(!counter.is_animating(3000));
        assert_eq!(counter.value_at(60_000), 100.0);
    }

    #[test]
    fn test_decimals_and_prefix() {
        let mut counter = CountUp::new()
            .with_start(1.0)
            .with_duration(500)
            .with_decimals(1)
            .with_prefix("$")
            .with_suffix("M");
        counter.count_to(12.5, 0);
        assert_eq!(counter.formatted(0), "$1.0M");
        assert_eq!(counter.formatted(500), "$12.5M");

        counter.reset();
        assert_eq!(counter.formatted(900), "$1.0M");
        assert!(!counter.has_started());
    }

    #[test]
    fn test_zero_duration_jumps_after_one_frame() {
        let mut counter = CountUp::new().with_duration(0);
        counter.count_to(7.0, 0);
        assert_eq!(counter.value_at(0), 0.0);
        assert_eq!(counter.value_at(17), 7.0);
    }

    #[test]
    fn test_ease_out_quart_bounds() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(ease_out_quart(0.25) > 0.25);
    }
}
