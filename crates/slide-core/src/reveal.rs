//! Staggered content reveal after a slide change

/// Ordered stage offsets (ms after a transition starts)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSchedule {
    offsets_ms: Vec<u64>,
    settle_ms: u64,
}

impl RevealSchedule {
    /// Build a schedule from arbitrary offsets; the last offset is the settle point
    pub fn from_offsets(mut offsets_ms: Vec<u64>) -> Self {
        offsets_ms.sort_unstable();
        let settle_ms = offsets_ms.last().copied().unwrap_or(0);
        Self {
            offsets_ms,
            settle_ms,
        }
    }

    /// `stages` evenly spaced stages, the first one immediately
    pub fn staggered(step_ms: u64, stages: usize) -> Self {
        let offsets = (0..stages as u64).map(|i| i * step_ms).collect();
        Self::from_offsets(offsets)
    }

    /// Title, subtitle, description and call-to-action revealed in sequence,
    /// settling at 3.5 × `stagger_ms`
    pub fn cinematic(stagger_ms: u64) -> Self {
        let at = |factor: u64| stagger_ms * factor / 10;
        Self {
            offsets_ms: vec![at(5), at(12), at(20), at(28)],
            settle_ms: at(35),
        }
    }

    pub fn stage_count(&self) -> usize {
        self.offsets_ms.len()
    }

    /// Number of stages revealed `elapsed_ms` after the transition started
    pub fn stage_at(&self, elapsed_ms: u64) -> usize {
        self.offsets_ms.partition_point(|offset| *offset <= elapsed_ms)
    }

    /// Progress of `stage` (0-based) as 0..=1, for fading it in over `fade_ms`
    pub fn stage_progress(&self, stage: usize, elapsed_ms: u64, fade_ms: u64) -> f32 {
        let Some(offset) = self.offsets_ms.get(stage) else {
            return 0.0;
        };
        if elapsed_ms < *offset {
            return 0.0;
        }
        if fade_ms == 0 {
            return 1.0;
        }
        ((elapsed_ms - offset) as f32 / fade_ms as f32).min(1.0)
    }

    pub fn is_settled(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.settle_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cinematic_stages() {
        let schedule = RevealSchedule::cinematic(120);
        assert_eq!(schedule.stage_count(), 4);
        assert_eq!(schedule.stage_at(0), 0);
        assert_eq!(schedule.stage_at(60), 1);
        assert_eq!(schedule.stage_at(143), 1);
        assert_eq!(schedule.stage_at(144), 2);
        assert_eq!(schedule.stage_at(336), 4);
        assert!(!schedule.is_settled(419));
        assert!(schedule.is_settled(420));
    }

    #[test]
    fn test_zero_stagger_reveals_everything_at_once() {
        let schedule = RevealSchedule::cinematic(0);
        assert_eq!(schedule.stage_at(0), 4);
        assert!(schedule.is_settled(0));
    }

    #[test]
    fn test_staggered_progress() {
        let schedule = RevealSchedule::staggered(200, 3);
        assert_eq!(schedule.stage_at(0), 1);
        assert_eq!(schedule.stage_at(400), 3);
        assert_eq!(schedule.stage_progress(1, 100, 100), 0.0);
        assert_eq!(schedule.stage_progress(1, 250, 100), 0.5);
        assert_eq!(schedule.stage_progress(1, 900, 100), 1.0);
        assert_eq!(schedule.stage_progress(5, 900, 100), 0.0);
    }
}
