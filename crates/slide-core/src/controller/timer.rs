//! Cancellable one-shot timers guarded by a generation counter

/// A single deadline that can be armed, re-armed or cancelled.
///
/// Every arm or cancel bumps the generation, so a token handed out for an
/// earlier deadline no longer matches and is rejected by [`OneShot::take`].
#[derive(Debug, Clone, Default)]
pub(crate) struct OneShot {
    generation: u64,
    due_at: Option<u64>,
}

impl OneShot {
    /// Arm the timer for `due_at`, replacing any pending deadline
    pub fn arm(&mut self, due_at: u64) {
        self.generation += 1;
        self.due_at = Some(due_at);
    }

    /// Drop any pending deadline
    pub fn cancel(&mut self) {
        if self.due_at.is_some() {
            self.generation += 1;
            self.due_at = None;
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn due_at(&self) -> Option<u64> {
        self.due_at
    }

    pub fn is_armed(&self) -> bool {
        self.due_at.is_some()
    }

    /// Deadline if it has been reached at `now`
    pub fn due_by(&self, now: u64) -> Option<u64> {
        self.due_at.filter(|due| *due <= now)
    }

    /// Disarm the timer if `generation` is still current, returning its deadline
    pub fn take(&mut self, generation: u64) -> Option<u64> {
        if generation != self.generation {
            return None;
        }
        let due = self.due_at.take()?;
        self.generation += 1;
        Some(due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_generation_is_rejected() {
        let mut timer = OneShot::default();
        timer.arm(1000);
        let stale = timer.generation();

        timer.arm(2000);
        assert_eq!(timer.take(stale), None);
        assert_eq!(timer.due_at(), Some(2000));

        let current = timer.generation();
        assert_eq!(timer.take(current), Some(2000));
        assert!(!timer.is_armed());
        assert_eq!(timer.take(current), None);
    }

    #[test]
    fn test_cancel_invalidates_token() {
        let mut timer = OneShot::default();
        timer.arm(500);
        let token = timer.generation();
        timer.cancel();

        assert_eq!(timer.take(token), None);
        assert_eq!(timer.due_by(10_000), None);
    }

    #[test]
    fn test_due_by() {
        let mut timer = OneShot::default();
        timer.arm(500);
        assert_eq!(timer.due_by(499), None);
        assert_eq!(timer.due_by(500), Some(500));
    }
}
