//! Slide subscriber trait

use super::SlideSnapshot;

/// Trait for components that need to respond to slide changes
pub trait SlideSubscriber: Send + Sync {
    /// Called synchronously after every state change
    fn on_slide_change(&self, snapshot: &SlideSnapshot);
}

/// Adapter turning a closure into a [`SlideSubscriber`]
pub struct FnSubscriber<F> {
    handler: F,
}

impl<F> FnSubscriber<F>
where
    F: Fn(&SlideSnapshot) + Send + Sync,
{
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> SlideSubscriber for FnSubscriber<F>
where
    F: Fn(&SlideSnapshot) + Send + Sync,
{
    fn on_slide_change(&self, snapshot: &SlideSnapshot) {
        (self.handler)(snapshot);
    }
}
