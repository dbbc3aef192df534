use serde::{Serialize, Deserialize};

mod engine;
mod subscriber;
mod timer;

pub use engine::SlideController;
pub use subscriber::{FnSubscriber, SlideSubscriber};

/// Semantic of the most recent navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Advanced by one slot
    Next,
    /// Went back by one slot
    Previous,
    /// Jumped straight to an index
    Jump,
}

/// The timers a controller owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Next automatic advance
    Autoplay,
    /// End of the current transition window
    TransitionEnd,
}

/// Handle for a pending timer, as reported by [`SlideController::next_timer`].
///
/// Hosts that schedule their own callbacks pass the token back to
/// [`SlideController::fire`]; tokens from a cancelled or re-armed timer are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
    pub due_at_ms: u64,
}

/// Read-only view of a controller handed to the rendering layer
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSnapshot {
    /// Active slide, `None` when there are no slides
    pub current_index: Option<usize>,
    pub slide_count: usize,
    pub is_playing: bool,
    pub is_transitioning: bool,
    /// `None` until the first navigation
    pub direction: Option<Direction>,
    /// Autoplay is suspended because the pointer is over the slider
    pub hover_paused: bool,
    pub destroyed: bool,
    /// Time since the current transition started, while one is in flight
    pub transition_elapsed_ms: Option<u64>,
    /// Fraction of the autoplay delay elapsed (0 when not playing)
    pub autoplay_progress: f32,
}
