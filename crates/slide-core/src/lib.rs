//! Core functionality for the slide showcase
//!
//! This crate provides the slide controller every carousel is built on,
//! together with its clock and configuration, slide decks and the small
//! time-driven effects that accompany slides.

pub mod clock;
pub mod config;
pub mod controller;
pub mod deck;
pub mod effects;
pub mod error;
pub mod reveal;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{MotionTimings, PresetFile, SlideConfig, TransitionPolicy, MAX_DURATION_MS};
pub use controller::{
    Direction, FnSubscriber, SlideController, SlideSnapshot, SlideSubscriber,
    TimerKind, TimerToken,
};
pub use deck::{Slide, SlideDeck, SlideId};
pub use effects::{CountUp, Typewriter};
pub use error::{ConfigError, SlideError};
pub use reveal::RevealSchedule;
