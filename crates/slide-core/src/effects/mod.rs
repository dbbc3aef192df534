//! Time-driven text effects that accompany slides
//!
//! Both effects are pure functions of a start time and the current time, so a
//! host only needs to pass `Clock::now_ms()` each frame.

mod count_up;
mod typewriter;

pub use count_up::{ease_out_quart, CountUp};
pub use typewriter::Typewriter;
