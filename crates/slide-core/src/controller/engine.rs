//! Slide controller implementation

use super::timer::OneShot;
use super::{Direction, SlideSnapshot, SlideSubscriber, TimerKind, TimerToken};
use crate::clock::{Clock, SystemClock};
use crate::config::{SlideConfig, TransitionPolicy};
use crate::error::SlideError;
use parking_lot::RwLock;
use std::sync::{Arc, Weak};
use tracing::{debug, info};

/// Controller state stored internally
#[derive(Debug, Clone)]
struct ControllerState {
    slide_count: usize,
    current_index: Option<usize>,
    direction: Option<Direction>,
    autoplay_enabled: bool,
    hover_suspended: bool,
    stopped_by_navigation: bool,
    autoplay: OneShot,
    transition: OneShot,
    transition_started_at: Option<u64>,
    destroyed: bool,
    /// Bumped on every observable change
    revision: u64,
}

impl ControllerState {
    fn new(config: &SlideConfig, now: u64) -> Self {
        let mut state = Self {
            slide_count: config.slide_count,
            current_index: Some(0),
            direction: None,
            autoplay_enabled: false,
            hover_suspended: false,
            stopped_by_navigation: false,
            autoplay: OneShot::default(),
            transition: OneShot::default(),
            transition_started_at: None,
            destroyed: false,
            revision: 0,
        };
        if config.plays_on_init() {
            state.start_autoplay(config, now);
        }
        state
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn is_transitioning(&self) -> bool {
        self.transition.is_armed()
    }

    /// Fire every timer due by `now`, earliest first
    fn catch_up(&mut self, config: &SlideConfig, now: u64) {
        loop {
            match (self.autoplay.due_by(now), self.transition.due_by(now)) {
                (None, None) => break,
                (Some(autoplay_at), Some(transition_at)) if transition_at <= autoplay_at => {
                    self.end_transition()
                }
                (Some(autoplay_at), _) => self.fire_autoplay(config, autoplay_at),
                (None, Some(_)) => self.end_transition(),
            }
        }
    }

    fn fire_autoplay(&mut self, config: &SlideConfig, at: u64) {
        let generation = self.autoplay.generation();
        self.autoplay.take(generation);
        // Automatic advances are never gated by the transition policy
        self.step(config, Direction::Next, at);
        let next_at = at.saturating_add(config.autoplay_delay_ms);
        // A saturated deadline would fire forever at the end of the clock
        if next_at > at {
            self.autoplay.arm(next_at);
        }
        self.touch();
    }

    /// Move one slot; returns false at a non-looping boundary or with no slides
    fn step(&mut self, config: &SlideConfig, direction: Direction, at: u64) -> bool {
        let Some(index) = self.current_index else {
            return false;
        };
        let last = self.slide_count - 1;

        let target = match direction {
            Direction::Next if index < last => index + 1,
            Direction::Next if config.looping => 0,
            Direction::Previous if index > 0 => index - 1,
            Direction::Previous if config.looping => last,
            Direction::Jump => index,
            _ => return false,
        };

        self.current_index = Some(target);
        self.direction = Some(direction);
        self.begin_transition(config, at);
        true
    }

    fn begin_transition(&mut self, config: &SlideConfig, at: u64) {
        if config.transition_window_ms > 0 {
            self.transition.arm(at.saturating_add(config.transition_window_ms));
            self.transition_started_at = Some(at);
        } else {
            self.transition.cancel();
            self.transition_started_at = None;
        }
        self.touch();
    }

    fn end_transition(&mut self) {
        self.transition.cancel();
        self.transition_started_at = None;
        self.touch();
    }

    fn start_autoplay(&mut self, config: &SlideConfig, now: u64) {
        self.autoplay_enabled = true;
        self.autoplay.arm(now.saturating_add(config.autoplay_delay_ms));
        self.touch();
    }

    fn stop_autoplay(&mut self) {
        self.autoplay_enabled = false;
        self.autoplay.cancel();
        self.touch();
    }

    /// Timer bookkeeping shared by every manual navigation
    fn after_manual_navigation(&mut self, config: &SlideConfig, now: u64) {
        if config.pause_on_manual_navigation {
            self.stopped_by_navigation = true;
            if self.autoplay_enabled {
                self.stop_autoplay();
            }
        } else if self.autoplay_enabled {
            // Reset the cadence rather than double-advancing
            self.autoplay.arm(now.saturating_add(config.autoplay_delay_ms));
            self.touch();
        }
    }

    fn earliest_timer(&self) -> Option<TimerToken> {
        let autoplay = self.autoplay.due_at().map(|due_at_ms| TimerToken {
            kind: TimerKind::Autoplay,
            generation: self.autoplay.generation(),
            due_at_ms,
        });
        let transition = self.transition.due_at().map(|due_at_ms| TimerToken {
            kind: TimerKind::TransitionEnd,
            generation: self.transition.generation(),
            due_at_ms,
        });

        match (autoplay, transition) {
            (Some(a), Some(t)) => Some(if t.due_at_ms <= a.due_at_ms { t } else { a }),
            (a, t) => a.or(t),
        }
    }

    fn is_current(&self, token: &TimerToken) -> bool {
        let timer = match token.kind {
            TimerKind::Autoplay => &self.autoplay,
            TimerKind::TransitionEnd => &self.transition,
        };
        timer.is_armed() && timer.generation() == token.generation
    }
}

/// Current-slide index and autoplay lifecycle for one carousel.
///
/// All operations take `&self`; state sits behind a lock so the controller can
/// be shared with the rendering layer as `Arc<SlideController>`. Every operation
/// first fires any timer whose deadline has already passed, so results do not
/// depend on how often the host calls [`tick`](Self::tick).
pub struct SlideController {
    config: SlideConfig,
    clock: Arc<dyn Clock>,
    state: RwLock<ControllerState>,
    subscribers: RwLock<Vec<Weak<dyn SlideSubscriber>>>,
}

impl SlideController {
    /// Create a controller; rejects invalid configurations
    pub fn new(config: SlideConfig, clock: Arc<dyn Clock>) -> Result<Self, SlideError> {
        config.validate()?;
        let state = ControllerState::new(&config, clock.now_ms());

        info!(
            "Created slide controller: {} slides, autoplay {} ms, playing: {}",
            config.slide_count, config.autoplay_delay_ms, state.autoplay_enabled
        );

        Ok(Self {
            config,
            clock,
            state: RwLock::new(state),
            subscribers: RwLock::new(Vec::new()),
        })
    }

    /// Create a controller driven by the wall clock
    pub fn with_system_clock(config: SlideConfig) -> Result<Self, SlideError> {
        Self::new(config, Arc::new(SystemClock::new()))
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// Advance one slot, wrapping when looping
    pub fn next(&self) -> Result<(), SlideError> {
        self.navigate(Direction::Next)
    }

    /// Go back one slot, wrapping when looping
    pub fn previous(&self) -> Result<(), SlideError> {
        self.navigate(Direction::Previous)
    }

    /// Jump directly to `index`.
    ///
    /// Jumping to the current index leaves it untouched but still resets the
    /// autoplay timer.
    pub fn go_to(&self, index: usize) -> Result<(), SlideError> {
        self.update(|state, config, now| {
            if state.slide_count == 0 {
                return Ok(());
            }
            if index >= state.slide_count {
                return Err(SlideError::OutOfRange {
                    index,
                    count: state.slide_count,
                });
            }

            if state.current_index != Some(index) {
                state.current_index = Some(index);
                state.step(config, Direction::Jump, now);
            }
            state.after_manual_navigation(config, now);
            Ok(())
        })
    }

    /// Resume autoplay; a no-op when the delay is zero or already playing
    pub fn play(&self) -> Result<(), SlideError> {
        self.update(|state, config, now| {
            if config.autoplay_delay_ms == 0 {
                return Ok(());
            }
            if state.hover_suspended || state.stopped_by_navigation {
                state.hover_suspended = false;
                state.stopped_by_navigation = false;
                state.touch();
            }
            if !state.autoplay_enabled {
                state.start_autoplay(config, now);
            }
            Ok(())
        })
    }

    /// Halt autoplay without touching the index
    pub fn pause(&self) -> Result<(), SlideError> {
        self.update(|state, _, _| {
            if state.hover_suspended {
                state.hover_suspended = false;
                state.touch();
            }
            if state.autoplay_enabled {
                state.stop_autoplay();
            }
            Ok(())
        })
    }

    /// Pointer entered the slider
    pub fn on_pointer_enter(&self) -> Result<(), SlideError> {
        self.update(|state, config, _| {
            if config.pause_on_hover && state.autoplay_enabled {
                state.stop_autoplay();
                state.hover_suspended = true;
            }
            Ok(())
        })
    }

    /// Pointer left the slider
    pub fn on_pointer_leave(&self) -> Result<(), SlideError> {
        self.update(|state, config, now| {
            if !state.hover_suspended {
                return Ok(());
            }
            state.hover_suspended = false;
            state.touch();
            if !state.stopped_by_navigation && config.autoplay_delay_ms > 0 {
                state.start_autoplay(config, now);
            }
            Ok(())
        })
    }

    /// Change the number of slides, clamping the current index into range
    pub fn set_slide_count(&self, slide_count: usize) -> Result<(), SlideError> {
        self.update(|state, config, now| {
            if state.slide_count == slide_count {
                return Ok(());
            }
            let previous = state.current_index;
            state.slide_count = slide_count;
            state.current_index = match slide_count {
                0 => None,
                n => Some(previous.map_or(0, |index| index.min(n - 1))),
            };
            state.touch();

            if previous != state.current_index {
                // A clamp moves the visible slide like a jump does
                match state.current_index {
                    Some(_) => {
                        state.direction = Some(Direction::Jump);
                        state.begin_transition(config, now);
                    }
                    None => state.end_transition(),
                }
                debug!(
                    "Slide count now {}, index {:?} -> {:?}",
                    slide_count, previous, state.current_index
                );
            }
            Ok(())
        })
    }

    /// Fire every timer that is due. Returns whether anything changed.
    pub fn tick(&self) -> Result<bool, SlideError> {
        let start = self.state.read().revision;
        self.update(|_, _, _| Ok(()))?;
        Ok(self.state.read().revision != start)
    }

    /// Fire the timer identified by `token`.
    ///
    /// Stale tokens are ignored and return `Ok(false)`. A token fired before its
    /// deadline has no effect.
    pub fn fire(&self, token: TimerToken) -> Result<bool, SlideError> {
        {
            let state = self.state.read();
            if state.destroyed {
                return Err(SlideError::InvalidState);
            }
            if !state.is_current(&token) {
                debug!("Ignoring stale {:?} timer (generation {})", token.kind, token.generation);
                return Ok(false);
            }
        }
        self.tick()
    }

    /// Earliest pending timer, for hosts that schedule their own callbacks
    pub fn next_timer(&self) -> Option<TimerToken> {
        let state = self.state.read();
        if state.destroyed {
            return None;
        }
        state.earliest_timer()
    }

    /// Cancel all timers. Every later operation fails with `InvalidState`.
    pub fn destroy(&self) -> Result<(), SlideError> {
        self.update(|state, _, _| {
            state.autoplay.cancel();
            state.transition.cancel();
            state.transition_started_at = None;
            state.autoplay_enabled = false;
            state.hover_suspended = false;
            state.destroyed = true;
            state.touch();
            Ok(())
        })?;

        info!("Destroyed slide controller");
        self.subscribers.write().clear();
        Ok(())
    }

    /// Current state as seen by the rendering layer
    pub fn snapshot(&self) -> SlideSnapshot {
        let now = self.clock.now_ms();
        let state = self.state.read();

        let transition_live = state.transition.due_at().is_some_and(|due| due > now);
        let autoplay_progress = match state.autoplay.due_at() {
            Some(due) if state.autoplay_enabled && self.config.autoplay_delay_ms > 0 => {
                let delay = self.config.autoplay_delay_ms;
                let remaining = due.saturating_sub(now).min(delay);
                (delay - remaining) as f32 / delay as f32
            }
            _ => 0.0,
        };

        SlideSnapshot {
            current_index: state.current_index,
            slide_count: state.slide_count,
            is_playing: state.autoplay_enabled,
            is_transitioning: transition_live,
            direction: state.direction,
            hover_paused: state.hover_suspended,
            destroyed: state.destroyed,
            transition_elapsed_ms: state
                .transition_started_at
                .filter(|_| transition_live)
                .map(|started| now.saturating_sub(started)),
            autoplay_progress,
        }
    }

    /// Add a subscriber; it is dropped automatically once its last `Arc` goes away
    pub fn subscribe(&self, subscriber: Arc<dyn SlideSubscriber>) {
        self.subscribers.write().push(Arc::downgrade(&subscriber));
    }

    fn navigate(&self, direction: Direction) -> Result<(), SlideError> {
        self.update(|state, config, now| {
            if state.current_index.is_none() {
                return Ok(());
            }
            if config.transition_policy == TransitionPolicy::Ignore && state.is_transitioning() {
                debug!("Ignoring {:?} during transition", direction);
                return Ok(());
            }
            if state.step(config, direction, now) {
                state.after_manual_navigation(config, now);
            }
            Ok(())
        })
    }

    /// Run `op` against caught-up state and notify subscribers if anything changed
    fn update<R>(
        &self,
        op: impl FnOnce(&mut ControllerState, &SlideConfig, u64) -> Result<R, SlideError>,
    ) -> Result<R, SlideError> {
        let now = self.clock.now_ms();
        let mut state = self.state.write();
        if state.destroyed {
            return Err(SlideError::InvalidState);
        }

        let start = state.revision;
        state.catch_up(&self.config, now);
        let result = op(&mut state, &self.config, now);
        let changed = state.revision != start;

        drop(state);
        if changed {
            self.notify_subscribers();
        }
        result
    }

    /// Notify all live subscribers outside of any lock
    fn notify_subscribers(&self) {
        let live: Vec<Arc<dyn SlideSubscriber>> = {
            let mut subscribers = self.subscribers.write();
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        if live.is_empty() {
            return;
        }

        let snapshot = self.snapshot();
        for subscriber in live {
            subscriber.on_slide_change(&snapshot);
        }
    }
}

impl std::fmt::Debug for SlideController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideController")
            .field("config", &self.config)
            .field("state", &*self.state.read())
            .finish()
    }
}
