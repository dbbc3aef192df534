//! Slides plus the controller that rotates through them
//!
//! A deck keeps every slide it was built with and a filtered "visible" view on
//! top. The controller only ever sees the visible count, so narrowing the set
//! (e.g. a project status tab) clamps the current slide immediately.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::clock::Clock;
use crate::config::SlideConfig;
use crate::controller::SlideController;
use crate::error::SlideError;

/// Unique identifier for a slide
pub type SlideId = Uuid;

/// One immutable item in a rotating sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide<P> {
    pub id: SlideId,
    /// Position in the deck as built, independent of filtering
    pub ordinal: usize,
    pub payload: P,
}

/// A set of slides driven by one [`SlideController`]
pub struct SlideDeck<P> {
    slides: Vec<Slide<P>>,
    visible: Vec<usize>,
    controller: Arc<SlideController>,
}

impl<P> SlideDeck<P> {
    /// Build a deck; the config's slide count is taken from `payloads`
    pub fn new(
        payloads: impl IntoIterator<Item = P>,
        config: SlideConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, SlideError> {
        let slides: Vec<Slide<P>> = payloads
            .into_iter()
            .enumerate()
            .map(|(ordinal, payload)| Slide {
                id: Uuid::new_v4(),
                ordinal,
                payload,
            })
            .collect();

        let controller = SlideController::new(config.with_slide_count(slides.len()), clock)?;
        let visible = (0..slides.len()).collect();

        Ok(Self {
            slides,
            visible,
            controller: Arc::new(controller),
        })
    }

    pub fn controller(&self) -> &Arc<SlideController> {
        &self.controller
    }

    /// Number of visible slides
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Every slide, ignoring the filter
    pub fn all(&self) -> &[Slide<P>] {
        &self.slides
    }

    /// Visible slides in display order
    pub fn visible(&self) -> impl Iterator<Item = &Slide<P>> + '_ {
        self.visible.iter().map(|&i| &self.slides[i])
    }

    /// Visible slide at `index`
    pub fn get(&self, index: usize) -> Option<&Slide<P>> {
        self.visible.get(index).map(|&i| &self.slides[i])
    }

    /// The slide the controller currently points at
    pub fn current(&self) -> Option<&Slide<P>> {
        self.controller
            .snapshot()
            .current_index
            .and_then(|index| self.get(index))
    }

    /// Show only slides whose payload matches `predicate`
    pub fn apply_filter(&mut self, predicate: impl Fn(&P) -> bool) -> Result<(), SlideError> {
        self.visible = self
            .slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| predicate(&slide.payload))
            .map(|(i, _)| i)
            .collect();

        debug!("Filter kept {} of {} slides", self.visible.len(), self.slides.len());
        self.controller.set_slide_count(self.visible.len())
    }

    /// Show every slide again
    pub fn clear_filter(&mut self) -> Result<(), SlideError> {
        self.visible = (0..self.slides.len()).collect();
        self.controller.set_slide_count(self.visible.len())
    }
}
