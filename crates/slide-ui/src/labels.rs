//! Animated text widgets: counting statistics and typed headlines

use egui::{Ui, Response, RichText};
use slide_core::{Clock, CountUp, Typewriter};
use std::sync::Arc;

use crate::theme;

/// A statistic that counts up the first time it scrolls into view
pub struct StatCounter {
    counter: CountUp,
    target: f64,
    caption: String,
    clock: Arc<dyn Clock>,
}

impl StatCounter {
    pub fn new(counter: CountUp, target: f64, caption: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            counter,
            target,
            caption: caption.into(),
            clock,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let now = self.clock.now_ms();
        let response = ui
            .vertical_centered(|ui| {
                ui.label(
                    RichText::new(self.counter.formatted(now))
                        .size(38.0)
                        .strong()
                        .color(theme::accent_color()),
                );
                ui.label(RichText::new(&self.caption).color(theme::muted_text_color()));
            })
            .response;

        if !self.counter.has_started() && ui.is_rect_visible(response.rect) {
            self.counter.count_to(self.target, now);
        }
        if self.counter.is_animating(now) {
            ui.ctx().request_repaint();
        }
        response
    }
}

/// A headline typed out character by character, with a blinking caret
pub struct TypewriterLabel {
    writer: Typewriter,
    clock: Arc<dyn Clock>,
    size: f32,
}

impl TypewriterLabel {
    const CARET_BLINK_MS: u64 = 530;

    pub fn new(writer: Typewriter, clock: Arc<dyn Clock>) -> Self {
        let mut writer = writer;
        writer.start(clock.now_ms());
        Self {
            writer,
            clock,
            size: 30.0,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let now = self.clock.now_ms();
        let caret_on = self.writer.is_typing(now) || (now / Self::CARET_BLINK_MS) % 2 == 0;
        let caret = if caret_on { "|" } else { " " };

        let text = format!("{}{}", self.writer.visible_text(now), caret);
        let response = ui.label(RichText::new(text).size(self.size).strong());

        ui.ctx().request_repaint_after(std::time::Duration::from_millis(50));
        response
    }
}
