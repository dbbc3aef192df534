//! Carousel widget bound to a slide controller
//! Draws arrows, dot indicators, a play/pause toggle and the autoplay progress bar

use egui::{Ui, Response, Sense, Color32, Vec2, Pos2, Rect, Rounding, Id, Key, RichText};
use slide_core::{SlideController, SlideError, SlideSnapshot};
use std::sync::Arc;
use tracing::warn;

use crate::icons;
use crate::theme;

/// Carousel widget configuration
#[derive(Debug, Clone)]
pub struct CarouselViewConfig {
    /// Height of the slide area
    pub height: f32,

    /// Show previous/next arrows
    pub show_arrows: bool,

    /// Show dot indicators
    pub show_dots: bool,

    /// Show the play/pause toggle
    pub show_play_button: bool,

    /// Show the autoplay progress bar
    pub show_progress: bool,

    /// Left/right arrow keys navigate while hovered
    pub keyboard_navigation: bool,

    pub dot_color: Color32,
    pub active_dot_color: Color32,
    pub progress_color: Color32,
}

impl Default for CarouselViewConfig {
    fn default() -> Self {
        Self {
            height: 420.0,
            show_arrows: true,
            show_dots: true,
            show_play_button: true,
            show_progress: true,
            keyboard_navigation: true,
            dot_color: Color32::from_white_alpha(90),
            active_dot_color: theme::accent_color(),
            progress_color: theme::accent_color(),
        }
    }
}

/// Response from a carousel frame
pub struct CarouselResponse {
    /// Response for the whole slide area
    pub response: Response,

    /// State after this frame's input was applied
    pub snapshot: SlideSnapshot,
}

/// Rendering layer for one [`SlideController`].
///
/// The view owns the controller's lifecycle: dropping it destroys the controller.
pub struct CarouselView {
    controller: Arc<SlideController>,
    config: CarouselViewConfig,
    id: Id,
    pointer_inside: bool,
}

impl CarouselView {
    /// Create a new carousel view
    pub fn new(id_source: impl std::hash::Hash, controller: Arc<SlideController>) -> Self {
        Self {
            controller,
            config: CarouselViewConfig::default(),
            id: Id::new(id_source),
            pointer_inside: false,
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: CarouselViewConfig) -> Self {
        self.config = config;
        self
    }

    pub fn controller(&self) -> &Arc<SlideController> {
        &self.controller
    }

    /// Show the carousel; `paint_slide` draws the current slide into the given rect
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        paint_slide: impl FnOnce(&mut Ui, Rect, &SlideSnapshot),
    ) -> CarouselResponse {
        if let Err(err) = self.controller.tick() {
            warn!("Carousel tick failed: {}", err);
        }

        let size = Vec2::new(ui.available_width(), self.config.height);
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        self.track_pointer(ui, rect);
        if self.config.keyboard_navigation && self.pointer_inside {
            self.handle_keys(ui);
        }

        let snapshot = self.controller.snapshot();
        paint_slide(ui, rect, &snapshot);

        if self.config.show_progress {
            self.draw_progress(ui, rect, &snapshot);
        }
        if self.config.show_arrows && snapshot.slide_count > 1 {
            self.show_arrows(ui, rect);
        }
        if self.config.show_dots {
            self.show_dots(ui, rect, &snapshot);
        }
        if self.config.show_play_button && self.controller.config().autoplay_delay_ms > 0 {
            self.show_play_button(ui, rect, &snapshot);
        }

        let snapshot = self.controller.snapshot();
        self.schedule_repaint(ui, &snapshot);

        CarouselResponse { response, snapshot }
    }

    /// Call instead of [`Self::ui`] on frames where the carousel is not drawn.
    ///
    /// A pointer that was over the carousel is treated as having left, so a
    /// hover pause does not outlive the widget being visible.
    pub fn hide(&mut self) {
        if self.pointer_inside {
            self.pointer_inside = false;
            report("pointer leave", self.controller.on_pointer_leave());
        }
    }

    /// Turn hover changes into pointer enter/leave signals
    fn track_pointer(&mut self, ui: &Ui, rect: Rect) {
        let inside = ui.rect_contains_pointer(rect);
        if inside == self.pointer_inside {
            return;
        }
        self.pointer_inside = inside;
        if inside {
            report("pointer enter", self.controller.on_pointer_enter());
        } else {
            report("pointer leave", self.controller.on_pointer_leave());
        }
    }

    fn handle_keys(&self, ui: &Ui) {
        let (left, right) = ui.input(|i| (i.key_pressed(Key::ArrowLeft), i.key_pressed(Key::ArrowRight)));
        if left {
            report("previous", self.controller.previous());
        }
        if right {
            report("next", self.controller.next());
        }
    }

    fn show_arrows(&self, ui: &mut Ui, rect: Rect) {
        let arrow_size = Vec2::splat(40.0);
        let margin = 16.0 + arrow_size.x / 2.0;

        let prev_rect = Rect::from_center_size(rect.left_center() + Vec2::new(margin, 0.0), arrow_size);
        let prev = ui.put(
            prev_rect,
            egui::Button::new(RichText::new(icons::PREVIOUS).size(22.0))
                .fill(theme::scrim_color())
                .rounding(Rounding::same(20.0)),
        );
        if prev.on_hover_text("Previous slide").clicked() {
            report("previous", self.controller.previous());
        }

        let next_rect = Rect::from_center_size(rect.right_center() - Vec2::new(margin, 0.0), arrow_size);
        let next = ui.put(
            next_rect,
            egui::Button::new(RichText::new(icons::NEXT).size(22.0))
                .fill(theme::scrim_color())
                .rounding(Rounding::same(20.0)),
        );
        if next.on_hover_text("Next slide").clicked() {
            report("next", self.controller.next());
        }
    }

    fn show_dots(&self, ui: &mut Ui, rect: Rect, snapshot: &SlideSnapshot) {
        let count = snapshot.slide_count;
        if count < 2 {
            return;
        }

        let spacing = 18.0;
        let y = rect.bottom() - 28.0;
        let start_x = rect.center().x - spacing * (count - 1) as f32 / 2.0;
        let painter = ui.painter_at(rect);

        for index in 0..count {
            let center = Pos2::new(start_x + spacing * index as f32, y);
            let active = snapshot.current_index == Some(index);

            let hit_rect = Rect::from_center_size(center, Vec2::splat(14.0));
            let dot = ui.interact(hit_rect, self.id.with(("dot", index)), Sense::click());

            let (width, color) = if active {
                (22.0, self.config.active_dot_color)
            } else if dot.hovered() {
                (8.0, Color32::from_white_alpha(180))
            } else {
                (8.0, self.config.dot_color)
            };
            painter.rect_filled(
                Rect::from_center_size(center, Vec2::new(width, 8.0)),
                Rounding::same(4.0),
                color,
            );

            if dot.on_hover_text(format!("Slide {}", index + 1)).clicked() {
                report("go to", self.controller.go_to(index));
            }
        }
    }

    fn show_play_button(&self, ui: &mut Ui, rect: Rect, snapshot: &SlideSnapshot) {
        let (icon, hover_text) = if snapshot.is_playing || snapshot.hover_paused {
            (icons::PAUSE, "Pause slideshow")
        } else {
            (icons::PLAY, "Play slideshow")
        };

        let button_rect = Rect::from_center_size(rect.right_top() + Vec2::new(-36.0, 36.0), Vec2::splat(36.0));
        let button = ui.put(
            button_rect,
            egui::Button::new(RichText::new(icon).size(16.0))
                .fill(theme::scrim_color())
                .rounding(Rounding::same(18.0)),
        );
        if button.on_hover_text(hover_text).clicked() {
            let result = if snapshot.is_playing || snapshot.hover_paused {
                self.controller.pause()
            } else {
                self.controller.play()
            };
            report("play/pause", result);
        }
    }

    fn draw_progress(&self, ui: &Ui, rect: Rect, snapshot: &SlideSnapshot) {
        if !snapshot.is_playing {
            return;
        }
        let bar = Rect::from_min_size(
            Pos2::new(rect.left(), rect.bottom() - 3.0),
            Vec2::new(rect.width() * snapshot.autoplay_progress, 3.0),
        );
        ui.painter_at(rect).rect_filled(bar, Rounding::ZERO, self.config.progress_color);
    }

    fn schedule_repaint(&self, ui: &Ui, snapshot: &SlideSnapshot) {
        let animating = snapshot.is_transitioning || (self.config.show_progress && snapshot.is_playing);
        if animating {
            ui.ctx().request_repaint();
        } else if snapshot.is_playing {
            let delay = self.controller.config().autoplay_delay_ms as f32;
            let remaining = delay * (1.0 - snapshot.autoplay_progress);
            ui.ctx().request_repaint_after(std::time::Duration::from_millis(remaining as u64));
        }
    }
}

impl Drop for CarouselView {
    fn drop(&mut self) {
        if !self.controller.snapshot().destroyed {
            report("destroy", self.controller.destroy());
        }
    }
}

fn report(operation: &str, result: Result<(), SlideError>) {
    if let Err(err) = result {
        warn!("Carousel {} failed: {}", operation, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slide_core::{ManualClock, SlideConfig};

    fn run_frame(ctx: &egui::Context, view: &mut CarouselView) -> Option<SlideSnapshot> {
        let mut painted = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                view.ui(ui, |_, _, snapshot| painted = Some(snapshot.clone()));
            });
        });
        painted
    }

    #[test]
    fn test_frame_ticks_controller_and_paints_current_slide() {
        let clock = Arc::new(ManualClock::new(0));
        let controller = Arc::new(SlideController::new(SlideConfig::new(3), clock.clone()).unwrap());
        let mut view = CarouselView::new("hero", controller.clone());
        let ctx = egui::Context::default();

        let first = run_frame(&ctx, &mut view).unwrap();
        assert_eq!(first.current_index, Some(0));

        clock.set(5000);
        let second = run_frame(&ctx, &mut view).unwrap();
        assert_eq!(second.current_index, Some(1));
        assert!(second.is_transitioning);
    }

    #[test]
    fn test_hiding_hovered_view_resumes_autoplay() {
        let clock = Arc::new(ManualClock::new(0));
        let controller = Arc::new(SlideController::new(SlideConfig::new(3), clock).unwrap());
        let mut view = CarouselView::new("projects", controller.clone());
        let ctx = egui::Context::default();

        run_frame(&ctx, &mut view);
        view.pointer_inside = true;
        controller.on_pointer_enter().unwrap();
        assert!(controller.snapshot().hover_paused);

        view.hide();
        let snapshot = controller.snapshot();
        assert!(!snapshot.hover_paused);
        assert!(snapshot.is_playing);

        // Hiding again is a no-op
        view.hide();
        assert!(controller.snapshot().is_playing);
    }

    #[test]
    fn test_dropping_view_destroys_controller() {
        let clock = Arc::new(ManualClock::new(0));
        let controller = Arc::new(SlideController::new(SlideConfig::new(2), clock).unwrap());
        let view = CarouselView::new("testimonials", controller.clone());

        drop(view);
        assert!(controller.snapshot().destroyed);
        assert_eq!(controller.next(), Err(SlideError::InvalidState));
    }
}
