//! Page sections: each one pairs a slide deck with its carousel view

use std::sync::Arc;

use anyhow::{Context as _, Result};
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Stroke, Ui, Vec2};
use slide_core::{Clock, CountUp, MotionTimings, PresetFile, RevealSchedule, SlideDeck, SlideSnapshot, Typewriter};
use slide_ui::{fade, theme, CarouselView, CarouselViewConfig, StatCounter, TypewriterLabel};
use tracing::{info, warn};

use crate::demo::{self, HeroSlide, Project, ProjectStatus, Testimonial};

/// Fade-in length for each hero reveal stage
const STAGE_FADE_MS: u64 = 240;

/// How far a hero line slides up while it fades in
const STAGE_RISE: f32 = 24.0;

/// A deck and the view rendering it
pub struct Section<P> {
    pub deck: SlideDeck<P>,
    pub view: CarouselView,
}

impl<P> Section<P> {
    fn build(
        name: &str,
        payloads: Vec<P>,
        presets: &PresetFile,
        reduced_motion: bool,
        clock: Arc<dyn Clock>,
        view_config: CarouselViewConfig,
    ) -> Result<Self> {
        let config = presets
            .get(name)?
            .clone()
            .with_reduced_motion(reduced_motion);
        let deck = SlideDeck::new(payloads, config, clock)
            .with_context(|| format!("Failed to build the {} slider", name))?;
        info!("Built {} slider with {} slides", name, deck.len());

        let view = CarouselView::new(name, deck.controller().clone()).with_config(view_config);
        Ok(Self { deck, view })
    }

    pub fn snapshot(&self) -> SlideSnapshot {
        self.deck.controller().snapshot()
    }
}

/// Every section on the page
pub struct Showcase {
    pub hero: Section<HeroSlide>,
    pub testimonials: Section<Testimonial>,
    pub projects: Section<Project>,
    project_filter: Option<ProjectStatus>,
    stats: Vec<StatCounter>,
    headline: TypewriterLabel,
    reveal: RevealSchedule,
}

impl Showcase {
    pub fn new(presets: &PresetFile, reduced_motion: bool, clock: Arc<dyn Clock>) -> Result<Self> {
        let hero = Section::build(
            "hero",
            demo::hero_slides(),
            presets,
            reduced_motion,
            clock.clone(),
            CarouselViewConfig::default(),
        )?;
        let testimonials = Section::build(
            "testimonials",
            demo::testimonials(),
            presets,
            reduced_motion,
            clock.clone(),
            CarouselViewConfig {
                height: 220.0,
                show_arrows: false,
                show_progress: false,
                ..Default::default()
            },
        )?;
        let projects = Section::build(
            "projects",
            demo::projects(),
            presets,
            reduced_motion,
            clock.clone(),
            CarouselViewConfig {
                height: 300.0,
                ..Default::default()
            },
        )?;

        let stats = demo::stats()
            .into_iter()
            .map(|stat| {
                let counter = CountUp::new()
                    .with_decimals(stat.decimals)
                    .with_suffix(stat.suffix)
                    .with_duration(if reduced_motion { 0 } else { 2000 });
                StatCounter::new(counter, stat.value, stat.caption, clock.clone())
            })
            .collect();

        let headline = TypewriterLabel::new(
            Typewriter::new("Where quality meets trust")
                .with_speed(80)
                .with_delay(400)
                .with_loop(!reduced_motion),
            clock,
        );

        let timings = if reduced_motion {
            MotionTimings::reduced()
        } else {
            MotionTimings::standard()
        };

        Ok(Self {
            hero,
            testimonials,
            projects,
            project_filter: None,
            stats,
            headline,
            reveal: RevealSchedule::cinematic(timings.stagger_ms),
        })
    }

    /// Snapshots for the status bar
    pub fn snapshots(&self) -> Vec<(&'static str, SlideSnapshot)> {
        vec![
            ("Hero", self.hero.snapshot()),
            ("Testimonials", self.testimonials.snapshot()),
            ("Projects", self.projects.snapshot()),
        ]
    }

    pub fn controllers(&self) -> [&Arc<slide_core::SlideController>; 3] {
        [
            self.hero.deck.controller(),
            self.testimonials.deck.controller(),
            self.projects.deck.controller(),
        ]
    }

    pub fn hero_ui(&mut self, ui: &mut Ui) {
        let deck = &self.hero.deck;
        let reveal = &self.reveal;
        self.hero.view.ui(ui, |ui, rect, snapshot| {
            let Some(slide) = snapshot.current_index.and_then(|index| deck.get(index)) else {
                return;
            };
            paint_hero(ui, rect, &slide.payload, reveal, snapshot);
        });
    }

    pub fn headline_ui(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            self.headline.ui(ui);
        });
    }

    pub fn stats_ui(&mut self, ui: &mut Ui) {
        let count = self.stats.len();
        ui.columns(count, |columns| {
            for (column, stat) in columns.iter_mut().zip(self.stats.iter_mut()) {
                stat.ui(column);
            }
        });
    }

    pub fn projects_ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let mut selected = self.project_filter;
            ui.selectable_value(&mut selected, None, "All");
            for status in ProjectStatus::ALL {
                ui.selectable_value(&mut selected, Some(status), status.label());
            }
            if selected != self.project_filter {
                self.set_project_filter(selected);
            }
        });
        ui.add_space(8.0);

        let deck = &self.projects.deck;
        self.projects.view.ui(ui, |ui, rect, snapshot| {
            match snapshot.current_index.and_then(|index| deck.get(index)) {
                Some(slide) => paint_project(ui, rect, &slide.payload),
                None => paint_empty(ui, rect, "No projects in this category yet"),
            }
        });
    }

    pub fn testimonials_ui(&mut self, ui: &mut Ui) {
        let deck = &self.testimonials.deck;
        self.testimonials.view.ui(ui, |ui, rect, snapshot| {
            if let Some(slide) = snapshot.current_index.and_then(|index| deck.get(index)) {
                paint_testimonial(ui, rect, &slide.payload, snapshot);
            }
        });
    }

    fn set_project_filter(&mut self, filter: Option<ProjectStatus>) {
        let result = match filter {
            Some(status) => self.projects.deck.apply_filter(|project| project.status == status),
            None => self.projects.deck.clear_filter(),
        };
        match result {
            Ok(()) => self.project_filter = filter,
            Err(err) => warn!("Failed to filter projects: {}", err),
        }
    }
}

fn paint_hero(ui: &Ui, rect: Rect, slide: &HeroSlide, reveal: &RevealSchedule, snapshot: &SlideSnapshot) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, Rounding::ZERO, slide.tint);
    painter.rect_filled(rect, Rounding::ZERO, theme::scrim_color());

    // A settled slide is fully revealed
    let elapsed = snapshot.transition_elapsed_ms.unwrap_or(u64::MAX);
    let stage = |index: usize| reveal.stage_progress(index, elapsed, STAGE_FADE_MS);

    let lines = [
        (slide.subtitle, FontId::proportional(16.0), theme::accent_color()),
        (slide.title, FontId::proportional(44.0), Color32::WHITE),
        (slide.description, FontId::proportional(18.0), theme::muted_text_color()),
    ];

    let mut y = rect.center().y - 80.0;
    for (index, (text, font, color)) in lines.into_iter().enumerate() {
        let progress = stage(index);
        let rise = STAGE_RISE * (1.0 - progress);
        painter.text(
            Pos2::new(rect.left() + 96.0, y + rise),
            Align2::LEFT_TOP,
            text,
            font.clone(),
            fade(color, progress),
        );
        y += font.size + 18.0;
    }

    let progress = stage(3);
    let button = Rect::from_min_size(
        Pos2::new(rect.left() + 96.0, y + 12.0 + STAGE_RISE * (1.0 - progress)),
        Vec2::new(190.0, 44.0),
    );
    painter.rect_filled(button, Rounding::same(6.0), fade(theme::accent_color(), progress));
    painter.text(
        button.center(),
        Align2::CENTER_CENTER,
        slide.call_to_action,
        FontId::proportional(16.0),
        fade(Color32::BLACK, progress),
    );
}

fn paint_testimonial(ui: &Ui, rect: Rect, testimonial: &Testimonial, snapshot: &SlideSnapshot) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect.shrink(8.0), Rounding::same(12.0), ui.visuals().faint_bg_color);

    let progress = match snapshot.transition_elapsed_ms {
        Some(elapsed) => (elapsed as f32 / STAGE_FADE_MS as f32).min(1.0),
        None => 1.0,
    };
    let text_color = fade(ui.visuals().text_color(), progress);

    let galley = painter.layout(
        format!("\u{201C}{}\u{201D}", testimonial.quote),
        FontId::proportional(20.0),
        text_color,
        rect.width() - 160.0,
    );
    let quote_pos = Pos2::new(rect.center().x - galley.size().x / 2.0, rect.top() + 40.0);
    let quote_bottom = quote_pos.y + galley.size().y;
    painter.galley(quote_pos, galley);

    painter.text(
        Pos2::new(rect.center().x, quote_bottom + 20.0),
        Align2::CENTER_TOP,
        testimonial.name,
        FontId::proportional(16.0),
        fade(theme::accent_color(), progress),
    );
    painter.text(
        Pos2::new(rect.center().x, quote_bottom + 42.0),
        Align2::CENTER_TOP,
        testimonial.designation,
        FontId::proportional(13.0),
        fade(theme::muted_text_color(), progress),
    );
}

fn paint_project(ui: &Ui, rect: Rect, project: &Project) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, Rounding::same(8.0), project.tint);

    let caption = Rect::from_min_max(Pos2::new(rect.left(), rect.bottom() - 90.0), rect.max);
    painter.rect_filled(caption, Rounding::ZERO, theme::scrim_color());
    painter.text(
        caption.left_top() + Vec2::new(24.0, 14.0),
        Align2::LEFT_TOP,
        project.title,
        FontId::proportional(24.0),
        Color32::WHITE,
    );
    painter.text(
        caption.left_top() + Vec2::new(24.0, 46.0),
        Align2::LEFT_TOP,
        project.location,
        FontId::proportional(14.0),
        theme::muted_text_color(),
    );

    let badge = Rect::from_min_size(rect.left_top() + Vec2::new(16.0, 16.0), Vec2::new(96.0, 26.0));
    painter.rect(badge, Rounding::same(13.0), theme::scrim_color(), Stroke::new(1.0, theme::accent_color()));
    painter.text(
        badge.center(),
        Align2::CENTER_CENTER,
        project.status.label(),
        FontId::proportional(12.0),
        theme::accent_color(),
    );
}

fn paint_empty(ui: &Ui, rect: Rect, message: &str) {
    let painter = ui.painter_at(rect);
    painter.rect_stroke(rect.shrink(4.0), Rounding::same(8.0), Stroke::new(1.0, theme::muted_text_color()));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        message,
        FontId::proportional(16.0),
        theme::muted_text_color(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use slide_core::ManualClock;

    fn presets() -> PresetFile {
        PresetFile::from_json(include_str!("../presets/default.json")).unwrap()
    }

    #[test]
    fn test_showcase_builds_from_bundled_presets() {
        let clock = Arc::new(ManualClock::new(0));
        let showcase = Showcase::new(&presets(), false, clock).unwrap();

        let snapshots = showcase.snapshots();
        assert_eq!(snapshots.len(), 3);
        assert!(snapshots.iter().all(|(_, s)| s.current_index == Some(0)));
        assert!(snapshots.iter().all(|(_, s)| s.is_playing));
    }

    #[test]
    fn test_reduced_motion_starts_idle() {
        let clock = Arc::new(ManualClock::new(0));
        let showcase = Showcase::new(&presets(), true, clock).unwrap();

        assert!(showcase.snapshots().iter().all(|(_, s)| !s.is_playing));
    }

    #[test]
    fn test_project_filter_narrows_slider() {
        let clock = Arc::new(ManualClock::new(0));
        let mut showcase = Showcase::new(&presets(), false, clock).unwrap();

        showcase.set_project_filter(Some(ProjectStatus::Upcoming));
        assert_eq!(showcase.projects.deck.len(), 1);
        assert_eq!(showcase.projects.snapshot().slide_count, 1);

        showcase.set_project_filter(None);
        assert_eq!(showcase.projects.snapshot().slide_count, 6);
    }

    #[test]
    fn test_unknown_section_preset_is_an_error() {
        let clock = Arc::new(ManualClock::new(0));
        let presets = PresetFile::from_json(r#"{ "presets": { "hero": {} } }"#).unwrap();
        assert!(Showcase::new(&presets, false, clock).is_err());
    }
}
