use egui::{Context, TopBottomPanel};
use slide_core::SlideSnapshot;

use crate::icons;

/// Shell configuration
pub struct ShellConfig {
    pub show_menu_bar: bool,
    pub show_status_bar: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_menu_bar: true,
            show_status_bar: true,
        }
    }
}

/// A page section the user can show or hide
pub struct SectionToggle {
    pub title: &'static str,
    pub visible: bool,
}

/// Requests coming out of the menu bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    PlayAll,
    PauseAll,
    Quit,
}

/// Render the main menu bar
pub fn menu_bar(ctx: &Context, sections: &mut [SectionToggle]) -> Option<ShellAction> {
    let mut action = None;

    TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    action = Some(ShellAction::Quit);
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                for section in sections.iter_mut() {
                    ui.checkbox(&mut section.visible, section.title);
                }
            });

            ui.menu_button("Slideshow", |ui| {
                if ui.button(format!("{} Play all", icons::PLAY)).clicked() {
                    action = Some(ShellAction::PlayAll);
                    ui.close_menu();
                }
                if ui.button(format!("{} Pause all", icons::PAUSE)).clicked() {
                    action = Some(ShellAction::PauseAll);
                    ui.close_menu();
                }
            });
        });
    });

    action
}

/// Render a status bar with one entry per slider
pub fn status_bar(ctx: &Context, sliders: &[(&str, SlideSnapshot)]) {
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for (name, snapshot) in sliders {
                let position = match snapshot.current_index {
                    Some(index) => format!("{}/{}", index + 1, snapshot.slide_count),
                    None => "empty".to_string(),
                };
                let state = if snapshot.is_playing {
                    icons::PLAY
                } else if snapshot.hover_paused {
                    icons::HOVER
                } else {
                    icons::PAUSE
                };
                ui.label(format!("{} {} {}", name, position, state));
                ui.separator();
            }
        });
    });
}
