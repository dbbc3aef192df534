//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use eframe::egui::{self, Context};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use slide_core::{Clock, PresetFile, SlideError, SystemClock};
use slide_ui::{menu_bar, status_bar, SectionToggle, ShellAction, ShellConfig, Theme};

mod demo;
mod showcase;

use showcase::Showcase;

/// Presets shipped with the binary
const DEFAULT_PRESETS: &str = include_str!("../presets/default.json");

#[derive(Parser, Debug)]
#[command(name = "showcase", version, about = "Animated slide showcase")]
struct Args {
    /// Extra preset file merged over the bundled presets
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Start every slider idle and shorten transitions
    #[arg(long)]
    reduced_motion: bool,
}

/// Main application state
struct ShowcaseApp {
    showcase: Showcase,
    sections: Vec<SectionToggle>,
    shell: ShellConfig,
}

impl ShowcaseApp {
    const HERO: usize = 0;
    const STATS: usize = 1;
    const PROJECTS: usize = 2;
    const TESTIMONIALS: usize = 3;

    fn new(showcase: Showcase) -> Self {
        let sections = ["Hero", "Statistics", "Projects", "Testimonials"]
            .into_iter()
            .map(|title| SectionToggle { title, visible: true })
            .collect();

        Self {
            showcase,
            sections,
            shell: ShellConfig::default(),
        }
    }

    fn handle_action(&mut self, ctx: &Context, action: ShellAction) {
        info!("Shell action: {:?}", action);
        match action {
            ShellAction::PlayAll => self.for_each_controller("play", |c| c.play()),
            ShellAction::PauseAll => self.for_each_controller("pause", |c| c.pause()),
            ShellAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn for_each_controller(
        &self,
        operation: &str,
        f: impl Fn(&slide_core::SlideController) -> Result<(), SlideError>,
    ) {
        for controller in self.showcase.controllers() {
            if let Err(err) = f(controller) {
                warn!("Failed to {} slider: {}", operation, err);
            }
        }
    }

    fn visible(&self, section: usize) -> bool {
        self.sections[section].visible
    }

    fn heading(ui: &mut egui::Ui, title: &str) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new(title).size(26.0).strong());
        });
        ui.add_space(12.0);
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.shell.show_menu_bar {
            if let Some(action) = menu_bar(ctx, &mut self.sections) {
                self.handle_action(ctx, action);
            }
        }
        if self.shell.show_status_bar {
            status_bar(ctx, &self.showcase.snapshots());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.visible(Self::HERO) {
                    self.showcase.hero_ui(ui);
                    ui.add_space(16.0);
                    self.showcase.headline_ui(ui);
                } else {
                    self.showcase.hero.view.hide();
                }
                if self.visible(Self::STATS) {
                    Self::heading(ui, "Our Track Record");
                    self.showcase.stats_ui(ui);
                }
                if self.visible(Self::PROJECTS) {
                    Self::heading(ui, "Featured Projects");
                    self.showcase.projects_ui(ui);
                } else {
                    self.showcase.projects.view.hide();
                }
                if self.visible(Self::TESTIMONIALS) {
                    Self::heading(ui, "What Our Clients Say");
                    self.showcase.testimonials_ui(ui);
                } else {
                    self.showcase.testimonials.view.hide();
                }
            });
        });
    }
}

fn load_presets(extra: Option<&PathBuf>) -> Result<PresetFile> {
    let mut presets = PresetFile::from_json(DEFAULT_PRESETS).context("Bundled presets are invalid")?;
    if let Some(path) = extra {
        let overrides = PresetFile::load(path)
            .with_context(|| format!("Failed to load presets from {}", path.display()))?;
        presets.merge(overrides);
    }
    Ok(presets)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    info!("Starting showcase (reduced motion: {})", args.reduced_motion);

    let presets = load_presets(args.presets.as_ref())?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let showcase = Showcase::new(&presets, args.reduced_motion, clock)?;
    let app = ShowcaseApp::new(showcase);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Showcase",
        options,
        Box::new(move |cc| {
            slide_ui::apply_theme(&cc.egui_ctx, &Theme::default());
            Box::new(app)
        }),
    )
    .map_err(|e| {
        error!("Failed to run app: {}", e);
        anyhow::anyhow!("Failed to run app: {}", e)
    })?;

    Ok(())
}
