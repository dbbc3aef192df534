//! User interface components for the slide showcase
//!
//! This crate provides the egui rendering layer on top of `slide-core`:
//! the carousel widget, animated labels, the application shell and theme.

pub mod carousel;
pub mod labels;
pub mod shell;
pub mod theme;

/// Re-export commonly used types
pub use carousel::{CarouselResponse, CarouselView, CarouselViewConfig};
pub use labels::{StatCounter, TypewriterLabel};
pub use shell::{menu_bar, status_bar, SectionToggle, ShellAction, ShellConfig};
pub use theme::{apply_theme, Theme};

/// Fade `color` by a reveal progress in 0..=1
pub fn fade(color: egui::Color32, progress: f32) -> egui::Color32 {
    color.linear_multiply(progress.clamp(0.0, 1.0))
}

// Common icon definitions
pub mod icons {
    pub const PLAY: &str = "▶";
    pub const PAUSE: &str = "⏸";
    pub const PREVIOUS: &str = "◀";
    pub const NEXT: &str = "▶";
    pub const HOVER: &str = "☝";
}
