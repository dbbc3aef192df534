//! Slider configuration and preset files

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConfigError, SlideError};

/// How manual `next`/`previous` calls behave while a transition is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Navigate immediately and restart the transition window
    #[default]
    Overlap,
    /// Drop the call entirely (no index change, no timer reset)
    Ignore,
}

/// Animation timings chosen by the caller, e.g. from a reduced-motion preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionTimings {
    pub transition_window_ms: u64,
    pub stagger_ms: u64,
}

impl MotionTimings {
    pub const fn standard() -> Self {
        Self {
            transition_window_ms: 600,
            stagger_ms: 120,
        }
    }

    pub const fn reduced() -> Self {
        Self {
            transition_window_ms: 200,
            stagger_ms: 0,
        }
    }
}

impl Default for MotionTimings {
    fn default() -> Self {
        Self::standard()
    }
}

/// Longest accepted autoplay delay or transition window (one day)
pub const MAX_DURATION_MS: u64 = 24 * 60 * 60 * 1000;

/// Configuration supplied when a controller is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    /// Number of slides. Must be at least 1 at construction.
    pub slide_count: usize,

    /// Time between automatic advances; 0 disables autoplay
    pub autoplay_delay_ms: u64,

    /// Wrap around at either end
    #[serde(rename = "loop")]
    pub looping: bool,

    /// Suspend autoplay while the pointer is over the slider
    pub pause_on_hover: bool,

    /// Stop autoplay for good after any manual navigation
    pub pause_on_manual_navigation: bool,

    /// How long `is_transitioning` stays set after an index change
    pub transition_window_ms: u64,

    /// Start idle instead of playing
    pub reduced_motion: bool,

    /// Behaviour of manual navigation during a transition
    pub transition_policy: TransitionPolicy,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            slide_count: 1,
            autoplay_delay_ms: 5000,
            looping: true,
            pause_on_hover: true,
            pause_on_manual_navigation: false,
            transition_window_ms: MotionTimings::standard().transition_window_ms,
            reduced_motion: false,
            transition_policy: TransitionPolicy::Overlap,
        }
    }
}

impl SlideConfig {
    /// Default configuration for `slide_count` slides
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            ..Self::default()
        }
    }

    pub fn with_slide_count(mut self, slide_count: usize) -> Self {
        self.slide_count = slide_count;
        self
    }

    pub fn with_autoplay_delay(mut self, delay_ms: u64) -> Self {
        self.autoplay_delay_ms = delay_ms;
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    pub fn with_pause_on_manual_navigation(mut self, pause: bool) -> Self {
        self.pause_on_manual_navigation = pause;
        self
    }

    pub fn with_transition_window(mut self, window_ms: u64) -> Self {
        self.transition_window_ms = window_ms;
        self
    }

    pub fn with_transition_policy(mut self, policy: TransitionPolicy) -> Self {
        self.transition_policy = policy;
        self
    }

    /// Apply caller-chosen motion timings
    pub fn with_motion(mut self, timings: MotionTimings) -> Self {
        self.transition_window_ms = timings.transition_window_ms;
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        if reduced {
            self = self.with_motion(MotionTimings::reduced());
        }
        self
    }

    /// Whether a freshly created controller starts playing
    pub fn plays_on_init(&self) -> bool {
        self.autoplay_delay_ms > 0 && !self.reduced_motion
    }

    /// Reject configurations that cannot produce a valid controller
    pub fn validate(&self) -> Result<(), SlideError> {
        if self.slide_count == 0 {
            return Err(SlideError::InvalidConfig(
                "slide_count must be at least 1".to_string(),
            ));
        }
        for (field, value) in [
            ("autoplay_delay_ms", self.autoplay_delay_ms),
            ("transition_window_ms", self.transition_window_ms),
        ] {
            if value > MAX_DURATION_MS {
                return Err(SlideError::InvalidConfig(format!(
                    "{} must be at most {} ms, got {}",
                    field, MAX_DURATION_MS, value
                )));
            }
        }
        Ok(())
    }
}

/// A named set of slider configurations, stored as JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetFile {
    #[serde(default)]
    pub presets: BTreeMap<String, SlideConfig>,
}

impl PresetFile {
    /// Parse and validate a preset document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let file: PresetFile = serde_json::from_str(json)?;
        file.validate()?;
        Ok(file)
    }

    /// Load a preset document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let file = Self::from_json(&json)?;
        info!("Loaded {} slider presets from {:?}", file.presets.len(), path);
        Ok(file)
    }

    /// Look up a preset by name
    pub fn get(&self, name: &str) -> Result<&SlideConfig, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// Merge `other` over `self`; presets with the same name are replaced
    pub fn merge(&mut self, other: PresetFile) {
        self.presets.extend(other.presets);
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, config) in &self.presets {
            config.validate().map_err(|source| ConfigError::Invalid {
                name: name.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SlideConfig::new(3);
        assert_eq!(config.slide_count, 3);
        assert_eq!(config.autoplay_delay_ms, 5000);
        assert!(config.looping);
        assert!(config.pause_on_hover);
        assert!(!config.pause_on_manual_navigation);
        assert_eq!(config.transition_policy, TransitionPolicy::Overlap);
        assert!(config.plays_on_init());
    }

    #[test]
    fn test_zero_slides_rejected() {
        let err = SlideConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, SlideError::InvalidConfig(_)));
    }

    #[test]
    fn test_reduced_motion_starts_idle() {
        let config = SlideConfig::new(2).with_reduced_motion(true);
        assert!(!config.plays_on_init());
        assert_eq!(config.transition_window_ms, 200);

        let no_delay = SlideConfig::new(2).with_autoplay_delay(0);
        assert!(!no_delay.plays_on_init());
    }

    #[test]
    fn test_preset_file_fills_defaults() {
        let json = r#"{
            "presets": {
                "hero": { "autoplay_delay_ms": 4000, "loop": true },
                "testimonials": { "autoplay_delay_ms": 6000, "transition_policy": "ignore" }
            }
        }"#;
        let file = PresetFile::from_json(json).unwrap();

        let hero = file.get("hero").unwrap();
        assert_eq!(hero.autoplay_delay_ms, 4000);
        assert_eq!(hero.transition_window_ms, 600);

        let testimonials = file.get("testimonials").unwrap();
        assert_eq!(testimonials.transition_policy, TransitionPolicy::Ignore);

        assert!(matches!(file.get("footer"), Err(ConfigError::UnknownPreset(_))));
    }

    #[test]
    fn test_preset_file_rejects_invalid_entries() {
        let json = r#"{ "presets": { "broken": { "slide_count": 0 } } }"#;
        match PresetFile::from_json(json) {
            Err(ConfigError::Invalid { name, .. }) => assert_eq!(name, "broken"),
            other => panic!("expected invalid preset, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_timings_rejected() {
        let slow = SlideConfig::new(3).with_autoplay_delay(u64::MAX);
        assert!(matches!(slow.validate(), Err(SlideError::InvalidConfig(_))));

        let long_window = SlideConfig::new(3).with_transition_window(MAX_DURATION_MS + 1);
        assert!(matches!(long_window.validate(), Err(SlideError::InvalidConfig(_))));

        let longest = SlideConfig::new(3)
            .with_autoplay_delay(MAX_DURATION_MS)
            .with_transition_window(MAX_DURATION_MS);
        assert!(longest.validate().is_ok());

        let json = r#"{ "presets": { "hero": { "slide_count": 3, "autoplay_delay_ms": 18446744073709551615 } } }"#;
        match PresetFile::from_json(json) {
            Err(ConfigError::Invalid { name, .. }) => assert_eq!(name, "hero"),
            other => panic!("expected invalid preset, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_delay_is_a_parse_error() {
        let json = r#"{ "presets": { "hero": { "autoplay_delay_ms": -5 } } }"#;
        assert!(matches!(PresetFile::from_json(json), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("slide-presets-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{ "presets": { "hero": { "loop": false } } }"#).unwrap();

        let file = PresetFile::load(&path).unwrap();
        assert!(!file.get("hero").unwrap().looping);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(PresetFile::load(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_merge_replaces_by_name() {
        let mut base = PresetFile::from_json(r#"{ "presets": { "hero": {}, "stats": {} } }"#).unwrap();
        let overrides =
            PresetFile::from_json(r#"{ "presets": { "hero": { "autoplay_delay_ms": 0 } } }"#).unwrap();
        base.merge(overrides);

        assert_eq!(base.presets.len(), 2);
        assert_eq!(base.get("hero").unwrap().autoplay_delay_ms, 0);
    }
}
