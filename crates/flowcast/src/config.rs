//! Configuration types for Flowcast.
//!
//! All types implement [`serde::Deserialize`] with `#[serde(default)]`
//! sections, so a config file only needs the keys it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`LayoutConfig`] - Node placement.
//! - [`NarrationConfig`] - Narration timing defaults.
//! - [`SpeechConfig`] - Speech provider preference and offline pacing.
//! - [`LimitsConfig`] - Input limits.
//!
//! Pacing constants use [`Pacing`] from `flowcast_core` directly.
//!
//! # Example
//!
//! ```
//! # use flowcast::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.limits().max_prompt_length(), 2000);
//! assert_eq!(config.narration().default_video_duration(), 15.0);
//! ```

use serde::Deserialize;

use flowcast_core::narration::Pacing;
use flowcast_parser::BuildConfig;

use crate::FlowcastError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    pacing: Pacing,

    #[serde(default)]
    narration: NarrationConfig,

    #[serde(default)]
    speech: SpeechConfig,

    #[serde(default)]
    limits: LimitsConfig,
}

impl AppConfig {
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn narration(&self) -> &NarrationConfig {
        &self.narration
    }

    pub fn speech(&self) -> &SpeechConfig {
        &self.speech
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Replaces the speech section, returning the config.
    pub fn with_speech(mut self, speech: SpeechConfig) -> Self {
        self.speech = speech;
        self
    }

    /// Replaces the limits section, returning the config.
    pub fn with_limits(mut self, limits: LimitsConfig) -> Self {
        self.limits = limits;
        self
    }

    /// The parser settings derived from the layout and pacing sections.
    pub fn build_config(&self) -> BuildConfig {
        BuildConfig::new(self.layout.node_spacing, self.pacing)
    }

    /// Rejects values no pipeline stage can work with.
    ///
    /// # Errors
    ///
    /// Returns [`FlowcastError::Config`] naming the first offending key.
    pub fn validate(&self) -> Result<(), FlowcastError> {
        let spacing = self.layout.node_spacing;
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(invalid("layout.node_spacing", spacing));
        }

        let pacing = [
            ("pacing.base_per_node_seconds", self.pacing.base_per_node_seconds()),
            ("pacing.per_word_seconds", self.pacing.per_word_seconds()),
            ("pacing.transition_seconds", self.pacing.transition_seconds()),
        ];
        for (key, value) in pacing {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(key, value));
            }
        }

        let positive = [
            ("narration.default_video_duration", self.narration.default_video_duration),
            ("speech.seconds_per_word", self.speech.seconds_per_word),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(key, value));
            }
        }

        if self.limits.max_prompt_length == 0 {
            return Err(invalid("limits.max_prompt_length", 0));
        }
        Ok(())
    }
}

fn invalid(key: &str, value: impl std::fmt::Display) -> FlowcastError {
    FlowcastError::Config(format!("`{key}` cannot be {value}"))
}

/// Node placement settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between consecutive nodes.
    node_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { node_spacing: 2.0 }
    }
}

impl LayoutConfig {
    pub fn new(node_spacing: f32) -> Self {
        Self { node_spacing }
    }

    pub fn node_spacing(&self) -> f32 {
        self.node_spacing
    }
}

/// Narration timing defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NarrationConfig {
    /// Used when a caller asks for a non-positive or non-finite duration.
    default_video_duration: f64,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            default_video_duration: 15.0,
        }
    }
}

impl NarrationConfig {
    pub fn new(default_video_duration: f64) -> Self {
        Self {
            default_video_duration,
        }
    }

    pub fn default_video_duration(&self) -> f64 {
        self.default_video_duration
    }
}

/// Speech provider selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Provider names tried first, in this order.
    preference: Vec<String>,

    /// Speaking rate of the built-in paced provider.
    seconds_per_word: f64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            preference: vec!["paced".to_string()],
            seconds_per_word: 0.4,
        }
    }
}

impl SpeechConfig {
    /// Creates a speech section.
    ///
    /// # Arguments
    ///
    /// * `preference` - Provider names in the order they should be tried.
    /// * `seconds_per_word` - Speaking rate of the built-in paced provider.
    pub fn new(preference: Vec<String>, seconds_per_word: f64) -> Self {
        Self {
            preference,
            seconds_per_word,
        }
    }

    pub fn preference(&self) -> &[String] {
        &self.preference
    }

    pub fn seconds_per_word(&self) -> f64 {
        self.seconds_per_word
    }
}

/// Input limits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Longest accepted prompt, in characters after trimming.
    max_prompt_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_prompt_length: 2000,
        }
    }
}

impl LimitsConfig {
    pub fn new(max_prompt_length: usize) -> Self {
        Self { max_prompt_length }
    }

    pub fn max_prompt_length(&self) -> usize {
        self.max_prompt_length
    }
}
