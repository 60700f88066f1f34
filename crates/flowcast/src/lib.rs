//! Flowcast - turn plain-language process descriptions into narrated
//! flowchart explainers.
//!
//! A prompt is parsed into a linear flowchart, the flowchart is narrated by
//! a deterministic script, and the script is laid out on a video timeline.
//! Speech synthesis and job tracking are available for the layer that drives
//! rendering.

pub mod config;
pub mod jobs;
pub mod narration;
pub mod speech;

mod error;

pub use flowcast_core::{color, flowchart, geometry};

pub use error::FlowcastError;

use log::{debug, error, info, trace, warn};

use flowcast_core::flowchart::FlowchartStructure;
use flowcast_parser::{FlowchartBuilder, segment};

use config::AppConfig;
use narration::{FALLBACK_SCRIPT, NarrationPayload, TimedNarration};

/// Entry point for parsing prompts and building narration.
///
/// Parsing and narration never fail: malformed input and internal errors
/// are logged and replaced by fallback output.
///
/// # Examples
///
/// ```
/// use flowcast::{FlowchartGenerator, narration::NarrationPayload};
///
/// let generator = FlowchartGenerator::default();
/// let flowchart = generator.parse_prompt("Boil water -> Add tea -> Serve");
/// assert_eq!(flowchart.nodes().len(), 3);
///
/// let narration = generator.build_timed_narration(&NarrationPayload::from(&flowchart), 30.0);
/// assert!(narration.script().starts_with("Welcome to this"));
/// ```
#[derive(Debug, Default)]
pub struct FlowchartGenerator {
    config: AppConfig,
}

impl FlowchartGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parses `prompt` into a flowchart.
    ///
    /// When the built chain is rejected, the error is logged and the fixed
    /// three-node default flowchart is returned instead.
    pub fn parse_prompt(&self, prompt: &str) -> FlowchartStructure {
        info!("Parsing prompt");
        let builder = FlowchartBuilder::new(self.config.build_config());
        let steps = segment(prompt);
        debug!(steps = steps.len(); "Prompt segmented");

        match builder.build(prompt, &steps) {
            Ok(flowchart) => {
                trace!(flowchart:?; "Parsed flowchart");
                flowchart
            }
            Err(err) => {
                let err = FlowcastError::new_parse_error(err, prompt);
                error!(err:%; "Flowchart build failed, using default flowchart");
                builder.default_flowchart(prompt)
            }
        }
    }

    /// Composes the narration script for a flowchart payload.
    pub fn compose_script(&self, payload: &NarrationPayload) -> String {
        narration::compose_script(payload)
    }

    /// Composes the script for `payload` and spreads it over
    /// `total_duration` seconds.
    ///
    /// A non-positive or non-finite duration is replaced with the configured
    /// default video duration.
    pub fn build_timed_narration(&self, payload: &NarrationPayload, total_duration: f64) -> TimedNarration {
        let script = self.compose_script(payload);
        let segments = narration::schedule(&script, self.video_duration(total_duration), payload.nodes().len());
        info!(segments = segments.len(); "Timed narration built");
        TimedNarration::new(script, segments)
    }

    /// Like [`build_timed_narration`](Self::build_timed_narration), for a JSON
    /// payload.
    ///
    /// A payload that cannot be decoded produces the fallback script.
    pub fn build_timed_narration_json(&self, payload: &str, total_duration: f64) -> TimedNarration {
        match serde_json::from_str::<NarrationPayload>(payload) {
            Ok(payload) => self.build_timed_narration(&payload, total_duration),
            Err(err) => {
                let err = FlowcastError::from(err);
                error!(err:%; "Narration payload rejected, using fallback script");
                let segments = narration::schedule(FALLBACK_SCRIPT, self.video_duration(total_duration), 0);
                TimedNarration::new(FALLBACK_SCRIPT, segments)
            }
        }
    }

    /// Trims `prompt` and checks it against the configured limits.
    ///
    /// # Errors
    ///
    /// Returns [`FlowcastError::InvalidPrompt`] for blank prompts and prompts
    /// longer than `limits.max_prompt_length` characters.
    pub fn validate_prompt<'a>(&self, prompt: &'a str) -> Result<&'a str, FlowcastError> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err(FlowcastError::InvalidPrompt("prompt is empty".to_string()));
        }

        let max = self.config.limits().max_prompt_length();
        let length = trimmed.chars().count();
        if length > max {
            return Err(FlowcastError::InvalidPrompt(format!(
                "prompt is {length} characters long, the limit is {max}"
            )));
        }
        Ok(trimmed)
    }

    fn video_duration(&self, requested: f64) -> f64 {
        if requested.is_finite() && requested > 0.0 {
            requested
        } else {
            let fallback = self.config.narration().default_video_duration();
            warn!(requested, fallback; "Unusable video duration, using configured default");
            fallback
        }
    }
}
