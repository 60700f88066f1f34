//! Narration script composition and timeline scheduling.
//!
//! - [`NarrationPayload`] - The flowchart view the composer reads.
//! - [`compose_script`] - Deterministic script from a payload.
//! - [`schedule`] - Uniform split of a script over a video duration.

mod composer;
mod scheduler;

pub use composer::{NarrationPayload, PayloadEdge, PayloadNode, compose_script};
pub use scheduler::{DEFAULT_VIDEO_DURATION, FALLBACK_SCRIPT, schedule};

pub use flowcast_core::narration::{Pacing, TimedSegment};

use serde::Serialize;

/// A narration script together with its timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedNarration {
    script: String,
    segments: Vec<TimedSegment>,
}

impl TimedNarration {
    pub fn new(script: impl Into<String>, segments: Vec<TimedSegment>) -> Self {
        Self {
            script: script.into(),
            segments,
        }
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn segments(&self) -> &[TimedSegment] {
        &self.segments
    }

    /// Consumes the narration, returning the script and the segments.
    pub fn into_parts(self) -> (String, Vec<TimedSegment>) {
        (self.script, self.segments)
    }
}
