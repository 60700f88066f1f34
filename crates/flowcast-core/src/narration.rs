//! Narration timing types.
//!
//! - [`Pacing`] - Constants of the heuristic duration estimate.
//! - [`TimedSegment`] - One slice of a narration script placed on the video timeline.

use serde::{Deserialize, Serialize};

/// Constants of the heuristic pacing estimate.
///
/// The estimate is
/// `base_per_node_seconds * nodes + per_word_seconds * words + transition_seconds * (nodes - 1)`.
/// It approximates video length; it is not a measured audio duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    base_per_node_seconds: f64,
    per_word_seconds: f64,
    transition_seconds: f64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            base_per_node_seconds: 3.0,
            per_word_seconds: 0.5,
            transition_seconds: 1.0,
        }
    }
}

impl Pacing {
    /// Creates pacing constants.
    ///
    /// # Arguments
    ///
    /// * `base_per_node_seconds` - Screen time of every node
    /// * `per_word_seconds` - Speaking time per narration word
    /// * `transition_seconds` - Time spent moving between two nodes
    pub fn new(base_per_node_seconds: f64, per_word_seconds: f64, transition_seconds: f64) -> Self {
        Self {
            base_per_node_seconds,
            per_word_seconds,
            transition_seconds,
        }
    }

    pub fn base_per_node_seconds(&self) -> f64 {
        self.base_per_node_seconds
    }

    pub fn per_word_seconds(&self) -> f64 {
        self.per_word_seconds
    }

    pub fn transition_seconds(&self) -> f64 {
        self.transition_seconds
    }

    /// Estimates the video duration for `node_count` nodes narrated with
    /// `word_count` words in total.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowcast_core::narration::Pacing;
    ///
    /// // 3 nodes * 3.0 + 10 words * 0.5 + 2 transitions * 1.0
    /// assert_eq!(Pacing::default().estimate(3, 10), 16.0);
    /// ```
    pub fn estimate(&self, node_count: usize, word_count: usize) -> f64 {
        let transitions = node_count.saturating_sub(1);
        self.base_per_node_seconds * node_count as f64
            + self.per_word_seconds * word_count as f64
            + self.transition_seconds * transitions as f64
    }
}

/// A slice of narration text placed on the video timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedSegment {
    text: String,
    start_time: f64,
    duration: f64,
    node_index: usize,
}

impl TimedSegment {
    /// Creates a segment.
    ///
    /// # Arguments
    ///
    /// * `text` - Sentence to be spoken
    /// * `start_time` - Offset from the start of the video, in seconds
    /// * `duration` - Length of the slice, in seconds
    /// * `node_index` - Index of the node the sentence is aligned with
    pub fn new(text: impl Into<String>, start_time: f64, duration: f64, node_index: usize) -> Self {
        Self {
            text: text.into(),
            start_time,
            duration,
            node_index,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn node_index(&self) -> usize {
        self.node_index
    }

    /// Returns `start_time + duration`.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }
}
