//! Flowcast Parser - turns natural-language process descriptions into
//! linear flowcharts.
//!
//! # Pipeline
//!
//! ```text
//! Prompt
//!   ↓ segment    (separator table, sentence split, three-step wrap)
//! Step phrases
//!   ↓ classify   (position first, then keyword rules)
//!   ↓ build      (ids, layout, narration, edges, metadata)
//!   ↓ validate   (chain invariants)
//! FlowchartStructure
//! ```
//!
//! [`parse`] runs the whole pipeline. The stages are public so callers can
//! inspect intermediate results.

mod builder;
mod classifier;
mod narration;
mod segmenter;
mod text;
mod validate;

pub mod error;

use flowcast_core::flowchart::FlowchartStructure;

pub use builder::{
    BuildConfig, DEFAULT_FLOWCHART_DURATION, DESCRIPTION_MAX_CHARS, FlowchartBuilder,
    TITLE_MAX_CHARS,
};
pub use classifier::{DECISION_KEYWORDS, INPUT_OUTPUT_KEYWORDS, KEYWORD_RULES, KeywordRule, classify};
pub use narration::node_narration;
pub use segmenter::{MIN_STEPS, SEPARATORS, Separator, segment};
pub use text::normalize;
pub use validate::validate;

use error::ParseError;

/// Segments `prompt` and builds its flowchart.
///
/// # Errors
///
/// Segmentation never fails, so an error here means the built chain broke
/// one of its invariants.
///
/// # Examples
///
/// ```
/// use flowcast_core::flowchart::NodeRole;
/// use flowcast_parser::{BuildConfig, parse};
///
/// let flowchart = parse("Start -> Check if tests pass -> Deploy", BuildConfig::default()).unwrap();
/// assert_eq!(flowchart.nodes()[1].role(), NodeRole::Decision);
/// ```
pub fn parse(prompt: &str, config: BuildConfig) -> Result<FlowchartStructure, ParseError> {
    let steps = segment(prompt);
    FlowchartBuilder::new(config).build(prompt, &steps)
}
