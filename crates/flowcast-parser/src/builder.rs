//! Assembly of segmented steps into a [`FlowchartStructure`].

use flowcast_core::{
    flowchart::{Edge, FlowchartStructure, Node, NodeId, NodeRole},
    geometry::Point,
    narration::Pacing,
};
use log::{debug, info, warn};

use crate::{
    classifier::classify,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    narration::node_narration,
    segmenter::MIN_STEPS,
    text::{capitalize, normalize, title_case, truncate_chars, word_count},
    validate::validate,
};

/// Titles are cut to this many characters of the prompt.
pub const TITLE_MAX_CHARS: usize = 50;

/// Descriptions longer than this many characters are cut and marked `...`.
pub const DESCRIPTION_MAX_CHARS: usize = 100;

/// Duration of the fixed three-node flowchart, in seconds.
pub const DEFAULT_FLOWCHART_DURATION: f64 = 10.0;

/// Layout and pacing settings used while building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildConfig {
    node_spacing: f32,
    pacing: Pacing,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            node_spacing: 2.0,
            pacing: Pacing::default(),
        }
    }
}

impl BuildConfig {
    /// Creates a config with the given horizontal spacing between nodes.
    pub fn new(node_spacing: f32, pacing: Pacing) -> Self {
        Self {
            node_spacing,
            pacing,
        }
    }

    pub fn node_spacing(&self) -> f32 {
        self.node_spacing
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }
}

/// Builds linear flowcharts from step phrases.
///
/// # Examples
///
/// ```
/// # use flowcast_parser::{BuildConfig, FlowchartBuilder, segment};
/// let prompt = "Start -> Boil water -> Serve";
/// let builder = FlowchartBuilder::new(BuildConfig::default());
/// let flowchart = builder.build(prompt, &segment(prompt)).unwrap();
///
/// assert_eq!(flowchart.nodes().len(), 3);
/// assert_eq!(flowchart.edges().len(), 2);
/// assert_eq!(flowchart.title(), "Start -> Boil Water -> Serve");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FlowchartBuilder {
    config: BuildConfig,
}

impl FlowchartBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Builds the chain for `steps`, taking title and description from
    /// `prompt`.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorCode::E100`] for fewer than [`MIN_STEPS`] steps and
    /// [`ErrorCode::E101`] for every blank step. A built chain that breaks
    /// its own invariants fails with the codes reported by validation.
    pub fn build(&self, prompt: &str, steps: &[String]) -> Result<FlowchartStructure, ParseError> {
        check_steps(steps)?;

        let total = steps.len();
        let nodes: Vec<Node> = steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let role = classify(step, index, total);
                let text = capitalize(step.trim());
                let narration = node_narration(role, &text);
                Node::new(
                    NodeId::from_index(index),
                    role,
                    text,
                    Point::on_chain(index, self.config.node_spacing),
                )
                .with_narration(narration)
            })
            .collect();

        let edges: Vec<Edge> = nodes
            .windows(2)
            .map(|pair| Edge::new(pair[0].id().clone(), pair[1].id().clone()))
            .collect();

        let words = nodes.iter().map(|node| word_count(node.narration())).sum();
        let duration = self.config.pacing.estimate(nodes.len(), words);

        let cleaned = normalize(prompt);
        let flowchart = FlowchartStructure::new(nodes, edges, title(&cleaned), description(&cleaned), duration);

        for warning in validate(&flowchart)? {
            warn!(step:? = warning.step(); "{warning}");
        }

        info!(
            nodes = flowchart.nodes().len(),
            duration = flowchart.estimated_duration();
            "Flowchart built"
        );
        Ok(flowchart)
    }

    /// Returns the fixed `start -> process -> end` flowchart used when a
    /// prompt cannot be built.
    pub fn default_flowchart(&self, prompt: &str) -> FlowchartStructure {
        const STEPS: [(&str, NodeRole, &str, &str); 3] = [
            ("start", NodeRole::Start, "Start", "We begin our process"),
            ("process", NodeRole::Process, "Process", "We perform the main process"),
            ("end", NodeRole::End, "End", "We complete the process"),
        ];

        let nodes: Vec<Node> = STEPS
            .iter()
            .enumerate()
            .map(|(index, (id, role, text, narration))| {
                Node::new(
                    NodeId::new(*id),
                    *role,
                    *text,
                    Point::on_chain(index, self.config.node_spacing),
                )
                .with_narration(*narration)
            })
            .collect();
        let edges = nodes
            .windows(2)
            .map(|pair| Edge::new(pair[0].id().clone(), pair[1].id().clone()))
            .collect();

        debug!("Using default flowchart");
        FlowchartStructure::new(
            nodes,
            edges,
            "Simple Flowchart",
            truncate_chars(&normalize(prompt), DESCRIPTION_MAX_CHARS),
            DEFAULT_FLOWCHART_DURATION,
        )
    }
}

fn check_steps(steps: &[String]) -> Result<(), ParseError> {
    let mut collector = DiagnosticCollector::new();

    if steps.len() < MIN_STEPS {
        collector.emit(
            Diagnostic::error(format!("need at least {MIN_STEPS} steps, found {}", steps.len()))
                .with_code(ErrorCode::E100)
                .with_help("separate steps with `->`, bullets or a numbered list"),
        );
    }
    for (index, step) in steps.iter().enumerate() {
        if step.trim().is_empty() {
            collector.emit(
                Diagnostic::error(format!("step {index} is blank"))
                    .with_code(ErrorCode::E101)
                    .with_step(index),
            );
        }
    }

    collector.finish().map(|_| ())
}

/// Title-cased first characters of the prompt without a trailing period.
fn title(cleaned: &str) -> String {
    let head = truncate_chars(cleaned, TITLE_MAX_CHARS).trim_end();
    let head = head.strip_suffix('.').unwrap_or(head);
    if head.is_empty() {
        "Flowchart".to_string()
    } else {
        title_case(head)
    }
}

fn description(cleaned: &str) -> String {
    if cleaned.chars().count() > DESCRIPTION_MAX_CHARS {
        format!("{}...", truncate_chars(cleaned, DESCRIPTION_MAX_CHARS))
    } else {
        cleaned.to_string()
    }
}
