//! Script composition from a flowchart payload.
//!
//! The payload is deliberately lenient: every field may be missing, and the
//! role is kept as a raw string so unknown roles still produce a clause.

use serde::{Deserialize, Serialize};

use flowcast_core::flowchart::{FlowchartStructure, NodeRole};

const INTRO: &str = "Let's walk through each step of this process.";
const FLOW_NOTE: &str = "The arrows show the flow between these steps.";
const BRANCH_NOTE: &str = "Notice the different paths based on the decisions made.";
const CLOSING: [&str; 2] = [
    "This completes our walkthrough of the flowchart.",
    "Thank you for watching.",
];

/// The parts of a flowchart the composer reads.
///
/// Decodes from the same JSON shape a [`FlowchartStructure`] serializes to,
/// and also accepts `"connections"` for the edge list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrationPayload {
    title: Option<String>,
    nodes: Vec<PayloadNode>,
    #[serde(alias = "connections")]
    edges: Vec<PayloadEdge>,
}

/// One node as seen by the composer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadNode {
    text: Option<String>,
    #[serde(rename = "type")]
    role: Option<String>,
}

/// One edge as seen by the composer. Only its condition matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadEdge {
    condition: Option<String>,
}

impl NarrationPayload {
    pub fn new(title: Option<String>, nodes: Vec<PayloadNode>, edges: Vec<PayloadEdge>) -> Self {
        Self { title, nodes, edges }
    }

    /// The title, `"Flowchart"` when absent.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("Flowchart")
    }

    pub fn nodes(&self) -> &[PayloadNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[PayloadEdge] {
        &self.edges
    }

    /// Returns `true` if any edge has a non-empty condition.
    pub fn has_conditional_edges(&self) -> bool {
        self.edges.iter().any(|edge| edge.condition().is_some())
    }
}

impl From<&FlowchartStructure> for NarrationPayload {
    fn from(flowchart: &FlowchartStructure) -> Self {
        Self {
            title: Some(flowchart.title().to_string()),
            nodes: flowchart
                .nodes()
                .iter()
                .map(|node| PayloadNode::new(node.text(), node.role()))
                .collect(),
            edges: flowchart
                .edges()
                .iter()
                .map(|edge| PayloadEdge::new(edge.condition().map(str::to_string)))
                .collect(),
        }
    }
}

impl PayloadNode {
    pub fn new(text: impl Into<String>, role: NodeRole) -> Self {
        Self {
            text: Some(text.into()),
            role: Some(role.to_string()),
        }
    }

    /// The raw role name, `"process"` when absent.
    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or("process")
    }

    /// The node text, or `Step {index + 1}` when absent.
    fn text_or_placeholder(&self, index: usize) -> String {
        match &self.text {
            Some(text) => text.clone(),
            None => format!("Step {}", index + 1),
        }
    }
}

impl PayloadEdge {
    pub fn new(condition: Option<String>) -> Self {
        Self { condition }
    }

    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref().filter(|condition| !condition.is_empty())
    }
}

/// Composes the narration script for `payload`.
///
/// # Examples
///
/// ```
/// # use flowcast::narration::{NarrationPayload, compose_script};
/// let script = compose_script(&NarrationPayload::default());
/// assert!(script.starts_with("Welcome to this Flowchart explanation."));
/// assert!(script.ends_with("Thank you for watching."));
/// ```
pub fn compose_script(payload: &NarrationPayload) -> String {
    let mut parts = vec![
        format!("Welcome to this {} explanation.", payload.title()),
        INTRO.to_string(),
    ];

    for (index, node) in payload.nodes().iter().enumerate() {
        let text = node.text_or_placeholder(index);
        let clause = match node.role() {
            "start" => format!("We begin with: {text}"),
            "decision" => format!("Next, we make a decision: {text}"),
            "process" => format!("Then we proceed to: {text}"),
            "end" => format!("Finally, we reach: {text}"),
            _ => format!("At this point: {text}"),
        };
        parts.push(clause);
    }

    if !payload.edges().is_empty() {
        parts.push(FLOW_NOTE.to_string());
        if payload.has_conditional_edges() {
            parts.push(BRANCH_NOTE.to_string());
        }
    }

    parts.extend(CLOSING.iter().map(|sentence| sentence.to_string()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use flowcast_core::flowchart::{Edge, Node, NodeId};
    use flowcast_core::geometry::Point;

    use crate::narration::schedule;

    use super::*;

    fn payload(json: &str) -> NarrationPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_script() {
        let payload = payload(
            r#"{
                "title": "Make Tea",
                "nodes": [
                    {"text": "Boil water", "type": "start"},
                    {"text": "Is it hot?", "type": "decision"},
                    {"text": "Add tea", "type": "process"},
                    {"text": "Serve", "type": "end"}
                ],
                "connections": [
                    {"from_node": "a", "to_node": "b"},
                    {"from_node": "b", "to_node": "c", "condition": "hot"}
                ]
            }"#,
        );

        assert_eq!(
            compose_script(&payload),
            "Welcome to this Make Tea explanation. \
             Let's walk through each step of this process. \
             We begin with: Boil water \
             Next, we make a decision: Is it hot? \
             Then we proceed to: Add tea \
             Finally, we reach: Serve \
             The arrows show the flow between these steps. \
             Notice the different paths based on the decisions made. \
             This completes our walkthrough of the flowchart. \
             Thank you for watching."
        );
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let payload = payload(r#"{"nodes": [{}, {"type": "input_output", "text": "Read CSV"}]}"#);
        let script = compose_script(&payload);

        assert!(script.starts_with("Welcome to this Flowchart explanation."));
        assert!(script.contains("Then we proceed to: Step 1 At this point: Read CSV This completes"));
        assert!(!script.contains("arrows"));
    }

    #[test]
    fn test_node_clauses_are_not_terminated() {
        let payload = payload(
            r#"{
                "nodes": [
                    {"text": "Boil water", "type": "start"},
                    {"text": "Add tea", "type": "process"},
                    {"text": "Serve", "type": "end"}
                ],
                "edges": [{}, {}]
            }"#,
        );
        let script = compose_script(&payload);

        assert!(script.contains(
            "We begin with: Boil water Then we proceed to: Add tea Finally, we reach: Serve The arrows"
        ));
        // Intro, intro, node run + flow note, two closing sentences.
        assert_eq!(schedule(&script, 10.0, 3).len(), 5);
    }

    #[test]
    fn test_unconditional_edges_skip_branch_note() {
        let payload = payload(r#"{"nodes": [], "edges": [{"condition": ""}, {"label": "Yes"}]}"#);
        let script = compose_script(&payload);

        assert!(script.contains("The arrows show the flow"));
        assert!(!script.contains("Notice the different paths"));
    }

    #[test]
    fn test_from_flowchart_structure() {
        let nodes = vec![
            Node::new(NodeId::from_index(0), NodeRole::Start, "Start", Point::on_chain(0, 2.0)),
            Node::new(NodeId::from_index(1), NodeRole::Process, "Work", Point::on_chain(1, 2.0)),
            Node::new(NodeId::from_index(2), NodeRole::End, "Done!", Point::on_chain(2, 2.0)),
        ];
        let edges = vec![
            Edge::new(NodeId::from_index(0), NodeId::from_index(1)),
            Edge::new(NodeId::from_index(1), NodeId::from_index(2)).with_condition("ok"),
        ];
        let flowchart = FlowchartStructure::new(nodes, edges, "Work", "", 1.0);
        let payload = NarrationPayload::from(&flowchart);

        assert_eq!(payload.title(), "Work");
        assert_eq!(payload.nodes()[0].role(), "start");
        assert!(payload.has_conditional_edges());
        assert!(compose_script(&payload).contains("Finally, we reach: Done! The arrows"));
    }

    #[test]
    fn test_structure_json_decodes_as_payload() {
        let node = Node::new(NodeId::from_index(0), NodeRole::InputOutput, "Print", Point::default());
        let flowchart = FlowchartStructure::new(vec![node], vec![], "T", "", 1.0);
        let json = serde_json::to_string(&flowchart).unwrap();

        let payload: NarrationPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload.nodes()[0].role(), "input_output");
        assert_eq!(payload.title(), "T");
    }
}
