//! Flowchart model types.
//!
//! This module contains the structure produced by the prompt parser and read
//! by renderers and the narration engine.
//!
//! # Pipeline Position
//!
//! ```text
//! Prompt Text
//!     ↓ segment
//! Step Phrases
//!     ↓ classify + build
//! FlowchartStructure (these types)
//!     ↓ compose + schedule
//! Timed Narration
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{color, geometry::Point};

/// The semantic category of a flowchart node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Entry point of the process. Always the first node.
    Start,
    /// Terminal step of the process. Always the last node.
    End,
    /// A plain action step.
    Process,
    /// A step that asks a question or checks a condition.
    Decision,
    /// A step that reads or presents data.
    InputOutput,
    /// A junction between paths. Never produced by the parser.
    Connector,
}

impl NodeRole {
    /// Returns the wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeRole::Start => "start",
            NodeRole::End => "end",
            NodeRole::Process => "process",
            NodeRole::Decision => "decision",
            NodeRole::InputOutput => "input_output",
            NodeRole::Connector => "connector",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for NodeRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(NodeRole::Start),
            "end" => Ok(NodeRole::End),
            "process" => Ok(NodeRole::Process),
            "decision" => Ok(NodeRole::Decision),
            "input_output" | "input-output" | "io" => Ok(NodeRole::InputOutput),
            "connector" => Ok(NodeRole::Connector),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Identifier of a node, unique within one [`FlowchartStructure`].
///
/// # Examples
///
/// ```
/// use flowcast_core::flowchart::NodeId;
///
/// let id = NodeId::from_index(3);
/// assert_eq!(id, "node_3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates an identifier from an arbitrary name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates the identifier of the `index`-th step of a parsed chain.
    pub fn from_index(index: usize) -> Self {
        Self(format!("node_{index}"))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single node of a flowchart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    #[serde(rename = "type")]
    role: NodeRole,
    text: String,
    position: Point,
    color: String,
    #[serde(default)]
    narration: String,
}

impl Node {
    /// Creates a node whose color is derived from its role.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowcast_core::{
    ///     flowchart::{Node, NodeId, NodeRole},
    ///     geometry::Point,
    /// };
    ///
    /// let node = Node::new(NodeId::from_index(0), NodeRole::Start, "Start", Point::default());
    /// assert_eq!(node.color(), "#4CAF50");
    /// assert!(node.narration().is_empty());
    /// ```
    pub fn new(id: NodeId, role: NodeRole, text: impl Into<String>, position: Point) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            position,
            color: color::role_hex(role).to_string(),
            narration: String::new(),
        }
    }

    /// Sets the narration sentence, returning the node.
    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = narration.into();
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Display color hint as a CSS hex string.
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn narration(&self) -> &str {
        &self.narration
    }
}

/// A directed connection between two nodes.
///
/// `label` and `condition` are empty when absent; the accessors map that to
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    from_node: NodeId,
    to_node: NodeId,
    #[serde(default)]
    label: String,
    #[serde(default)]
    condition: String,
}

impl Edge {
    /// Creates an unlabeled edge.
    pub fn new(from_node: NodeId, to_node: NodeId) -> Self {
        Self {
            from_node,
            to_node,
            label: String::new(),
            condition: String::new(),
        }
    }

    /// Sets the edge label, e.g. `"Yes"` or `"No"`.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the condition under which the edge is taken.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    pub fn from_node(&self) -> &NodeId {
        &self.from_node
    }

    pub fn to_node(&self) -> &NodeId {
        &self.to_node
    }

    pub fn label(&self) -> Option<&str> {
        Some(self.label.as_str()).filter(|label| !label.is_empty())
    }

    pub fn condition(&self) -> Option<&str> {
        Some(self.condition.as_str()).filter(|condition| !condition.is_empty())
    }
}

/// A complete parsed flowchart: ordered nodes, ordered edges and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowchartStructure {
    nodes: Vec<Node>,
    #[serde(alias = "connections")]
    edges: Vec<Edge>,
    title: String,
    description: String,
    estimated_duration: f64,
}

impl FlowchartStructure {
    /// Creates a structure from already built parts.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Nodes in chain order
    /// * `edges` - Edges in chain order
    /// * `title` - Display title
    /// * `description` - Possibly truncated source prompt
    /// * `estimated_duration` - Pacing estimate in seconds
    pub fn new(
        nodes: Vec<Node>,
        edges: Vec<Edge>,
        title: impl Into<String>,
        description: impl Into<String>,
        estimated_duration: f64,
    ) -> Self {
        Self {
            nodes,
            edges,
            title: title.into(),
            description: description.into(),
            estimated_duration,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Estimated video duration in seconds.
    pub fn estimated_duration(&self) -> f64 {
        self.estimated_duration
    }

    /// Returns the node with the given id, if any.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    /// Replaces the narration of the node at `index`.
    ///
    /// Narration is the only field that may change after a structure is
    /// built. Returns `false` if `index` is out of range.
    pub fn set_narration(&mut self, index: usize, narration: impl Into<String>) -> bool {
        match self.nodes.get_mut(index) {
            Some(node) => {
                node.narration = narration.into();
                true
            }
            None => false,
        }
    }

    /// Returns `true` if any edge carries a condition.
    pub fn has_conditional_edges(&self) -> bool {
        self.edges.iter().any(|edge| edge.condition().is_some())
    }
}
