//! Per-node narration sentences.
//!
//! Sentences are written while the chain is built because the duration
//! estimate counts their words.

use flowcast_core::flowchart::NodeRole;

/// Returns the narration sentence for a node.
///
/// # Examples
///
/// ```
/// # use flowcast_parser::node_narration;
/// # use flowcast_core::flowchart::NodeRole;
/// assert_eq!(
///     node_narration(NodeRole::Start, "Boil water"),
///     "We begin our process with: Boil water"
/// );
/// assert_eq!(node_narration(NodeRole::End, "Serve"), "Finally, we serve");
/// ```
pub fn node_narration(role: NodeRole, text: &str) -> String {
    match role {
        NodeRole::Start => format!("We begin our process with: {text}"),
        NodeRole::End => format!("Finally, we {}", text.to_lowercase()),
        NodeRole::Decision => format!("Next, we need to {}", text.to_lowercase()),
        NodeRole::Process | NodeRole::InputOutput | NodeRole::Connector => {
            format!("Then we {}", text.to_lowercase())
        }
    }
}
