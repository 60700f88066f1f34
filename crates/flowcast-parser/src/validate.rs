//! Chain validation for built flowcharts.
//!
//! A valid chain starts with its only start node, ends with its only end
//! node, and links every node to its successor with exactly one edge, in
//! order. All violations are reported together.

use std::collections::HashSet;

use flowcast_core::{
    color::Color,
    flowchart::{FlowchartStructure, NodeRole},
};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError};

/// Checks the chain invariants of `flowchart`.
///
/// Returns the warnings on success. Decision nodes produce a warning because
/// the parser never infers their branches.
pub fn validate(flowchart: &FlowchartStructure) -> Result<Vec<Diagnostic>, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let nodes = flowchart.nodes();

    let Some(last_index) = nodes.len().checked_sub(1) else {
        collector.emit(
            Diagnostic::error("flowchart has no nodes")
                .with_code(ErrorCode::E100)
                .with_help("a chain needs at least a start, one step and an end"),
        );
        return collector.finish();
    };

    let mut seen = HashSet::new();
    for (index, node) in nodes.iter().enumerate() {
        if !seen.insert(node.id()) {
            collector.emit(
                Diagnostic::error(format!("node id `{}` is used more than once", node.id()))
                    .with_code(ErrorCode::E203)
                    .with_step(index),
            );
        }

        if let Err(err) = Color::new(node.color()) {
            collector.emit(
                Diagnostic::error(err)
                    .with_code(ErrorCode::E204)
                    .with_step(index)
                    .with_help("use a CSS color such as `#2196F3`"),
            );
        }

        match node.role() {
            NodeRole::Start if index != 0 => collector.emit(
                Diagnostic::error(format!("step {index} is a start node but is not first"))
                    .with_code(ErrorCode::E200)
                    .with_step(index),
            ),
            NodeRole::End if index != last_index => collector.emit(
                Diagnostic::error(format!("step {index} is an end node but is not last"))
                    .with_code(ErrorCode::E201)
                    .with_step(index),
            ),
            NodeRole::Decision => collector.emit(
                Diagnostic::warning(format!(
                    "step {index} is a decision with a single outgoing edge"
                ))
                .with_step(index)
                .with_help("branches are only drawn from caller-supplied edges"),
            ),
            _ => {}
        }
    }

    if nodes[0].role() != NodeRole::Start {
        collector.emit(
            Diagnostic::error("first node is not a start node")
                .with_code(ErrorCode::E200)
                .with_step(0),
        );
    }
    if nodes[last_index].role() != NodeRole::End {
        collector.emit(
            Diagnostic::error("last node is not an end node")
                .with_code(ErrorCode::E201)
                .with_step(last_index),
        );
    }

    let edges = flowchart.edges();
    if edges.len() != last_index {
        collector.emit(
            Diagnostic::error(format!(
                "expected {last_index} edges for {} nodes, found {}",
                nodes.len(),
                edges.len()
            ))
            .with_code(ErrorCode::E202),
        );
    }
    for (index, (edge, pair)) in edges.iter().zip(nodes.windows(2)).enumerate() {
        if edge.from_node() != pair[0].id() || edge.to_node() != pair[1].id() {
            collector.emit(
                Diagnostic::error(format!(
                    "edge {index} links `{}` to `{}` instead of `{}` to `{}`",
                    edge.from_node(),
                    edge.to_node(),
                    pair[0].id(),
                    pair[1].id()
                ))
                .with_code(ErrorCode::E202)
                .with_step(index),
            );
        }
    }

    collector.finish()
}
