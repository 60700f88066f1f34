//! Flowcast Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Flowcast parser,
//! narration engine, and command-line tool. It includes:
//!
//! - **Colors**: Role palette backed by CSS color parsing ([`color::Color`])
//! - **Geometry**: Layout coordinates for nodes ([`geometry::Point`])
//! - **Flowchart**: The parsed flowchart model ([`flowchart`] module)
//! - **Narration**: Timed narration segments and pacing constants ([`narration`] module)

pub mod color;
pub mod flowchart;
pub mod geometry;
pub mod narration;
