//! Color handling for Flowcast flowcharts
//!
//! This module provides the role palette used as a display hint for
//! renderers, and the [`Color`] type which wraps `DynamicColor` from the
//! color crate so color hints can be checked as CSS colors.

use std::{fmt, str::FromStr};

use color::DynamicColor;

use crate::flowchart::NodeRole;

/// Returns the palette entry for a node role as a hex string.
///
/// The palette is fixed; it never participates in parsing decisions.
///
/// # Examples
///
/// ```
/// use flowcast_core::{color::role_hex, flowchart::NodeRole};
///
/// assert_eq!(role_hex(NodeRole::Start), "#4CAF50");
/// assert_eq!(role_hex(NodeRole::End), "#F44336");
/// ```
pub fn role_hex(role: NodeRole) -> &'static str {
    match role {
        NodeRole::Start => "#4CAF50",
        NodeRole::End => "#F44336",
        NodeRole::Process => "#2196F3",
        NodeRole::Decision => "#FF9800",
        NodeRole::InputOutput => "#9C27B0",
        NodeRole::Connector => "#607D8B",
    }
}

/// A parsed CSS color, wrapping `DynamicColor` from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string such as `"#ff0000"`, `"rgb(255, 0, 0)"`
    /// or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowcast_core::color::Color;
    ///
    /// assert!(Color::new("#2196F3").is_ok());
    /// assert!(Color::new("blurple").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ALL_ROLES: [NodeRole; 6] = [
        NodeRole::Start,
        NodeRole::End,
        NodeRole::Process,
        NodeRole::Decision,
        NodeRole::InputOutput,
        NodeRole::Connector,
    ];

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("rgb(255, 0, 0)").is_ok());

        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.starts_with("invalid color `not-a-color`"));
    }

    #[test]
    fn test_palette_is_valid_css() {
        for role in ALL_ROLES {
            assert!(
                Color::new(role_hex(role)).is_ok(),
                "palette entry for {role} should parse"
            );
        }
    }

    #[test]
    fn test_palette_distinct_per_role() {
        let colors: HashSet<String> = ALL_ROLES
            .into_iter()
            .map(|role| Color::new(role_hex(role)).unwrap().to_string())
            .collect();
        assert_eq!(colors.len(), ALL_ROLES.len());
    }

    #[test]
    fn test_palette_hex_values() {
        assert_eq!(role_hex(NodeRole::Process), "#2196F3");
        assert_eq!(role_hex(NodeRole::Decision), "#FF9800");
        assert_eq!(role_hex(NodeRole::InputOutput), "#9C27B0");
        assert_eq!(role_hex(NodeRole::Connector), "#607D8B");
    }
}
