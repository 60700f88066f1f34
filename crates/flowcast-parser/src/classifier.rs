//! Role classification for segmented steps.
//!
//! Position decides first: the first step is always the start and the last
//! step is always the end. Every other step is matched against
//! [`KEYWORD_RULES`] in order, with [`NodeRole::Process`] as the default.
//! Matching is a case-insensitive substring test; there is no stemming.

use flowcast_core::flowchart::NodeRole;

/// Vocabulary marking a step as a decision.
pub const DECISION_KEYWORDS: &[&str] = &["if", "decide", "check", "verify", "determine", "whether", "?"];

/// Vocabulary marking a step as reading or presenting data.
pub const INPUT_OUTPUT_KEYWORDS: &[&str] = &["output", "read", "write", "display", "show", "print"];

/// A keyword rule: any keyword hit assigns `role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub role: NodeRole,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    /// Returns `true` if `folded` (already lowercased) contains a keyword.
    pub fn matches(&self, folded: &str) -> bool {
        self.keywords.iter().any(|keyword| folded.contains(keyword))
    }
}

/// Keyword rules in priority order; the first matching rule wins.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        role: NodeRole::Decision,
        keywords: DECISION_KEYWORDS,
    },
    KeywordRule {
        role: NodeRole::InputOutput,
        keywords: INPUT_OUTPUT_KEYWORDS,
    },
];

/// Assigns a role to the step at `index` in a chain of `total` steps.
///
/// # Examples
///
/// ```
/// # use flowcast_parser::classify;
/// # use flowcast_core::flowchart::NodeRole;
/// assert_eq!(classify("Is it raining?", 0, 3), NodeRole::Start);
/// assert_eq!(classify("Is it raining?", 1, 3), NodeRole::Decision);
/// assert_eq!(classify("Display the result", 1, 3), NodeRole::InputOutput);
/// assert_eq!(classify("Boil water", 1, 3), NodeRole::Process);
/// ```
pub fn classify(step_text: &str, index: usize, total: usize) -> NodeRole {
    if index == 0 {
        return NodeRole::Start;
    }
    if index + 1 == total {
        return NodeRole::End;
    }

    let folded = step_text.to_lowercase();
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.matches(&folded))
        .map_or(NodeRole::Process, |rule| rule.role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_dominates_keywords() {
        assert_eq!(classify("Check if ready?", 0, 4), NodeRole::Start);
        assert_eq!(classify("Show the report", 3, 4), NodeRole::End);
    }

    #[test]
    fn test_single_step_is_start() {
        assert_eq!(classify("Anything", 0, 1), NodeRole::Start);
    }

    #[test]
    fn test_decision_keywords() {
        for text in [
            "Decide on a plan",
            "CHECK credentials",
            "Verify the backup",
            "Determine the route",
            "Ask whether to continue",
            "Tests pass?",
            "If tests fail, fix issues",
        ] {
            assert_eq!(classify(text, 1, 3), NodeRole::Decision, "{text}");
        }
    }

    #[test]
    fn test_input_output_keywords() {
        for text in ["Read the file", "Write results", "Display chart", "Show error message", "Print receipt", "Output totals"] {
            assert_eq!(classify(text, 1, 3), NodeRole::InputOutput, "{text}");
        }
    }

    #[test]
    fn test_decision_outranks_input_output() {
        assert_eq!(classify("Check and display status", 1, 3), NodeRole::Decision);
    }

    #[test]
    fn test_defaults_to_process() {
        assert_eq!(classify("Validate user input", 1, 4), NodeRole::Process);
        assert_eq!(classify("Process data", 2, 4), NodeRole::Process);
        assert_eq!(classify("Take umbrella", 1, 3), NodeRole::Process);
    }

    #[test]
    fn test_substring_matching_has_no_word_boundaries() {
        // "notify" contains "if"; the vocabulary is a plain substring table.
        assert_eq!(classify("Notify the team", 1, 3), NodeRole::Decision);
    }

    #[test]
    fn test_rule_table_order() {
        assert_eq!(KEYWORD_RULES[0].role, NodeRole::Decision);
        assert_eq!(KEYWORD_RULES[1].role, NodeRole::InputOutput);
        assert!(DECISION_KEYWORDS.contains(&"?"));
    }
}
