//! Step segmentation for natural-language prompts.
//!
//! The segmenter turns a prompt such as
//! `"Start -> Boil water -> Add tea -> End"` into ordered step phrases. The
//! public entry point is [`segment`].
//!
//! Separators are tried in the fixed order of [`SEPARATORS`]. Only the first
//! separator kind present anywhere in the prompt is used; a prompt mixing
//! arrows and hyphens is split on arrows alone.

use std::{fmt, ops::Range};

use log::{debug, trace};
use winnow::{
    Parser as _,
    ascii::{digit1, multispace1},
    combinator::{alt, eof, peek, terminated},
    error::ModalResult,
};

use crate::text::normalize;

/// The smallest number of steps a chain is built from.
pub const MIN_STEPS: usize = 3;

/// A kind of step separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// A literal token such as `->` or `•`.
    Literal(&'static str),
    /// Numbered list markers: `1.`, `2.`, ... at the start of a word and
    /// followed by whitespace or the end of the prompt.
    NumberedList,
}

/// Separator kinds in priority order.
pub const SEPARATORS: &[Separator] = &[
    Separator::Literal("->"),
    Separator::Literal("→"),
    Separator::Literal("➜"),
    Separator::Literal("-"),
    Separator::Literal("•"),
    Separator::NumberedList,
];

impl Separator {
    /// Returns `true` if the separator occurs anywhere in `text`.
    pub fn is_present(&self, text: &str) -> bool {
        match self {
            Separator::Literal(token) => text.contains(*token),
            Separator::NumberedList => !numbered_markers(text).is_empty(),
        }
    }

    /// Splits `text` on this separator, trimming fragments and dropping
    /// empty ones.
    pub fn split(&self, text: &str) -> Vec<String> {
        match self {
            Separator::Literal(token) => non_empty(text.split(*token)),
            Separator::NumberedList => {
                let markers = numbered_markers(text);
                let mut fragments = Vec::with_capacity(markers.len() + 1);
                let mut start = 0;
                for marker in markers {
                    fragments.push(&text[start..marker.start]);
                    start = marker.end;
                }
                fragments.push(&text[start..]);
                non_empty(fragments)
            }
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Literal(token) => write!(f, "`{token}`"),
            Separator::NumberedList => write!(f, "numbered list"),
        }
    }
}

/// Splits a prompt into ordered step phrases.
///
/// Whitespace is normalized and the original letter case is kept, so the
/// returned phrases can be used directly as labels. The result always holds
/// at least [`MIN_STEPS`] non-empty phrases: when fewer are found the prompt
/// is wrapped as `["Start", <prompt>, "End"]`.
///
/// # Examples
///
/// ```
/// # use flowcast_parser::segment;
/// let steps = segment("Start -> Boil water -> Serve");
/// assert_eq!(steps, vec!["Start", "Boil water", "Serve"]);
///
/// let steps = segment("Just do it");
/// assert_eq!(steps, vec!["Start", "Just do it", "End"]);
/// ```
pub fn segment(prompt: &str) -> Vec<String> {
    let cleaned = normalize(prompt);

    let steps = match SEPARATORS.iter().find(|sep| sep.is_present(&cleaned)) {
        Some(separator) => {
            let steps = separator.split(&cleaned);
            debug!(separator:% = separator, steps = steps.len(); "Prompt split on separator");
            steps
        }
        None => {
            let sentences = non_empty(cleaned.split('.'));
            if sentences.is_empty() {
                non_empty(cleaned.split(','))
            } else {
                sentences
            }
        }
    };

    if steps.len() < MIN_STEPS {
        debug!(found = steps.len(); "Too few steps, wrapping prompt");
        return fallback_steps(&cleaned);
    }

    trace!(steps:?; "Segmented prompt");
    steps
}

/// The three-step chain used when a prompt yields too few steps.
fn fallback_steps(cleaned: &str) -> Vec<String> {
    let body = if cleaned.is_empty() { "Process" } else { cleaned };
    vec!["Start".to_string(), body.to_string(), "End".to_string()]
}

fn non_empty<'a>(fragments: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Recognizes one numbered list marker such as `12.`.
///
/// The marker must be followed by whitespace or the end of input, which keeps
/// decimals like `3.5` intact.
fn numbered_marker(input: &mut &str) -> ModalResult<()> {
    terminated((digit1, '.'), peek(alt((multispace1, eof))))
        .void()
        .parse_next(input)
}

/// Byte ranges of every numbered list marker that starts a word.
fn numbered_markers(text: &str) -> Vec<Range<usize>> {
    let mut markers = Vec::new();
    let mut at_word_start = true;
    let mut offset = 0;

    while let Some(ch) = text[offset..].chars().next() {
        if at_word_start && ch.is_ascii_digit() {
            let mut input = &text[offset..];
            if numbered_marker(&mut input).is_ok() {
                let end = text.len() - input.len();
                markers.push(offset..end);
                offset = end;
                at_word_start = false;
                continue;
            }
        }
        at_word_start = ch.is_whitespace();
        offset += ch.len_utf8();
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_split() {
        assert_eq!(
            segment("Start -> Validate user input -> Process data -> End"),
            vec!["Start", "Validate user input", "Process data", "End"]
        );
    }

    #[test]
    fn test_unicode_arrows() {
        assert_eq!(segment("Wake → Shower → Dress"), vec!["Wake", "Shower", "Dress"]);
        assert_eq!(segment("Plan ➜ Build ➜ Ship"), vec!["Plan", "Build", "Ship"]);
    }

    #[test]
    fn test_arrow_beats_hyphen() {
        // `->` has priority, so hyphens inside steps survive.
        assert_eq!(
            segment("Start -> Re-check the e-mail -> End"),
            vec!["Start", "Re-check the e-mail", "End"]
        );
    }

    #[test]
    fn test_first_kind_in_priority_order_not_in_text_order() {
        // The bullet occurs first in the text, but `-` ranks higher.
        assert_eq!(
            segment("• Intro - Body - Outro • Credits"),
            vec!["• Intro", "Body", "Outro • Credits"]
        );
    }

    #[test]
    fn test_bullets() {
        assert_eq!(
            segment("• Gather • Mix • Bake"),
            vec!["Gather", "Mix", "Bake"]
        );
    }

    #[test]
    fn test_numbered_list() {
        assert_eq!(
            segment("1. Boil water 2. Add tea 3. Serve"),
            vec!["Boil water", "Add tea", "Serve"]
        );
    }

    #[test]
    fn test_numbered_list_ignores_decimals() {
        assert_eq!(
            segment("1. Heat to 3.5 bar 2. Hold 3. Release"),
            vec!["Heat to 3.5 bar", "Hold", "Release"]
        );
    }

    #[test]
    fn test_numbered_marker_requires_word_start() {
        assert!(numbered_markers("v1. release").is_empty());
        assert_eq!(numbered_markers("1. a 10. b"), vec![0..2, 5..8]);
    }

    #[test]
    fn test_sentence_fallback() {
        assert_eq!(
            segment("Open the door. Walk in. Close the door."),
            vec!["Open the door", "Walk in", "Close the door"]
        );
    }

    #[test]
    fn test_comma_only_prompt_wraps() {
        // The period split already yields one fragment, so commas are not tried.
        assert_eq!(
            segment("mix, bake, eat"),
            vec!["Start", "mix, bake, eat", "End"]
        );
    }

    #[test]
    fn test_only_periods_wraps() {
        assert_eq!(non_empty("...".split('.')), Vec::<String>::new());
        assert_eq!(segment("..."), vec!["Start", "...", "End"]);
    }

    #[test]
    fn test_two_steps_wrap_whole_prompt() {
        assert_eq!(
            segment("Think -> Act"),
            vec!["Start", "Think -> Act", "End"]
        );
    }

    #[test]
    fn test_empty_prompt() {
        assert_eq!(segment(""), vec!["Start", "Process", "End"]);
        assert_eq!(segment("   \n "), vec!["Start", "Process", "End"]);
    }

    #[test]
    fn test_whitespace_normalized_case_preserved() {
        assert_eq!(
            segment("  Read   CSV ->\nParse\tRows -> Write JSON "),
            vec!["Read CSV", "Parse Rows", "Write JSON"]
        );
    }

    #[test]
    fn test_empty_fragments_dropped() {
        assert_eq!(
            segment("-> a -> -> b -> c ->"),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_separator_table_order() {
        assert_eq!(SEPARATORS.len(), 6);
        assert_eq!(SEPARATORS[0], Separator::Literal("->"));
        assert_eq!(SEPARATORS[3], Separator::Literal("-"));
        assert_eq!(SEPARATORS[5], Separator::NumberedList);
    }
}
