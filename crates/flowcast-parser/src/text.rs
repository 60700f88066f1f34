//! Text helpers shared by the segmenter and the builder.
//!
//! All lengths are counted in characters, never bytes, so prompts with
//! arrows or accented letters are cut on character boundaries.

/// Collapses every whitespace run to a single space and trims both ends.
///
/// Case is preserved; callers fold case separately when matching keywords.
///
/// # Examples
///
/// ```
/// # use flowcast_parser::normalize;
/// assert_eq!(normalize("  Boil\n\twater  -> Serve "), "Boil water -> Serve");
/// ```
pub fn normalize(prompt: &str) -> String {
    prompt.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the first `max_chars` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercases the first character of every word and lowercases the rest.
pub(crate) fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Counts whitespace-separated words.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
        assert_eq!(normalize("a  b\n\nc"), "a b c");
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("a→b→c", 3), "a→b");
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_capitalize_keeps_rest() {
        assert_eq!(capitalize("boil water"), "Boil water");
        assert_eq!(capitalize("check API status"), "Check API status");
        assert_eq!(capitalize("ärger"), "Ärger");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_title_case_per_word() {
        assert_eq!(title_case("make TEA at home"), "Make Tea At Home");
        assert_eq!(title_case("start -> end"), "Start -> End");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("Then we boil water"), 4);
        assert_eq!(word_count("   "), 0);
    }
}
