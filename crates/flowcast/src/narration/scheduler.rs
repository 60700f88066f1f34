//! Uniform placement of script sentences on the video timeline.

use log::{debug, warn};

use flowcast_core::narration::TimedSegment;

/// Script used when there is nothing else to narrate.
pub const FALLBACK_SCRIPT: &str = "Welcome to this flowchart explanation. Please review the visual elements to understand the process flow.";

/// Video duration used when a caller passes a non-positive or non-finite one.
pub const DEFAULT_VIDEO_DURATION: f64 = 15.0;

/// Splits `script` into sentences and spreads them evenly over
/// `total_duration` seconds.
///
/// Sentences are split on `". "`, blank fragments are dropped and each kept
/// sentence ends with a period. Sentence `i` starts at `i * total / count`
/// and is aligned with node `min(i, node_count - 1)`, or node 0 when there
/// are no nodes. A script without sentences yields one segment spanning the
/// whole duration with [`FALLBACK_SCRIPT`] as its text.
///
/// # Examples
///
/// ```
/// # use flowcast::narration::schedule;
/// let segments = schedule("A. B. C.", 9.0, 3);
/// let starts: Vec<f64> = segments.iter().map(|s| s.start_time()).collect();
/// assert_eq!(starts, vec![0.0, 3.0, 6.0]);
/// ```
pub fn schedule(script: &str, total_duration: f64, node_count: usize) -> Vec<TimedSegment> {
    let total = if total_duration.is_finite() && total_duration > 0.0 {
        total_duration
    } else {
        warn!(total_duration; "Unusable video duration, using default");
        DEFAULT_VIDEO_DURATION
    };

    let sentences: Vec<String> = script
        .split(". ")
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| {
            if sentence.ends_with('.') {
                sentence.to_string()
            } else {
                format!("{sentence}.")
            }
        })
        .collect();

    if sentences.is_empty() {
        debug!("Empty script, scheduling fallback segment");
        return vec![TimedSegment::new(FALLBACK_SCRIPT, 0.0, total, 0)];
    }

    let per_segment = total / sentences.len() as f64;
    let last_node = node_count.saturating_sub(1);
    let segments: Vec<TimedSegment> = sentences
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            TimedSegment::new(text, index as f64 * per_segment, per_segment, index.min(last_node))
        })
        .collect();

    debug!(segments = segments.len(), per_segment; "Script scheduled");
    segments
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_empty_script_single_fallback_segment() {
        let segments = schedule("", 20.0, 4);

        assert_eq!(segments.len(), 1);
        assert_approx_eq!(f64, segments[0].start_time(), 0.0);
        assert_approx_eq!(f64, segments[0].duration(), 20.0);
        assert_eq!(segments[0].text(), FALLBACK_SCRIPT);
        assert_eq!(segments[0].node_index(), 0);
    }

    #[test]
    fn test_blank_script_is_empty() {
        assert_eq!(schedule(" .  ", 5.0, 1).len(), 1);
        assert_eq!(schedule("   ", 5.0, 1)[0].text(), FALLBACK_SCRIPT);
    }

    #[test]
    fn test_three_sentences_uniform() {
        let segments = schedule("A. B. C.", 9.0, 3);
        let texts: Vec<&str> = segments.iter().map(TimedSegment::text).collect();

        assert_eq!(texts, vec!["A.", "B.", "C."]);
        for (index, segment) in segments.iter().enumerate() {
            assert_approx_eq!(f64, segment.duration(), 3.0);
            assert_approx_eq!(f64, segment.start_time(), index as f64 * 3.0);
        }
    }

    #[test]
    fn test_node_index_clamped() {
        let script = "One. Two. Three. Four. Five. Six. Seven. Eight.";
        let segments = schedule(script, 16.0, 5);
        let indices: Vec<usize> = segments.iter().map(TimedSegment::node_index).collect();

        assert_eq!(indices, vec![0, 1, 2, 3, 4, 4, 4, 4]);
    }

    #[test]
    fn test_no_nodes_maps_to_zero() {
        let segments = schedule("A. B.", 4.0, 0);
        assert!(segments.iter().all(|segment| segment.node_index() == 0));
    }

    #[test]
    fn test_blank_fragments_are_not_counted() {
        let segments = schedule("A.  . B.", 10.0, 2);
        assert_eq!(segments.len(), 2);
        assert_approx_eq!(f64, segments[1].start_time(), 5.0);
    }

    #[test]
    fn test_question_keeps_its_mark() {
        let segments = schedule("Is it hot? Then serve.", 4.0, 1);
        assert_eq!(segments[0].text(), "Is it hot? Then serve.");
    }

    #[test]
    fn test_unusable_duration_falls_back() {
        for total in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let segments = schedule("A. B. C.", total, 3);
            assert_approx_eq!(f64, segments[2].end_time(), DEFAULT_VIDEO_DURATION);
        }
    }
}
