//! Integration tests for the FlowchartGenerator API
//!
//! These tests drive the public API the way the CLI and a render service do.

use float_cmp::assert_approx_eq;

use flowcast::{
    FlowcastError, FlowchartGenerator,
    config::{AppConfig, LimitsConfig},
    flowchart::NodeRole,
    narration::{FALLBACK_SCRIPT, NarrationPayload},
};

#[test]
fn test_generator_api_exists() {
    let _generator = FlowchartGenerator::default();
}

#[test]
fn test_parse_prompt_scenario() {
    let generator = FlowchartGenerator::default();
    let flowchart = generator.parse_prompt("Start -> Validate user input -> Process data -> End");

    let roles: Vec<NodeRole> = flowchart.nodes().iter().map(|n| n.role()).collect();
    assert_eq!(
        roles,
        vec![NodeRole::Start, NodeRole::Process, NodeRole::Process, NodeRole::End]
    );
    assert_eq!(flowchart.edges().len(), 3);
    // Titles keep the first 50 characters of the prompt.
    assert_eq!(flowchart.title(), "Start -> Validate User Input -> Process Data -> En");
}

#[test]
fn test_parse_prompt_never_fails_on_empty_input() {
    let flowchart = FlowchartGenerator::default().parse_prompt("");
    assert_eq!(flowchart.nodes().len(), 3);
    assert_eq!(flowchart.nodes()[0].role(), NodeRole::Start);
    assert_eq!(flowchart.nodes()[2].role(), NodeRole::End);
}

#[test]
fn test_parse_prompt_is_repeatable() {
    let generator = FlowchartGenerator::default();
    let prompt = "1. Receive order 2. Verify payment 3. Ship order";
    assert_eq!(generator.parse_prompt(prompt), generator.parse_prompt(prompt));
}

#[test]
fn test_timed_narration_from_parsed_flowchart() {
    let generator = FlowchartGenerator::default();
    let flowchart = generator.parse_prompt("Open CRM -> Check ticket status -> Close ticket");
    let narration = generator.build_timed_narration(&NarrationPayload::from(&flowchart), 24.0);

    // Node clauses carry no period, so they run into the arrows note:
    // intro (2) + nodes and arrows note (1) + closing (2).
    let segments = narration.segments();
    assert_eq!(segments.len(), 5);
    assert_eq!(
        segments[2].text(),
        "We begin with: Open CRM Next, we make a decision: Check ticket status \
         Finally, we reach: Close ticket The arrows show the flow between these steps."
    );
    for segment in segments {
        assert_approx_eq!(f64, segment.duration(), 4.8);
        assert!(segment.node_index() <= 2);
    }
    assert_eq!(segments[4].node_index(), 2);
    assert_approx_eq!(f64, segments[4].end_time(), 24.0);
}

#[test]
fn test_timed_narration_json_payload() {
    let generator = FlowchartGenerator::default();
    let json = r#"{
        "title": "Rain Check",
        "nodes": [
            {"text": "Is it raining?", "type": "decision"},
            {"text": "Take umbrella", "type": "process"}
        ],
        "connections": [{"from_node": "a", "to_node": "b", "condition": "yes"}]
    }"#;

    let narration = generator.build_timed_narration_json(json, 10.0);
    assert!(narration.script().starts_with("Welcome to this Rain Check explanation."));
    assert!(narration.script().contains("Notice the different paths"));
}

#[test]
fn test_undecodable_payload_uses_fallback_script() {
    let generator = FlowchartGenerator::default();
    let narration = generator.build_timed_narration_json("{not json", 12.0);

    assert_eq!(narration.script(), FALLBACK_SCRIPT);
    assert_eq!(narration.segments().len(), 2);
    assert_approx_eq!(f64, narration.segments()[1].end_time(), 12.0);
}

#[test]
fn test_unusable_duration_uses_configured_default() {
    let config: AppConfig =
        serde_json::from_str(r#"{"narration": {"default_video_duration": 40.0}}"#).unwrap();
    let generator = FlowchartGenerator::new(config);

    let narration = generator.build_timed_narration(&NarrationPayload::default(), 0.0);
    let last = narration.segments().last().unwrap();
    assert_approx_eq!(f64, last.end_time(), 40.0);
}

#[test]
fn test_validate_prompt() {
    let generator = FlowchartGenerator::new(AppConfig::default().with_limits(LimitsConfig::new(10)));

    assert_eq!(generator.validate_prompt("  short  ").unwrap(), "short");
    assert!(matches!(
        generator.validate_prompt(" \n "),
        Err(FlowcastError::InvalidPrompt(_))
    ));
    assert!(matches!(
        generator.validate_prompt("far too long for ten"),
        Err(FlowcastError::InvalidPrompt(_))
    ));
    // Limits count characters, not bytes.
    assert!(generator.validate_prompt("→→→→→→→→→→").is_ok());
}
