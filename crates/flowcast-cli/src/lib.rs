//! CLI logic for the Flowcast tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, PromptSource};

use std::{fs, io};

use log::{debug, info};
use serde::Serialize;

use flowcast::{
    FlowcastError, FlowchartGenerator,
    jobs::{JobId, JobStatus, JobStore},
    narration::{NarrationPayload, TimedSegment},
    speech::{AudioClip, BoxedProvider, PacedSpeech, ProviderRegistry},
};

/// JSON document printed by `narrate`.
#[derive(Serialize)]
struct NarrateOutput<'a> {
    script: &'a str,
    segments: &'a [TimedSegment],
    clips: Vec<AudioClip>,
}

/// Run the Flowcast CLI application
///
/// Reads and validates the prompt, runs the selected command and writes the
/// JSON result to the output file or stdout. The run is tracked as a job so
/// its stages show up in the logs.
///
/// # Errors
///
/// Returns `FlowcastError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Blank or oversized prompts
/// - Speech synthesis errors
pub fn run(args: &Args) -> Result<(), FlowcastError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let generator = FlowchartGenerator::new(app_config);

    let jobs = JobStore::new();
    let job = jobs.create();

    match execute(args, &generator, &jobs, job) {
        Ok(()) => {
            jobs.update(job, JobStatus::Completed)?;
            info!(job:% = job; "Job completed");
            Ok(())
        }
        Err(err) => {
            jobs.update(job, JobStatus::Failed)?;
            Err(err)
        }
    }
}

fn execute(
    args: &Args,
    generator: &FlowchartGenerator,
    jobs: &JobStore,
    job: JobId,
) -> Result<(), FlowcastError> {
    let raw = read_prompt(args.command.source())?;
    let prompt = generator.validate_prompt(&raw)?;
    info!(job:% = job, chars = prompt.chars().count(); "Processing prompt");

    jobs.update(job, JobStatus::Parsing)?;
    let flowchart = generator.parse_prompt(prompt);

    let json = match &args.command {
        Command::Parse(_) => {
            jobs.update(job, JobStatus::Optimizing)?;
            to_json(&flowchart)?
        }
        Command::Narrate { duration, .. } => {
            jobs.update(job, JobStatus::Generating)?;
            let total = duration.unwrap_or_else(|| flowchart.estimated_duration());
            let narration = generator.build_timed_narration(&NarrationPayload::from(&flowchart), total);

            jobs.update(job, JobStatus::GeneratingAudio)?;
            let speech = generator.config().speech();
            let providers: Vec<BoxedProvider> = vec![Box::new(PacedSpeech::new(speech.seconds_per_word()))];
            let registry = ProviderRegistry::resolve(providers, speech);
            let clips = registry.synthesize_segments(narration.segments())?;
            let spoken: f64 = clips.iter().map(AudioClip::duration).sum();
            debug!(clips = clips.len(), spoken; "Narration synthesized");

            jobs.update(job, JobStatus::Optimizing)?;
            to_json(&NarrateOutput {
                script: narration.script(),
                segments: narration.segments(),
                clips,
            })?
        }
    };

    write_output(args.output.as_deref(), &json)
}

fn read_prompt(source: &PromptSource) -> Result<String, FlowcastError> {
    match (&source.prompt, &source.input) {
        (_, Some(path)) => {
            debug!(path = path.as_str(); "Reading prompt file");
            Ok(fs::read_to_string(path)?)
        }
        (Some(prompt), None) => Ok(prompt.clone()),
        (None, None) => Err(FlowcastError::InvalidPrompt(
            "no prompt given".to_string(),
        )),
    }
}

fn to_json(value: &impl Serialize) -> Result<String, FlowcastError> {
    Ok(serde_json::to_string_pretty(value).map_err(io::Error::from)?)
}

fn write_output(path: Option<&str>, json: &str) -> Result<(), FlowcastError> {
    match path {
        Some(path) => {
            fs::write(path, json)?;
            info!(output_file = path; "Output written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
