//! Command-line argument definitions for the Flowcast CLI.
//!
//! [`Args`] holds the global options; [`Command`] selects between printing
//! the parsed flowchart and printing its timed narration.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Flowcast tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the output JSON file; stdout when omitted
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the flowchart parsed from a prompt
    Parse(PromptSource),

    /// Print the narration script, its timeline and synthesized clips
    Narrate {
        #[command(flatten)]
        source: PromptSource,

        /// Video length in seconds; the flowchart's estimate when omitted
        #[arg(short, long)]
        duration: Option<f64>,
    },
}

impl Command {
    pub fn source(&self) -> &PromptSource {
        match self {
            Command::Parse(source) => source,
            Command::Narrate { source, .. } => source,
        }
    }
}

/// Where the prompt comes from.
#[derive(clap::Args, Debug)]
pub struct PromptSource {
    /// Prompt text
    #[arg(required_unless_present = "input")]
    pub prompt: Option<String>,

    /// Path to a file holding the prompt
    #[arg(short, long, conflicts_with = "prompt")]
    pub input: Option<String>,
}
