//! Speech synthesis behind a provider table.
//!
//! Concrete text-to-speech engines implement [`SpeechProvider`] and describe
//! themselves with [`Capabilities`]. [`ProviderRegistry::resolve`] turns the
//! available providers into an ordered table once, at startup; synthesis then
//! walks that table and falls back to the next provider on failure.
//!
//! The narration core never sees a provider. It only produces text, and the
//! registry turns text into [`AudioClip`]s of a known duration.

use std::fmt;

use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;

use flowcast_core::narration::TimedSegment;

use crate::config::SpeechConfig;

/// Errors raised while synthesizing speech.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// One provider failed.
    #[error("{provider} failed: {message}")]
    Provider { provider: String, message: String },

    /// Every provider in the table failed.
    #[error("all speech providers failed: {}", format_failures(.0))]
    Exhausted(Vec<SpeechError>),

    #[error("no speech provider is available")]
    NoProviders,
}

impl SpeechError {
    /// Create a `Provider` error.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

fn format_failures(failures: &[SpeechError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// What a provider can do, used to order the provider table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Works without network access.
    pub offline: bool,
    /// Higher values are tried first when no preference names the provider.
    pub priority: u8,
}

/// Synthesized audio for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioClip {
    provider: String,
    text: String,
    duration: f64,
}

impl AudioClip {
    pub fn new(provider: impl Into<String>, text: impl Into<String>, duration: f64) -> Self {
        Self {
            provider: provider.into(),
            text: text.into(),
            duration,
        }
    }

    /// Name of the provider that produced the clip.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the audio, in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// A text-to-speech engine.
pub trait SpeechProvider: Send + Sync {
    /// Stable name, matched against the configured preference list.
    fn name(&self) -> &str;

    fn capabilities(&self) -> Capabilities;

    /// Checks whether the engine can be used right now.
    ///
    /// By default, this always returns `true`.
    fn is_available(&self) -> bool {
        true
    }

    /// Synthesizes `text` into an audio clip.
    fn synthesize(&self, text: &str) -> Result<AudioClip, SpeechError>;
}

/// A boxed provider for heterogeneous provider tables.
pub type BoxedProvider = Box<dyn SpeechProvider>;

/// Offline provider that paces text at a fixed speaking rate.
///
/// It produces no waveform; the clip duration is
/// `word count * seconds_per_word`.
#[derive(Debug, Clone, PartialEq)]
pub struct PacedSpeech {
    seconds_per_word: f64,
}

impl PacedSpeech {
    pub const NAME: &'static str = "paced";

    pub fn new(seconds_per_word: f64) -> Self {
        Self { seconds_per_word }
    }
}

impl Default for PacedSpeech {
    fn default() -> Self {
        Self::new(0.4)
    }
}

impl SpeechProvider for PacedSpeech {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            offline: true,
            priority: 0,
        }
    }

    fn synthesize(&self, text: &str) -> Result<AudioClip, SpeechError> {
        let words = text.split_whitespace().count();
        Ok(AudioClip::new(
            Self::NAME,
            text,
            words as f64 * self.seconds_per_word,
        ))
    }
}

/// The ordered provider table.
pub struct ProviderRegistry {
    providers: Vec<BoxedProvider>,
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl ProviderRegistry {
    /// Orders the available `providers` for use.
    ///
    /// Providers named in the configured preference list come first, in
    /// list order. The rest follow by descending priority, keeping their
    /// given order on ties. Unavailable providers are dropped.
    pub fn resolve(providers: Vec<BoxedProvider>, config: &SpeechConfig) -> Self {
        let mut remaining: Vec<BoxedProvider> = providers
            .into_iter()
            .filter(|provider| {
                let available = provider.is_available();
                if !available {
                    debug!(provider = provider.name(); "Speech provider unavailable");
                }
                available
            })
            .collect();

        let mut ordered = Vec::with_capacity(remaining.len());
        for name in config.preference() {
            match remaining.iter().position(|provider| provider.name() == name) {
                Some(position) => ordered.push(remaining.remove(position)),
                None => warn!(provider = name.as_str(); "Preferred speech provider not available"),
            }
        }

        remaining.sort_by_key(|provider| std::cmp::Reverse(provider.capabilities().priority));
        ordered.append(&mut remaining);

        let registry = Self { providers: ordered };
        info!(providers:? = registry.names(); "Speech providers resolved");
        registry
    }

    /// Provider names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|provider| provider.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Synthesizes `text` with the first provider that succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::NoProviders`] for an empty table and
    /// [`SpeechError::Exhausted`] with every failure when all providers fail.
    pub fn synthesize(&self, text: &str) -> Result<AudioClip, SpeechError> {
        if self.providers.is_empty() {
            return Err(SpeechError::NoProviders);
        }

        let mut failures = Vec::new();
        for provider in &self.providers {
            match provider.synthesize(text) {
                Ok(clip) => return Ok(clip),
                Err(err) => {
                    warn!(provider = provider.name(), err:%; "Speech provider failed, trying next");
                    failures.push(err);
                }
            }
        }
        Err(SpeechError::Exhausted(failures))
    }

    /// Synthesizes the text of every segment, in order.
    pub fn synthesize_segments(&self, segments: &[TimedSegment]) -> Result<Vec<AudioClip>, SpeechError> {
        segments
            .iter()
            .map(|segment| self.synthesize(segment.text()))
            .collect()
    }
}
