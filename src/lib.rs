//! sylcue - overlapping syllabic cues from IPA transcriptions
//!
//! Turns text into syllable fragments whose shared consonant clusters appear
//! in both neighbouring fragments, and runs whole corpora through a parallel,
//! order-preserving pipeline into cue/outcome event files.

// Enforce error handling discipline
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod phonetics;
pub mod pipeline;
pub mod syllabify;
pub mod transcribe;

// Core traits (transcribe → syllabify → sink)
pub use pipeline::sink::{CollectorSink, EventSink, GzipEventSink};
pub use transcribe::transcriber::Transcriber;

// Phonetics
pub use phonetics::{LanguageProfile, PhoneClass, PhoneticToken, classify, segment, syllabify_word};

// Line syllabifier
pub use syllabify::{EventRecord, LineOutput, LineSyllabifier, syllabify_line};

// Pipeline
pub use pipeline::orchestrator::{CorpusPipeline, PipelineConfig, syllabify_corpus};
pub use pipeline::types::{CorpusEvent, CorpusReport};

// Error handling
pub use error::{Result, SylcueError};

// Config
pub use config::Config;

// Station framework (for advanced users)
pub use pipeline::error::{ErrorReporter, StationError};
pub use pipeline::station::Station;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_string_starts_with_cargo_version() {
        let ver = version_string();
        assert!(
            ver.starts_with(env!("CARGO_PKG_VERSION")),
            "version_string should start with CARGO_PKG_VERSION, got: {}",
            ver
        );
    }

    #[test]
    fn version_string_has_hash_suffix_only_with_git() {
        let ver = version_string();
        if option_env!("GIT_HASH").is_some_and(|h| !h.is_empty()) {
            let hash_part = ver.split('+').nth(1).unwrap_or("");
            assert_eq!(hash_part.len(), 7, "Git hash should be 7 chars, got: {}", ver);
        } else {
            assert_eq!(ver, env!("CARGO_PKG_VERSION"));
        }
    }
}
