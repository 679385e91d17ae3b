//! Line syllabifier: text line → syllabic cues (and optionally an event).

use crate::defaults::SEPARATOR;
use crate::error::Result;
use crate::phonetics::profile::LanguageProfile;
use crate::phonetics::segmenter::syllabify_word;
use crate::syllabify::event::EventRecord;
use crate::transcribe::transcriber::Transcriber;
use std::sync::Arc;

/// Replaces characters the language does not allow with spaces.
///
/// Whitespace is kept, so a disallowed character inside a word splits it
/// ("don't" becomes "don t").
pub fn clean_line(line: &str, profile: &LanguageProfile) -> String {
    line.chars()
        .map(|c| {
            if c.is_whitespace() || profile.is_allowed(c) {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Splits a cleaned line into lowercase words.
pub fn tokenize(cleaned: &str) -> Vec<String> {
    cleaned.split_whitespace().map(str::to_lowercase).collect()
}

fn join(parts: &[String]) -> String {
    parts.join(SEPARATOR.to_string().as_str())
}

/// Result of syllabifying one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineSyllabification {
    /// Cleaned, lowercase words in line order.
    pub words: Vec<String>,
    /// One cue string per word that produced syllables.
    pub word_cues: Vec<String>,
    /// Words dropped from the cues (empty or failed transcription).
    pub skipped_words: usize,
}

impl LineSyllabification {
    /// All syllables of the line joined with the separator.
    pub fn cues(&self) -> String {
        join(&self.word_cues)
    }

    /// All words of the line joined with the separator.
    pub fn outcome(&self) -> String {
        join(&self.words)
    }

    pub fn into_event(self) -> EventRecord {
        EventRecord::new(self.cues(), self.outcome())
    }
}

/// Output of [`syllabify_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutput {
    Cues(String),
    Event(EventRecord),
}

/// Syllabifies lines with a shared transcriber and profile.
///
/// Cheap to clone; each corpus worker holds its own copy.
#[derive(Clone)]
pub struct LineSyllabifier {
    transcriber: Arc<dyn Transcriber>,
    profile: Arc<LanguageProfile>,
    add_boundaries: bool,
}

impl LineSyllabifier {
    pub fn new(transcriber: Arc<dyn Transcriber>, profile: Arc<LanguageProfile>) -> Self {
        Self {
            transcriber,
            profile,
            add_boundaries: crate::defaults::ADD_BOUNDARIES,
        }
    }

    /// Wrap each word's outer syllables with the boundary marker.
    pub fn with_boundaries(mut self, add_boundaries: bool) -> Self {
        self.add_boundaries = add_boundaries;
        self
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub fn transcriber_name(&self) -> &str {
        self.transcriber.name()
    }

    /// Syllabifies every word of `line`.
    ///
    /// A word whose transcription is empty or fails with a word-level error
    /// is left out of the cues but kept in the words. Any other transcriber
    /// error fails the line.
    pub fn syllabify_line(&self, line: &str) -> Result<LineSyllabification> {
        let words = tokenize(&clean_line(line, &self.profile));
        let mut result = LineSyllabification {
            word_cues: Vec::with_capacity(words.len()),
            ..LineSyllabification::default()
        };

        for word in words {
            match self.transcriber.transcribe(&word) {
                Ok(ipa) => {
                    let ipa = self.profile.normalize_transcription(ipa.trim());
                    let syllables = syllabify_word(&ipa, &self.profile, self.add_boundaries);
                    if syllables.is_empty() {
                        tracing::debug!(%word, "empty transcription, word left out of cues");
                        result.skipped_words += 1;
                    } else {
                        result.word_cues.push(join(&syllables));
                    }
                }
                Err(e) if e.is_word_level() => {
                    tracing::debug!(%word, "transcription failed, word left out of cues: {e}");
                    result.skipped_words += 1;
                }
                Err(e) => return Err(e),
            }
            result.words.push(word);
        }

        Ok(result)
    }

    /// Syllabifies a line straight into an event record.
    pub fn event(&self, line: &str) -> Result<EventRecord> {
        Ok(self.syllabify_line(line)?.into_event())
    }
}

/// Syllabifies one line with the given collaborators.
///
/// Returns the joined cue string, or the (cues, outcome) event when
/// `as_event` is set.
pub fn syllabify_line(
    line: &str,
    transcriber: Arc<dyn Transcriber>,
    profile: Arc<LanguageProfile>,
    add_boundaries: bool,
    as_event: bool,
) -> Result<LineOutput> {
    let result = LineSyllabifier::new(transcriber, profile)
        .with_boundaries(add_boundaries)
        .syllabify_line(line)?;
    if as_event {
        Ok(LineOutput::Event(result.into_event()))
    } else {
        Ok(LineOutput::Cues(result.cues()))
    }
}
