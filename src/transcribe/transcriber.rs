use crate::error::{Result, SylcueError};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Trait for orthography-to-IPA transcription of single words.
///
/// This trait allows swapping implementations (external program, lexicon, mock).
pub trait Transcriber: Send + Sync {
    /// Transcribe one word to IPA.
    ///
    /// # Arguments
    /// * `word` - Lowercase word, already stripped of disallowed characters
    ///
    /// # Returns
    /// The transcription, possibly empty when the word has no pronunciation.
    /// `SylcueError::Transcription` drops only this word;
    /// any other error fails the whole line.
    fn transcribe(&self, word: &str) -> Result<String>;

    /// Get the name of the backend
    fn name(&self) -> &str;

    /// Check if the transcriber is ready
    fn is_ready(&self) -> bool;
}

/// Implement Transcriber for Arc<T> to allow sharing across workers.
impl<T: Transcriber + ?Sized> Transcriber for Arc<T> {
    fn transcribe(&self, word: &str) -> Result<String> {
        (**self).transcribe(word)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// Mock transcriber for testing
///
/// Known words return their configured transcription; unknown words are
/// echoed back unchanged.
#[derive(Debug, Clone)]
pub struct MockTranscriber {
    name: String,
    entries: HashMap<String, String>,
    failing: HashSet<String>,
    fatal: HashSet<String>,
    unavailable: bool,
}

impl MockTranscriber {
    /// Create a new mock transcriber with default settings
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: HashMap::new(),
            failing: HashSet::new(),
            fatal: HashSet::new(),
            unavailable: false,
        }
    }

    /// Configure the transcription returned for `word`
    pub fn with_entry(mut self, word: &str, ipa: &str) -> Self {
        self.entries.insert(word.to_string(), ipa.to_string());
        self
    }

    /// Configure several entries at once
    pub fn with_entries(mut self, entries: &[(&str, &str)]) -> Self {
        for (word, ipa) in entries {
            self.entries.insert(word.to_string(), ipa.to_string());
        }
        self
    }

    /// Configure a recoverable failure for `word`
    pub fn with_failure_for(mut self, word: &str) -> Self {
        self.failing.insert(word.to_string());
        self
    }

    /// Configure a fatal failure for `word`
    pub fn with_fatal_for(mut self, word: &str) -> Self {
        self.fatal.insert(word.to_string());
        self
    }

    /// Configure the mock to fail fatally on every word
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }
}

impl Transcriber for MockTranscriber {
    fn transcribe(&self, word: &str) -> Result<String> {
        if self.unavailable || self.fatal.contains(word) {
            return Err(SylcueError::TranscriberUnavailable {
                message: format!("mock backend down while transcribing '{word}'"),
            });
        }
        if self.failing.contains(word) {
            return Err(SylcueError::Transcription {
                word: word.to_string(),
                message: "mock transcription failure".to_string(),
            });
        }
        Ok(self
            .entries
            .get(word)
            .cloned()
            .unwrap_or_else(|| word.to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ready(&self) -> bool {
        !self.unavailable
    }
}
