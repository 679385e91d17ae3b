//! Pronunciation-lexicon transcriber.
//!
//! Reads a plain-text lexicon with one `word<TAB>ipa` entry per line. Blank
//! lines and lines starting with `#` are ignored; the first entry for a word
//! wins. Lookups are case-insensitive and unknown words transcribe to an empty
//! string.

use crate::error::{Result, SylcueError};
use crate::transcribe::transcriber::Transcriber;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Transcriber backed by an in-memory pronunciation lexicon.
#[derive(Debug, Clone)]
pub struct LexiconTranscriber {
    name: String,
    entries: HashMap<String, String>,
}

impl LexiconTranscriber {
    /// Load a lexicon file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SylcueError::ConfigFileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "lexicon".to_string());
        Self::parse(&name, &contents)
    }

    /// Parse lexicon text.
    pub fn parse(name: &str, contents: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((word, ipa)) = line.split_once('\t') else {
                return Err(SylcueError::ConfigParse {
                    message: format!("{name}:{}: expected `word<TAB>ipa`", idx + 1),
                });
            };
            entries
                .entry(word.trim().to_lowercase())
                .or_insert_with(|| ipa.trim().to_string());
        }

        Ok(Self {
            name: name.to_string(),
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Transcriber for LexiconTranscriber {
    fn transcribe(&self, word: &str) -> Result<String> {
        Ok(self
            .entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ready(&self) -> bool {
        !self.is_empty()
    }
}
