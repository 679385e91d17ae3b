//! Language profiles: the symbol inventories that drive classification.

use crate::error::{Result, SylcueError};
use std::collections::HashSet;

/// Immutable per-language configuration.
///
/// Holds the orthographic characters kept before transcription and the
/// vowel/consonant inventories of the transcription alphabet. Symbols may be
/// longer than one `char` (affricates with a tie bar, nasal vowels with a
/// combining tilde); those are atomic and never split during classification.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    name: String,
    allowed: HashSet<char>,
    vowels: HashSet<String>,
    consonants: HashSet<String>,
    /// Multi-char symbols, longest first.
    multi_char: Vec<String>,
    rewrites: Vec<(String, String)>,
}

impl LanguageProfile {
    /// Builds and validates a profile.
    ///
    /// Fails when a symbol is both a vowel and a consonant, when a symbol is
    /// empty, or when there are no vowels at all.
    pub fn new(
        name: &str,
        allowed: &str,
        vowels: &[&str],
        consonants: &[&str],
        rewrites: &[(&str, &str)],
    ) -> Result<Self> {
        if vowels.is_empty() {
            return Err(SylcueError::ProfileInvalid {
                language: name.to_string(),
                message: "vowel inventory is empty".to_string(),
            });
        }
        if let Some(empty) = vowels.iter().chain(consonants).find(|s| s.is_empty()) {
            return Err(SylcueError::ProfileInvalid {
                language: name.to_string(),
                message: format!("empty symbol in inventory ({empty:?})"),
            });
        }

        let consonant_set: HashSet<String> = consonants.iter().map(|s| s.to_string()).collect();
        if let Some(shared) = vowels.iter().find(|v| consonant_set.contains(**v)) {
            return Err(SylcueError::ProfileOverlap {
                language: name.to_string(),
                symbol: shared.to_string(),
            });
        }
        let vowel_set: HashSet<String> = vowels.iter().map(|s| s.to_string()).collect();

        let mut multi_char: Vec<String> = vowel_set
            .iter()
            .chain(consonant_set.iter())
            .filter(|s| s.chars().count() > 1)
            .cloned()
            .collect();
        // Longest first; ties broken lexically so the scan order never depends
        // on hash iteration order.
        multi_char.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        Ok(Self {
            name: name.to_string(),
            allowed: allowed.chars().collect(),
            vowels: vowel_set,
            consonants: consonant_set,
            multi_char,
            rewrites: rewrites
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an orthographic character survives line cleaning.
    pub fn is_allowed(&self, c: char) -> bool {
        self.allowed.contains(&c)
    }

    pub fn is_vowel(&self, symbol: &str) -> bool {
        self.vowels.contains(symbol)
    }

    pub fn is_consonant(&self, symbol: &str) -> bool {
        self.consonants.contains(symbol)
    }

    /// Multi-character atomic symbols, longest first.
    pub fn multi_char_symbols(&self) -> &[String] {
        &self.multi_char
    }

    /// Longest multi-character symbol that `text` starts with.
    pub fn longest_symbol_at<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.multi_char
            .iter()
            .find(|sym| text.starts_with(sym.as_str()))
            .map(String::as_str)
    }

    /// Applies the profile's transcription rewrites in order.
    pub fn normalize_transcription(&self, ipa: &str) -> String {
        let mut normalized = ipa.to_string();
        for (from, to) in &self.rewrites {
            if normalized.contains(from.as_str()) {
                normalized = normalized.replace(from.as_str(), to);
            }
        }
        normalized
    }
}
