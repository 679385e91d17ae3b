//! Syllable segmenter producing overlapping syllables.
//!
//! Every vowel token is a nucleus. The consonant run between two nuclei is
//! copied whole into both neighbours: it is the coda of the left syllable and
//! the onset of the right one. The run before the first nucleus is only an
//! onset, the run after the last nucleus only a coda.
//!
//! ```text
//! ɪ m æ d ʒ ə n eɪ ʃ ə n
//! [ɪ m]
//!   [m æ d ʒ]
//!       [d ʒ ə n]
//!             [n eɪ ʃ]
//!                   [ʃ ə n]
//! ```

use crate::defaults::BOUNDARY_MARKER;
use crate::phonetics::classifier::{PhoneticToken, classify};
use crate::phonetics::profile::LanguageProfile;
use std::ops::Range;

/// Token index ranges making up one syllable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableSpan {
    pub onset: Range<usize>,
    /// `None` only for a word without any vowel.
    pub nucleus: Option<usize>,
    pub coda: Range<usize>,
}

/// One syllable as strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Syllable {
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
}

impl Syllable {
    /// `onset + nucleus + coda`.
    pub fn text(&self) -> String {
        let mut text =
            String::with_capacity(self.onset.len() + self.nucleus.len() + self.coda.len());
        text.push_str(&self.onset);
        text.push_str(&self.nucleus);
        text.push_str(&self.coda);
        text
    }
}

/// Computes syllable spans from nucleus positions.
///
/// A word without vowels becomes a single span covering every token; an
/// empty token sequence gives no spans.
pub fn syllable_spans(tokens: &[PhoneticToken]) -> Vec<SyllableSpan> {
    let len = tokens.len();
    if len == 0 {
        return Vec::new();
    }

    let nuclei: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_vowel())
        .map(|(i, _)| i)
        .collect();

    if nuclei.is_empty() {
        return vec![SyllableSpan {
            onset: 0..len,
            nucleus: None,
            coda: len..len,
        }];
    }

    nuclei
        .iter()
        .enumerate()
        .map(|(i, &nucleus)| {
            let onset_start = if i == 0 { 0 } else { nuclei[i - 1] + 1 };
            let coda_end = nuclei.get(i + 1).copied().unwrap_or(len);
            SyllableSpan {
                onset: onset_start..nucleus,
                nucleus: Some(nucleus),
                coda: nucleus + 1..coda_end,
            }
        })
        .collect()
}

fn join(tokens: &[PhoneticToken]) -> String {
    tokens.iter().map(|t| t.symbol.as_str()).collect()
}

/// Segments tokens into syllables with separate onset/nucleus/coda.
pub fn segment_parts(tokens: &[PhoneticToken]) -> Vec<Syllable> {
    syllable_spans(tokens)
        .into_iter()
        .map(|span| Syllable {
            onset: join(&tokens[span.onset]),
            nucleus: span
                .nucleus
                .map(|n| tokens[n].symbol.clone())
                .unwrap_or_default(),
            coda: join(&tokens[span.coda]),
        })
        .collect()
}

/// Segments tokens into syllable strings.
///
/// With `add_boundaries`, the first syllable is prefixed and the last one
/// suffixed with the boundary marker (a single syllable gets both).
pub fn segment(tokens: &[PhoneticToken], add_boundaries: bool) -> Vec<String> {
    let mut syllables: Vec<String> = segment_parts(tokens).iter().map(Syllable::text).collect();

    if add_boundaries && !syllables.is_empty() {
        syllables[0].insert(0, BOUNDARY_MARKER);
        if let Some(last) = syllables.last_mut() {
            last.push(BOUNDARY_MARKER);
        }
    }

    syllables
}

/// Classifies and segments one transcribed word.
pub fn syllabify_word(ipa: &str, profile: &LanguageProfile, add_boundaries: bool) -> Vec<String> {
    segment(&classify(ipa, profile), add_boundaries)
}
