//! Catalog of built-in language inventories.
//!
//! Static metadata only; profiles are built (and validated) on demand.

use crate::error::{Result, SylcueError};
use crate::phonetics::profile::LanguageProfile;

/// Static inventory for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageInfo {
    /// Language code (e.g., "en", "pl").
    pub code: &'static str,
    /// Human-readable display name.
    pub display_name: &'static str,
    /// Default espeak-ng voice for the command transcriber.
    pub voice: &'static str,
    /// Orthographic characters kept before transcription (both cases).
    pub allowed: &'static str,
    /// Vowel symbols, including diphthongs and nasal vowels.
    pub vowels: &'static [&'static str],
    /// Consonant symbols, including tied affricates and palatalized stops.
    pub consonants: &'static [&'static str],
    /// Substitutions applied to raw transcriptions, in order.
    pub rewrites: &'static [(&'static str, &'static str)],
}

impl LanguageInfo {
    /// Builds the validated profile for this language.
    pub fn profile(&self) -> Result<LanguageProfile> {
        LanguageProfile::new(
            self.code,
            self.allowed,
            self.vowels,
            self.consonants,
            self.rewrites,
        )
    }
}

/// Built-in languages, ordered by code.
pub const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo {
        code: "en",
        display_name: "English",
        voice: "en-us",
        allowed: "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
        vowels: &[
            "æ", "ɑ", "ə", "ɛ", "i", "ɪ", "ɔ", "u", "ʊ", "ʌ", "a", "e", "o", "ɒ", "ɚ", "ɜ", "ɝ",
            // reduced vowels written by espeak-ng
            "ɐ", "ᵻ",
            // long vowels
            "iː", "uː", "ɑː", "ɔː", "ɜː",
            // diphthongs
            "aj", "aw", "ej", "oj", "ow", "eɪ", "aɪ", "aʊ", "ɔɪ", "oʊ", "əʊ", "ɪə", "eə", "ʊə",
        ],
        consonants: &[
            "θ", "w", "l", "m", "v", "h", "p", "ɡ", "g", "ŋ", "s", "z", "b", "k", "ʃ", "ɹ", "r",
            "d", "n", "ʒ", "j", "t", "ð", "f", "d͡ʒ", "t͡ʃ",
        ],
        // Syllabic r comes out of the transcriber as a single consonant; spell
        // it as schwa + r so it carries a nucleus.
        rewrites: &[("ɹ̩", "əɹ")],
    },
    LanguageInfo {
        code: "pl",
        display_name: "Polish",
        voice: "pl",
        allowed: "aąbcćdeęfghijklłmnńoóprsśtuwyzźżqvxAĄBCĆDEĘFGHIJKLŁMNŃOÓPRSŚTUWYZŹŻQVX",
        vowels: &["a", "ɛ", "i", "ɨ", "ɔ", "u", "ɛ̃", "ɔ̃"],
        consonants: &[
            "ɕ", "ʑ", "ʐ", "ɣ", "ɲ", "ʂ", "x", "w", "l", "m", "v", "p", "ɡ", "ŋ", "s", "z", "b",
            "k", "d", "r", "n", "j", "t", "f", "d͡z", "d͡ʑ", "d͡ʐ", "t͡ɕ", "t͡s", "t͡ʂ", "ɡʲ", "kʲ",
        ],
        rewrites: &[],
    },
];

/// Returns all built-in languages.
pub fn list_languages() -> &'static [LanguageInfo] {
    LANGUAGES
}

/// Looks up a language by code (case-insensitive).
pub fn get_language(code: &str) -> Option<&'static LanguageInfo> {
    LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

/// Builds the profile for a language code.
pub fn load_profile(code: &str) -> Result<LanguageProfile> {
    get_language(code)
        .ok_or_else(|| SylcueError::UnknownLanguage {
            code: code.to_string(),
        })?
        .profile()
}
