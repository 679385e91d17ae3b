//! Phonetic symbol handling: language profiles, classification, segmentation.

pub mod classifier;
pub mod languages;
pub mod profile;
pub mod segmenter;

pub use classifier::{PhoneClass, PhoneticToken, classify};
pub use languages::{LanguageInfo, get_language, list_languages, load_profile};
pub use profile::LanguageProfile;
pub use segmenter::{Syllable, SyllableSpan, segment, segment_parts, syllabify_word, syllable_spans};
