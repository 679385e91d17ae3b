//! Phoneme classifier: splits a transcription into vowel/consonant tokens.

use crate::phonetics::profile::LanguageProfile;

/// Class of a phonetic symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneClass {
    Vowel,
    Consonant,
}

/// One atomic phonetic symbol with its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticToken {
    pub symbol: String,
    pub class: PhoneClass,
}

impl PhoneticToken {
    pub fn is_vowel(&self) -> bool {
        self.class == PhoneClass::Vowel
    }
}

/// Tokenizes a transcribed word.
///
/// Scans left to right, taking the longest multi-character symbol of the
/// profile at each position and otherwise a single `char`. Symbols outside
/// both inventories (stress and length marks, stray diacritics) count as
/// consonants. Concatenating the returned symbols gives back `word`.
pub fn classify(word: &str, profile: &LanguageProfile) -> Vec<PhoneticToken> {
    let mut tokens = Vec::with_capacity(word.len());
    let mut rest = word;

    while let Some(c) = rest.chars().next() {
        let symbol = match profile.longest_symbol_at(rest) {
            Some(sym) => sym,
            None => &rest[..c.len_utf8()],
        };
        let class = if profile.is_vowel(symbol) {
            PhoneClass::Vowel
        } else {
            PhoneClass::Consonant
        };
        tokens.push(PhoneticToken {
            symbol: symbol.to_string(),
            class,
        });
        rest = &rest[symbol.len()..];
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetics::languages::load_profile;

    fn symbols(tokens: &[PhoneticToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.symbol.as_str()).collect()
    }

    fn classes(tokens: &[PhoneticToken]) -> String {
        tokens
            .iter()
            .map(|t| if t.is_vowel() { 'V' } else { 'C' })
            .collect()
    }

    #[test]
    fn test_empty_word() {
        let profile = load_profile("en").unwrap();
        assert!(classify("", &profile).is_empty());
    }

    #[test]
    fn test_english_diphthong_is_one_token() {
        let profile = load_profile("en").unwrap();
        let tokens = classify("neɪʃ", &profile);
        assert_eq!(symbols(&tokens), vec!["n", "eɪ", "ʃ"]);
        assert_eq!(classes(&tokens), "CVC");
    }

    #[test]
    fn test_espeak_reduced_and_long_vowels() {
        let profile = load_profile("en").unwrap();
        let tokens = classify("ɐbaʊt", &profile);
        assert_eq!(symbols(&tokens), vec!["ɐ", "b", "aʊ", "t"]);
        assert_eq!(classes(&tokens), "VCVC");

        let tokens = classify("wɔntᵻd", &profile);
        assert_eq!(classes(&tokens), "CVCCVC");

        let tokens = classify("fɜːst", &profile);
        assert_eq!(symbols(&tokens), vec!["f", "ɜː", "s", "t"]);
        assert_eq!(classes(&tokens), "CVCC");
    }

    #[test]
    fn test_tied_affricate_is_not_split() {
        let profile = load_profile("en").unwrap();
        let tokens = classify("d͡ʒʌd͡ʒ", &profile);
        assert_eq!(symbols(&tokens), vec!["d͡ʒ", "ʌ", "d͡ʒ"]);
        assert_eq!(classes(&tokens), "CVC");
    }

    #[test]
    fn test_polish_nasal_vowel_and_cluster() {
        let profile = load_profile("pl").unwrap();
        let tokens = classify("v\u{303}ɔ̃t͡sɛ", &profile);
        // The stray combining tilde after v is its own consonant token.
        assert_eq!(symbols(&tokens), vec!["v", "\u{303}", "ɔ̃", "t͡s", "ɛ"]);
        assert_eq!(classes(&tokens), "CCVCV");
    }

    #[test]
    fn test_unknown_symbols_default_to_consonant() {
        let profile = load_profile("en").unwrap();
        let tokens = classify("ˈkæː", &profile);
        assert_eq!(symbols(&tokens), vec!["ˈ", "k", "æ", "ː"]);
        assert_eq!(classes(&tokens), "CCVC");
    }

    #[test]
    fn test_classification_is_lossless() {
        let profile = load_profile("en").unwrap();
        for word in ["ɪmædʒəneɪʃən", "nɑlɪd͡ʒ", "ˌɪmˈpɔɹtənt", "xyz123"] {
            let joined: String = classify(word, &profile)
                .into_iter()
                .map(|t| t.symbol)
                .collect();
            assert_eq!(joined, word);
        }
    }
}
