//! Property-based tests using proptest

use proptest::prelude::*;
use sylcue::phonetics::{
    PhoneClass, PhoneticToken, classify, load_profile, segment, segment_parts,
};

const VOWELS: &[&str] = &["a", "æ", "ə", "ɪ", "u", "eɪ", "aʊ", "ɔ"];
const CONSONANTS: &[&str] = &["p", "t", "k", "m", "n", "s", "ʃ", "ɹ", "l", "d͡ʒ", "t͡ʃ", "ŋ"];

fn token(symbol: &str, class: PhoneClass) -> PhoneticToken {
    PhoneticToken {
        symbol: symbol.to_string(),
        class,
    }
}

fn consonant() -> impl Strategy<Value = PhoneticToken> {
    prop::sample::select(CONSONANTS).prop_map(|s| token(s, PhoneClass::Consonant))
}

fn vowel() -> impl Strategy<Value = PhoneticToken> {
    prop::sample::select(VOWELS).prop_map(|s| token(s, PhoneClass::Vowel))
}

fn any_token() -> impl Strategy<Value = PhoneticToken> {
    prop_oneof![consonant(), vowel()]
}

fn text(tokens: &[PhoneticToken]) -> String {
    tokens.iter().map(|t| t.symbol.as_str()).collect()
}

/// A word with exactly `vowels` vowels and random consonant runs around them.
fn word_with_vowels(vowels: std::ops::Range<usize>) -> impl Strategy<Value = Vec<PhoneticToken>> {
    (
        prop::collection::vec(consonant(), 0..4),
        prop::collection::vec((vowel(), prop::collection::vec(consonant(), 0..4)), vowels),
    )
        .prop_map(|(onset, rest)| {
            let mut tokens = onset;
            for (nucleus, run) in rest {
                tokens.push(nucleus);
                tokens.extend(run);
            }
            tokens
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_single_vowel_word_is_one_fragment(
        tokens in word_with_vowels(1..2),
        boundaries in any::<bool>()
    ) {
        let fragments = segment(&tokens, boundaries);
        let expected = if boundaries {
            format!("#{}#", text(&tokens))
        } else {
            text(&tokens)
        };
        prop_assert_eq!(fragments, vec![expected]);
    }

    #[test]
    fn test_fragment_count_equals_vowel_count(tokens in word_with_vowels(2..7)) {
        let vowels = tokens.iter().filter(|t| t.is_vowel()).count();
        prop_assert_eq!(segment(&tokens, true).len(), vowels);
        prop_assert_eq!(segment(&tokens, false).len(), vowels);
    }

    #[test]
    fn test_inter_nucleus_run_is_shared(tokens in word_with_vowels(2..7)) {
        let parts = segment_parts(&tokens);
        for pair in parts.windows(2) {
            prop_assert_eq!(&pair[0].coda, &pair[1].onset);
        }
    }

    #[test]
    fn test_segmentation_is_idempotent(
        tokens in prop::collection::vec(any_token(), 0..20),
        boundaries in any::<bool>()
    ) {
        prop_assert_eq!(segment(&tokens, boundaries), segment(&tokens, boundaries));
    }

    #[test]
    fn test_reconstruction_from_parts(tokens in prop::collection::vec(any_token(), 0..20)) {
        let parts = segment_parts(&tokens);
        let mut rebuilt = String::new();
        if let Some(first) = parts.first() {
            rebuilt.push_str(&first.onset);
        }
        for part in &parts {
            rebuilt.push_str(&part.nucleus);
            rebuilt.push_str(&part.coda);
        }
        prop_assert_eq!(rebuilt, text(&tokens));
    }

    #[test]
    fn test_boundary_markers_only_at_word_edges(tokens in word_with_vowels(1..7)) {
        let fragments = segment(&tokens, true);
        let joined = fragments.concat();
        prop_assert!(joined.starts_with('#'));
        prop_assert!(joined.ends_with('#'));
        prop_assert_eq!(joined.matches('#').count(), 2);
    }

    #[test]
    fn test_classification_is_lossless(symbols in prop::collection::vec(
        prop::sample::select(
            VOWELS.iter().chain(CONSONANTS).copied().chain(["ˈ", "ː", "x"]).collect::<Vec<_>>()
        ),
        0..15
    )) {
        let profile = load_profile("en").unwrap();
        let word = symbols.concat();
        let tokens = classify(&word, &profile);
        prop_assert_eq!(text(&tokens), word);
    }
}
