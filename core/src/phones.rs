//! Phone classification and the feature-based distance function.
//!
//! IPA symbols are grouped into articulatory feature classes (voiceless
//! stops, high front vowels, ...). Substituting two phones from the same
//! class is cheap; substituting phones from a related class pair (voiced vs.
//! voiceless, high vs. mid) costs more; anything else costs as much as an
//! insertion or deletion.

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Articulatory feature classes recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneClass {
    HighFrontVowels,
    MidFrontVowels,
    LowFrontVowels,
    HighBackVowels,
    MidBackVowels,
    LowBackVowels,
    CentralVowels,
    Diphthongs,
    VoicelessStops,
    VoicedStops,
    VoicelessFricatives,
    VoicedFricatives,
    Affricates,
    Nasals,
    Liquids,
    Glides,
}

use PhoneClass::*;

/// Feature class membership table. Fixed at build time; the reverse index
/// below is derived from it once and never mutated.
pub const PHONE_CLASSES: &[(PhoneClass, &[&str])] = &[
    (HighFrontVowels, &["i", "ɪ", "y", "ʏ"]),
    (MidFrontVowels, &["e", "ɛ", "ø", "œ"]),
    (LowFrontVowels, &["æ", "a"]),
    (HighBackVowels, &["u", "ʊ", "ɯ", "ɤ"]),
    (MidBackVowels, &["o", "ɔ", "ʌ"]),
    (LowBackVowels, &["ɑ", "ɒ"]),
    (CentralVowels, &["ə", "ɜ", "ɝ", "ɐ"]),
    (Diphthongs, &["aɪ", "aʊ", "ɔɪ", "eɪ", "oʊ", "ɛɪ"]),
    (VoicelessStops, &["p", "t", "k", "ʔ"]),
    (VoicedStops, &["b", "d", "ɡ", "g"]),
    (VoicelessFricatives, &["f", "θ", "s", "ʃ", "h", "x", "ç"]),
    (VoicedFricatives, &["v", "ð", "z", "ʒ", "ɣ"]),
    (Affricates, &["tʃ", "dʒ", "ts", "dz"]),
    (Nasals, &["m", "n", "ŋ", "ɲ"]),
    (Liquids, &["l", "ɹ", "r", "ɾ", "ʀ", "ɭ"]),
    (Glides, &["w", "j", "ɥ"]),
];

/// Class pairs that are systematically related (checked order-independently).
/// Only consulted when two phones share no class at all.
pub const RELATED_CLASSES: &[(PhoneClass, PhoneClass)] = &[
    (VoicelessStops, VoicedStops),
    (VoicelessFricatives, VoicedFricatives),
    (HighFrontVowels, MidFrontVowels),
    (HighBackVowels, MidBackVowels),
    (MidFrontVowels, LowFrontVowels),
    (MidBackVowels, LowBackVowels),
    (Nasals, Liquids),
    (Liquids, Glides),
];

/// Reverse index: phone symbol -> classes it belongs to.
///
/// Built once on first use from `PHONE_CLASSES` and read-only afterwards,
/// so concurrent queries need no coordination.
static PHONE_INDEX: Lazy<AHashMap<&'static str, Vec<PhoneClass>>> = Lazy::new(|| {
    let mut index: AHashMap<&'static str, Vec<PhoneClass>> = AHashMap::new();
    for (class, phones) in PHONE_CLASSES {
        for phone in *phones {
            index.entry(phone).or_default().push(*class);
        }
    }
    index
});

/// Classes a phone belongs to. Unknown symbols belong to no class.
pub fn classes_of(phone: &str) -> &'static [PhoneClass] {
    PHONE_INDEX.get(phone).map(Vec::as_slice).unwrap_or(&[])
}

/// Substitution cost between two phone symbols.
///
/// Total over arbitrary symbols, including ones outside the IPA vocabulary:
/// - `0.0` for an exact symbol match
/// - `0.3` when the phones share a feature class
/// - `0.6` when their classes form a related pair
/// - `1.0` otherwise
pub fn phonetic_distance(p1: &str, p2: &str) -> f32 {
    if p1 == p2 {
        return 0.0;
    }

    let c1 = classes_of(p1);
    let c2 = classes_of(p2);

    if c1.iter().any(|c| c2.contains(c)) {
        return 0.3;
    }

    for (a, b) in RELATED_CLASSES {
        if (c1.contains(a) && c2.contains(b)) || (c1.contains(b) && c2.contains(a)) {
            return 0.6;
        }
    }

    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_phones_cost_zero() {
        assert_eq!(phonetic_distance("p", "p"), 0.0);
        assert_eq!(phonetic_distance("a", "a"), 0.0);
        // unknown symbols still match themselves
        assert_eq!(phonetic_distance("7", "7"), 0.0);
    }

    #[test]
    fn same_class_costs_point_three() {
        // both voiceless stops
        assert_eq!(phonetic_distance("p", "t"), 0.3);
        // both high front vowels
        assert_eq!(phonetic_distance("i", "ɪ"), 0.3);
        // both affricates
        assert_eq!(phonetic_distance("tʃ", "dʒ"), 0.3);
    }

    #[test]
    fn related_classes_cost_point_six() {
        // voiceless vs voiced stop
        assert_eq!(phonetic_distance("p", "b"), 0.6);
        // voiceless vs voiced fricative
        assert_eq!(phonetic_distance("f", "v"), 0.6);
        // nasal vs liquid, liquid vs glide
        assert_eq!(phonetic_distance("n", "l"), 0.6);
        assert_eq!(phonetic_distance("l", "w"), 0.6);
        // high vs mid front vowel
        assert_eq!(phonetic_distance("i", "e"), 0.6);
    }

    #[test]
    fn unrelated_phones_cost_one() {
        assert_eq!(phonetic_distance("p", "a"), 1.0);
        // nasal vs glide is not a listed pair (only chained via liquids)
        assert_eq!(phonetic_distance("n", "w"), 1.0);
        // unknown symbol vs anything known
        assert_eq!(phonetic_distance("q", "p"), 1.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let symbols = ["p", "b", "t", "i", "e", "æ", "aɪ", "tʃ", "n", "l", "w", "x", "q"];
        for a in &symbols {
            for b in &symbols {
                assert_eq!(phonetic_distance(a, b), phonetic_distance(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn distance_range_is_closed() {
        let symbols = ["p", "b", "t", "k", "i", "ɪ", "e", "æ", "ɑ", "ə", "aɪ", "tʃ", "n", "l", "w", "h", "z", "q", "7"];
        for a in &symbols {
            for b in &symbols {
                let d = phonetic_distance(a, b);
                assert!(
                    d == 0.0 || d == 0.3 || d == 0.6 || d == 1.0,
                    "unexpected cost {d} for {a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn every_class_member_is_indexed() {
        for (class, phones) in PHONE_CLASSES {
            for phone in *phones {
                assert!(classes_of(phone).contains(class), "{phone} missing from index");
            }
        }
    }
}
