//! IPA string segmentation.
//!
//! Turns a raw transcription like `/ˈhɛloʊ/` into an ordered phone sequence
//! `["h", "ɛ", "l", "oʊ"]`. Delimiters, stress and length marks are stripped
//! first; tokenization then walks left to right, always trying the fixed
//! two-character phone set before consuming a single character.

use phf::phf_set;

/// Two-character phones (diphthongs and affricates) the tokenizer must keep
/// intact. Checked at every position before the single-character fallback.
static MULTI_CHAR_PHONES: phf::Set<&'static str> = phf_set! {
    "aɪ", "aʊ", "ɔɪ", "eɪ", "oʊ", "tʃ", "dʒ", "ts", "dz", "ɛɪ",
};

/// Characters removed before tokenization: transcription delimiters, primary
/// and secondary stress, length marks and syllable dots.
static IPA_MARKS: phf::Set<char> = phf_set! {
    '/', '[', ']', 'ˈ', 'ˌ', 'ː', 'ˑ', '.',
};

/// Segment a raw IPA string into an ordered sequence of phone symbols.
///
/// The result may be empty (blank input, or input consisting only of marks).
/// Symbols outside the known vocabulary are passed through as one-character
/// phones; the distance function treats them as maximally distant.
pub fn segment_ipa(raw: &str) -> Vec<String> {
    let cleaned = raw
        .chars()
        .filter(|c| !IPA_MARKS.contains(c))
        .collect::<String>()
        .to_lowercase();
    let chars: Vec<char> = cleaned.trim().chars().collect();

    let mut phones = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() {
            let two: String = chars[i..i + 2].iter().collect();
            if MULTI_CHAR_PHONES.contains(two.as_str()) {
                phones.push(two);
                i += 2;
                continue;
            }
        }
        phones.push(chars[i].to_string());
        i += 1;
    }
    phones
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(raw: &str) -> Vec<String> {
        segment_ipa(raw)
    }

    #[test]
    fn strips_delimiters_and_stress_marks() {
        assert_eq!(seg("/ˈhɛloʊ/"), vec!["h", "ɛ", "l", "oʊ"]);
        assert_eq!(seg("[ˈhɛloʊ]"), vec!["h", "ɛ", "l", "oʊ"]);
        assert_eq!(seg("ˌhɛˈloʊː"), vec!["h", "ɛ", "l", "oʊ"]);
    }

    #[test]
    fn keeps_two_character_phones_intact() {
        assert_eq!(seg("aɪ"), vec!["aɪ"]);
        assert_eq!(seg("tʃ"), vec!["tʃ"]);
        assert_eq!(seg("dʒ"), vec!["dʒ"]);
    }

    #[test]
    fn two_character_match_wins_over_single_characters() {
        assert_eq!(seg("haɪ"), vec!["h", "aɪ"]);
        assert_eq!(seg("tʃaɪ"), vec!["tʃ", "aɪ"]);
    }

    #[test]
    fn lowercases_input() {
        assert_eq!(seg("HELLO"), vec!["h", "e", "l", "l", "o"]);
    }

    #[test]
    fn blank_input_yields_no_phones() {
        assert_eq!(seg(""), Vec::<String>::new());
        assert_eq!(seg("   "), Vec::<String>::new());
        assert_eq!(seg("/ˈˌ./"), Vec::<String>::new());
    }

    #[test]
    fn unknown_symbols_pass_through() {
        assert_eq!(seg("x7"), vec!["x", "7"]);
    }
}
