//! Phonetically weighted edit distance and the percentage similarity score.
//!
//! The alignment is a standard Levenshtein dynamic program over phone
//! sequences, except that substitution cost comes from the feature-based
//! distance function instead of a flat 1. Insertions and deletions keep unit
//! cost, so a same-class substitution (0.3) is always preferred over an
//! insert/delete pair.

use crate::phones::phonetic_distance;
use crate::segment::segment_ipa;

/// Weighted edit distance between two phone sequences.
///
/// Always `>= 0`; exactly `0` only for identical sequences. An empty side
/// costs the full length of the other (pure insertion/deletion).
pub fn phonetic_levenshtein(seq1: &[String], seq2: &[String]) -> f32 {
    let len1 = seq1.len();
    let len2 = seq2.len();

    let mut table = vec![vec![0.0f32; len2 + 1]; len1 + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i as f32;
    }
    for j in 0..=len2 {
        table[0][j] = j as f32;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = phonetic_distance(&seq1[i - 1], &seq2[j - 1]);
            table[i][j] = (table[i - 1][j] + 1.0)
                .min(table[i][j - 1] + 1.0)
                .min(table[i - 1][j - 1] + cost);
        }
    }

    table[len1][len2]
}

/// Percentage similarity (0..=100) between two raw IPA strings.
///
/// Both strings are segmented first; the edit distance is then scaled by the
/// longer sequence length and rounded to the nearest integer. Two strings
/// that segment to nothing are vacuously identical (100).
pub fn similarity(ipa1: &str, ipa2: &str) -> u8 {
    let phones1 = segment_ipa(ipa1);
    let phones2 = segment_ipa(ipa2);

    let max_len = phones1.len().max(phones2.len());
    if max_len == 0 {
        return 100;
    }

    let distance = phonetic_levenshtein(&phones1, &phones2);
    let score = ((max_len as f32 - distance) / max_len as f32 * 100.0).max(0.0);
    score.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identical_sequences_have_zero_distance() {
        assert_eq!(phonetic_levenshtein(&phones(&["p", "a"]), &phones(&["p", "a"])), 0.0);
        assert_eq!(phonetic_levenshtein(&[], &[]), 0.0);
    }

    #[test]
    fn substitution_uses_fractional_cost() {
        assert_eq!(phonetic_levenshtein(&phones(&["p"]), &phones(&["b"])), 0.6);
        assert_eq!(phonetic_levenshtein(&phones(&["p", "a"]), &phones(&["b", "a"])), 0.6);
        assert_eq!(phonetic_levenshtein(&phones(&["p"]), &phones(&["t"])), 0.3);
    }

    #[test]
    fn insertions_and_deletions_cost_one() {
        assert_eq!(phonetic_levenshtein(&phones(&["p"]), &phones(&["p", "a"])), 1.0);
        assert_eq!(phonetic_levenshtein(&phones(&["p", "a"]), &phones(&["p"])), 1.0);
    }

    #[test]
    fn empty_side_costs_other_sides_length() {
        assert_eq!(phonetic_levenshtein(&[], &phones(&["p"])), 1.0);
        assert_eq!(phonetic_levenshtein(&phones(&["p", "a", "t"]), &[]), 3.0);
    }

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(similarity("pa", "pa"), 100);
        assert_eq!(similarity("/ˈhɛloʊ/", "/ˈhɛloʊ/"), 100);
        // stress marks and delimiters do not affect the score
        assert_eq!(similarity("/ˈhɛloʊ/", "hɛloʊ"), 100);
    }

    #[test]
    fn empty_strings_score_100() {
        assert_eq!(similarity("", ""), 100);
        assert_eq!(similarity("/ˈ/", ""), 100);
    }

    #[test]
    fn similarity_is_symmetric() {
        let samples = ["pa", "ba", "pat", "ki", "/ˈhɛloʊ/", "tʃaɪ", ""];
        for a in &samples {
            for b in &samples {
                assert_eq!(similarity(a, b), similarity(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn related_substitution_scores_high() {
        // p/b at 0.6 over 2 phones -> (2 - 0.6) / 2 = 70
        assert_eq!(similarity("pa", "ba"), 70);
    }

    #[test]
    fn different_lengths_score_between_bounds() {
        let s = similarity("pa", "pat");
        assert!(s < 100);
        assert!(s > 0);
    }

    #[test]
    fn very_different_sounds_score_low() {
        assert!(similarity("pa", "ki") < similarity("pa", "ba"));
    }
}
