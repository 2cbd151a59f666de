//! Threshold decision rule over a model score vector.

use serde::Serialize;

/// Default probability cutoff for tag membership.
pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Tags assigned to one image, in vocabulary order.
#[derive(Debug, Serialize)]
pub struct Tagging {
    pub result: Vec<String>,
}

/// Select every tag whose score strictly exceeds `threshold`.
///
/// Scores and vocabulary are positionally coupled; a length mismatch is a
/// wiring bug and fails loudly rather than truncating. A score exactly at
/// the threshold does not qualify, and an empty result is a valid answer.
pub fn classify(probabilities: &[f32], vocabulary: &[&str], threshold: f32) -> Vec<String> {
    assert_eq!(
        probabilities.len(),
        vocabulary.len(),
        "score vector carries {} entries for a vocabulary of {}",
        probabilities.len(),
        vocabulary.len()
    );

    probabilities
        .iter()
        .enumerate()
        .filter(|(_, p)| **p > threshold)
        .map(|(i, _)| vocabulary[i].to_owned())
        .collect()
}

/// The single highest-scoring tag, or `None` for an empty score vector.
pub fn top_tag(probabilities: &[f32], vocabulary: &[&str]) -> Option<String> {
    probabilities
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| vocabulary[i].to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCAB: [&str; 3] = ["bird", "wind", "engine"];

    #[test]
    fn scores_above_threshold_select_their_tags() {
        let tags = classify(&[0.9, 0.1, 0.25], &VOCAB, DEFAULT_THRESHOLD);
        assert_eq!(tags, vec!["bird", "engine"]);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        let tags = classify(&[0.2, 0.2000001, 0.19], &VOCAB, 0.2);
        assert_eq!(tags, vec!["wind"]);
    }

    #[test]
    fn all_zero_scores_yield_the_empty_set() {
        let tags = classify(&[0.0, 0.0, 0.0], &VOCAB, DEFAULT_THRESHOLD);
        assert!(tags.is_empty());
    }

    #[test]
    fn result_preserves_vocabulary_order() {
        let tags = classify(&[0.3, 0.9, 0.5], &VOCAB, DEFAULT_THRESHOLD);
        assert_eq!(tags, vec!["bird", "wind", "engine"]);
    }

    #[test]
    #[should_panic]
    fn length_mismatch_fails_loudly() {
        classify(&[0.9, 0.1], &VOCAB, DEFAULT_THRESHOLD);
    }

    #[test]
    fn top_tag_is_the_argmax() {
        assert_eq!(top_tag(&[0.05, 0.01, 0.12], &VOCAB), Some("engine".to_owned()));
    }

    #[test]
    fn top_tag_of_nothing_is_none() {
        assert_eq!(top_tag(&[], &VOCAB), None);
    }
}
