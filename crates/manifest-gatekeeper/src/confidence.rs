//! Confidence scoring for generated answers

use crate::config::GuardrailConfig;
use manifest_domain::RetrievedChunk;
use once_cell::sync::Lazy;
use regex::Regex;

static DOLLAR_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$[\d,]+").expect("dollar pattern must compile"));

static DIGIT_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("digit pattern must compile"));

/// Combine retrieval distances and answer-quality heuristics into a
/// confidence score in [0, 1], rounded to 2 decimals
///
/// Weighted combination: 0.3 top-result similarity, 0.2 agreement of the
/// top three results, 0.5 answer quality. Answer quality dominates because
/// retrieval distance alone is a weak proxy for whether the generated
/// answer is actually useful. Empty results score 0.0.
pub fn calculate_confidence(
    results: &[RetrievedChunk],
    answer: &str,
    config: &GuardrailConfig,
) -> f64 {
    if results.is_empty() {
        return 0.0;
    }

    let scale = config.distance_scale as f64;

    let top_distance = results[0].distance as f64;
    let retrieval_score = (1.0 - (top_distance / scale).min(1.0)).max(0.0);

    let top_k = results.len().min(3);
    let avg_distance =
        results[..top_k].iter().map(|r| r.distance as f64).sum::<f64>() / top_k as f64;
    let chunk_agreement = (1.0 - (avg_distance / scale).min(1.0)).max(0.0);

    let confidence =
        0.3 * retrieval_score + 0.2 * chunk_agreement + 0.5 * answer_quality(answer);

    (confidence * 100.0).round() / 100.0
}

/// Heuristic quality score for the answer text alone, in [0.3, 1.0]
///
/// Starts at 0.7; a "not found" answer short-circuits to 0.3 regardless of
/// any other signal. Specific content (dollar amounts, numbers, source
/// citations) earns bonuses; very short answers are discounted.
pub fn answer_quality(answer: &str) -> f64 {
    let lower = answer.to_lowercase();
    if lower.contains("not found") || lower.contains("cannot find") {
        return 0.3;
    }

    let mut score: f64 = 0.7;

    if DOLLAR_AMOUNT.is_match(answer) {
        score += 0.15;
    }

    if DIGIT_SEQUENCE.is_match(answer) {
        score += 0.1;
    }

    if answer.contains("[Source") {
        score += 0.05;
    }

    if answer.len() < 20 {
        score *= 0.9;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifest_domain::{Chunk, ChunkMetadata, DocType, SectionType};

    fn result_at(distance: f32) -> RetrievedChunk {
        RetrievedChunk {
            chunk: Chunk::new(
                "some content",
                ChunkMetadata {
                    reference_id: "LD1".to_string(),
                    doc_type: DocType::ShipperRc,
                    chunk_id: 0,
                    section_type: SectionType::Rates,
                    has_table: false,
                },
            ),
            distance,
        }
    }

    #[test]
    fn test_empty_results_score_zero() {
        let config = GuardrailConfig::default();
        assert_eq!(calculate_confidence(&[], "any answer", &config), 0.0);
    }

    #[test]
    fn test_not_found_quality_floor() {
        assert_eq!(answer_quality("Not found in document"), 0.3);
        // The floor overrides every bonus
        assert_eq!(answer_quality("not found, but $500 [Source 1]"), 0.3);
        assert_eq!(answer_quality("I cannot find the rate"), 0.3);
    }

    #[test]
    fn test_dollar_amount_bonus() {
        let plain = answer_quality("The rate is listed in the confirmation document");
        let with_dollar = answer_quality("The rate is $1,500 in the confirmation document");
        assert!(with_dollar > plain);
    }

    #[test]
    fn test_citation_bonus() {
        let without = answer_quality("The carrier pay is listed as agreed");
        let with = answer_quality("The carrier pay is listed as agreed [Source 2]");
        assert!(with > without);
    }

    #[test]
    fn test_short_answer_discount() {
        let short = answer_quality("Yes.");
        let long = answer_quality("Yes, every source shows the same value.");
        assert!(short < long);
    }

    #[test]
    fn test_quality_clamped_to_one() {
        // All bonuses together: 0.7 + 0.15 + 0.1 + 0.05 = 1.0, never above
        let quality = answer_quality("The rate is $1,500 per the confirmation [Source 1]");
        assert!(quality <= 1.0);
        assert_eq!(quality, 1.0);
    }

    #[test]
    fn test_confidence_monotonic_in_answer_quality() {
        let config = GuardrailConfig::default();
        let results = vec![result_at(0.8), result_at(0.9), result_at(1.1)];

        let with_dollar =
            calculate_confidence(&results, "The customer rate is $500 [Source 1]", &config);
        let without_dollar =
            calculate_confidence(&results, "The customer rate is listed inside", &config);
        let not_found = calculate_confidence(&results, "Not found in document", &config);

        assert!(with_dollar >= without_dollar);
        assert!(without_dollar > not_found);
    }

    #[test]
    fn test_confidence_decreases_with_distance() {
        let config = GuardrailConfig::default();
        let answer = "The rate is $500 [Source 1]";

        let close = calculate_confidence(&[result_at(0.3)], answer, &config);
        let far = calculate_confidence(&[result_at(2.2)], answer, &config);
        assert!(close > far);
    }

    #[test]
    fn test_confidence_rounded_to_two_decimals() {
        let config = GuardrailConfig::default();
        let confidence =
            calculate_confidence(&[result_at(0.777)], "rate is $512 [Source 1]", &config);
        assert_eq!(confidence, (confidence * 100.0).round() / 100.0);
    }

    #[test]
    fn test_uses_at_most_top_three_for_agreement() {
        let config = GuardrailConfig::default();
        let answer = "rate is $500";

        // A distant 4th result must not change the score
        let three = vec![result_at(0.5), result_at(0.6), result_at(0.7)];
        let four = vec![result_at(0.5), result_at(0.6), result_at(0.7), result_at(2.4)];
        assert_eq!(
            calculate_confidence(&three, answer, &config),
            calculate_confidence(&four, answer, &config)
        );
    }
}
