//! Query-to-term similarity scoring.

use rapidfuzz::distance::indel;

use crate::normalize::normalize;

/// Normalized indel similarity between two strings after [`normalize`],
/// in `0.0..=1.0`. Returns `0.0` when either side normalizes to nothing, so
/// punctuation-only input never scores as a perfect match against itself.
pub fn similarity(a: &str, b: &str) -> f64 {
    let left = normalize(a);
    let right = normalize(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    indel::normalized_similarity(left.chars(), right.chars())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_scores_one() {
        assert_eq!(similarity("Customer Orders", "customer-orders"), 1.0);
    }

    #[test]
    fn disjoint_text_scores_zero() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn empty_sides_score_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("customer", ""), 0.0);
        assert_eq!(similarity("!!!", "!!!"), 0.0);
    }

    #[test]
    fn close_variants_score_high() {
        let score = similarity("customer id", "CustomerID");
        assert!(score > 0.9, "score was {score}");
        assert!(similarity("order date", "ship date") > similarity("order date", "quantity"));
    }
}
