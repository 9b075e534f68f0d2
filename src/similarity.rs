// Cosine similarity between the description vector and each candidate.
//
// TF-IDF weights are non-negative, so cosine is already in [0, 1]; the
// clamp is a safety net against floating-point drift, not a correction.

/// Cosine similarity of two equal-length vectors, clamped to [0, 1].
///
/// A zero-magnitude vector on either side scores 0.0 — a document with no
/// weight anywhere simply matches nothing.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

/// Score every candidate against the reference, preserving input order.
pub fn score_candidates(reference: &[f64], candidates: &[Vec<f64>]) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| cosine_similarity(reference, candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_vectors() {
        let v = vec![0.5, 0.3, 0.0, 0.8];
        let score = cosine_similarity(&v, &v);
        assert!((score - 1.0).abs() < 1e-9, "Expected ~1.0, got {score}");
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_zero_magnitude_scores_zero() {
        let a = vec![0.0, 0.0];
        let b = vec![0.4, 0.6];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&b, &a), 0.0);
    }

    #[test]
    fn test_score_candidates_preserves_order() {
        let reference = vec![1.0, 1.0, 0.0];
        let candidates = vec![
            vec![1.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0],
        ];
        let scores = score_candidates(&reference, &candidates);
        assert_eq!(scores.len(), 3);
        assert!(scores[0] > scores[2]);
        assert_eq!(scores[1], 0.0);
    }
}
