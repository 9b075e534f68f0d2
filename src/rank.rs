// Stable descending ranking of candidate scores.

use std::cmp::Ordering;

/// Return candidate indices ordered by score, highest first.
///
/// The sort is stable: equal scores keep their original input order, which
/// makes the ranking deterministic and is part of the output contract.
pub fn rank_indices(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_order() {
        let order = rank_indices(&[0.2, 0.9, 0.5]);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let order = rank_indices(&[0.4, 0.7, 0.4, 0.4]);
        assert_eq!(order, vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_empty() {
        assert!(rank_indices(&[]).is_empty());
    }
}
