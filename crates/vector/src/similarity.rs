use semantic_qa_common::{Result, SemanticQaError};

/// Compute cosine similarity between two vectors
///
/// Normalized dot product, range [-1.0, 1.0]. Both vectors are expected to
/// have the same dimension; extra trailing components are ignored.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|y| y * y).sum::<f32>().sqrt();
    dot / (norm_a * norm_b)
}

/// Find the candidate most similar to the query vector
///
/// Linear scan over all candidates, returning the index of the one with the
/// greatest cosine similarity. Ties keep the first maximum found (strict
/// greater-than comparison). An empty candidate set is an error rather than
/// a meaningless result.
pub fn best_match(query: &[f32], candidates: &[Vec<f32>]) -> Result<usize> {
    if candidates.is_empty() {
        return Err(SemanticQaError::EmptyCandidateSet);
    }

    let mut best_index = 0;
    let mut best_score = f32::NEG_INFINITY;

    for (i, candidate) in candidates.iter().enumerate() {
        let score = cosine_similarity(query, candidate);
        if score > best_score {
            best_score = score;
            best_index = i;
        }
    }

    Ok(best_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_cosine_similarity_identical() {
        let v = vec![0.3, -1.2, 4.5, 0.0, 2.1];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_cosine_similarity_opposite() {
        let v = vec![1.0, 2.0, -3.0];
        let neg: Vec<f32> = v.iter().map(|x| -x).collect();
        assert!((cosine_similarity(&v, &neg) + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < EPSILON);
    }

    #[test]
    fn test_best_match_empty_candidates() {
        let query = vec![1.0, 0.0];
        let result = best_match(&query, &[]);
        assert!(matches!(
            result,
            Err(semantic_qa_common::SemanticQaError::EmptyCandidateSet)
        ));
    }

    #[test]
    fn test_best_match_picks_most_similar() {
        let query = vec![1.0, 0.0];
        let candidates = vec![
            vec![0.0, 1.0],
            vec![0.7, 0.7],
            vec![1.0, 0.1],
            vec![-1.0, 0.0],
        ];
        assert_eq!(best_match(&query, &candidates).unwrap(), 2);
    }

    #[test]
    fn test_best_match_scale_invariant() {
        // Cosine similarity ignores magnitude, so scaling a candidate by a
        // positive constant must not change the winner
        let query = vec![2.0, 1.0, 0.5];
        let candidates = vec![
            vec![0.1, -0.5, 0.9],
            vec![2.0, 1.0, 0.5],
            vec![-1.0, 0.3, 0.2],
        ];
        let scaled: Vec<Vec<f32>> = candidates
            .iter()
            .map(|c| c.iter().map(|x| x * 1000.0).collect())
            .collect();

        assert_eq!(
            best_match(&query, &candidates).unwrap(),
            best_match(&query, &scaled).unwrap()
        );
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        let query = vec![1.0, 0.0];
        // Candidates 0 and 2 are both perfectly aligned with the query
        let candidates = vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![5.0, 0.0],
        ];
        assert_eq!(best_match(&query, &candidates).unwrap(), 0);
    }
}
