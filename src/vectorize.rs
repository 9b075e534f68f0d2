// TF-IDF vectorization over the description-plus-resume corpus.
//
// The vocabulary is built once per run from the union of every input text
// (reference included) and never mutated afterward — vectorization is a
// single atomic step, not a stream. IDF uses the smooth formulation
// idf(t) = ln((1 + n) / (1 + df(t))) + 1, so terms that appear in every
// document keep a small positive weight, and each row is L2-normalized.

use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::error::PipelineError;

/// Lowercase a text and split it into alphanumeric tokens of length >= 2.
///
/// Single characters carry no signal for similarity and are dropped, which
/// also keeps stray initials and bullet glyphs out of the vocabulary.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// The shared-vocabulary weight matrix for one run.
///
/// Row 0 is the reference (job description); rows 1.. are the candidates in
/// input order. All rows share the same dimensionality.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    /// Term -> column index, in first-seen order across the input texts.
    pub vocabulary: HashMap<String, usize>,
    rows: Vec<Vec<f64>>,
}

impl TfIdfMatrix {
    /// Fit the matrix over `texts`, where `texts[0]` is the reference.
    ///
    /// Fails with `EmptyVocabulary` when no input yields a single token —
    /// the pipeline must short-circuit rather than score degenerate vectors.
    pub fn fit(texts: &[&str]) -> Result<Self, PipelineError> {
        let tokenized: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t)).collect();

        // Vocabulary in first-seen order keeps the column layout
        // deterministic for identical input.
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for tokens in &tokenized {
            for token in tokens {
                let next = vocabulary.len();
                vocabulary.entry(token.clone()).or_insert(next);
            }
        }

        if vocabulary.is_empty() {
            return Err(PipelineError::EmptyVocabulary);
        }

        // Document frequency: in how many texts does each term appear?
        let mut df = vec![0u32; vocabulary.len()];
        for tokens in &tokenized {
            let distinct: HashSet<&String> = tokens.iter().collect();
            for token in distinct {
                df[vocabulary[token]] += 1;
            }
        }

        let n = tokenized.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&count| ((1.0 + n) / (1.0 + count as f64)).ln() + 1.0)
            .collect();

        let rows: Vec<Vec<f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    row[vocabulary[token]] += 1.0;
                }
                for (weight, idf) in row.iter_mut().zip(&idf) {
                    *weight *= idf;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        info!(
            documents = texts.len(),
            vocabulary = vocabulary.len(),
            "Vectorized corpus"
        );

        Ok(Self { vocabulary, rows })
    }

    /// The reference (job description) vector.
    pub fn reference(&self) -> &[f64] {
        &self.rows[0]
    }

    /// Candidate vectors, in input order.
    pub fn candidates(&self) -> &[Vec<f64>] {
        &self.rows[1..]
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in row.iter_mut() {
            *w /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_short_tokens() {
        let tokens = tokenize("I built a C compiler in 6 weeks");
        assert_eq!(tokens, vec!["built", "compiler", "in", "weeks"]);
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        let tokens = tokenize("Python, SQL; machine-learning!");
        assert_eq!(tokens, vec!["python", "sql", "machine", "learning"]);
    }

    #[test]
    fn test_fit_shared_dimensionality() {
        let matrix = TfIdfMatrix::fit(&["python developer", "java developer", "python"]).unwrap();
        assert_eq!(matrix.reference().len(), 3);
        assert_eq!(matrix.candidates().len(), 2);
        for row in matrix.candidates() {
            assert_eq!(row.len(), 3);
        }
    }

    #[test]
    fn test_fit_empty_vocabulary() {
        let result = TfIdfMatrix::fit(&["", "  ", "! @ #"]);
        assert_eq!(result.unwrap_err(), PipelineError::EmptyVocabulary);
    }

    #[test]
    fn test_smooth_idf_identical_texts() {
        // A term in every document keeps weight: idf = ln(3/3) + 1 = 1, and
        // a single-term row normalizes to exactly 1.0.
        let matrix = TfIdfMatrix::fit(&["python python", "python"]).unwrap();
        assert_eq!(matrix.reference().to_vec(), vec![1.0]);
        assert_eq!(matrix.candidates()[0], vec![1.0]);
    }
}
