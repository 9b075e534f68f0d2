// The ranking pipeline: extraction -> vectorization -> scoring -> ranking
// -> feedback and analysis.
//
// Per-document failures downgrade to warnings and drop only that document.
// Corpus-level failures (nothing readable, empty description, empty
// vocabulary) abort before any scoring or chart work, and no partial report
// is produced. Document order is preserved end-to-end until the final
// ranking step reorders by score.

use chrono::Utc;
use tracing::{info, warn};

use crate::analysis;
use crate::document::Document;
use crate::error::PipelineError;
use crate::extract;
use crate::feedback::MatchBand;
use crate::rank;
use crate::report::{RankedReport, ScoredResult};
use crate::similarity;
use crate::vectorize::TfIdfMatrix;

/// Run the full pipeline for one description and one set of documents.
pub fn run(description: &str, documents: &[Document]) -> Result<RankedReport, PipelineError> {
    if description.trim().is_empty() {
        return Err(PipelineError::EmptyDescription);
    }
    if documents.is_empty() {
        return Err(PipelineError::NoDocuments);
    }

    // Extraction: keep (name, text) pairs in input order, warn on failures.
    let mut warnings = Vec::new();
    let mut names: Vec<String> = Vec::new();
    let mut texts: Vec<String> = Vec::new();
    for doc in documents {
        let text = extract::extract_text(doc);
        if text.trim().is_empty() {
            warn!(name = %doc.name, format = doc.format.as_str(), "Dropping unreadable document");
            warnings.push(format!(
                "Could not extract text from {} — skipped",
                doc.name
            ));
            continue;
        }
        names.push(doc.name.clone());
        texts.push(text);
    }

    if texts.is_empty() {
        return Err(PipelineError::NoReadableDocuments);
    }

    // Vectorize description + candidates together over one shared vocabulary.
    let mut inputs: Vec<&str> = Vec::with_capacity(texts.len() + 1);
    inputs.push(description);
    inputs.extend(texts.iter().map(String::as_str));
    let matrix = TfIdfMatrix::fit(&inputs)?;

    let scores = similarity::score_candidates(matrix.reference(), matrix.candidates());
    let order = rank::rank_indices(&scores);

    let results: Vec<ScoredResult> = order
        .into_iter()
        .map(|i| {
            let band = MatchBand::from_score(scores[i]);
            let insights = analysis::analyze(&texts[i], description);
            ScoredResult {
                filename: names[i].clone(),
                score: scores[i],
                band,
                message: band.message().to_string(),
                strengths: insights.strengths,
                weaknesses: insights.weaknesses,
            }
        })
        .collect();

    info!(
        candidates = results.len(),
        dropped = warnings.len(),
        "Ranked report built"
    );

    Ok(RankedReport {
        results,
        warnings,
        generated_at: Utc::now().to_rfc3339(),
    })
}
