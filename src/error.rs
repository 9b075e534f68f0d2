// Pipeline error taxonomy.
//
// Per-document extraction failures never appear here — they downgrade to
// warnings and only drop the single document. These variants are the
// corpus-level failures that abort the run before any scoring happens.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The job description was missing or whitespace-only.
    #[error("no job description provided — enter a description to match against")]
    EmptyDescription,

    /// No resume files were supplied at all.
    #[error("no resumes were supplied")]
    NoDocuments,

    /// Every supplied resume failed extraction or was empty.
    #[error("could not extract text from any resume — try different files")]
    NoReadableDocuments,

    /// The description plus all readable resumes produced zero usable terms.
    #[error("the description and resumes contain no indexable terms")]
    EmptyVocabulary,
}
