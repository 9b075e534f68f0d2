// Shortlist: rank resumes against a job description.
//
// This is the library root. Each module corresponds to one stage of the
// ranking pipeline, plus the ambient config and output layers.

pub mod analysis;
pub mod chart;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod feedback;
pub mod output;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod similarity;
pub mod vectorize;
