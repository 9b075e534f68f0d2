// Report types — the terminal artifact of the ranking pipeline.
//
// A ScoredResult is immutable once constructed and never carries an error
// value; documents that failed extraction surface as warnings on the report
// instead. Scores are stored raw and rounded to two decimals only at output
// boundaries (terminal, CSV, chart).

use serde::{Deserialize, Serialize};

use crate::feedback::MatchBand;

/// One ranked candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResult {
    pub filename: String,
    /// Raw cosine similarity in [0, 1].
    pub score: f64,
    pub band: MatchBand,
    pub message: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl ScoredResult {
    /// The score rounded to two decimal places, as shown everywhere.
    pub fn score_rounded(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }
}

/// The ordered report: results descending by score, stable on ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedReport {
    pub results: Vec<ScoredResult>,
    /// One entry per document dropped during extraction.
    pub warnings: Vec<String>,
    /// RFC 3339 timestamp of the run.
    pub generated_at: String,
}

impl RankedReport {
    /// CSV projection: filename, rounded score, band label.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("filename,score,category\n");
        for result in &self.results {
            out.push_str(&format!(
                "{},{:.2},{}\n",
                csv_escape(&result.filename),
                result.score_rounded(),
                csv_escape(result.band.as_str()),
            ));
        }
        out
    }

    /// Count of results in a given band.
    pub fn band_count(&self, band: MatchBand) -> usize {
        self.results.iter().filter(|r| r.band == band).count()
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(filename: &str, score: f64) -> ScoredResult {
        let band = MatchBand::from_score(score);
        ScoredResult {
            filename: filename.to_string(),
            score,
            band,
            message: band.message().to_string(),
            strengths: vec![],
            weaknesses: vec![],
        }
    }

    #[test]
    fn test_csv_projection() {
        let report = RankedReport {
            results: vec![result("a.pdf", 0.612), result("b, v2.docx", 0.2)],
            warnings: vec![],
            generated_at: "2026-01-01T00:00:00Z".to_string(),
        };
        let csv = report.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "filename,score,category");
        assert_eq!(lines[1], "a.pdf,0.61,Strong match");
        assert_eq!(lines[2], "\"b, v2.docx\",0.20,Weak match");
    }

    #[test]
    fn test_score_rounding() {
        assert_eq!(result("x", 0.678).score_rounded(), 0.68);
        assert_eq!(result("x", 0.3349).score_rounded(), 0.33);
    }

    #[test]
    fn test_band_count() {
        let report = RankedReport {
            results: vec![result("a", 0.7), result("b", 0.6), result("c", 0.1)],
            warnings: vec![],
            generated_at: String::new(),
        };
        assert_eq!(report.band_count(MatchBand::Strong), 2);
        assert_eq!(report.band_count(MatchBand::Weak), 1);
        assert_eq!(report.band_count(MatchBand::Moderate), 0);
    }
}
