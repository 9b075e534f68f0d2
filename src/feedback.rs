// Feedback classification — a pure function from score to band.
//
// Three bands with fixed boundaries: 0.5 and 0.3, inclusive on the lower
// bound of each band. A score of exactly 0.5 is Strong; exactly 0.3 is
// Moderate.

use serde::{Deserialize, Serialize};

/// The three-way match band for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBand {
    Strong,
    Moderate,
    Weak,
}

impl MatchBand {
    /// Classify a similarity score (0.0 to 1.0).
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.5 => MatchBand::Strong,
            s if s >= 0.3 => MatchBand::Moderate,
            _ => MatchBand::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchBand::Strong => "Strong match",
            MatchBand::Moderate => "Moderate match",
            MatchBand::Weak => "Weak match",
        }
    }

    /// The fixed feedback message shown for this band.
    pub fn message(&self) -> &'static str {
        match self {
            MatchBand::Strong => {
                "Excellent match! This resume strongly aligns with the job requirements."
            }
            MatchBand::Moderate => {
                "Moderate match. This resume has some relevant qualifications but may need additional screening."
            }
            MatchBand::Weak => {
                "Not suitable for this position. The candidate lacks required qualifications based on this resume."
            }
        }
    }
}

impl std::fmt::Display for MatchBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_closed() {
        assert_eq!(MatchBand::from_score(0.5), MatchBand::Strong);
        assert_eq!(MatchBand::from_score(0.3), MatchBand::Moderate);
        assert_eq!(MatchBand::from_score(0.49999), MatchBand::Moderate);
        assert_eq!(MatchBand::from_score(0.29999), MatchBand::Weak);
    }

    #[test]
    fn test_band_extremes() {
        assert_eq!(MatchBand::from_score(0.0), MatchBand::Weak);
        assert_eq!(MatchBand::from_score(1.0), MatchBand::Strong);
    }
}
