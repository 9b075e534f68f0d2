// Heuristic strengths/weaknesses analysis.
//
// Six keyword checks run in a fixed order against the resume text (with the
// description feeding the final overlap check). Each check contributes one
// strength or one weakness; the skill-count check is the single exception
// and may add to both lists at mid-range counts. Both lists are capped at
// five entries, kept in check order. The evaluation order is a contract:
// callers and tests may rely on exact list contents for fixed inputs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Cap on each insight list.
pub const MAX_INSIGHTS: usize = 5;

/// Distinct shared words needed for the overlap check to count as a strength.
pub const OVERLAP_THRESHOLD: usize = 20;

const EXPERIENCE_MARKERS: &[&str] = &[
    "intern",
    "experience",
    "worked",
    "project",
    "developed",
    "built",
];

/// The fixed seven-term skill vocabulary for the technical-depth check.
const SKILL_TERMS: &[&str] = &[
    "python",
    "java",
    "sql",
    "machine learning",
    "data analysis",
    "javascript",
    "cloud",
];

const ACHIEVEMENT_MARKERS: &[&str] = &["improved", "increased", "reduced", "achieved", "%", "led"];

const SOFT_SKILL_MARKERS: &[&str] = &["team", "lead", "collaborat", "communication"];

/// Up to five strengths and five weaknesses for one candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Run the keyword checks for one resume against the job description.
pub fn analyze(resume_text: &str, description: &str) -> Analysis {
    let text = resume_text.to_lowercase();
    let mut analysis = Analysis::default();

    // 1. Experience markers
    if contains_any(&text, EXPERIENCE_MARKERS) {
        analysis
            .strengths
            .push("Describes hands-on experience or concrete project work".to_string());
    } else {
        analysis
            .weaknesses
            .push("No work experience or project involvement is mentioned".to_string());
    }

    // 2. Technical skill coverage — the one check that can hit both lists
    let skill_count = SKILL_TERMS.iter().filter(|term| text.contains(*term)).count();
    if skill_count >= 4 {
        analysis.strengths.push(format!(
            "Strong technical coverage: {skill_count} of {} core skills listed",
            SKILL_TERMS.len()
        ));
    } else if skill_count >= 2 {
        analysis
            .strengths
            .push("Some in-demand technical skills are present".to_string());
        analysis
            .weaknesses
            .push("Technical skill coverage is narrow — verify depth at screening".to_string());
    } else {
        analysis
            .weaknesses
            .push("Few or none of the core technical skills appear".to_string());
    }

    // 3. Quantifiable achievements
    if contains_any(&text, ACHIEVEMENT_MARKERS) {
        analysis
            .strengths
            .push("Quantifies achievements with measurable outcomes".to_string());
    } else {
        analysis
            .weaknesses
            .push("No quantified achievements or measurable outcomes".to_string());
    }

    // 4. Certifications
    if text.contains("cert") {
        analysis
            .strengths
            .push("Mentions certifications or formal credentials".to_string());
    } else {
        analysis
            .weaknesses
            .push("No certifications or formal credentials mentioned".to_string());
    }

    // 5. Soft skills
    if contains_any(&text, SOFT_SKILL_MARKERS) {
        analysis
            .strengths
            .push("Shows teamwork, leadership, or communication signals".to_string());
    } else {
        analysis
            .weaknesses
            .push("No teamwork or communication signals found".to_string());
    }

    // 6. Vocabulary overlap with the description
    let overlap = shared_word_count(&text, description);
    if overlap > OVERLAP_THRESHOLD {
        analysis.strengths.push(format!(
            "Shares {overlap} distinct terms with the job description"
        ));
    } else {
        analysis
            .weaknesses
            .push("Little vocabulary overlap with the job description".to_string());
    }

    analysis.strengths.truncate(MAX_INSIGHTS);
    analysis.weaknesses.truncate(MAX_INSIGHTS);
    analysis
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}

/// Count distinct lowercase whitespace-tokenized words shared between the
/// resume and the description.
fn shared_word_count(resume_lower: &str, description: &str) -> usize {
    let resume_words: HashSet<&str> = resume_lower.split_whitespace().collect();
    let description_lower = description.to_lowercase();
    let description_words: HashSet<&str> = description_lower.split_whitespace().collect();
    resume_words.intersection(&description_words).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_midrange_hits_both_lists() {
        let analysis = analyze("I know python and sql", "anything");
        assert!(analysis
            .strengths
            .iter()
            .any(|s| s.contains("in-demand technical skills")));
        assert!(analysis
            .weaknesses
            .iter()
            .any(|w| w.contains("coverage is narrow")));
    }

    #[test]
    fn test_empty_resume_gets_all_weaknesses() {
        let analysis = analyze("", "python developer");
        assert!(analysis.strengths.is_empty());
        // Six checks, every one a weakness, capped at five.
        assert_eq!(analysis.weaknesses.len(), MAX_INSIGHTS);
    }

    #[test]
    fn test_certification_substring() {
        let analysis = analyze("AWS certified architect", "cloud role");
        assert!(analysis
            .strengths
            .iter()
            .any(|s| s.contains("certifications")));
    }
}
