// Colored terminal output for ranked reports.
//
// This module owns all terminal-specific formatting: colors, the ranked
// table, the single-candidate detail view. main.rs delegates here.

use colored::Colorize;

use crate::feedback::MatchBand;
use crate::output::truncate_chars;
use crate::report::{RankedReport, ScoredResult};

/// Display the ranked report as a table, highest score first.
pub fn display_report(report: &RankedReport) {
    if report.results.is_empty() {
        println!("No candidates to display.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Resume Ranking ({} candidates) ===", report.results.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<42} {:>6}  {}",
        "Rank".dimmed(),
        "Resume".dimmed(),
        "Score".dimmed(),
        "Band".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (i, result) in report.results.iter().enumerate() {
        println!(
            "  {:>4}. {:<42} {:>6.2}  {}",
            i + 1,
            truncate_chars(&result.filename, 40),
            result.score_rounded(),
            colorize_band(result.band),
        );
    }

    println!();

    let strong = report.band_count(MatchBand::Strong);
    let moderate = report.band_count(MatchBand::Moderate);
    let weak = report.band_count(MatchBand::Weak);
    if strong > 0 {
        println!("  {} {} strong match(es)", "+".green().bold(), strong);
    }
    if moderate > 0 {
        println!("  {} {} moderate match(es)", "~".yellow(), moderate);
    }
    if weak > 0 {
        println!("  {} {} weak match(es)", "-".red(), weak);
    }

    display_warnings(&report.warnings);
}

/// Display one candidate in full: score, band, message, insights.
pub fn display_detail(result: &ScoredResult) {
    println!(
        "\n{}",
        format!("=== {} ===", result.filename).bold()
    );
    println!("  Score: {:.2}", result.score_rounded());
    println!("  Band:  {}", colorize_band(result.band));
    println!("  {}", result.message);

    if !result.strengths.is_empty() {
        println!("\n  Strengths:");
        for strength in &result.strengths {
            println!("    {} {}", "+".green(), strength);
        }
    }
    if !result.weaknesses.is_empty() {
        println!("\n  Weaknesses:");
        for weakness in &result.weaknesses {
            println!("    {} {}", "-".red(), weakness);
        }
    }
    println!();
}

/// Print extraction warnings, if any.
pub fn display_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("  {} {}", "Warning:".yellow(), warning);
    }
    if !warnings.is_empty() {
        println!();
    }
}

fn colorize_band(band: MatchBand) -> colored::ColoredString {
    match band {
        MatchBand::Strong => band.as_str().green().bold(),
        MatchBand::Moderate => band.as_str().yellow(),
        MatchBand::Weak => band.as_str().red(),
    }
}
