// SVG score chart — one point per candidate, color-banded by the same
// thresholds as the feedback classifier, with a dashed marker at the 0.3
// minimum-threshold line.
//
// The chart is plain SVG text; `data_uri` wraps it in a base64 data URI for
// inline display without touching disk.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::feedback::MatchBand;
use crate::report::RankedReport;

const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 96.0;

/// The minimum-threshold marker, drawn as a dashed horizontal line.
pub const THRESHOLD_LINE: f64 = 0.3;

/// Render the report as an SVG scatter chart of filename vs. score.
pub fn render_svg(report: &RankedReport, width: u32, height: u32) -> String {
    let width = f64::from(width);
    let height = f64::from(height);
    let plot_w = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = height - MARGIN_TOP - MARGIN_BOTTOM;

    // y-axis is fixed to the score range 0..1
    let y_of = |score: f64| MARGIN_TOP + (1.0 - score) * plot_h;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\" font-family=\"sans-serif\">\n"
    ));
    svg.push_str(&format!(
        "  <rect width=\"{width}\" height=\"{height}\" fill=\"white\"/>\n"
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"24\" text-anchor=\"middle\" font-size=\"16\">Resume Matching Scores</text>\n",
        width / 2.0
    ));

    // Gridlines and y-axis labels at fixed score stops
    for stop in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let y = y_of(stop);
        svg.push_str(&format!(
            "  <line x1=\"{MARGIN_LEFT:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" \
             stroke=\"#dddddd\" stroke-width=\"1\"/>\n",
            width - MARGIN_RIGHT
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" fill=\"#555555\">{stop:.2}</text>\n",
            MARGIN_LEFT - 8.0,
            y + 4.0
        ));
    }

    // Dashed minimum-threshold marker
    let threshold_y = y_of(THRESHOLD_LINE);
    svg.push_str(&format!(
        "  <line x1=\"{MARGIN_LEFT:.1}\" y1=\"{threshold_y:.1}\" x2=\"{:.1}\" y2=\"{threshold_y:.1}\" \
         stroke=\"#dc3545\" stroke-width=\"1\" stroke-dasharray=\"6 4\"/>\n",
        width - MARGIN_RIGHT
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" fill=\"#dc3545\">Minimum Threshold</text>\n",
        width - MARGIN_RIGHT - 4.0,
        threshold_y - 6.0
    ));

    // One point per candidate, in report (ranked) order
    let n = report.results.len().max(1) as f64;
    for (i, result) in report.results.iter().enumerate() {
        let x = MARGIN_LEFT + (i as f64 + 0.5) * plot_w / n;
        let y = y_of(result.score_rounded());
        svg.push_str(&format!(
            "  <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"6\" fill=\"{}\"/>\n",
            band_color(result.band)
        ));
        svg.push_str(&format!(
            "  <text x=\"{x:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"#333333\" \
             text-anchor=\"end\" transform=\"rotate(-45 {x:.1} {:.1})\">{}</text>\n",
            height - MARGIN_BOTTOM + 16.0,
            height - MARGIN_BOTTOM + 16.0,
            xml_escape(&result.filename)
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Encode an SVG chart as a `data:` URI for inline display.
pub fn data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

fn band_color(band: MatchBand) -> &'static str {
    match band {
        MatchBand::Strong => "#2e8b57",
        MatchBand::Moderate => "#ff8c00",
        MatchBand::Weak => "#dc3545",
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ScoredResult;

    fn report(scores: &[f64]) -> RankedReport {
        let results = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let band = MatchBand::from_score(score);
                ScoredResult {
                    filename: format!("resume_{i}.pdf"),
                    score,
                    band,
                    message: band.message().to_string(),
                    strengths: vec![],
                    weaknesses: vec![],
                }
            })
            .collect();
        RankedReport {
            results,
            warnings: vec![],
            generated_at: String::new(),
        }
    }

    #[test]
    fn test_svg_has_threshold_marker_and_points() {
        let svg = render_svg(&report(&[0.8, 0.4, 0.1]), 900, 420);
        assert!(svg.contains("Minimum Threshold"));
        assert!(svg.contains("stroke-dasharray"));
        assert_eq!(svg.matches("<circle").count(), 3);
        // One color per band
        assert!(svg.contains("#2e8b57"));
        assert!(svg.contains("#ff8c00"));
        assert!(svg.contains("#dc3545"));
    }

    #[test]
    fn test_filenames_are_escaped() {
        let mut rpt = report(&[0.5]);
        rpt.results[0].filename = "a<b>&c.pdf".to_string();
        let svg = render_svg(&rpt, 900, 420);
        assert!(svg.contains("a&lt;b&gt;&amp;c.pdf"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn test_data_uri_prefix() {
        let uri = data_uri("<svg/>");
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
    }
}
