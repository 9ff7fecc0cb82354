//! HTML reporter — self-contained HTML report with inline CSS/JS.
//!
//! Produces a single HTML file with no external dependencies that renders
//! every section of the analysis report as a collapsible table.

use breachscan_core::constants::DEFAULT_REPORT_TITLE;
use breachscan_core::errors::ReportError;

use super::types::AnalysisReport;
use super::Reporter;

/// Self-contained HTML reporter.
///
/// Produces a single HTML file with inline CSS and JavaScript.
/// No external dependencies — the file renders correctly when opened directly.
#[derive(Debug)]
pub struct HtmlReporter {
    pub title: Option<String>,
}

impl HtmlReporter {
    pub fn new() -> Self {
        Self { title: None }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    fn escape_html(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    fn fmt_opt(value: Option<f64>, precision: usize) -> String {
        match value {
            Some(v) => format!("{v:.precision$}"),
            None => "n/a".to_string(),
        }
    }

    fn fmt_share(share: f64) -> String {
        format!("{:.1}%", share * 100.0)
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for HtmlReporter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let title = self.title.as_deref().unwrap_or_else(|| {
            if report.title.is_empty() {
                DEFAULT_REPORT_TITLE
            } else {
                report.title.as_str()
            }
        });

        let mut html = String::with_capacity(8192);

        // DOCTYPE and head
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str(&format!("<title>{}</title>\n", Self::escape_html(title)));
        html.push_str("<style>\n");
        html.push_str(INLINE_CSS);
        html.push_str("</style>\n</head>\n<body>\n");

        // Header
        html.push_str("<div class=\"container\">\n");
        html.push_str(&format!("<h1>{}</h1>\n", Self::escape_html(title)));
        html.push_str(&format!(
            "<p class=\"meta\">Generated {} &middot; breachscan v{}</p>\n",
            Self::escape_html(&report.generated_at),
            Self::escape_html(&report.version)
        ));

        // Summary bar: threshold verdicts drive pass/fail when present
        match report.validation.as_ref().map(|m| m.all_passed()) {
            Some(true) => {
                html.push_str("<div class=\"summary summary-pass\">\n");
                html.push_str("<span class=\"summary-result\">PASSED</span>\n");
                html.push_str("<span class=\"summary-detail\">all validation thresholds met</span>\n");
                html.push_str("</div>\n");
            }
            Some(false) => {
                html.push_str("<div class=\"summary summary-fail\">\n");
                html.push_str("<span class=\"summary-result\">FAILED</span>\n");
                html.push_str("<span class=\"summary-detail\">one or more validation thresholds missed</span>\n");
                html.push_str("</div>\n");
            }
            None => {
                html.push_str("<div class=\"summary summary-info\">\n");
                html.push_str(&format!(
                    "<span class=\"summary-detail\">{} section(s)</span>\n",
                    report.section_names().len()
                ));
                html.push_str("</div>\n");
            }
        }

        if !report.inputs.is_empty() {
            html.push_str("<div class=\"section\">\n<h2>Inputs</h2>\n");
            html.push_str("<table class=\"data\">\n");
            html.push_str("<thead><tr><th>File</th><th>Bytes</th><th>Fingerprint</th></tr></thead>\n<tbody>\n");
            for input in &report.inputs {
                html.push_str(&format!(
                    "<tr><td class=\"mono\">{}</td><td class=\"num\">{}</td><td class=\"mono\">{}</td></tr>\n",
                    Self::escape_html(&input.path),
                    input.bytes,
                    Self::escape_html(&input.xxh3)
                ));
            }
            html.push_str("</tbody>\n</table>\n</div>\n");
        }

        if let Some(ref section) = report.classification {
            html.push_str("<div class=\"section\">\n<h2>Classification</h2>\n");
            html.push_str(&format!(
                "<p class=\"section-summary\">{} rows, {} flagged, {} complex, {} data issues</p>\n",
                section.rows, section.flagged_rows, section.complex_rows, section.data_issues
            ));
            html.push_str("<table class=\"data\">\n");
            html.push_str("<thead><tr><th>Category</th><th>Count</th><th>Share</th></tr></thead>\n<tbody>\n");
            for prevalence in &section.category_counts {
                html.push_str(&format!(
                    "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
                    Self::escape_html(prevalence.category.name()),
                    prevalence.count,
                    Self::fmt_share(prevalence.share)
                ));
            }
            html.push_str("</tbody>\n</table>\n</div>\n");
        }

        if let Some(ref metrics) = report.validation {
            html.push_str("<div class=\"section\">\n<h2>Validation</h2>\n");
            html.push_str(&format!(
                "<p class=\"section-summary\">{} scored rows &middot; accuracy {} &middot; macro F1 {}</p>\n",
                metrics.scored_rows,
                Self::fmt_opt(metrics.accuracy, 3),
                Self::fmt_opt(metrics.macro_f1, 3)
            ));
            html.push_str("<table class=\"data\">\n");
            html.push_str("<thead><tr><th>Category</th><th>TP</th><th>FP</th><th>FN</th><th>Precision</th><th>Recall</th><th>F1</th></tr></thead>\n<tbody>\n");
            for cm in &metrics.per_category {
                html.push_str(&format!(
                    "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
                    Self::escape_html(cm.category.name()),
                    cm.counts.true_positives,
                    cm.counts.false_positives,
                    cm.counts.false_negatives,
                    Self::fmt_opt(cm.precision, 3),
                    Self::fmt_opt(cm.recall, 3),
                    Self::fmt_opt(cm.f1, 3)
                ));
            }
            html.push_str("</tbody>\n</table>\n");

            for verdict in &metrics.verdicts {
                let (cls, icon) = if verdict.passed {
                    ("verdict verdict-pass", "&#x2713;")
                } else {
                    ("verdict verdict-fail", "&#x2717;")
                };
                html.push_str(&format!(
                    "<p class=\"{}\">{} <span class=\"mono\">{}</span> {}</p>\n",
                    cls,
                    icon,
                    Self::escape_html(verdict.name),
                    Self::escape_html(&verdict.summary)
                ));
            }
            html.push_str("</div>\n");
        }

        if let Some(ref summary) = report.descriptive {
            html.push_str("<div class=\"section\">\n<h2>Descriptive statistics</h2>\n");
            html.push_str(&format!(
                "<p class=\"section-summary\">{} rows &middot; {} complex ({})</p>\n",
                summary.rows,
                summary.complex_rows,
                Self::fmt_share(summary.complex_share)
            ));
            html.push_str("<table class=\"data\">\n");
            html.push_str("<thead><tr><th>Severity</th><th>Rows</th></tr></thead>\n<tbody>\n");
            for (score, count) in summary.severity_histogram.iter().enumerate() {
                html.push_str(&format!(
                    "<tr><td class=\"num\">{score}</td><td class=\"num\">{count}</td></tr>\n"
                ));
            }
            html.push_str("</tbody>\n</table>\n");

            html.push_str("<table class=\"data\">\n");
            html.push_str("<thead><tr><th>Measure</th><th>n</th><th>Missing</th><th>Mean</th><th>Median</th><th>P90</th><th>Max</th></tr></thead>\n<tbody>\n");
            for (label, numeric) in [
                ("Records affected", &summary.records_affected),
                ("Disclosure lag (days)", &summary.disclosure_lag_days),
            ] {
                html.push_str(&format!(
                    "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
                    label,
                    numeric.n,
                    numeric.missing,
                    Self::fmt_opt(numeric.mean, 1),
                    Self::fmt_opt(numeric.median, 1),
                    Self::fmt_opt(numeric.p90, 1),
                    Self::fmt_opt(numeric.max, 1)
                ));
            }
            html.push_str("</tbody>\n</table>\n</div>\n");
        }

        if let Some(ref outcome) = report.event_study {
            html.push_str("<div class=\"section\">\n<h2>Event study</h2>\n");
            let attrition = &outcome.attrition;
            html.push_str(&format!(
                "<p class=\"section-summary\">{} usable events of {} candidates</p>\n",
                outcome.events.len(),
                attrition.candidates
            ));
            html.push_str("<table class=\"data\">\n");
            html.push_str("<thead><tr><th>Window</th><th>N</th><th>Mean CAR</th><th>t</th><th>p</th><th>High severity</th><th>Low severity</th></tr></thead>\n<tbody>\n");
            for ws in &outcome.summaries {
                html.push_str(&format!(
                    "<tr><td class=\"mono\">[{}, {}]</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{} ({})</td><td class=\"num\">{} ({})</td></tr>\n",
                    ws.window.0,
                    ws.window.1,
                    ws.n,
                    Self::fmt_opt(ws.mean_car, 5),
                    Self::fmt_opt(ws.t_stat, 2),
                    Self::fmt_opt(ws.p_value, 4),
                    Self::fmt_opt(ws.mean_car_high_severity, 5),
                    ws.n_high_severity,
                    Self::fmt_opt(ws.mean_car_low_severity, 5),
                    ws.n_low_severity
                ));
            }
            html.push_str("</tbody>\n</table>\n</div>\n");
        }

        if let Some(ref outcome) = report.asymmetry {
            html.push_str("<div class=\"section\">\n<h2>Information asymmetry</h2>\n");
            html.push_str(&format!(
                "<p class=\"section-summary\">{} trading days each side &middot; {} events</p>\n",
                outcome.window_days,
                outcome.events.len()
            ));
            html.push_str("<table class=\"data\">\n");
            html.push_str("<thead><tr><th>Measure</th><th>N</th><th>Mean ratio</th><th>Mean log ratio</th><th>t</th><th>p</th></tr></thead>\n<tbody>\n");
            for (label, ratio) in [
                ("Volatility (post/pre)", &outcome.volatility),
                ("Turnover (post/pre)", &outcome.turnover),
            ] {
                html.push_str(&format!(
                    "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
                    label,
                    ratio.n,
                    Self::fmt_opt(ratio.mean_ratio, 3),
                    Self::fmt_opt(ratio.mean_log_ratio, 4),
                    Self::fmt_opt(ratio.t_stat, 2),
                    Self::fmt_opt(ratio.p_value, 4)
                ));
            }
            html.push_str("</tbody>\n</table>\n</div>\n");
        }

        // Footer
        html.push_str(&format!(
            "<footer>Generated by breachscan v{}</footer>\n",
            Self::escape_html(&report.version)
        ));
        html.push_str("</div>\n");

        // Inline JS for collapsing sections
        html.push_str("<script>\n");
        html.push_str(INLINE_JS);
        html.push_str("</script>\n");

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

const INLINE_CSS: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f5f5f5; color: #333; line-height: 1.6; }
.container { max-width: 1100px; margin: 0 auto; padding: 20px; }
h1 { margin-bottom: 4px; font-size: 24px; }
h2 { font-size: 18px; margin-bottom: 8px; }
.meta { color: #777; font-size: 13px; margin-bottom: 16px; }
.summary { padding: 16px; border-radius: 8px; margin-bottom: 24px; display: flex; align-items: center; gap: 16px; }
.summary-pass { background: #d4edda; border: 1px solid #c3e6cb; }
.summary-fail { background: #f8d7da; border: 1px solid #f5c6cb; }
.summary-info { background: #d1ecf1; border: 1px solid #bee5eb; }
.summary-result { font-size: 20px; font-weight: 700; }
.summary-detail { font-size: 14px; color: #555; }
.section { background: #fff; border-radius: 8px; padding: 16px; margin-bottom: 16px; border: 1px solid #ddd; border-left: 4px solid #6c757d; }
.section-summary { color: #555; margin-bottom: 12px; font-size: 14px; }
.data { width: 100%; border-collapse: collapse; font-size: 13px; margin-bottom: 8px; }
.data th { text-align: left; padding: 8px; background: #f8f9fa; border-bottom: 2px solid #dee2e6; }
.data td { padding: 8px; border-bottom: 1px solid #eee; vertical-align: top; }
.num { text-align: right; font-variant-numeric: tabular-nums; }
.mono { font-family: 'SF Mono', Monaco, Consolas, monospace; font-size: 12px; }
.verdict { font-size: 13px; padding: 4px 0; }
.verdict-pass { color: #28a745; }
.verdict-fail { color: #dc3545; }
footer { text-align: center; color: #999; font-size: 12px; margin-top: 32px; padding: 16px 0; }
"#;

const INLINE_JS: &str = r#"
// Minimal interactivity: click section header to collapse/expand
document.querySelectorAll('.section h2').forEach(function(h) {
    h.style.cursor = 'pointer';
    h.addEventListener('click', function() {
        var section = h.parentElement;
        section.querySelectorAll('table.data').forEach(function(table) {
            table.style.display = table.style.display === 'none' ? '' : 'none';
        });
    });
});
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::ClassificationSection;

    #[test]
    fn escapes_markup_in_title() {
        let report = AnalysisReport::new("<script>alert(1)</script>");
        let html = HtmlReporter::new().generate(&report).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn with_title_overrides_report_title() {
        let report = AnalysisReport::new("from report");
        let html = HtmlReporter::with_title("from reporter")
            .generate(&report)
            .unwrap();
        assert!(html.contains("<h1>from reporter</h1>"));
    }

    #[test]
    fn self_contained_document() {
        let report = AnalysisReport::new("t")
            .with_classification(ClassificationSection::from_classifications(&[], 0));
        let html = HtmlReporter::new().generate(&report).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("</html>"));
        assert!(!html.contains("href=\"http"));
    }

    #[test]
    fn summary_reflects_missing_validation() {
        let html = HtmlReporter::new().generate(&AnalysisReport::new("t")).unwrap();
        assert!(html.contains("summary-info"));
        assert!(!html.contains("summary-fail"));
    }
}
