//! Console reporter — human-readable output with color codes.

use breachscan_core::errors::ReportError;

use super::types::AnalysisReport;
use super::Reporter;

/// Console reporter for human-readable terminal output.
#[derive(Debug)]
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn verdict_color(&self, passed: bool) -> &'static str {
        if !self.use_color {
            return "";
        }
        if passed {
            "\x1b[32m" // green
        } else {
            "\x1b[31m" // red
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }

    fn banner(title: &str) -> String {
        let inner = title.len().max(40) + 2;
        let pad = inner - title.len();
        let left = pad / 2;
        let right = pad - left;
        format!(
            "╔{line}╗\n║{sl}{title}{sr}║\n╚{line}╝\n",
            line = "═".repeat(inner),
            sl = " ".repeat(left),
            sr = " ".repeat(right),
        )
    }

    fn fmt_opt(value: Option<f64>, precision: usize) -> String {
        match value {
            Some(v) => format!("{v:.precision$}"),
            None => "n/a".to_string(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let mut output = String::new();

        output.push_str(&Self::banner(&report.title));
        output.push_str(&format!(
            "\nGenerated {}, breachscan v{}\n",
            report.generated_at, report.version
        ));

        if let Some(ref section) = report.classification {
            output.push_str("\nClassification\n");
            output.push_str(&format!(
                "  {} rows, {} flagged, {} complex, {} data issues\n",
                section.rows, section.flagged_rows, section.complex_rows, section.data_issues
            ));
            for prevalence in &section.category_counts {
                output.push_str(&format!(
                    "  {:<24} {:>6} ({:.1}%)\n",
                    prevalence.category.name(),
                    prevalence.count,
                    prevalence.share * 100.0
                ));
            }
        }

        if let Some(ref metrics) = report.validation {
            output.push_str("\nValidation\n");
            output.push_str(&format!(
                "  {} scored rows, accuracy {}\n",
                metrics.scored_rows,
                Self::fmt_opt(metrics.accuracy, 3)
            ));
            output.push_str(&format!(
                "  macro P/R/F1: {} / {} / {}\n",
                Self::fmt_opt(metrics.macro_precision, 3),
                Self::fmt_opt(metrics.macro_recall, 3),
                Self::fmt_opt(metrics.macro_f1, 3)
            ));
            for verdict in &metrics.verdicts {
                let symbol = if verdict.passed { "✓" } else { "✗" };
                let cs = self.verdict_color(verdict.passed);
                let ce = self.color_end();
                output.push_str(&format!(
                    "  {cs}{symbol} {}{ce}: {}\n",
                    verdict.name, verdict.summary
                ));
            }
        }

        if let Some(ref summary) = report.descriptive {
            output.push_str("\nDescriptive statistics\n");
            output.push_str(&format!(
                "  {} rows, {} complex ({:.1}%)\n",
                summary.rows,
                summary.complex_rows,
                summary.complex_share * 100.0
            ));
            output.push_str("  severity histogram:");
            for (score, count) in summary.severity_histogram.iter().enumerate() {
                output.push_str(&format!(" {score}:{count}"));
            }
            output.push('\n');
            output.push_str(&format!(
                "  disclosure lag days: median {}, p90 {} ({} missing)\n",
                Self::fmt_opt(summary.disclosure_lag_days.median, 1),
                Self::fmt_opt(summary.disclosure_lag_days.p90, 1),
                summary.disclosure_lag_days.missing
            ));
            output.push_str(&format!(
                "  records affected: median {}, max {} ({} missing)\n",
                Self::fmt_opt(summary.records_affected.median, 1),
                Self::fmt_opt(summary.records_affected.max, 1),
                summary.records_affected.missing
            ));
        }

        if let Some(ref outcome) = report.event_study {
            output.push_str("\nEvent study\n");
            output.push_str(&format!(
                "  {} usable events of {} candidates\n",
                outcome.events.len(),
                outcome.attrition.candidates
            ));
            for ws in &outcome.summaries {
                output.push_str(&format!(
                    "  [{:>3}, {:>3}]  n={:<4} mean CAR={}  t={}  p={}\n",
                    ws.window.0,
                    ws.window.1,
                    ws.n,
                    Self::fmt_opt(ws.mean_car, 5),
                    Self::fmt_opt(ws.t_stat, 2),
                    Self::fmt_opt(ws.p_value, 4)
                ));
            }
        }

        if let Some(ref outcome) = report.asymmetry {
            output.push_str("\nInformation asymmetry\n");
            output.push_str(&format!(
                "  window: {} trading days each side, {} events\n",
                outcome.window_days,
                outcome.events.len()
            ));
            output.push_str(&format!(
                "  volatility ratio: n={}, mean {}, p={}\n",
                outcome.volatility.n,
                Self::fmt_opt(outcome.volatility.mean_ratio, 3),
                Self::fmt_opt(outcome.volatility.p_value, 4)
            ));
            output.push_str(&format!(
                "  turnover ratio:   n={}, mean {}, p={}\n",
                outcome.turnover.n,
                Self::fmt_opt(outcome.turnover.mean_ratio, 3),
                Self::fmt_opt(outcome.turnover.p_value, 4)
            ));
        }

        // Summary
        let sections = report.section_names().len();
        output.push_str(&format!("\n─── Summary: {sections} section(s) ───\n"));

        if let Some(ref metrics) = report.validation {
            if metrics.all_passed() {
                output.push_str("Result: PASSED ✓\n");
            } else {
                output.push_str("Result: FAILED ✗\n");
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::ClassificationSection;
    use crate::validate::{ThresholdVerdict, ValidationMetrics};
    use breachscan_core::types::{Classification, Severity};

    fn metrics_with_verdict(passed: bool) -> ValidationMetrics {
        let mut metrics = ValidationMetrics::default();
        metrics.verdicts.push(ThresholdVerdict {
            name: "min-macro-f1",
            threshold: 0.75,
            observed: Some(if passed { 0.8 } else { 0.5 }),
            passed,
            summary: "macro F1 check".to_string(),
        });
        metrics
    }

    #[test]
    fn banner_centers_title() {
        let banner = ConsoleReporter::banner("X");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔'));
        assert!(lines[1].contains('X'));
        assert_eq!(
            lines[0].chars().count(),
            lines[1].chars().count(),
            "box edges must line up"
        );
    }

    #[test]
    fn no_color_codes_when_disabled() {
        let report = AnalysisReport::new("t").with_validation(metrics_with_verdict(false));
        let plain = ConsoleReporter::new(false).generate(&report).unwrap();
        assert!(!plain.contains("\x1b["));
        assert!(plain.contains("Result: FAILED ✗"));
    }

    #[test]
    fn pass_verdict_reports_passed() {
        let report = AnalysisReport::new("t").with_validation(metrics_with_verdict(true));
        let out = ConsoleReporter::new(false).generate(&report).unwrap();
        assert!(out.contains("✓ min-macro-f1"));
        assert!(out.contains("Result: PASSED ✓"));
    }

    #[test]
    fn lists_every_category_row() {
        let classifications = vec![Classification::empty("a", Severity::new(0))];
        let report = AnalysisReport::new("t").with_classification(
            ClassificationSection::from_classifications(&classifications, 0),
        );
        let out = ConsoleReporter::new(false).generate(&report).unwrap();
        assert!(out.contains("hacking"));
        assert!(out.contains("unintended-disclosure"));
        assert!(out.contains("1 section(s)"));
    }
}
