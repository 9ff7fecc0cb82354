//! Markdown reporter — GitHub-flavored tables for PR comments and docs.

use breachscan_core::errors::ReportError;

use super::types::AnalysisReport;
use super::Reporter;

/// Markdown reporter.
#[derive(Debug)]
pub struct MarkdownReporter;

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{v:.precision$}"),
        None => "n/a".to_string(),
    }
}

fn fmt_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

fn window_label(window: (i64, i64)) -> String {
    format!("[{}, {}]", window.0, window.1)
}

impl Reporter for MarkdownReporter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn generate(&self, report: &AnalysisReport) -> Result<String, ReportError> {
        let mut md = String::with_capacity(4096);

        md.push_str(&format!("# {}\n\n", report.title));
        md.push_str(&format!(
            "Generated {} by breachscan v{}.\n\n",
            report.generated_at, report.version
        ));

        if !report.inputs.is_empty() {
            md.push_str("## Inputs\n\n");
            md.push_str("| File | Bytes | Fingerprint |\n");
            md.push_str("|---|---:|---|\n");
            for input in &report.inputs {
                md.push_str(&format!(
                    "| {} | {} | `{}` |\n",
                    input.path, input.bytes, input.xxh3
                ));
            }
            md.push('\n');
        }

        if let Some(ref section) = report.classification {
            md.push_str("## Classification\n\n");
            md.push_str(&format!("- Rows classified: {}\n", section.rows));
            md.push_str(&format!(
                "- Rows with at least one category: {} ({})\n",
                section.flagged_rows,
                fmt_share(if section.rows == 0 {
                    0.0
                } else {
                    section.flagged_rows as f64 / section.rows as f64
                })
            ));
            md.push_str(&format!("- Complex breaches: {}\n", section.complex_rows));
            md.push_str(&format!("- Data issues: {}\n\n", section.data_issues));
            md.push_str("| Category | Count | Share |\n");
            md.push_str("|---|---:|---:|\n");
            for prevalence in &section.category_counts {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    prevalence.category.name(),
                    prevalence.count,
                    fmt_share(prevalence.share)
                ));
            }
            md.push('\n');
        }

        if let Some(ref metrics) = report.validation {
            md.push_str("## Validation\n\n");
            md.push_str(&format!(
                "- Scored rows: {} (predictions only: {}, labels only: {})\n",
                metrics.scored_rows, metrics.predictions_only, metrics.labels_only
            ));
            md.push_str(&format!("- Accuracy: {}\n", fmt_opt(metrics.accuracy, 3)));
            md.push_str(&format!(
                "- Macro precision / recall / F1: {} / {} / {}\n",
                fmt_opt(metrics.macro_precision, 3),
                fmt_opt(metrics.macro_recall, 3),
                fmt_opt(metrics.macro_f1, 3)
            ));
            md.push_str(&format!(
                "- Micro precision / recall / F1: {} / {} / {}\n\n",
                fmt_opt(metrics.micro_precision, 3),
                fmt_opt(metrics.micro_recall, 3),
                fmt_opt(metrics.micro_f1, 3)
            ));

            md.push_str("| Category | TP | FP | FN | Precision | Recall | F1 |\n");
            md.push_str("|---|---:|---:|---:|---:|---:|---:|\n");
            for cm in &metrics.per_category {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} |\n",
                    cm.category.name(),
                    cm.counts.true_positives,
                    cm.counts.false_positives,
                    cm.counts.false_negatives,
                    fmt_opt(cm.precision, 3),
                    fmt_opt(cm.recall, 3),
                    fmt_opt(cm.f1, 3)
                ));
            }
            md.push('\n');

            if !metrics.verdicts.is_empty() {
                md.push_str("### Thresholds\n\n");
                for verdict in &metrics.verdicts {
                    let symbol = if verdict.passed { "✓" } else { "✗" };
                    md.push_str(&format!(
                        "- {} `{}`: {}\n",
                        symbol, verdict.name, verdict.summary
                    ));
                }
                md.push('\n');
            }
        }

        if let Some(ref summary) = report.descriptive {
            md.push_str("## Descriptive statistics\n\n");
            md.push_str(&format!(
                "- Rows: {}, complex: {} ({})\n\n",
                summary.rows,
                summary.complex_rows,
                fmt_share(summary.complex_share)
            ));

            md.push_str("| Severity | Rows |\n");
            md.push_str("|---:|---:|\n");
            for (score, count) in summary.severity_histogram.iter().enumerate() {
                md.push_str(&format!("| {score} | {count} |\n"));
            }
            md.push('\n');

            md.push_str("| Measure | n | Missing | Mean | Median | P90 | Max |\n");
            md.push_str("|---|---:|---:|---:|---:|---:|---:|\n");
            for (label, numeric) in [
                ("Records affected", &summary.records_affected),
                ("Disclosure lag (days)", &summary.disclosure_lag_days),
            ] {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} |\n",
                    label,
                    numeric.n,
                    numeric.missing,
                    fmt_opt(numeric.mean, 1),
                    fmt_opt(numeric.median, 1),
                    fmt_opt(numeric.p90, 1),
                    fmt_opt(numeric.max, 1)
                ));
            }
            md.push('\n');

            let attrition = &summary.attrition;
            md.push_str("### Sample attrition\n\n");
            md.push_str(&format!("- Raw rows: {}\n", attrition.raw_rows));
            md.push_str(&format!("- Parseable rows: {}\n", attrition.parseable_rows));
            md.push_str(&format!(
                "- With firm and date: {}\n",
                attrition.with_firm_and_date
            ));
            if let Some(linked) = attrition.linked_to_market {
                md.push_str(&format!("- Linked to market data: {linked}\n"));
            }
            md.push_str(&format!(
                "- Excluded: {}\n\n",
                fmt_share(attrition.excluded_share)
            ));
        }

        if let Some(ref outcome) = report.event_study {
            md.push_str("## Event study\n\n");
            let attrition = &outcome.attrition;
            md.push_str(&format!(
                "- Usable events: {} of {} candidates (firm and date: {}, market series: {}, event day: {}, estimation fit: {})\n\n",
                outcome.events.len(),
                attrition.candidates,
                attrition.with_firm_and_date,
                attrition.with_market_series,
                attrition.with_event_day,
                attrition.with_estimation_fit
            ));

            md.push_str("| Window | N | Mean CAR | t | p | High-severity mean | Low-severity mean |\n");
            md.push_str("|---|---:|---:|---:|---:|---:|---:|\n");
            for ws in &outcome.summaries {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} ({}) | {} ({}) |\n",
                    window_label(ws.window),
                    ws.n,
                    fmt_opt(ws.mean_car, 5),
                    fmt_opt(ws.t_stat, 2),
                    fmt_opt(ws.p_value, 4),
                    fmt_opt(ws.mean_car_high_severity, 5),
                    ws.n_high_severity,
                    fmt_opt(ws.mean_car_low_severity, 5),
                    ws.n_low_severity
                ));
            }
            md.push('\n');
        }

        if let Some(ref outcome) = report.asymmetry {
            md.push_str("## Information asymmetry\n\n");
            md.push_str(&format!(
                "- Window: {} trading days each side, {} events\n\n",
                outcome.window_days,
                outcome.events.len()
            ));
            md.push_str("| Measure | N | Mean ratio | Mean log ratio | t | p |\n");
            md.push_str("|---|---:|---:|---:|---:|---:|\n");
            for (label, ratio) in [
                ("Volatility (post/pre)", &outcome.volatility),
                ("Turnover (post/pre)", &outcome.turnover),
            ] {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    label,
                    ratio.n,
                    fmt_opt(ratio.mean_ratio, 3),
                    fmt_opt(ratio.mean_log_ratio, 4),
                    fmt_opt(ratio.t_stat, 2),
                    fmt_opt(ratio.p_value, 4)
                ));
            }
            md.push('\n');
        }

        Ok(md)
    }
}
