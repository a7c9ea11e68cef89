use std::collections::BTreeSet;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::compare::ComparisonResult;
use crate::model::ReportMetadata;

/// Format one comparison as a human-readable summary. Deterministic,
/// unit-testable; returns the full text instead of printing.
#[must_use]
pub fn format_summary(
    result: &ComparisonResult,
    baseline: &ReportMetadata,
    current: &ReportMetadata,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Stress report comparison");
    let _ = writeln!(
        out,
        "  baseline: {} ({})",
        baseline.model,
        display_timestamp(&baseline.timestamp)
    );
    let _ = writeln!(
        out,
        "  current:  {} ({})",
        current.model,
        display_timestamp(&current.timestamp)
    );
    let _ = writeln!(out);

    let delta = result.current_pass_rate - result.baseline_pass_rate;
    let _ = writeln!(
        out,
        "Pass rate: {:.1}% -> {:.1}% ({:+.1})",
        result.baseline_pass_rate, result.current_pass_rate, delta
    );
    let _ = writeln!(out);

    write_category(&mut out, "New failures", &result.new_failures);
    write_category(&mut out, "New flaky", &result.new_flaky);
    write_category(&mut out, "New passes", &result.new_passes);
    write_category(&mut out, "Fixes", &result.fixes);
    write_category(&mut out, "Config drift", &result.config_drift);
    let _ = writeln!(out, "Unchanged: {}", result.unchanged.len());

    if !result.baseline_only.is_empty() {
        write_category(&mut out, "Removed schemas", &result.baseline_only);
    }
    if !result.current_only.is_empty() {
        write_category(&mut out, "Added schemas", &result.current_only);
    }

    out
}

fn write_category(out: &mut String, label: &str, ids: &BTreeSet<String>) {
    let _ = writeln!(out, "{}: {}", label, ids.len());
    for id in ids {
        let _ = writeln!(out, "  - {id}");
    }
}

/// Best-effort pretty-print of the runner's timestamp string. The raw
/// value is shown when it is not RFC 3339.
fn display_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}
