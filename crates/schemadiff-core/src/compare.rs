//! Report comparison and exit-code policy.
//!
//! Pure functions over loaded reports: no I/O, no mutation of inputs.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::model::{Classification, Report};

/// Outcome of comparing a baseline report against a current run.
///
/// Every schema id present in both reports lands in exactly one of the
/// six transition sets. `BTreeSet` gives set semantics plus a stable,
/// sorted order in the serialized output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Failing in baseline (other than `expected_fail`), `solid_pass` now.
    pub new_passes: BTreeSet<String>,

    /// Passing in baseline, failing now. Always blocks CI.
    pub new_failures: BTreeSet<String>,

    /// `expected_fail` in baseline, `solid_pass` now: an anticipated
    /// failure got resolved.
    pub fixes: BTreeSet<String>,

    /// Became flaky in current when it was not flaky in baseline.
    pub new_flaky: BTreeSet<String>,

    /// `unexpected_pass` in baseline, `solid_pass` now. The allow-list
    /// changed, not the model.
    pub config_drift: BTreeSet<String>,

    pub unchanged: BTreeSet<String>,

    pub baseline_only: BTreeSet<String>,
    pub current_only: BTreeSet<String>,

    /// Percentage of schemas with a passing classification, per side.
    pub baseline_pass_rate: f64,
    pub current_pass_rate: f64,
}

/// One transition category. Internal: `ComparisonResult` exposes the
/// categories as named sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Fix,
    ConfigDrift,
    NewFlaky,
    NewPass,
    NewFailure,
    Unchanged,
}

/// Classify a baseline→current classification pair.
///
/// Evaluated in priority order, first match wins. The order is load
/// bearing: flakiness outranks a generic pass so that e.g.
/// `solid_fail` → `flaky_pass` reads as new flakiness, not a new pass.
fn classify_transition(baseline: Classification, current: Classification) -> Transition {
    use Classification::{ExpectedFail, SolidPass, UnexpectedPass};

    if baseline == ExpectedFail && current == SolidPass {
        Transition::Fix
    } else if baseline == UnexpectedPass && current == SolidPass {
        Transition::ConfigDrift
    } else if current.is_flaky() && !baseline.is_flaky() {
        Transition::NewFlaky
    } else if baseline.is_failing() && current == SolidPass {
        Transition::NewPass
    } else if baseline.is_passing() && current.is_failing() {
        Transition::NewFailure
    } else {
        // Equal classifications, or a shuffle with no regression signal
        // (e.g. expected_fail → solid_fail).
        Transition::Unchanged
    }
}

fn classification_map(report: &Report) -> BTreeMap<&str, Classification> {
    report
        .detailed_results
        .iter()
        .map(|r| (r.schema_id(), r.classification))
        .collect()
}

fn pass_rate(map: &BTreeMap<&str, Classification>) -> f64 {
    if map.is_empty() {
        return 0.0;
    }
    let passing = map.values().filter(|c| c.is_passing()).count();
    100.0 * passing as f64 / map.len() as f64
}

/// Compare two loaded reports.
pub fn compare_reports(baseline: &Report, current: &Report) -> ComparisonResult {
    let base = classification_map(baseline);
    let cur = classification_map(current);

    let mut new_passes = BTreeSet::new();
    let mut new_failures = BTreeSet::new();
    let mut fixes = BTreeSet::new();
    let mut new_flaky = BTreeSet::new();
    let mut config_drift = BTreeSet::new();
    let mut unchanged = BTreeSet::new();

    let baseline_only: BTreeSet<String> = base
        .keys()
        .filter(|id| !cur.contains_key(*id))
        .map(|id| id.to_string())
        .collect();
    let current_only: BTreeSet<String> = cur
        .keys()
        .filter(|id| !base.contains_key(*id))
        .map(|id| id.to_string())
        .collect();

    for (id, &b) in &base {
        let Some(&c) = cur.get(id) else { continue };
        let bucket = match classify_transition(b, c) {
            Transition::Fix => &mut fixes,
            Transition::ConfigDrift => &mut config_drift,
            Transition::NewFlaky => &mut new_flaky,
            Transition::NewPass => &mut new_passes,
            Transition::NewFailure => &mut new_failures,
            Transition::Unchanged => &mut unchanged,
        };
        bucket.insert(id.to_string());
    }

    debug!(
        common = base.len() - baseline_only.len(),
        new_failures = new_failures.len(),
        new_flaky = new_flaky.len(),
        "compared reports"
    );

    ComparisonResult {
        baseline_pass_rate: pass_rate(&base),
        current_pass_rate: pass_rate(&cur),
        new_passes,
        new_failures,
        fixes,
        new_flaky,
        config_drift,
        unchanged,
        baseline_only,
        current_only,
    }
}

/// Map a comparison result to a process exit code.
///
/// New failures always block. New flakiness blocks only under strict
/// mode. Everything else (fixes, config drift, added/removed schemas)
/// is informational.
pub fn get_exit_code(result: &ComparisonResult, strict: bool) -> i32 {
    if !result.new_failures.is_empty() {
        return 1;
    }
    if strict && !result.new_flaky.is_empty() {
        return 1;
    }
    0
}
