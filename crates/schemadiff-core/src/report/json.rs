use crate::compare::ComparisonResult;

/// Render the machine-readable document. Field names and types are the
/// stable contract consumed by downstream tooling; see `ComparisonResult`.
pub fn render(result: &ComparisonResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
