//! Report loading and shape validation.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::Report;

/// Why a report could not be loaded. The two kinds are part of the
/// contract: callers branch on them, so they must stay distinguishable.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("report not found: {path}")]
    NotFound { path: PathBuf },

    #[error("malformed report {path}: {detail}")]
    Malformed { path: PathBuf, detail: String },
}

impl LoadError {
    fn malformed(path: &Path, detail: impl Into<String>) -> Self {
        LoadError::Malformed {
            path: path.to_path_buf(),
            detail: detail.into(),
        }
    }
}

/// Load a stress-test report from `path`.
///
/// Validates the minimal shape the comparator relies on: a top-level
/// object with a `metadata` object and a `detailed_results` array,
/// every classification drawn from the known vocabulary, and schema
/// identifiers unique within the report.
pub fn load_report(path: &Path) -> Result<Report, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::malformed(path, format!("unreadable: {e}")))?;

    let raw: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| LoadError::malformed(path, format!("invalid JSON: {e}")))?;

    // Check the two required keys against the raw value first so the
    // error names the missing key instead of a serde field path.
    let obj = raw
        .as_object()
        .ok_or_else(|| LoadError::malformed(path, "top level is not an object"))?;
    if !obj.get("metadata").is_some_and(|v| v.is_object()) {
        return Err(LoadError::malformed(path, "missing `metadata` object"));
    }
    if !obj.get("detailed_results").is_some_and(|v| v.is_array()) {
        return Err(LoadError::malformed(
            path,
            "missing `detailed_results` array",
        ));
    }

    let report: Report = serde_json::from_value(raw)
        .map_err(|e| LoadError::malformed(path, e.to_string()))?;

    let mut seen = BTreeSet::new();
    for r in &report.detailed_results {
        if !seen.insert(r.schema_id()) {
            return Err(LoadError::malformed(
                path,
                format!("duplicate schema id `{}`", r.schema_id()),
            ));
        }
    }

    debug!(
        path = %path.display(),
        model = %report.metadata.model,
        schemas = report.detailed_results.len(),
        "loaded report"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn report_json(results: &str) -> String {
        format!(
            r#"{{
              "metadata": {{
                "model": "gpt-4o-mini",
                "schema_count": 2,
                "timestamp": "2026-01-01T00:00:00Z"
              }},
              "pass": [],
              "fail": [],
              "detailed_results": {results}
            }}"#
        )
    }

    #[test]
    fn loads_well_formed_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "report.json",
            &report_json(
                r#"[
                  {"file": "a.json", "classification": "solid_pass", "verdict": "solid_pass", "attempts": []},
                  {"file": "b.json", "classification": "flaky_fail", "verdict": "solid_fail", "attempts": []}
                ]"#,
            ),
        );
        let report = load_report(&path).unwrap();
        assert_eq!(report.metadata.model, "gpt-4o-mini");
        assert_eq!(report.detailed_results.len(), 2);
        assert_eq!(report.detailed_results[0].schema_id(), "a");
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = load_report(Path::new("/nonexistent/report.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("/nonexistent/report.json"));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "report.json", "{not json");
        let err = load_report(&path).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn missing_required_keys_is_malformed() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_file(&dir, "no_results.json", r#"{"metadata": {}}"#);
        let err = load_report(&path).unwrap_err();
        assert!(err.to_string().contains("detailed_results"));

        let path = write_file(&dir, "no_meta.json", r#"{"detailed_results": []}"#);
        let err = load_report(&path).unwrap_err();
        assert!(err.to_string().contains("metadata"));

        let path = write_file(&dir, "array.json", "[]");
        let err = load_report(&path).unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn unknown_classification_is_malformed_not_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "report.json",
            &report_json(r#"[{"file": "a.json", "classification": "mostly_pass"}]"#),
        );
        let err = load_report(&path).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn duplicate_schema_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "report.json",
            &report_json(
                r#"[
                  {"file": "a.json", "classification": "solid_pass"},
                  {"file": "a.json", "classification": "solid_fail"}
                ]"#,
            ),
        );
        let err = load_report(&path).unwrap_err();
        assert!(err.to_string().contains("duplicate schema id `a`"));
    }
}
