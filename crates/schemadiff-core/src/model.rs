//! Data model for stress-test reports.
//!
//! These types are read-only views over the report JSON: the loader
//! constructs them once and nothing mutates them afterwards.

use serde::{Deserialize, Serialize};

/// Final verdict label assigned to one schema by the stress runner.
///
/// Closed vocabulary: an unrecognized string in a report fails
/// deserialization, which the loader surfaces as `Malformed` rather
/// than letting a typo silently land in "unchanged".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Consistently passed.
    SolidPass,
    /// Consistently failed, not previously expected to fail.
    SolidFail,
    /// Failed, but the failure was allow-listed.
    ExpectedFail,
    /// Passed despite not being allow-listed as expected to pass.
    UnexpectedPass,
    /// Nondeterministic across attempts, net pass.
    FlakyPass,
    /// Nondeterministic across attempts, net fail.
    FlakyFail,
}

impl Classification {
    pub fn is_passing(self) -> bool {
        matches!(
            self,
            Classification::SolidPass | Classification::UnexpectedPass | Classification::FlakyPass
        )
    }

    pub fn is_failing(self) -> bool {
        !self.is_passing()
    }

    pub fn is_flaky(self) -> bool {
        matches!(self, Classification::FlakyPass | Classification::FlakyFail)
    }
}

/// One loaded stress-test run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,

    /// Informational pass list written by the runner; the comparator
    /// trusts `detailed_results[].classification` only.
    #[serde(default)]
    pub pass: Vec<String>,

    /// Informational fail list written by the runner.
    #[serde(default)]
    pub fail: Vec<String>,

    pub detailed_results: Vec<DetailedResult>,
}

/// Run-level metadata. Extra keys in the report are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Identifier of the model under test (e.g. "gpt-4o-mini").
    pub model: String,

    pub schema_count: u64,

    /// ISO-8601-like timestamp string as written by the runner; kept
    /// verbatim, pretty-printed best-effort by the console renderer.
    pub timestamp: String,
}

/// One schema's outcome within a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedResult {
    /// Schema file name; the identity source for comparison.
    pub file: String,

    pub classification: Classification,

    /// Coarse pass/fail label. Derived upstream from `classification`,
    /// not independently authoritative.
    #[serde(default)]
    pub verdict: Option<String>,

    #[serde(default)]
    pub attempts: Vec<Attempt>,
}

impl DetailedResult {
    /// Schema identifier: the file name with a trailing `.json`
    /// stripped.
    pub fn schema_id(&self) -> &str {
        self.file.strip_suffix(".json").unwrap_or(&self.file)
    }
}

/// One validation attempt for a schema. Inputs to classification
/// upstream; the comparator never re-derives verdicts from these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attempt {
    #[serde(default)]
    pub passed: bool,

    /// Pipeline stage that rejected the schema, when it failed.
    #[serde(default)]
    pub stage: Option<String>,

    #[serde(default)]
    pub reason: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_deserializes_snake_case() {
        let c: Classification = serde_json::from_str("\"solid_pass\"").unwrap();
        assert_eq!(c, Classification::SolidPass);
        let c: Classification = serde_json::from_str("\"expected_fail\"").unwrap();
        assert_eq!(c, Classification::ExpectedFail);
    }

    #[test]
    fn unknown_classification_is_rejected() {
        let err = serde_json::from_str::<Classification>("\"solid_passs\"");
        assert!(err.is_err());
    }

    #[test]
    fn passing_and_failing_kinds_partition_the_vocabulary() {
        let all = [
            Classification::SolidPass,
            Classification::SolidFail,
            Classification::ExpectedFail,
            Classification::UnexpectedPass,
            Classification::FlakyPass,
            Classification::FlakyFail,
        ];
        for c in all {
            assert_ne!(c.is_passing(), c.is_failing());
        }
        assert!(Classification::UnexpectedPass.is_passing());
        assert!(Classification::ExpectedFail.is_failing());
        assert!(Classification::FlakyPass.is_flaky());
        assert!(!Classification::SolidFail.is_flaky());
    }

    #[test]
    fn schema_id_strips_json_suffix_only() {
        let r = DetailedResult {
            file: "order_schema.json".into(),
            classification: Classification::SolidPass,
            verdict: None,
            attempts: vec![],
        };
        assert_eq!(r.schema_id(), "order_schema");

        let r = DetailedResult {
            file: "no_suffix".into(),
            ..r
        };
        assert_eq!(r.schema_id(), "no_suffix");
    }
}
