//! Core comparison engine for JSON-schema stress-test reports.
//!
//! A stress run produces a JSON report with one classification per
//! schema. This crate loads two such reports (a baseline and a current
//! run), classifies every per-schema verdict transition into a fixed
//! regression taxonomy, and derives a CI exit code from the result.
//! All decision logic lives here; the CLI crate is glue.

pub mod compare;
pub mod loader;
pub mod model;
pub mod report;

pub use compare::{compare_reports, get_exit_code, ComparisonResult};
pub use loader::{load_report, LoadError};
pub use model::{Attempt, Classification, DetailedResult, Report, ReportMetadata};
