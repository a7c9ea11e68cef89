//! Unified exit codes for schemadiff.
//! These codes are part of the public contract for CI gating.

/// No blocking regressions.
pub const SUCCESS: i32 = 0;
/// Blocking regressions found (new failures, or new flakiness under --strict).
pub const REGRESSION: i32 = 1;
/// A report could not be loaded (missing path or malformed content).
pub const LOAD_ERROR: i32 = 2;
