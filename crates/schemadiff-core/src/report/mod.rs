//! Rendering of comparison results.
//!
//! Both renderers are pure functions of a [`ComparisonResult`]. The
//! JSON field names are a compatibility contract; the text layout is
//! not.

pub mod console;
pub mod json;
