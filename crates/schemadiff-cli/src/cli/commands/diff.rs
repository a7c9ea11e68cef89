use schemadiff_core::report::{console, json};
use schemadiff_core::{compare_reports, get_exit_code, load_report, LoadError, Report};
use std::path::Path;

use super::super::args::{DiffArgs, OutputFormat};
use crate::exit_codes::LOAD_ERROR;

pub(crate) fn run(args: DiffArgs) -> anyhow::Result<i32> {
    let baseline = match load_side("baseline", &args.baseline) {
        Ok(report) => report,
        Err(code) => return Ok(code),
    };
    let current = match load_side("current", &args.current) {
        Ok(report) => report,
        Err(code) => return Ok(code),
    };

    let result = compare_reports(&baseline, &current);

    match args.format {
        OutputFormat::Json => println!("{}", json::render(&result)?),
        OutputFormat::Text => print!(
            "{}",
            console::format_summary(&result, &baseline.metadata, &current.metadata)
        ),
    }

    Ok(get_exit_code(&result, args.strict))
}

/// Load one report, reporting which side failed and how. The NotFound
/// vs Malformed wording comes from the error itself.
fn load_side(side: &str, path: &Path) -> Result<Report, i32> {
    load_report(path).map_err(|e: LoadError| {
        eprintln!("error: {side} report: {e}");
        LOAD_ERROR
    })
}
