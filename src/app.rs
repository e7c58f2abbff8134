use std::path::Path;

use crate::config::Config;
use crate::error::AppError;
use crate::utils::{debug_enabled, run_downstream};
use crate::week::{DateRange, DateStamp, check_reports};

/// Validate the start date, gate on the week's reports, then hand off.
///
/// Returns the downstream exit code. A child killed by a signal has no
/// code and maps to 1.
pub(crate) fn run(start_date: Option<&str>, dir: &Path, config: &Config) -> Result<i32, AppError> {
    let input = start_date.ok_or(AppError::Usage)?;
    let start = DateStamp::parse(input)?;
    let range = DateRange::from_start(start)?;

    if debug_enabled() {
        eprintln!("[DEBUG] Week {} to {}", range.start, range.end);
    }

    check_reports(dir, &range)?;

    println!("日期范围 / Date range: {range}");

    let status = run_downstream(&config.command(), range.start.as_str())?;
    if debug_enabled() {
        eprintln!("[DEBUG] Downstream exited with {status}");
    }
    Ok(status.code().unwrap_or(1))
}
