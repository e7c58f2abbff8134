use std::path::Path;

use crate::error::AppError;
use crate::utils::debug_enabled;

use super::range::{DateRange, ReportKind};

/// Require both weekly reports to exist as regular files in `dir`.
///
/// Stops at the first missing report, member list first.
pub(crate) fn check_reports(dir: &Path, range: &DateRange) -> Result<(), AppError> {
    for kind in ReportKind::ALL {
        let name = range.report_file(kind);
        let found = dir.join(&name).is_file();
        if debug_enabled() {
            eprintln!("[DEBUG] Checking {name}: {}", if found { "found" } else { "missing" });
        }
        if !found {
            return Err(AppError::MissingFile { name });
        }
    }
    Ok(())
}
