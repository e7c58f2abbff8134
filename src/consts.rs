/// Binary name shown in usage messages
pub(crate) const BIN_NAME: &str = "weekgate";

/// Date stamp format used for arguments and file names: "20250317"
pub(crate) const STAMP_FORMAT: &str = "%Y%m%d";

/// Sample start date printed with usage errors
pub(crate) const EXAMPLE_DATE: &str = "20250317";

/// Days from the first to the last day of a report week
pub(crate) const WEEK_SPAN_DAYS: u64 = 6;

/// Downstream processor invoked when the config does not override it
pub(crate) const DEFAULT_COMMAND: &[&str] = &["python3", "beta.py"];
