//! CLI argument definitions

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "weekgate")]
#[command(
    about = "Check a week's check-in reports exist, then run the report processor",
    version
)]
pub(crate) struct Cli {
    /// First day of the report week (YYYYMMDD)
    #[arg(value_name = "START_DATE", allow_hyphen_values = true)]
    pub(crate) start_date: Option<String>,
}
