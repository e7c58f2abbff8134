mod app;
mod cli;
mod config;
mod consts;
mod error;
mod utils;
mod week;

use std::path::Path;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version keep clap's exit status; real errors exit 1
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let config = Config::load();
    set_debug(config.debug);
    if config.debug
        && let Some(path) = &config.source
    {
        eprintln!("[DEBUG] Loaded config from {}", path.display());
    }

    match app::run(cli.start_date.as_deref(), Path::new("."), &config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            if let Some(hint) = e.hint() {
                eprintln!("{hint}");
            }
            std::process::exit(1);
        }
    }
}
