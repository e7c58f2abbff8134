use std::process::{Command, ExitStatus};

use crate::error::DelegateError;
use crate::utils::debug_enabled;

/// Run `command` with `arg` appended, inheriting stdio and the working directory.
///
/// Blocks until the child exits; its status is returned uninspected.
pub(crate) fn run_downstream(command: &[String], arg: &str) -> Result<ExitStatus, DelegateError> {
    let (program, leading) = command.split_first().ok_or(DelegateError::Empty)?;

    if debug_enabled() {
        eprintln!("[DEBUG] Running {} {arg}", command.join(" "));
    }

    Command::new(program)
        .args(leading)
        .arg(arg)
        .status()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DelegateError::NotFound {
                    program: program.clone(),
                }
            } else {
                DelegateError::Spawn {
                    program: program.clone(),
                    source: e,
                }
            }
        })
}
