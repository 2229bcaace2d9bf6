use std::process::{Command, ExitStatus};

use crate::error::PostExecuteError;

/// Run `command` through the platform shell and wait for it
pub fn run_shell(command: &str) -> Result<ExitStatus, PostExecuteError> {
    let status = shell(command)
        .status()
        .map_err(|source| PostExecuteError::Launch {
            command: command.to_string(),
            source,
        })?;
    if !status.success() {
        return Err(PostExecuteError::Failed {
            command: command.to_string(),
            status,
        });
    }
    Ok(status)
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}
