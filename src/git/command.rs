use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Result of running an external tool whose failure the caller is expected to absorb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Success(String),
    Failed,
}

impl CommandOutcome {
    pub fn into_output(self) -> Option<String> {
        match self {
            CommandOutcome::Success(out) => Some(out),
            CommandOutcome::Failed => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success(_))
    }
}

/// Run `program args...`, decoding stdout leniently.
///
/// Spawn errors and non-zero exits both map to [`CommandOutcome::Failed`].
pub fn run<P: AsRef<Path>>(program: &str, args: &[&str], cwd: Option<P>) -> CommandOutcome {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir.as_ref());
    }

    match cmd.output() {
        Ok(output) if output.status.success() => {
            CommandOutcome::Success(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(output) => {
            debug!(
                program,
                ?args,
                status = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "command exited unsuccessfully"
            );
            CommandOutcome::Failed
        }
        Err(e) => {
            debug!(program, ?args, error = %e, "failed to spawn command");
            CommandOutcome::Failed
        }
    }
}

/// Whether `program` can be spawned at all.
pub fn is_installed(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}
