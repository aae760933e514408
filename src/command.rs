use std::borrow::Cow;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Captured output of a finished external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Narrow interface over external command execution so scaffolding steps can
/// be exercised without the real generators and package managers installed.
pub trait CommandRunner {
    /// Runs a command to completion in the given working directory.
    ///
    /// # Arguments
    /// * `program` - Program to invoke
    /// * `args` - Argument vector passed verbatim
    /// * `cwd` - Working directory the command runs in
    ///
    /// # Returns
    /// * `Result<CommandOutput>` - Captured stdout/stderr on success; a
    ///   nonzero exit status is an error carrying the captured stderr
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput>;
}

/// Runs commands through `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
        log::debug!("Running '{program}' with args {args:?} in '{}'", cwd.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        let stdout = decode_stream(program, "stdout", &output.stdout);
        let stderr = decode_stream(program, "stderr", &output.stderr);

        if !output.status.success() {
            return Err(Error::CommandFailedError {
                command: render_command_line(program, args),
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

fn decode_stream(program: &str, stream: &str, bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    if matches!(decoded, Cow::Owned(_)) {
        log::warn!("'{program}' emitted non-UTF8 {stream}; performing lossy conversion");
    }
    decoded.into_owned()
}

fn render_command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}
