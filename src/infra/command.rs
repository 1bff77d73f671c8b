use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output, Stdio};

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// A single invocation of an external tool, run from a fixed directory.
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    workdir: PathBuf,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>, workdir: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            workdir: workdir.to_path_buf(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn command(&self) -> Command {
        tracing::debug!(command = %self, "running external command");
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(&self.workdir);
        command
    }

    /// Runs with no stdin and both output streams captured.
    pub async fn capture(&self) -> io::Result<Output> {
        self.command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
    }

    /// Feeds `input` on stdin and captures stdout. Stderr goes to the terminal.
    pub async fn capture_with_input(&self, input: &str) -> io::Result<Output> {
        let mut child = self
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        // A selector may print its choice and exit before reading all of its
        // input; the exit status decides the outcome, not the closed pipe.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(input.as_bytes()).await {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                    tracing::debug!(command = %self, "stdin closed before all input was written");
                }
                Err(err) => return Err(err),
            }
        }

        child.wait_with_output().await
    }

    /// Runs attached to the user's terminal.
    pub async fn passthrough(&self) -> io::Result<ExitStatus> {
        self.command()
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
    }

    pub fn failure_message(&self, status: ExitStatus, stderr: &[u8]) -> String {
        let stderr = String::from_utf8_lossy(stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            format!("`{self}` exited with {status}")
        } else {
            format!("`{self}` exited with {status}: {stderr}")
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Stdout of a captured command, trimmed of surrounding whitespace.
pub fn trimmed_stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
