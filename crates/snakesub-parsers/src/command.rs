//! Submission command execution.

use thiserror::Error;
use tokio::process::Command;

/// Error type for command execution.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Failed to execute {command}: {error}")]
    Execution { command: String, error: String },
}

/// Run a submission command line through the shell and capture its output.
///
/// Waits for the tool to exit; there is no timeout. Returns stdout
/// followed by stderr as one string: the submission banner arrives on
/// stdout, so token positions are unaffected, and rejection text stays
/// available for diagnostics.
///
/// A non-zero exit status is not an error here. Schedulers put their
/// rejection messages in the captured text, and the job-id extractor is
/// what decides whether a submission happened.
pub async fn run_submission(command: &str) -> Result<String, CommandError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .await
        .map_err(|e| CommandError::Execution {
            command: command.to_string(),
            error: e.to_string(),
        })?;

    if !output.status.success() {
        tracing::warn!("submission command exited with {}", output.status);
    }

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(combined)
}
