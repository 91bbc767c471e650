//! One-shot submission pipeline.
//!
//! Parse the job script, resolve the rule's resources, make sure the log
//! directory exists, then build, echo, and execute the submission command
//! and recover the scheduler's job id from its output.

use camino::{Utf8Path, Utf8PathBuf};
use snakesub_config::{ClusterConfig, ResolveError};
use snakesub_core::{ClusterBackend, JobScript, MetadataError};
use snakesub_parsers::{CommandError, run_submission};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("failed to create output directory {dir}: {error}")]
    OutputDir {
        dir: Utf8PathBuf,
        error: std::io::Error,
    },
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Not a submitted job: {0}")]
    NotSubmitted(String),
}

/// Submit one job through backend `B` and return the scheduler job id.
///
/// Resolution failures abort before any external process is spawned. The
/// built command is echoed on stderr for auditing; stdout stays reserved
/// for the job id the engine parses.
pub async fn run<B: ClusterBackend>(
    script: &Utf8Path,
    dependencies: Vec<u64>,
    config: &ClusterConfig<B::General, B::Resources>,
) -> Result<u64, SubmitError> {
    let job = JobScript::from_script(script, dependencies)?;
    let resources = config.resolve(&job.rule)?;
    ensure_output_dir(&job)?;

    let command = B::build_command(&job, &config.general, resources);
    eprintln!("{command}");
    tracing::debug!("submitting rule {} from {}", job.rule, job.path);

    let output = run_submission(&command).await?;
    B::extract_job_id(&output).ok_or(SubmitError::NotSubmitted(output))
}

/// Create the directory of the first declared output so the scheduler can
/// write its log there. Already existing is fine; sibling invocations may
/// race on the same directory.
fn ensure_output_dir(job: &JobScript) -> Result<(), SubmitError> {
    let Some(first) = job.outputs.first() else {
        return Ok(());
    };
    let Some(dir) = Utf8Path::new(first)
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
    else {
        return Ok(());
    };
    std::fs::create_dir_all(dir).map_err(|error| SubmitError::OutputDir {
        dir: dir.to_owned(),
        error,
    })
}
