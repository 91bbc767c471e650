//! CLI argument parsing shared by the snakesub binaries.

use camino::Utf8PathBuf;
use clap::Parser;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("missing job script argument")]
    MissingScript,
    #[error("dependency id '{0}' is not a job id")]
    InvalidDependency(String),
}

/// Invocation: `<binary> [dependency-id ...] <job-script-path>`.
///
/// Snakemake expands `{dependencies}` to the ids this adapter printed for
/// the job's prerequisites and appends the generated script path last, so
/// the positionals arrive as one list and are split at the end.
#[derive(Parser, Debug)]
#[command(name = "snakesub")]
#[command(about = "Submit snakemake jobs to a cluster scheduler")]
pub struct Args {
    /// Dependency job ids followed by the snakemake-generated job script
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Cluster config file, overriding the backend default
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,
}

impl Args {
    /// Split the positionals into dependency ids and the script path.
    pub fn job_inputs(&self) -> Result<(Vec<u64>, Utf8PathBuf), ArgsError> {
        let (script, deps) = self.inputs.split_last().ok_or(ArgsError::MissingScript)?;
        let dependencies = deps
            .iter()
            .map(|dep| {
                dep.parse()
                    .map_err(|_| ArgsError::InvalidDependency(dep.clone()))
            })
            .collect::<Result<Vec<u64>, _>>()?;
        Ok((dependencies, Utf8PathBuf::from(script)))
    }

    /// Config file path, falling back to the backend default.
    pub fn config_path(&self, default: &str) -> Utf8PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(default))
    }
}
