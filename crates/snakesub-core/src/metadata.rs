//! Snakemake job script metadata.
//!
//! Snakemake generates one shell script per cluster job and embeds the
//! job's properties as a `# properties = {...}` JSON line near the top of
//! the script. That line is the only thing the adapter reads back out.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

/// Marker snakemake writes ahead of the properties JSON in every script.
const PROPERTIES_PREFIX: &str = "# properties";

/// Job properties embedded in a snakemake job script.
#[derive(Debug, Clone, Deserialize)]
pub struct JobProperties {
    /// Rule name
    pub rule: String,

    /// Input files
    #[serde(default)]
    pub input: Vec<String>,

    /// Output files
    #[serde(default)]
    pub output: Vec<String>,
}

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no job properties found in {0}")]
    MissingProperties(Utf8PathBuf),
}

/// A snakemake-generated job script together with the dependency ids the
/// engine passed for it. Built once per invocation, never mutated.
#[derive(Debug, Clone)]
pub struct JobScript {
    /// Path to the generated script, passed through to the scheduler.
    pub path: Utf8PathBuf,

    /// Rule this job instantiates.
    pub rule: String,

    /// Declared input files.
    pub inputs: Vec<String>,

    /// Declared output files.
    pub outputs: Vec<String>,

    /// Ids of previously submitted jobs this one waits on. `None` means
    /// the job has no dependency; a `Some` list is never empty.
    pub dependencies: Option<Vec<u64>>,
}

impl JobScript {
    /// Read a generated job script and its embedded properties.
    ///
    /// An empty dependency list is normalized to "no dependency".
    pub fn from_script(path: &Utf8Path, dependencies: Vec<u64>) -> Result<Self, MetadataError> {
        let content = std::fs::read_to_string(path)?;
        let json = properties_json(&content)
            .ok_or_else(|| MetadataError::MissingProperties(path.to_owned()))?;
        let props: JobProperties = serde_json::from_str(json)?;

        Ok(Self {
            path: path.to_owned(),
            rule: props.rule,
            inputs: props.input,
            outputs: props.output,
            dependencies: (!dependencies.is_empty()).then_some(dependencies),
        })
    }

    /// Dependency ids as a flat slice, empty when the job has none.
    pub fn dependency_ids(&self) -> &[u64] {
        self.dependencies.as_deref().unwrap_or_default()
    }

    /// Scheduler-facing job name.
    pub fn job_name(&self) -> String {
        format!("snakemake_{}", self.rule)
    }

    /// Log file name with the given backend suffix.
    ///
    /// Derived from the first declared output when there is one, otherwise
    /// a rule-derived fallback in the working directory.
    pub fn log_path(&self, suffix: &str) -> String {
        match self.outputs.first() {
            Some(output) => format!("{output}-{suffix}"),
            None => format!("snakemake-{}-{suffix}", self.rule),
        }
    }
}

/// Find the JSON payload of the `# properties = {...}` line.
fn properties_json(script: &str) -> Option<&str> {
    script
        .lines()
        .find(|line| line.trim_start().starts_with(PROPERTIES_PREFIX))
        .and_then(|line| line.split_once('='))
        .map(|(_, json)| json.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_script(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn script_path(file: &NamedTempFile) -> &Utf8Path {
        Utf8Path::from_path(file.path()).unwrap()
    }

    #[test]
    fn test_from_script() {
        let file = write_script(
            "#!/bin/sh\n\
             # properties = {\"type\": \"single\", \"rule\": \"align\", \
             \"input\": [\"reads/s1.fq\"], \"output\": [\"aligned/s1.bam\"]}\n\
             echo align\n",
        );

        let job = JobScript::from_script(script_path(&file), vec![5, 7]).unwrap();
        assert_eq!(job.rule, "align");
        assert_eq!(job.inputs, vec!["reads/s1.fq"]);
        assert_eq!(job.outputs, vec!["aligned/s1.bam"]);
        assert_eq!(job.dependency_ids(), &[5, 7]);
    }

    #[test]
    fn test_empty_dependencies_normalized() {
        let file = write_script("# properties = {\"rule\": \"all\"}\n");
        let job = JobScript::from_script(script_path(&file), vec![]).unwrap();
        assert!(job.dependencies.is_none());
        assert!(job.dependency_ids().is_empty());
    }

    #[test]
    fn test_missing_properties_line() {
        let file = write_script("#!/bin/sh\necho no metadata here\n");
        let err = JobScript::from_script(script_path(&file), vec![]).unwrap_err();
        assert!(matches!(err, MetadataError::MissingProperties(_)));
    }

    #[test]
    fn test_properties_without_rule() {
        let file = write_script("# properties = {\"input\": []}\n");
        let err = JobScript::from_script(script_path(&file), vec![]).unwrap_err();
        assert!(matches!(err, MetadataError::Json(_)));
    }

    #[test]
    fn test_job_name() {
        let job = JobScript {
            path: Utf8PathBuf::from("snakejob.align.1.sh"),
            rule: "align".to_string(),
            inputs: vec![],
            outputs: vec![],
            dependencies: None,
        };
        assert_eq!(job.job_name(), "snakemake_align");
    }

    #[test]
    fn test_log_path_from_first_output() {
        let job = JobScript {
            path: Utf8PathBuf::from("snakejob.align.1.sh"),
            rule: "align".to_string(),
            inputs: vec![],
            outputs: vec!["aligned/s1.bam".to_string(), "aligned/s1.bai".to_string()],
            dependencies: None,
        };
        assert_eq!(job.log_path("qsub.out"), "aligned/s1.bam-qsub.out");
    }

    #[test]
    fn test_log_path_fallback_without_outputs() {
        let job = JobScript {
            path: Utf8PathBuf::from("snakejob.all.1.sh"),
            rule: "all".to_string(),
            inputs: vec![],
            outputs: vec![],
            dependencies: None,
        };
        assert_eq!(job.log_path("slurm.out"), "snakemake-all-slurm.out");
    }
}
