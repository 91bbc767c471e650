//! sbatch command construction and banner parsing.

use crate::types::{SbatchGeneral, SbatchResources};
use snakesub_core::{ClusterBackend, JobScript};
use snakesub_parsers::last_token;

/// The Slurm backend, submitting through sbatch.
pub struct Slurm;

impl ClusterBackend for Slurm {
    const GENERAL_SECTION: &'static str = "sbatch_general";

    type General = SbatchGeneral;
    type Resources = SbatchResources;

    /// `-d afterok:5,afterok:7` — every id gets its own `afterok:` prefix,
    /// so the job is released only once all of them completed successfully.
    /// What happens to the job when a dependency fails is the scheduler's
    /// policy, not the adapter's.
    fn encode_dependencies(deps: &[u64]) -> String {
        if deps.is_empty() {
            return String::new();
        }
        let holds: Vec<String> = deps.iter().map(|id| format!("afterok:{id}")).collect();
        format!("-d {}", holds.join(","))
    }

    fn build_command(job: &JobScript, general: &SbatchGeneral, resources: &SbatchResources) -> String {
        let parts = [
            format!("sbatch --output={}", job.log_path("slurm.out")),
            Self::encode_dependencies(job.dependency_ids()),
            format!(
                "-A {} -p {} -n {} -t {} -J {}",
                general.account,
                resources.partition,
                resources.cores,
                resources.time_limit(),
                job.job_name()
            ),
            resources.extra_parameters.clone(),
            format!("{} '{}'", general.wrapper_script, job.path),
        ];
        parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// sbatch acknowledges with `Submitted batch job <id>`; the id is the
    /// last token.
    fn extract_job_id(output: &str) -> Option<u64> {
        last_token(output)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn job(outputs: Vec<&str>, dependencies: Option<Vec<u64>>) -> JobScript {
        JobScript {
            path: Utf8PathBuf::from(".snakemake/tmp.abc/snakejob.call.2.sh"),
            rule: "call".to_string(),
            inputs: vec!["aligned/s1.bam".to_string()],
            outputs: outputs.into_iter().map(String::from).collect(),
            dependencies,
        }
    }

    fn general() -> SbatchGeneral {
        SbatchGeneral {
            wrapper_script: "node_wrapper.sh".to_string(),
            account: "b2010001".to_string(),
        }
    }

    fn resources() -> SbatchResources {
        SbatchResources {
            partition: "core".to_string(),
            cores: 2,
            days: 0,
            hours: 12,
            minutes: 0,
            extra_parameters: String::new(),
        }
    }

    #[test]
    fn test_encode_dependencies_empty() {
        assert_eq!(Slurm::encode_dependencies(&[]), "");
    }

    #[test]
    fn test_encode_dependencies_prefixes_each_id() {
        assert_eq!(
            Slurm::encode_dependencies(&[5, 7]),
            "-d afterok:5,afterok:7"
        );
    }

    #[test]
    fn test_build_command() {
        let job = job(vec!["calls/s1.vcf"], Some(vec![11]));
        let cmd = Slurm::build_command(&job, &general(), &resources());
        assert_eq!(
            cmd,
            "sbatch --output=calls/s1.vcf-slurm.out -d afterok:11 \
             -A b2010001 -p core -n 2 -t 0-12:0:00 -J snakemake_call \
             node_wrapper.sh '.snakemake/tmp.abc/snakejob.call.2.sh'"
        );
    }

    #[test]
    fn test_build_command_fallback_log_name() {
        let job = job(vec![], None);
        let cmd = Slurm::build_command(&job, &general(), &resources());
        assert!(cmd.starts_with("sbatch --output=snakemake-call-slurm.out -A b2010001"));
    }

    #[test]
    fn test_build_command_with_extra_parameters() {
        let job = job(vec!["calls/s1.vcf"], None);
        let mut resources = resources();
        resources.extra_parameters = "--qos=short".to_string();
        let cmd = Slurm::build_command(&job, &general(), &resources);
        assert!(cmd.contains("-J snakemake_call --qos=short node_wrapper.sh"));
    }

    #[test]
    fn test_extract_job_id() {
        assert_eq!(Slurm::extract_job_id("Submitted batch job 98765"), Some(98765));
        assert_eq!(Slurm::extract_job_id("Submitted batch job 98765\n"), Some(98765));
    }

    #[test]
    fn test_extract_job_id_rejection() {
        assert_eq!(
            Slurm::extract_job_id("sbatch: error: invalid partition specified"),
            None
        );
        assert_eq!(Slurm::extract_job_id(""), None);
    }
}
