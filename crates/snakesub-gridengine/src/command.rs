//! qsub command construction and banner parsing.

use crate::types::{QsubGeneral, QsubResources};
use snakesub_core::{ClusterBackend, JobScript};
use snakesub_parsers::nth_token;

/// The grid-engine backend, submitting through qsub.
pub struct GridEngine;

impl ClusterBackend for GridEngine {
    const GENERAL_SECTION: &'static str = "qsub_general";

    type General = QsubGeneral;
    type Resources = QsubResources;

    /// `-hold_jid 5,7` — one comma-joined hold list, released when every
    /// listed job has left the queue.
    fn encode_dependencies(deps: &[u64]) -> String {
        if deps.is_empty() {
            return String::new();
        }
        let ids: Vec<String> = deps.iter().map(|id| id.to_string()).collect();
        format!("-hold_jid {}", ids.join(","))
    }

    fn build_command(job: &JobScript, general: &QsubGeneral, resources: &QsubResources) -> String {
        let parts = [
            format!(
                "qsub -o {} -e {}",
                job.log_path("qsub.out"),
                job.log_path("qsub.err")
            ),
            Self::encode_dependencies(job.dependency_ids()),
            format!(
                "-q {} -pe smp {} -N {}",
                resources.queue,
                resources.threads,
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

    /// qsub acknowledges with `Your job <id> ("<name>") has been
    /// submitted`; the id is the third token.
    fn extract_job_id(output: &str) -> Option<u64> {
        nth_token(output, 2)?.parse().ok()
    }
}
