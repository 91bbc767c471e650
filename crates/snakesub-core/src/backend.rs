//! Scheduler backend seam.

use crate::metadata::JobScript;

/// One cluster scheduler backend.
///
/// Exactly two implementations exist, one per submission tool. Each binary
/// picks its backend at compile time, so every call is monomorphic; there
/// are no trait objects anywhere in the pipeline.
pub trait ClusterBackend {
    /// Key of this backend's section in the cluster config file.
    const GENERAL_SECTION: &'static str;

    /// Backend-wide settings shared by all rules.
    type General;

    /// Per-rule resource record.
    type Resources;

    /// Encode "wait for these jobs" in the scheduler's native syntax.
    /// An empty list encodes to the empty string.
    fn encode_dependencies(deps: &[u64]) -> String;

    /// Assemble the full submission command line. Building the string
    /// never touches the scheduler.
    fn build_command(
        job: &JobScript,
        general: &Self::General,
        resources: &Self::Resources,
    ) -> String;

    /// Recover the scheduler-assigned job id from the submission tool's
    /// combined output.
    fn extract_job_id(output: &str) -> Option<u64>;
}
