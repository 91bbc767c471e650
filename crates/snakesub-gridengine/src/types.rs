//! Grid-engine resource records.

use serde::Deserialize;

/// Backend-wide settings from the `qsub_general` config section.
#[derive(Debug, Clone, Deserialize)]
pub struct QsubGeneral {
    /// Wrapper script handed to qsub ahead of the job script.
    pub wrapper_script: String,
}

/// Per-rule resources from a `schedule_*` config entry.
#[derive(Debug, Clone, Deserialize)]
pub struct QsubResources {
    /// Target queue.
    pub queue: String,

    /// Slots requested in the smp parallel environment.
    pub threads: u32,

    /// Free-form flags appended to the command line.
    #[serde(default)]
    pub extra_parameters: String,
}
