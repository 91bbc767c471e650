//! Slurm resource records.

use serde::Deserialize;

/// Backend-wide settings from the `sbatch_general` config section.
#[derive(Debug, Clone, Deserialize)]
pub struct SbatchGeneral {
    /// Wrapper script handed to sbatch ahead of the job script.
    pub wrapper_script: String,

    /// Account jobs are billed to.
    pub account: String,
}

/// Per-rule resources from a `schedule_*` config entry.
#[derive(Debug, Clone, Deserialize)]
pub struct SbatchResources {
    /// Target partition.
    pub partition: String,

    /// Cores requested with `-n`.
    pub cores: u32,

    /// Time limit, split the way the config file spells it.
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,

    /// Free-form flags appended to the command line.
    #[serde(default)]
    pub extra_parameters: String,
}

impl SbatchResources {
    /// Time limit in sbatch's `D-H:M:S` form, seconds pinned to zero.
    pub fn time_limit(&self) -> String {
        format!("{}-{}:{}:00", self.days, self.hours, self.minutes)
    }
}
