//! Slurm backend for snakesub.
//!
//! Submit jobs through sbatch and parse its acknowledgement banner.

pub mod command;
pub mod types;

pub use command::Slurm;
pub use types::{SbatchGeneral, SbatchResources};
