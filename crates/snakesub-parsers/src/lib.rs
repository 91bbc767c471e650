//! Shared helpers for driving scheduler submission tools.
//!
//! Used by both snakesub-gridengine and snakesub-slurm to execute the
//! built command line and to pick the job id out of the tool's banner
//! text.

pub mod command;

pub use command::{run_submission, CommandError};

/// N-th whitespace-delimited token of the captured output, 0-based.
pub fn nth_token(text: &str, index: usize) -> Option<&str> {
    text.split_whitespace().nth(index)
}

/// Last whitespace-delimited token of the captured output.
pub fn last_token(text: &str) -> Option<&str> {
    text.split_whitespace().last()
}
