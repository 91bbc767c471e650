//! Submission driver shared by the snakesub binaries.

pub mod submit;

pub use submit::{SubmitError, run};
