//! Grid-engine backend for snakesub.
//!
//! Submit jobs through qsub and parse its acknowledgement banner.

pub mod command;
pub mod types;

pub use command::GridEngine;
pub use types::{QsubGeneral, QsubResources};
