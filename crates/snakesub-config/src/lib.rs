//! Cluster configuration for snakesub.
//!
//! A single JSON file maps `schedule_<rule>` keys to resource records (or
//! to another `schedule_*` key, as a one-hop alias) and carries one general
//! section per backend. The loaded table is passed explicitly wherever it
//! is needed; nothing here is ambient state.

pub mod store;
pub mod types;

pub use store::ConfigError;
pub use types::{ClusterConfig, ResolveError, RuleEntry, SCHEDULE_PREFIX};
