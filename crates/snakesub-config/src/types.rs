//! Configuration table types and rule resolution.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Prefix of every per-rule key in the config file.
pub const SCHEDULE_PREFIX: &str = "schedule_";

/// One `schedule_*` entry: either a concrete resource record or the name
/// of another `schedule_*` key to use instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RuleEntry<R> {
    /// Alias of another rule's entry. Followed for one hop only.
    Redirect(String),
    /// Concrete resource record.
    Resources(R),
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No schedule config found for {0}")]
    UndefinedJobRule(String),
    #[error("{key} redirects to {target}, which is itself a redirect")]
    NestedRedirect { key: String, target: String },
}

/// Loaded cluster configuration for one backend.
///
/// `G` is the backend's general section, `R` its per-rule resource record.
#[derive(Debug, Clone)]
pub struct ClusterConfig<G, R> {
    /// Backend-wide settings.
    pub general: G,

    /// `schedule_*` entries keyed by their full config key.
    pub rules: HashMap<String, RuleEntry<R>>,
}

impl<G, R> ClusterConfig<G, R> {
    /// Resolve the effective resource record for a rule.
    ///
    /// Looks up `schedule_<rule>` and follows at most one redirect. A
    /// redirect target must be a concrete record; a missing target fails
    /// naming the target, and a second-level redirect is rejected outright.
    pub fn resolve(&self, rule: &str) -> Result<&R, ResolveError> {
        let key = format!("{SCHEDULE_PREFIX}{rule}");
        match self.rules.get(&key) {
            None => Err(ResolveError::UndefinedJobRule(key)),
            Some(RuleEntry::Resources(resources)) => Ok(resources),
            Some(RuleEntry::Redirect(target)) => match self.rules.get(target) {
                None => Err(ResolveError::UndefinedJobRule(target.clone())),
                Some(RuleEntry::Resources(resources)) => Ok(resources),
                Some(RuleEntry::Redirect(_)) => Err(ResolveError::NestedRedirect {
                    key,
                    target: target.clone(),
                }),
            },
        }
    }
}
