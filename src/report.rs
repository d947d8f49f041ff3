//! Diagnostic reports printed by the CLI.

use chrono::{DateTime, Utc};
use namer_config::{Config, ConfigSummary, HashingMode};
use serde::{Deserialize, Serialize};

use crate::placeholder::{has_hash_placeholder, resolve_hash_placeholder};

/// Schema identifier for config reports
pub const CONFIG_REPORT_SCHEMA_ID: &str = "namer-rewrite/config_report@1";

/// Schema identifier for explain reports
pub const EXPLAIN_REPORT_SCHEMA_ID: &str = "namer-rewrite/explain_report@1";

/// Resolved configuration with where it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigReport {
    pub schema_id: String,
    pub created_at: DateTime<Utc>,
    /// Manifest the configuration was read from
    pub manifest: String,
    pub profiles_requested: Vec<String>,
    pub config: ConfigSummary,
}

impl ConfigReport {
    pub fn new(manifest: String, profiles_requested: Vec<String>, config: &Config) -> Self {
        Self {
            schema_id: CONFIG_REPORT_SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            manifest,
            profiles_requested,
            config: config.summary(),
        }
    }
}

/// How a single name would be rewritten
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExplainReport {
    pub schema_id: String,
    pub name: String,
    /// Index and pattern of the selected rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_test: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_to: Option<String>,
    pub has_placeholder: bool,
    pub rewritten: String,
}

impl ExplainReport {
    /// Explain the rewrite of `name` with a given `hash`, without a delegate
    /// or bundle. `hashing: never` drops the hash.
    pub fn explain(config: &Config, name: &str, hash: &str) -> Self {
        let hash = if config.hashing == HashingMode::Never { "" } else { hash };
        let selected = config
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(name));

        match selected {
            Some((index, rule)) => {
                let replaced = rule.apply(name);
                Self {
                    schema_id: EXPLAIN_REPORT_SCHEMA_ID.to_string(),
                    name: name.to_string(),
                    rule_index: Some(index),
                    rule_test: Some(rule.test.as_str().to_string()),
                    rule_to: Some(rule.to.clone()),
                    has_placeholder: has_hash_placeholder(&replaced),
                    rewritten: resolve_hash_placeholder(&replaced, hash),
                }
            }
            None => Self {
                schema_id: EXPLAIN_REPORT_SCHEMA_ID.to_string(),
                name: name.to_string(),
                rule_index: None,
                rule_test: None,
                rule_to: None,
                has_placeholder: false,
                rewritten: name.to_string(),
            },
        }
    }

    /// Human-readable rendering
    pub fn format_human(&self) -> String {
        match (&self.rule_index, &self.rule_test, &self.rule_to) {
            (Some(index), Some(test), Some(to)) => format!(
                "{}\n  rule #{} /{}/ -> {}\n  result: {}",
                self.name, index, test, to, self.rewritten
            ),
            _ => format!("{}\n  no matching rule\n  result: {}", self.name, self.rewritten),
        }
    }
}
