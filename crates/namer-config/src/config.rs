//! Resolved configuration snapshot.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Delegate namer used when no `chain` is configured
pub const DEFAULT_CHAIN: &str = "@parcel/namer-default";

/// Environment variable selecting extra profiles
pub const PROFILE_ENV_KEY: &str = "PARCEL_NAMER_REWRITE_PROFILE";

/// Older spelling of [`PROFILE_ENV_KEY`], still honoured with a warning
pub const PROFILE_ENV_KEY_DEPRECATED: &str = "PARCEL-NAMER-REWRITE-PROFILE";

/// When a content hash is injected into rewritten names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashingMode {
    /// Use the host hash reference when allowed, otherwise no hash
    #[default]
    #[serde(rename = "")]
    Default,
    /// Never put a hash into names
    Never,
    /// Compute a hash from asset contents when no host reference is used
    Always,
}

impl HashingMode {
    /// Parse a configured value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "" => Some(HashingMode::Default),
            "never" => Some(HashingMode::Never),
            "always" => Some(HashingMode::Always),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashingMode::Default => "",
            HashingMode::Never => "never",
            HashingMode::Always => "always",
        }
    }
}

/// One rewrite directive: a pattern and its replacement template.
#[derive(Debug, Clone)]
pub struct NamerRule {
    pub test: Regex,
    pub to: String,
}

impl NamerRule {
    /// True when the pattern matches anywhere in `name`
    pub fn matches(&self, name: &str) -> bool {
        self.test.is_match(name)
    }

    /// Replace the first match in `name` with the template.
    pub fn apply(&self, name: &str) -> String {
        self.test.replace(name, self.to.as_str()).into_owned()
    }
}

/// Which section contributed to a resolved config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "origin", content = "name", rename_all = "lowercase")]
pub enum SectionOrigin {
    Base,
    Profile(String),
}

/// Merged rewrite configuration.
///
/// Built once by [`crate::ConfigResolver`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub rules: Vec<NamerRule>,
    pub chain: String,
    pub disable: bool,
    pub hashing: HashingMode,
    pub silent: bool,
    pub use_parcel_hash: bool,
    pub skip_targets: BTreeSet<String>,
    pub profile_env_key: String,
    pub profile_env_key_deprecated: String,
    /// Sections merged into this config, in merge order
    pub sources: Vec<SectionOrigin>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            chain: DEFAULT_CHAIN.to_string(),
            disable: false,
            hashing: HashingMode::Default,
            silent: false,
            use_parcel_hash: true,
            skip_targets: BTreeSet::new(),
            profile_env_key: PROFILE_ENV_KEY.to_string(),
            profile_env_key_deprecated: PROFILE_ENV_KEY_DEPRECATED.to_string(),
            sources: Vec::new(),
        }
    }
}

impl Config {
    /// First rule whose pattern matches `name`, in merge order.
    pub fn select_rule(&self, name: &str) -> Option<&NamerRule> {
        self.rules.iter().find(|rule| rule.matches(name))
    }

    /// Whether the bundle target named `target` bypasses rewriting
    pub fn skips_target(&self, target: &str) -> bool {
        self.skip_targets.contains(target)
    }

    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            chain: self.chain.clone(),
            rules: self
                .rules
                .iter()
                .map(|rule| RuleSummary {
                    test: rule.test.as_str().to_string(),
                    to: rule.to.clone(),
                })
                .collect(),
            disable: self.disable,
            hashing: self.hashing,
            silent: self.silent,
            use_parcel_hash: self.use_parcel_hash,
            skip_targets: self.skip_targets.iter().cloned().collect(),
            profile_env_key: self.profile_env_key.clone(),
            sources: self.sources.clone(),
        }
    }
}

/// Serializable view of a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub test: String,
    pub to: String,
}

/// Serializable view of a [`Config`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub chain: String,
    pub rules: Vec<RuleSummary>,
    pub disable: bool,
    pub hashing: HashingMode,
    pub silent: bool,
    pub use_parcel_hash: bool,
    pub skip_targets: Vec<String>,
    pub profile_env_key: String,
    pub sources: Vec<SectionOrigin>,
}
