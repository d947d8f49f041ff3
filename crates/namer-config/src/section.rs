//! Applying one configuration section to a [`Config`].
//!
//! Every field is optional: keys absent from a section leave the previous
//! value alone, with one exception. `silent` is recomputed from each section
//! on its own, so a later section without `silent` switches logging back on.

use regex_lite::Regex;
use serde_json::{Map, Value};

use crate::config::{Config, HashingMode, NamerRule, SectionOrigin};
use crate::error::ConfigError;
use crate::log::LogSink;

/// Keys that used to exist and now abort loading, with the profile setting
/// that replaces them.
const RETIRED_KEYS: &[(&str, &str)] = &[
    ("developmentHashing", "{\"hashing\": \"never\"}"),
    ("developmentDisable", "{\"disable\": true}"),
];

/// JavaScript truthiness of a JSON value.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn string_field(section: &Map<String, Value>, key: &str) -> Result<Option<String>, ConfigError> {
    match section.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ConfigError::InvalidType {
            key: key.to_string(),
            expected: "a string",
        }),
    }
}

/// Merge `section` into `config`.
pub(crate) fn apply_section(
    config: &mut Config,
    section: &Map<String, Value>,
    origin: SectionOrigin,
    sink: &dyn LogSink,
) -> Result<(), ConfigError> {
    for (key, replacement) in RETIRED_KEYS {
        if section.contains_key(*key) {
            return Err(ConfigError::retired(key, replacement));
        }
    }

    if let Some(key) = string_field(section, "profile-env-key")? {
        config.profile_env_key = key;
    }

    if let Some(chain) = string_field(section, "chain")? {
        config.chain = chain;
    }

    config.silent = section.get("silent").map(truthy).unwrap_or(false);

    if let Some(value) = section.get("useParcelHash") {
        config.use_parcel_hash = truthy(value);
    }

    if let Some(rules) = section.get("rules") {
        let rules = rules.as_object().ok_or_else(|| ConfigError::InvalidType {
            key: "rules".to_string(),
            expected: "an object of pattern to replacement strings",
        })?;
        append_rules(config, rules, sink)?;
    }

    if let Some(value) = section.get("hashing") {
        config.hashing = match value.as_str().and_then(HashingMode::parse) {
            Some(mode) => mode,
            None => {
                sink.warn(&format!(
                    "Unknown \"hashing\" value {value}, expected \"never\", \"always\" or \"\". Use default hashing"
                ));
                HashingMode::Default
            }
        };
    }

    if let Some(value) = section.get("disable") {
        config.disable = truthy(value);
    }

    if let Some(value) = section.get("skipTargets") {
        config.skip_targets = parse_skip_targets(value)?;
    }

    config.sources.push(origin);
    Ok(())
}

fn append_rules(
    config: &mut Config,
    rules: &Map<String, Value>,
    sink: &dyn LogSink,
) -> Result<(), ConfigError> {
    for (pattern, target) in rules {
        let Some(to) = target.as_str() else {
            sink.warn(&format!("No \"to\" rule for test \"{pattern}\""));
            continue;
        };

        let test = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;

        config.rules.push(NamerRule {
            test,
            to: to.to_string(),
        });
    }
    Ok(())
}

fn parse_skip_targets(value: &Value) -> Result<std::collections::BTreeSet<String>, ConfigError> {
    let invalid = || ConfigError::InvalidType {
        key: "skipTargets".to_string(),
        expected: "an array of target names",
    };

    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}
