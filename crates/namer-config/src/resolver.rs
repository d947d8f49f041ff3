//! Loading and merging the `package.json` configuration section.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::{Config, SectionOrigin, DEFAULT_CHAIN};
use crate::error::ConfigError;
use crate::log::LogSink;
use crate::section::{apply_section, truthy};

/// Top-level `package.json` key holding the configuration
pub const PACKAGE_JSON_SECTION: &str = "parcel-namer-rewrite";

/// Resolves a [`Config`] from a project folder.
pub struct ConfigResolver<'a> {
    env: &'a BTreeMap<String, String>,
    default_profiles: &'a [String],
    sink: &'a dyn LogSink,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(
        env: &'a BTreeMap<String, String>,
        default_profiles: &'a [String],
        sink: &'a dyn LogSink,
    ) -> Self {
        Self {
            env,
            default_profiles,
            sink,
        }
    }

    /// Read `<root>/package.json` and resolve its configuration section.
    pub fn resolve(&self, root: &Path) -> Result<Config, ConfigError> {
        let path = root.join("package.json");
        let contents = fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let manifest: Value = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        self.resolve_manifest(&manifest)
    }

    /// Resolve configuration from an already parsed manifest.
    pub fn resolve_manifest(&self, manifest: &Value) -> Result<Config, ConfigError> {
        let section = match manifest.get(PACKAGE_JSON_SECTION) {
            Some(section) if truthy(section) => section,
            _ => {
                self.sink.warn(&format!(
                    "no \"{PACKAGE_JSON_SECTION}\" section in package.json. Use no-rules config"
                ));
                return Ok(Config::default());
            }
        };
        let section = section
            .as_object()
            .ok_or_else(|| ConfigError::InvalidSection {
                section: PACKAGE_JSON_SECTION.to_string(),
            })?;

        // Chain stays empty until a section sets it.
        let mut config = Config {
            chain: String::new(),
            ..Config::default()
        };
        apply_section(&mut config, section, SectionOrigin::Base, self.sink)?;

        let profile_names = self.profile_names(&config);
        if let Some(profiles) = section.get("profiles").and_then(Value::as_object) {
            self.apply_profiles(&mut config, profiles, &profile_names)?;
        }

        if config.chain.is_empty() {
            config.chain = DEFAULT_CHAIN.to_string();
            self.sink.info(&format!(
                "Delegate namer is not configured. Use default \"{DEFAULT_CHAIN}\""
            ));
        }
        if config.rules.is_empty() {
            self.sink.info("Rewrite rules are empty");
        }

        Ok(config)
    }

    /// Comma-joined profile names: defaults first, then the deprecated and
    /// current environment keys.
    fn profile_names(&self, config: &Config) -> String {
        let mut names = String::new();

        if !self.default_profiles.is_empty() {
            names.push(',');
            names.push_str(&self.default_profiles.join(","));
        }

        let deprecated = self
            .env
            .get(&config.profile_env_key_deprecated)
            .filter(|_| config.profile_env_key_deprecated != config.profile_env_key);
        if let Some(value) = deprecated {
            self.sink.warn(&format!(
                "Environment variable \"{}\" is deprecated, use \"{}\" instead",
                config.profile_env_key_deprecated, config.profile_env_key
            ));
            names.push(',');
            names.push_str(value);
        }

        if let Some(value) = self.env.get(&config.profile_env_key) {
            names.push(',');
            names.push_str(value);
        }

        names
    }

    fn apply_profiles(
        &self,
        config: &mut Config,
        profiles: &Map<String, Value>,
        names: &str,
    ) -> Result<(), ConfigError> {
        for name in names.split(',') {
            let Some(profile) = profiles.get(name).filter(|p| truthy(p)) else {
                continue;
            };
            let profile = profile
                .as_object()
                .ok_or_else(|| ConfigError::InvalidSection {
                    section: format!("profiles.{name}"),
                })?;

            tracing::debug!(profile = name, "applying profile");
            apply_section(
                config,
                profile,
                SectionOrigin::Profile(name.to_string()),
                self.sink,
            )?;
        }
        Ok(())
    }
}
