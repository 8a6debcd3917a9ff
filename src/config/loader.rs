// file: src/config/loader.rs
// version: 1.0.0
// guid: 9741b2fc-b4b4-4547-a794-99389d8244b0

//! Loading of command data files and the settings file

use super::Settings;
use crate::catalog::{CommandDescription, CommandRegistry};
use crate::error::ReferenceError;
use crate::Result;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Formats accepted for command data files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
    Toml,
}

impl SourceFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(SourceFormat::Yaml),
            Some("json") => Ok(SourceFormat::Json),
            Some("toml") => Ok(SourceFormat::Toml),
            _ => Err(ReferenceError::config(format!(
                "Unsupported command file {}: expected .yaml, .yml, .json or .toml",
                path.display()
            ))),
        }
    }
}

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load a command registry from a YAML, JSON or TOML file.
    ///
    /// The file is not environment-expanded: snippets keep `${VAR}` as written.
    pub fn load_registry<P: AsRef<Path>>(&self, path: P) -> Result<CommandRegistry> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            ReferenceError::config(format!(
                "Failed to read command file {}: {}",
                path.display(),
                e
            ))
        })?;

        let registry = parse_registry(&content, format, &path.display().to_string())?;
        info!("Loaded {} commands from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// Load and check a settings file, expanding `${VAR}` references
    pub fn load_settings<P: AsRef<Path>>(&self, path: P) -> Result<Settings> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ReferenceError::config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let invalid = |e: toml::de::Error| {
            ReferenceError::config(format!("Invalid settings file {}: {}", path.display(), e))
        };

        // Expand inside string values only, so comments are never substituted
        let mut document: toml::Value = toml::from_str(&content).map_err(invalid)?;
        self.expand_env_vars(&mut document)?;

        let settings: Settings = document.try_into().map_err(invalid)?;
        settings.check()?;

        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings from `explicit` if given (it must exist), otherwise from the
    /// default location if present, otherwise defaults.
    pub fn discover_settings(&self, explicit: Option<&Path>) -> Result<Settings> {
        if let Some(path) = explicit {
            return self.load_settings(path);
        }
        match Settings::default_path() {
            Some(path) if path.is_file() => self.load_settings(path),
            _ => {
                debug!("No settings file found, using defaults");
                Ok(Settings::default())
            }
        }
    }

    /// Expand environment variables in every string value of a settings document
    fn expand_env_vars(&self, document: &mut toml::Value) -> Result<()> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ReferenceError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut missing_vars = Vec::new();
        self.expand_value(&re, document, &mut missing_vars);

        if !missing_vars.is_empty() {
            return Err(ReferenceError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(())
    }

    fn expand_value(&self, re: &Regex, value: &mut toml::Value, missing_vars: &mut Vec<String>) {
        match value {
            toml::Value::String(text) => *text = self.substitute(re, text, missing_vars),
            toml::Value::Array(items) => {
                for item in items {
                    self.expand_value(re, item, missing_vars);
                }
            }
            toml::Value::Table(table) => {
                for (_, item) in table.iter_mut() {
                    self.expand_value(re, item, missing_vars);
                }
            }
            _ => {}
        }
    }

    fn substitute(&self, re: &Regex, content: &str, missing_vars: &mut Vec<String>) -> String {
        re.replace_all(content, |cap: &regex::Captures<'_>| {
            match self.env_vars.get(&cap[1]) {
                Some(value) => value.clone(),
                None => {
                    missing_vars.push(cap[1].to_string());
                    cap[0].to_string()
                }
            }
        })
        .into_owned()
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse command data in the given format.
///
/// The document is either a list of records or a table holding a `commands`
/// list. Any malformed record fails the whole load; `origin` names the source
/// in error messages.
pub fn parse_registry(content: &str, format: SourceFormat, origin: &str) -> Result<CommandRegistry> {
    let document: Value = match format {
        SourceFormat::Yaml => serde_yaml::from_str(content).map_err(|e| malformed(origin, e))?,
        SourceFormat::Json => serde_json::from_str(content).map_err(|e| malformed(origin, e))?,
        SourceFormat::Toml => toml::from_str(content).map_err(|e| malformed(origin, e))?,
    };

    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut table) => match table.remove("commands") {
            Some(Value::Array(items)) => items,
            Some(_) => return Err(malformed(origin, "`commands` must be a list")),
            None => return Err(malformed(origin, NOT_A_LIST)),
        },
        _ => return Err(malformed(origin, NOT_A_LIST)),
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        let record: CommandDescription = serde_json::from_value(item).map_err(|e| {
            ReferenceError::config(format!("{}: record {}: {}", origin, i, e))
        })?;
        if let Some(field) = record.missing_field() {
            return Err(ReferenceError::config(format!(
                "{}: record {}: `{}` is missing or empty",
                origin, i, field
            )));
        }
        records.push(record);
    }

    Ok(CommandRegistry::from_records(records))
}

const NOT_A_LIST: &str = "expected a list of commands or a `commands` list";

fn malformed(origin: &str, reason: impl std::fmt::Display) -> ReferenceError {
    ReferenceError::config(format!("Malformed command file {}: {}", origin, reason))
}
