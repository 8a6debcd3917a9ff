// file: src/config/settings.rs
// version: 1.0.0
// guid: 1ddf4f64-d21b-4e86-9602-d194faac8985

//! User settings read from `config.toml`

use crate::error::ReferenceError;
use crate::surface::text::DEFAULT_EMPTY_MESSAGE;
use crate::surface::{LayoutOptions, OutputFormat};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Directory name under the platform config dir
pub const APP_DIR: &str = "docker-reference";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    #[validate(nested)]
    pub display: DisplaySettings,
    pub source: SourceSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DisplaySettings {
    pub format: OutputFormat,
    pub color: ColorChoice,
    pub group_by_category: bool,
    #[validate(range(max = 16))]
    pub indent: usize,
    #[validate(length(min = 1))]
    pub empty_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Command data file; the bundled table is used when unset
    pub path: Option<String>,
}

/// When to style terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide whether to color, given whether stdout is a terminal.
    /// `Auto` also honours `NO_COLOR`.
    pub fn enabled(&self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: ColorChoice::Auto,
            group_by_category: false,
            indent: 4,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl Settings {
    /// `<config_dir>/docker-reference/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Check value ranges after parsing
    pub fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| ReferenceError::config(format!("Invalid settings: {}", e)))
    }

    /// `source.path` with `~` and `$VAR` expanded
    pub fn source_path(&self) -> Result<Option<PathBuf>> {
        self.source
            .path
            .as_deref()
            .map(expand_path)
            .transpose()
    }

    pub fn layout(&self) -> LayoutOptions {
        LayoutOptions {
            indent: self.display.indent,
            grouped: self.display.group_by_category,
            empty_message: self.display.empty_message.clone(),
        }
    }
}

/// Expand `~` and environment variables in a user-supplied path
pub fn expand_path(raw: &str) -> Result<PathBuf> {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| ReferenceError::config(format!("Cannot expand path {}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.check().is_ok());
        assert_eq!(settings.display.indent, 4);
        assert_eq!(settings.display.format, OutputFormat::Text);
        assert_eq!(settings.source_path().unwrap(), None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[display]
format = "markdown"
group_by_category = true
"#,
        )
        .unwrap();

        assert_eq!(settings.display.format, OutputFormat::Markdown);
        assert!(settings.display.group_by_category);
        assert_eq!(settings.display.color, ColorChoice::Auto);
        assert_eq!(settings.display.empty_message, DEFAULT_EMPTY_MESSAGE);
    }

    #[test]
    fn test_out_of_range_indent_fails_check() {
        let mut settings = Settings::default();
        settings.display.indent = 40;

        let err = settings.check().unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }

    #[test]
    fn test_empty_message_must_not_be_empty() {
        let mut settings = Settings::default();
        settings.display.empty_message.clear();
        assert!(settings.check().is_err());
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
    }

    #[test]
    fn test_layout_follows_display_settings() {
        let mut settings = Settings::default();
        settings.display.indent = 2;
        settings.display.group_by_category = true;

        let layout = settings.layout();
        assert_eq!(layout.indent, 2);
        assert!(layout.grouped);
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(
            expand_path("/srv/commands.yaml").unwrap(),
            PathBuf::from("/srv/commands.yaml")
        );
    }
}
