// file: src/catalog/description.rs
// version: 1.0.0
// guid: bde058ab-ab1f-4221-b6af-1c2e08bfb7d8

//! The command description record

use serde::{Deserialize, Serialize};

/// One entry of the command reference.
///
/// Fields are private so a record cannot change after construction. The
/// constructor does not validate: a blank title or snippet is reported by the
/// loader (as a configuration error) or by the card renderer (as an invalid
/// record), depending on where the record came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescription {
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(alias = "example", alias = "command")]
    snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl CommandDescription {
    /// Create a record from its two required fields
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            snippet: snippet.into(),
            category: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The literal command line, exactly as supplied
    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Name of the first required field that is missing, if any.
    ///
    /// A whitespace-only title counts as missing. The snippet only has to be
    /// non-empty since its whitespace is significant.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("title")
        } else if self.snippet.is_empty() {
            Some("snippet")
        } else {
            None
        }
    }

    /// Match against every text field, ignoring ASCII case.
    /// `needle_lower` must already be ASCII-lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        let hit = |s: &str| s.to_ascii_lowercase().contains(needle_lower);
        hit(&self.title)
            || self.description.as_deref().is_some_and(hit)
            || hit(&self.snippet)
            || self.category.as_deref().is_some_and(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_optional_fields() {
        let record = CommandDescription::new("Run", "docker run nginx")
            .with_description("Start a container")
            .with_category("Containers");

        assert_eq!(record.title(), "Run");
        assert_eq!(record.description(), Some("Start a container"));
        assert_eq!(record.snippet(), "docker run nginx");
        assert_eq!(record.category(), Some("Containers"));
    }

    #[test]
    fn test_missing_field_detection() {
        assert_eq!(CommandDescription::new("", "docker ps").missing_field(), Some("title"));
        assert_eq!(CommandDescription::new("   ", "docker ps").missing_field(), Some("title"));
        assert_eq!(CommandDescription::new("List", "").missing_field(), Some("snippet"));
        assert_eq!(CommandDescription::new("List", "docker ps").missing_field(), None);
    }

    #[test]
    fn test_snippet_aliases_deserialize() {
        let from_example: CommandDescription =
            serde_json::from_str(r#"{"title":"Ps","example":"docker ps -a"}"#).unwrap();
        let from_command: CommandDescription =
            serde_json::from_str(r#"{"title":"Ps","command":"docker ps -a"}"#).unwrap();

        assert_eq!(from_example.snippet(), "docker ps -a");
        assert_eq!(from_example, from_command);
        assert_eq!(from_example.description(), None);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let record = CommandDescription::new("Follow logs", "docker logs -f web")
            .with_category("Debugging");

        assert!(record.matches("logs"));
        assert!(record.matches("debug"));
        assert!(!record.matches("compose"));
    }
}
