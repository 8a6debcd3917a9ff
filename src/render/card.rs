// file: src/render/card.rs
// version: 1.0.0
// guid: 71713e73-c1a0-47dd-a7c6-4eede97408bc

//! Per-record rendering

use crate::catalog::CommandDescription;
use crate::error::ReferenceError;
use crate::Result;
use serde::Serialize;

/// Display-ready form of one command description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCard {
    pub title: String,
    /// Empty when the record has no description
    pub description: String,
    /// Byte-identical copy of the record's snippet
    pub snippet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Maps one record to one card. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandCardRenderer;

impl CommandCardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render a single record, failing if `title` or `snippet` is missing
    pub fn render(&self, record: &CommandDescription) -> Result<RenderedCard> {
        if let Some(field) = record.missing_field() {
            return Err(ReferenceError::invalid_record(field));
        }

        Ok(RenderedCard {
            title: record.title().to_string(),
            description: record.description().unwrap_or_default().to_string(),
            snippet: record.snippet().to_string(),
            category: record.category().map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_minimal_record() {
        let renderer = CommandCardRenderer::new();
        let card = renderer
            .render(&CommandDescription::new("Build", "docker build -t app ."))
            .unwrap();

        assert_eq!(
            card,
            RenderedCard {
                title: "Build".to_string(),
                description: String::new(),
                snippet: "docker build -t app .".to_string(),
                category: None,
            }
        );
    }

    #[test]
    fn test_snippet_whitespace_is_preserved() {
        let snippet = "  docker run \\\n\t-p 80:80 \\\r\n  nginx  \n";
        let card = CommandCardRenderer::new()
            .render(&CommandDescription::new("Run", snippet))
            .unwrap();

        assert_eq!(card.snippet.as_bytes(), snippet.as_bytes());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let result = CommandCardRenderer::new().render(&CommandDescription::new("", "docker ps"));

        assert!(matches!(
            result,
            Err(ReferenceError::InvalidRecord { index: None, field: "title" })
        ));
    }

    #[test]
    fn test_empty_snippet_is_rejected() {
        let result = CommandCardRenderer::new().render(&CommandDescription::new("Ps", ""));

        assert!(matches!(
            result,
            Err(ReferenceError::InvalidRecord { field: "snippet", .. })
        ));
    }

    #[test]
    fn test_equal_inputs_render_equal_cards() {
        let record = CommandDescription::new("Logs", "docker logs web").with_description("Tail");
        let renderer = CommandCardRenderer::new();

        assert_eq!(renderer.render(&record).unwrap(), renderer.render(&record.clone()).unwrap());
    }
}
