// file: src/surface/mod.rs
// version: 1.0.0
// guid: b5e353bd-9aec-413d-bbc4-a5f30602be98

//! Output surfaces for rendered command lists
//!
//! The text surface goes through an [`OutputWriter`] so the same layout can
//! be emitted plain or with ANSI styling. JSON and Markdown write straight to
//! an [`io::Write`].

pub mod markdown;
pub mod text;
pub mod writers;

pub use text::{write_cards, LayoutOptions};
pub use writers::{AnsiWriter, PlainWriter};

use crate::render::RenderedList;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Output format for the rendered reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TextStyle {
    pub fg: Option<colored::Color>,
    pub bold: bool,
    pub dim: bool,
}

impl TextStyle {
    pub fn plain() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug)]
pub struct Segment {
    pub text: String,
    pub style: TextStyle,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

pub trait OutputWriter {
    fn write_line(&mut self, segments: &[Segment]) -> io::Result<()>;

    fn write_blank(&mut self) -> io::Result<()> {
        self.write_line(&[])
    }
}

/// Write the list in the requested format.
///
/// `color` only affects the text format.
pub fn present(
    list: &RenderedList,
    format: OutputFormat,
    color: bool,
    options: &LayoutOptions,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Text if color => write_cards(list, &mut AnsiWriter::new(out), options)?,
        OutputFormat::Text => write_cards(list, &mut PlainWriter::new(out), options)?,
        OutputFormat::Markdown => markdown::write_markdown(list, out, options)?,
        OutputFormat::Json => write_json(list, out)?,
    }
    Ok(())
}

/// Pretty-printed JSON array followed by a newline
pub fn write_json(list: &RenderedList, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, list)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CommandDescription, CommandRegistry};
    use crate::render::CommandListView;

    #[test]
    fn test_json_keeps_snippet_escapes_exact() {
        let snippet = "docker run \\\n  -e HOME=${HOME} app";
        let registry = CommandRegistry::from_records(vec![CommandDescription::new("Run", snippet)]);
        let list = CommandListView::new().render(&registry).unwrap();

        let mut out = Vec::new();
        write_json(&list, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed[0]["snippet"], snippet);
    }

    #[test]
    fn test_empty_list_is_empty_json_array() {
        let mut out = Vec::new();
        present(
            &RenderedList::default(),
            OutputFormat::Json,
            false,
            &LayoutOptions::default(),
            &mut out,
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_output_format_names() {
        let format: OutputFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
