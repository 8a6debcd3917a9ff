// file: src/surface/text.rs
// version: 1.0.0
// guid: 3d8c45ca-dd7a-4934-9eef-4525088438cc

//! Terminal layout: one card per block, blank line between cards

use super::{OutputWriter, Segment, TextStyle};
use crate::render::{RenderedCard, RenderedList};
use std::io;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No commands to display.";

#[derive(Clone, Debug)]
pub struct LayoutOptions {
    /// Spaces before each snippet line
    pub indent: usize,
    /// Print a header per category instead of a badge per card
    pub grouped: bool,
    /// Shown instead of cards when the list is empty
    pub empty_message: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            grouped: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

pub fn write_cards<W>(list: &RenderedList, writer: &mut W, options: &LayoutOptions) -> io::Result<()>
where
    W: OutputWriter + ?Sized,
{
    if list.is_empty() {
        return writer.write_line(&[Segment::new(&options.empty_message, dim())]);
    }

    if !options.grouped {
        for (i, card) in list.iter().enumerate() {
            if i > 0 {
                writer.write_blank()?;
            }
            write_card(card, writer, options, true)?;
        }
        return Ok(());
    }

    for (group_index, group) in list.grouped().iter().enumerate() {
        if group_index > 0 {
            writer.write_blank()?;
        }
        let header = TextStyle {
            fg: Some(colored::Color::Blue),
            bold: true,
            dim: false,
        };
        writer.write_line(&[Segment::new(group.label, header)])?;
        writer.write_blank()?;

        for (i, card) in group.cards.iter().enumerate() {
            if i > 0 {
                writer.write_blank()?;
            }
            write_card(card, writer, options, false)?;
        }
    }

    Ok(())
}

fn write_card<W>(
    card: &RenderedCard,
    writer: &mut W,
    options: &LayoutOptions,
    badge: bool,
) -> io::Result<()>
where
    W: OutputWriter + ?Sized,
{
    let title_style = TextStyle {
        bold: true,
        ..TextStyle::plain()
    };
    let mut title = vec![Segment::new(&card.title, title_style)];
    if let Some(category) = card.category.as_deref().filter(|_| badge) {
        title.push(Segment::new(format!("  [{category}]"), dim()));
    }
    writer.write_line(&title)?;

    if !card.description.is_empty() {
        writer.write_line(&[Segment::new(&card.description, TextStyle::plain())])?;
    }

    // Indent is added per line; the line content itself is untouched.
    let indent = " ".repeat(options.indent);
    let snippet_style = TextStyle {
        fg: Some(colored::Color::Green),
        ..TextStyle::plain()
    };
    let snippet = card.snippet.strip_suffix('\n').unwrap_or(&card.snippet);
    for line in snippet.split('\n') {
        writer.write_line(&[
            Segment::new(indent.as_str(), TextStyle::plain()),
            Segment::new(line, snippet_style),
        ])?;
    }

    Ok(())
}

fn dim() -> TextStyle {
    TextStyle {
        dim: true,
        ..TextStyle::plain()
    }
}
