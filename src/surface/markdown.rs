// file: src/surface/markdown.rs
// version: 1.0.0
// guid: f2a85102-a50c-454c-9ce8-e2204f0a0cfa

//! Markdown export

use super::LayoutOptions;
use crate::render::{RenderedCard, RenderedList};
use std::io::{self, Write};

/// Write the list as Markdown, one heading and fenced block per card.
///
/// Grouped output uses `##` for categories and `###` for cards.
pub fn write_markdown(list: &RenderedList, out: &mut dyn Write, options: &LayoutOptions) -> io::Result<()> {
    if list.is_empty() {
        return writeln!(out, "_{}_", options.empty_message);
    }

    if !options.grouped {
        for (i, card) in list.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            write_card(card, out, "##")?;
        }
        return Ok(());
    }

    for (group_index, group) in list.grouped().iter().enumerate() {
        if group_index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "## {}", group.label)?;
        for card in &group.cards {
            writeln!(out)?;
            write_card(card, out, "###")?;
        }
    }
    Ok(())
}

fn write_card(card: &RenderedCard, out: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(out, "{} {}", heading, card.title)?;
    writeln!(out)?;
    if !card.description.is_empty() {
        writeln!(out, "{}", card.description)?;
        writeln!(out)?;
    }

    let fence = fence_for(&card.snippet);
    writeln!(out, "{fence}sh")?;
    out.write_all(card.snippet.as_bytes())?;
    if !card.snippet.ends_with('\n') {
        writeln!(out)?;
    }
    writeln!(out, "{fence}")
}

/// A backtick fence longer than any backtick run in `snippet`, at least three long
fn fence_for(snippet: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in snippet.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}
