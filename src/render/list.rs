// file: src/render/list.rs
// version: 1.0.0
// guid: 6018708b-0b9a-4522-a421-fe1500b8d6e6

//! Whole-registry rendering

use super::card::{CommandCardRenderer, RenderedCard};
use crate::catalog::{CommandDescription, CommandRegistry};
use crate::Result;
use serde::Serialize;
use tracing::debug;

/// Group label for cards without a category
pub const UNCATEGORIZED: &str = "General";

/// Ordered output of one render pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedList {
    cards: Vec<RenderedCard>,
}

/// Cards sharing a category, in their original relative order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGroup<'a> {
    pub label: &'a str,
    pub cards: Vec<&'a RenderedCard>,
}

impl RenderedList {
    pub fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderedCard> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn into_cards(self) -> Vec<RenderedCard> {
        self.cards
    }

    /// Group cards by category.
    ///
    /// Groups appear in the order their category is first seen; categories
    /// differing only in ASCII case share a group labelled with the first spelling.
    pub fn grouped(&self) -> Vec<CardGroup<'_>> {
        let mut groups: Vec<CardGroup<'_>> = Vec::new();
        for card in &self.cards {
            let label = card.category.as_deref().unwrap_or(UNCATEGORIZED);
            match groups
                .iter_mut()
                .find(|g| g.label.eq_ignore_ascii_case(label))
            {
                Some(group) => group.cards.push(card),
                None => groups.push(CardGroup {
                    label,
                    cards: vec![card],
                }),
            }
        }
        groups
    }
}

/// Renders every record of a registry, in order, through the card renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandListView {
    renderer: CommandCardRenderer,
}

impl CommandListView {
    pub fn new() -> Self {
        Self {
            renderer: CommandCardRenderer::new(),
        }
    }

    /// Render the whole registry.
    ///
    /// Stops at the first invalid record and returns its error with the
    /// record's position attached; nothing is returned for the other records.
    pub fn render(&self, registry: &CommandRegistry) -> Result<RenderedList> {
        self.render_records(registry.as_slice())
    }

    pub fn render_records(&self, records: &[CommandDescription]) -> Result<RenderedList> {
        let cards = records
            .iter()
            .enumerate()
            .map(|(i, record)| self.renderer.render(record).map_err(|e| e.at_index(i)))
            .collect::<Result<Vec<_>>>()?;

        debug!("Rendered {} command cards", cards.len());
        Ok(RenderedList { cards })
    }
}
