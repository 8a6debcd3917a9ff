// file: src/catalog/registry.rs
// version: 1.0.0
// guid: 6d25c065-edec-420e-97b8-602a8209a558

//! Ordered, immutable command registry

use super::{builtin, CommandDescription};
use std::sync::Arc;

/// The ordered set of command descriptions shown by the reference.
///
/// Cloning is cheap: all clones share the same records. Narrowing operations
/// return a new registry and leave the original untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegistry {
    records: Arc<[CommandDescription]>,
}

impl CommandRegistry {
    /// Build a registry from records in display order.
    ///
    /// No validation happens here; see [`CommandDescription::missing_field`].
    pub fn from_records(records: Vec<CommandDescription>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The bundled Docker command table
    pub fn builtin() -> Self {
        Self::from_records(builtin::docker_commands())
    }

    /// Iterate every record in display order
    pub fn all(&self) -> std::slice::Iter<'_, CommandDescription> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[CommandDescription] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&CommandDescription> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose category equals `name`, ignoring ASCII case
    pub fn by_category(&self, name: &str) -> Self {
        self.filter(|r| r.category().is_some_and(|c| c.eq_ignore_ascii_case(name)))
    }

    /// Records mentioning `query` in any text field, ignoring ASCII case.
    /// An empty query keeps everything.
    pub fn search(&self, query: &str) -> Self {
        let needle = query.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return self.clone();
        }
        self.filter(|r| r.matches(&needle))
    }

    /// Distinct categories with their record counts, in first-appearance order.
    /// Categories differing only in case are counted together under the first
    /// spelling seen.
    pub fn categories(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for category in self.records.iter().filter_map(|r| r.category()) {
            match counts
                .iter_mut()
                .find(|(name, _)| name.eq_ignore_ascii_case(category))
            {
                Some((_, n)) => *n += 1,
                None => counts.push((category, 1)),
            }
        }
        counts
    }

    fn filter<F>(&self, keep: F) -> Self
    where
        F: Fn(&CommandDescription) -> bool,
    {
        Self::from_records(self.records.iter().filter(|r| keep(r)).cloned().collect())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::from_records(Vec::new())
    }
}
