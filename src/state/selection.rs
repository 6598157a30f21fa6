//! Selected country names.

use std::collections::BTreeSet;

/// The set of country names currently highlighted.
///
/// Clicks use a single-selection model: a hit replaces the whole set with
/// the matched name and a miss leaves it alone. Names are the key, so two
/// countries sharing a name are highlighted together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    names: BTreeSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a hit-test outcome. Returns `true` if the selection changed.
    pub fn apply_hit(&mut self, hit: Option<&str>) -> bool {
        let Some(name) = hit else {
            return false;
        };
        if self.names.len() == 1 && self.names.contains(name) {
            return false;
        }

        self.names.clear();
        self.names.insert(name.to_string());
        true
    }

    /// Replaces the selection from the host. Returns `true` if it changed.
    pub fn set_selected<I, S>(&mut self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if names == self.names {
            return false;
        }
        self.names = names;
        true
    }

    /// Clears the selection. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.names.is_empty();
        self.names.clear();
        changed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
