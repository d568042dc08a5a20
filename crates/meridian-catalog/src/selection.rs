//! Overlay selection helpers.

use std::collections::BTreeSet;

use meridian_types::{IndexDef, Region};

use crate::IndexCatalog;

/// The set of codes selected for the overlay view.
///
/// Mirrors the view controls: select all, select none, and a region button
/// that cycles Oceania → Asia → Europe → Americas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    codes: BTreeSet<String>,
    next_region: Region,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            codes: BTreeSet::new(),
            next_region: Region::Oceania,
        }
    }
}

impl Selection {
    /// Creates a selection containing every catalog index.
    #[must_use]
    pub fn all(catalog: &IndexCatalog) -> Self {
        let mut selection = Self::default();
        selection.select_all(catalog);
        selection
    }

    /// Creates an empty selection.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Selects every catalog index.
    pub fn select_all(&mut self, catalog: &IndexCatalog) {
        self.codes = catalog.codes().map(str::to_string).collect();
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.codes.clear();
    }

    /// Toggles a single code, returning true if it is now selected.
    pub fn toggle(&mut self, code: &str) -> bool {
        if self.codes.remove(code) {
            false
        } else {
            self.codes.insert(code.to_string());
            true
        }
    }

    /// Adds a code to the selection.
    pub fn select(&mut self, code: impl Into<String>) {
        self.codes.insert(code.into());
    }

    /// Adds every index of `region` to the selection.
    pub fn select_region(&mut self, catalog: &IndexCatalog, region: Region) {
        self.codes
            .extend(catalog.by_region(region).map(|i| i.code().to_string()));
    }

    /// Replaces the selection with the indices of the next region in the
    /// cycle and returns that region.
    pub fn cycle_region(&mut self, catalog: &IndexCatalog) -> Region {
        let region = self.next_region;
        self.codes = catalog
            .by_region(region)
            .map(IndexDef::code)
            .map(str::to_string)
            .collect();
        self.next_region = region.next();
        region
    }

    /// Returns the region the next cycle will select.
    #[must_use]
    pub const fn next_region(&self) -> Region {
        self.next_region
    }

    /// Returns the label of the region cycling control.
    #[must_use]
    pub fn cycle_label(&self) -> String {
        format!("By Region ({})", self.next_region)
    }

    /// Returns the selected codes.
    #[must_use]
    pub const fn codes(&self) -> &BTreeSet<String> {
        &self.codes
    }

    /// Consumes the selection, returning the selected codes.
    #[must_use]
    pub fn into_codes(self) -> BTreeSet<String> {
        self.codes
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
