//! Market index catalog for the meridian session timeline engine.
//!
//! This crate provides the ordered registry of market indices together with
//! their trading hours on the reference timeline, plus selection helpers used
//! by the view controls.
//!
//! # Example
//!
//! ```
//! use meridian_catalog::IndexCatalog;
//! use meridian_types::Region;
//!
//! let catalog = IndexCatalog::global();
//!
//! if let Some(index) = catalog.get("^N225") {
//!     println!("{}: {}", index.name(), index.hours_label());
//! }
//!
//! let europe: Vec<_> = catalog.by_region(Region::Europe).collect();
//! assert_eq!(europe.len(), 3);
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/meridian-markets/meridian/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod selection;

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use meridian_types::{CatalogError, IndexDef, MeridianError, Region};
use serde::Serialize;

pub use selection::Selection;

/// The built-in index table embedded at compile time.
const INDICES_JSON: &str = include_str!("../data/indices.json");

/// Global catalog instance.
static CATALOG: OnceLock<IndexCatalog> = OnceLock::new();

/// Ordered registry of market indices.
///
/// Iteration follows table order, which is also display order.
#[derive(Debug, Clone)]
pub struct IndexCatalog {
    indices: Vec<IndexDef>,
    positions: HashMap<String, usize>,
}

impl IndexCatalog {
    /// Returns the global catalog built from the embedded table.
    ///
    /// The catalog is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        CATALOG.get_or_init(Self::builtin)
    }

    /// Builds a fresh catalog from the embedded table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(INDICES_JSON).expect("Invalid indices.json")
    }

    /// Parses a catalog from a JSON array of index definitions.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or two entries share a code.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let indices: Vec<IndexDef> = serde_json::from_str(json)?;
        Self::from_indices(indices)
    }

    /// Reads and parses a catalog table from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid table.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Builds a catalog from definitions in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if two definitions share a code.
    pub fn from_indices(indices: Vec<IndexDef>) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(indices.len());
        for (position, index) in indices.iter().enumerate() {
            if positions.insert(index.code().to_string(), position).is_some() {
                return Err(CatalogError::DuplicateCode(index.code().to_string()));
            }
        }
        Ok(Self { indices, positions })
    }

    /// Looks up an index by code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&IndexDef> {
        self.positions.get(code).map(|&i| &self.indices[i])
    }

    /// Looks up an index by code, reporting unknown codes as an error.
    ///
    /// # Errors
    ///
    /// Returns [`MeridianError::UnknownIndex`] if the code is not registered.
    pub fn lookup(&self, code: &str) -> Result<&IndexDef, MeridianError> {
        self.get(code)
            .ok_or_else(|| MeridianError::UnknownIndex(code.to_string()))
    }

    /// Returns true if the code is registered.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.positions.contains_key(code)
    }

    /// Returns the display position of a code.
    #[must_use]
    pub fn position(&self, code: &str) -> Option<usize> {
        self.positions.get(code).copied()
    }

    /// Returns all indices in display order.
    pub fn all(&self) -> impl Iterator<Item = &IndexDef> {
        self.indices.iter()
    }

    /// Returns the indices of a region in display order.
    pub fn by_region(&self, region: Region) -> impl Iterator<Item = &IndexDef> {
        self.indices.iter().filter(move |i| i.region() == region)
    }

    /// Returns all codes in display order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.indices.iter().map(IndexDef::code)
    }

    /// Returns the first index in display order.
    #[must_use]
    pub fn first(&self) -> Option<&IndexDef> {
        self.indices.first()
    }

    /// Returns the given codes that are registered, in display order.
    ///
    /// Unknown codes are dropped.
    pub fn ordered<'a, I>(&self, codes: I) -> Vec<&IndexDef>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut found: Vec<usize> = codes
            .into_iter()
            .filter_map(|code| self.position(code))
            .collect();
        found.sort_unstable();
        found.dedup();
        found.into_iter().map(|i| &self.indices[i]).collect()
    }

    /// Returns the total number of indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the trading hours of every index in display order.
    #[must_use]
    pub fn market_hours(&self) -> Vec<MarketHours> {
        self.indices.iter().map(MarketHours::from).collect()
    }
}

/// Trading-hours summary of one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketHours {
    /// Index name.
    pub name: String,
    /// Opening time (`HH:MM`).
    pub open: String,
    /// Closing time (`HH:MM`).
    pub close: String,
    /// Timezone label.
    pub timezone: String,
    /// Display colour.
    pub color: String,
}

impl From<&IndexDef> for MarketHours {
    fn from(index: &IndexDef) -> Self {
        Self {
            name: index.name().to_string(),
            open: index.market_open().format("%H:%M").to_string(),
            close: index.market_close().format("%H:%M").to_string(),
            timezone: index.timezone().to_string(),
            color: index.color().to_string(),
        }
    }
}
