//! In-memory view over a loaded metadata document.

use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use super::types::Item;
use crate::error::{MetadataError, StorageError};
use crate::storage;

/// A named, ordered group of items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub name: String,
    pub items: Vec<Item>,
}

/// Metadata document: categories in their original insertion order.
///
/// Immutable once loaded; lookups never fail loudly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataDocument {
    categories: Vec<Category>,
}

impl MetadataDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document from categories, keeping the first occurrence of a name.
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut doc = Self::new();
        for category in categories {
            if doc.category(&category.name).is_none() {
                doc.categories.push(category);
            }
        }
        doc
    }

    /// Loads a document from a JSON file.
    ///
    /// A missing or malformed file yields an empty document, with the reason logged.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(doc) => {
                info!(categories = doc.len(), path = %path.display(), "Loaded metadata");
                doc
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load metadata");
                Self::new()
            }
        }
    }

    /// Loads a document from a JSON file, surfacing the failure.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let value: Value = storage::try_read_json(path)?;
        Ok(Self::from_value(value, &path.display().to_string()))
    }

    /// Parses a document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value, "<inline>"))
    }

    /// Converts a parsed JSON value. Non-object documents are treated as empty;
    /// a category whose value is not a list keeps its name with no items.
    fn from_value(value: Value, source: &str) -> Self {
        let Value::Object(map) = value else {
            warn!(source, "Metadata document is not a JSON object");
            return Self::new();
        };

        let categories = map.into_iter().map(|(name, items)| {
            let items = parse_items(items, source, &name);
            Category { name, items }
        });

        Self::from_categories(categories)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True when the document holds no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category names in insertion order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Items of a category; empty when the category does not exist.
    pub fn items_in(&self, category: &str) -> &[Item] {
        self.category(category)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }

    /// Positional lookup. `None` for a missing category or an index outside `0..len`.
    pub fn item_at(&self, category: &str, index: i64) -> Option<&Item> {
        self.try_item_at(category, index).ok()
    }

    /// Positional lookup with the reason for a miss.
    pub fn try_item_at(&self, category: &str, index: i64) -> Result<&Item, MetadataError> {
        let found = self
            .category(category)
            .ok_or_else(|| MetadataError::CategoryNotFound(category.to_string()))?;

        usize::try_from(index)
            .ok()
            .and_then(|i| found.items.get(i))
            .ok_or_else(|| MetadataError::IndexOutOfRange {
                category: category.to_string(),
                index,
            })
    }
}

/// Parses each element on its own; only elements that are not item records
/// are dropped.
fn parse_items(value: Value, source: &str, category: &str) -> Vec<Item> {
    let Value::Array(values) = value else {
        warn!(source, category, "Category is not a list of items");
        return Vec::new();
    };

    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<Item>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(source, category, index, error = %e, "Skipping malformed item");
                None
            }
        })
        .collect()
}
