//! A single page of the communication board: image identifiers mapped to the
//! text spoken when the image is selected.

use crate::assoc::AssocMap;
use crate::error::{AacBoardError, Result};

/// One named category of image→text entries.
///
/// Entries keep insertion order; an image identifier is unique within its
/// category, and re-adding it overwrites the spoken text in place.
#[derive(Debug, Clone)]
pub struct Category {
    key: String,
    items: AssocMap<String, String>,
}

impl Category {
    /// Create an empty category with the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: AssocMap::new(),
        }
    }

    /// The category's short identifier.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add or update an image→text entry.
    pub fn add_item(&mut self, image_id: impl Into<String>, text: impl Into<String>) -> Result<()> {
        self.items.put(image_id.into(), text.into())
    }

    /// Whether the image identifier exists in this category.
    pub fn has_image(&self, image_id: &str) -> bool {
        self.items.contains_key(&image_id.to_string())
    }

    /// The spoken text for an image identifier.
    pub fn select(&self, image_id: &str) -> Result<&str> {
        self.items
            .get(&image_id.to_string())
            .map(String::as_str)
            .map_err(|_| AacBoardError::ItemNotFound {
                category: self.key.clone(),
                item: image_id.to_string(),
            })
    }

    /// Image identifiers in insertion order.
    pub fn image_ids(&self) -> Vec<&str> {
        self.items.keys().map(String::as_str).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the category holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
