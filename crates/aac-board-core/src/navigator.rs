//! Two-level board navigation
//!
//! The navigator owns every category on the board, a parallel map of display
//! labels, and a cursor that is either at the root (category overview) or
//! inside one category. It also reads and writes the board file format:
//!
//! ```text
//! <categoryKey> <displayName>
//! ><imageId> <spokenText>
//! ```
//!
//! One block per category, blocks in insertion order. Only the first space on
//! a line delimits, so display names and spoken text may contain spaces. The
//! loader is permissive: lines it cannot split are skipped, and entry lines
//! that appear before any category declaration are ignored.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::assoc::AssocMap;
use crate::category::Category;
use crate::error::{AacBoardError, Result};

/// The navigator's current position on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cursor {
    /// Top level: no category selected, locations are category keys.
    #[default]
    Root,
    /// Inside one category, locations are image identifiers.
    InCategory(String),
}

/// The board mapping engine.
///
/// Categories and labels keep the order they were first seen in, which makes
/// save/load round-trips stable. The cursor is transient runtime state and is
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    categories: AssocMap<String, Category>,
    labels: AssocMap<String, String>,
    cursor: Cursor,
}

impl Navigator {
    /// Create an empty navigator at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator populated from a board file.
    ///
    /// Construction never fails: a missing or unreadable file is logged and
    /// yields an empty navigator, and a failure partway through the file
    /// leaves whatever had loaded up to that point (no rollback).
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut navigator = Self::new();
        if let Err(e) = navigator.load(path) {
            log::warn!("failed to load board file {}: {e}", path.display());
        }
        navigator
    }

    /// Read a board file into this navigator.
    ///
    /// Category lines re-declared for an existing key overwrite the label in
    /// place and leave the category's entries untouched. An I/O failure or an
    /// invalid key in the file aborts the load where it stands.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut current_block: Option<String> = None;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if let Some(rest) = line.strip_prefix('>') {
                // Entry line: belongs to the most recently declared category.
                let Some(block_key) = current_block.clone() else {
                    continue;
                };
                let Some((image_id, text)) = rest.split_once(' ') else {
                    continue;
                };
                self.categories.get_mut(&block_key)?.add_item(image_id, text)?;
            } else {
                // Category line: key, then the rest is the display name.
                let Some((key, label)) = line.split_once(' ') else {
                    continue;
                };
                self.labels.put(key.to_string(), label.to_string())?;
                if !self.categories.contains_key(&key.to_string()) {
                    self.categories.put(key.to_string(), Category::new(key))?;
                }
                current_block = Some(key.to_string());
            }
        }

        Ok(())
    }

    /// Write the board file, reporting failures.
    ///
    /// Categories are emitted in insertion order, each label line followed by
    /// that category's entries in their own insertion order.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut content = String::new();
        for (key, category) in self.categories.iter() {
            let label = self.labels.get(key)?;
            content.push_str(&format!("{key} {label}\n"));
            for image_id in category.image_ids() {
                let text = category.select(image_id)?;
                content.push_str(&format!(">{image_id} {text}\n"));
            }
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Best-effort save: failures are logged, not surfaced.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(e) = self.write_to(path) {
            log::warn!("failed to save board file {}: {e}", path.display());
        }
    }

    /// Select a category or an image, depending on the cursor.
    ///
    /// Selecting a category moves the cursor into it and produces no speech
    /// (empty string); selecting an image inside the current category returns
    /// its spoken text and leaves the cursor in place. Re-selecting the
    /// category the cursor is already in is `AlreadySelected`.
    pub fn select(&mut self, locator: &str) -> Result<String> {
        if self.categories.is_empty() {
            return Err(AacBoardError::NoCategoriesAvailable);
        }

        if self.is_category(locator) {
            if let Cursor::InCategory(current) = &self.cursor {
                if current == locator {
                    return Err(AacBoardError::AlreadySelected {
                        key: locator.to_string(),
                    });
                }
            }
            self.cursor = Cursor::InCategory(locator.to_string());
            return Ok(String::new());
        }

        let current = match &self.cursor {
            Cursor::Root => return Err(AacBoardError::NoCategorySelected),
            Cursor::InCategory(key) => key.clone(),
        };

        let category = self
            .categories
            .get(&current)
            .map_err(|_| AacBoardError::CategoryMissing { key: current.clone() })?;
        category.select(locator).map(str::to_string)
    }

    /// Move the cursor back to the root. Never fails.
    pub fn reset(&mut self) {
        self.cursor = Cursor::Root;
    }

    /// Add an entry at the current position.
    ///
    /// At the root this does not add an entry at all: the locator is taken as
    /// a category key, the category is created if new, and the cursor moves
    /// into it (the text argument is unused). Inside a category it adds or
    /// updates the image→text entry.
    pub fn add_item(&mut self, locator: &str, text: &str) -> Result<()> {
        let current = match &self.cursor {
            Cursor::Root => {
                if !self.is_category(locator) {
                    self.categories
                        .put(locator.to_string(), Category::new(locator))?;
                }
                self.cursor = Cursor::InCategory(locator.to_string());
                return Ok(());
            }
            Cursor::InCategory(key) => key.clone(),
        };

        self.categories
            .get_mut(&current)
            .map_err(|_| AacBoardError::CategoryMissing { key: current.clone() })?
            .add_item(locator, text)
    }

    /// Display label of the current category, or `""` at the root or when no
    /// label is registered for the active key.
    pub fn current_category_label(&self) -> String {
        match &self.cursor {
            Cursor::Root => String::new(),
            Cursor::InCategory(key) => self
                .labels
                .get(key)
                .map(|label| label.clone())
                .unwrap_or_default(),
        }
    }

    /// Selectable locations at the current position: category keys at the
    /// root, image identifiers inside a category.
    pub fn list_locations(&self) -> Vec<String> {
        match &self.cursor {
            Cursor::Root => self.categories.keys().cloned().collect(),
            Cursor::InCategory(key) => match self.categories.get(key) {
                Ok(category) => category.image_ids().iter().map(|s| s.to_string()).collect(),
                Err(_) => Vec::new(),
            },
        }
    }

    /// Whether the locator names a top-level category, regardless of cursor.
    pub fn is_category(&self, locator: &str) -> bool {
        self.categories.contains_key(&locator.to_string())
    }

    /// Whether the locator names an image in the current category. False at
    /// the root; lookup failures degrade to false.
    pub fn has_image(&self, locator: &str) -> bool {
        match &self.cursor {
            Cursor::Root => false,
            Cursor::InCategory(key) => self
                .categories
                .get(key)
                .map(|category| category.has_image(locator))
                .unwrap_or(false),
        }
    }

    /// All top-level category keys in insertion order.
    pub fn category_keys(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// The current position on the board.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }
}
