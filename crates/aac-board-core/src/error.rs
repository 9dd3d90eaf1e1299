use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AacBoardError {
    #[error("Invalid key: the empty key is reserved")]
    InvalidKey,

    #[error("Key not found: {key}")]
    KeyNotFound { key: String },

    #[error("Index out of range: {index} (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Item not found in category '{category}': {item}")]
    ItemNotFound { category: String, item: String },

    #[error("Category already selected: {key}")]
    AlreadySelected { key: String },

    #[error("No category is currently selected")]
    NoCategorySelected,

    #[error("No categories are available")]
    NoCategoriesAvailable,

    #[error("Current category no longer exists: {key}")]
    CategoryMissing { key: String },

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Home directory not found")]
    HomeNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AacBoardError>;

impl AacBoardError {
    /// Whether this error is an expected navigation outcome the caller can
    /// recover from, as opposed to an I/O or consistency failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::KeyNotFound { .. }
                | Self::ItemNotFound { .. }
                | Self::AlreadySelected { .. }
                | Self::NoCategorySelected
                | Self::NoCategoriesAvailable
        )
    }
}
