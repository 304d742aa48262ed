use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Item index {index} out of range ({len} items)")]
    InvalidItemIndex { index: usize, len: usize },

    #[error("Item name cannot be empty")]
    EmptyItemName,

    #[error("Profile name cannot be empty")]
    EmptyProfileName,

    #[error("Profile name contains invalid characters: {0}")]
    InvalidProfileName(String),

    #[error("Profile already exists: {0}")]
    ProfileExists(String),

    #[error("The default profile cannot be deleted")]
    DefaultProfileProtected,

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("No items to export")]
    NothingToExport,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Corrupt profile data: {0}")]
    Corrupt(String),
}
