//! Database layer (flat JSON files).

pub mod json_store;

pub use json_store::{JsonStore, StoreError};

/// Record collections persisted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Items,
    Sellers,
    Analytics,
}

impl Collection {
    /// File name of the collection inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Items => "items.json",
            Collection::Sellers => "sellers.json",
            Collection::Analytics => "analytics.json",
        }
    }
}
