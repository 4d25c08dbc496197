// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON file store with typed operations.
//!
//! Each collection lives in its own pretty-printed JSON document and is
//! rewritten wholesale on every mutation:
//! - Items (uploaded clothing items)
//! - Sellers (accounts and plan state)
//! - Analytics (append-only try-on events)

use crate::db::Collection;
use crate::models::{AnalyticsEvent, Item, Seller};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// In-memory copy of the three collections plus the directory they persist to.
#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
    items: Vec<Item>,
    sellers: Vec<Seller>,
    analytics: Vec<AnalyticsEvent>,
}

impl JsonStore {
    /// Open the store, creating the data directory if needed and loading
    /// every collection.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).map_err(|source| StoreError::Io {
            path: data_dir.clone(),
            source,
        })?;

        let items = load(&data_dir, Collection::Items)?;
        let sellers = load(&data_dir, Collection::Sellers)?;
        let analytics = load(&data_dir, Collection::Analytics)?;

        tracing::info!(
            path = %data_dir.display(),
            items = items.len(),
            sellers = sellers.len(),
            analytics = analytics.len(),
            "Store loaded"
        );

        Ok(Self {
            data_dir,
            items,
            sellers,
            analytics,
        })
    }

    /// Read one collection from disk.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StoreError> {
        load(&self.data_dir, collection)
    }

    // ─── Item Operations ─────────────────────────────────────────

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Append an item and bump its seller's item count.
    pub fn add_item(&mut self, item: Item) {
        if let Some(seller) = self.find_seller_mut(&item.seller_email) {
            seller.items_count += 1;
        }
        self.items.push(item);
    }

    /// Append an item and persist every collection.
    ///
    /// On a failed write the item and the seller's count bump are taken back
    /// out of memory, so a later save cannot publish the failed upload.
    pub fn commit_item(&mut self, item: Item) -> Result<(), StoreError> {
        let seller_email = item.seller_email.clone();
        let counted = self.find_seller(&seller_email).is_some();
        self.add_item(item);

        if let Err(e) = self.save_all() {
            self.items.pop();
            if counted {
                if let Some(seller) = self.find_seller_mut(&seller_email) {
                    seller.items_count = seller.items_count.saturating_sub(1);
                }
            }
            return Err(e);
        }
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    // ─── Seller Operations ───────────────────────────────────────

    pub fn find_seller(&self, email: &str) -> Option<&Seller> {
        self.sellers.iter().find(|s| s.email == email)
    }

    fn find_seller_mut(&mut self, email: &str) -> Option<&mut Seller> {
        self.sellers.iter_mut().find(|s| s.email == email)
    }

    /// Get a seller, registering a new trial seller on first sight.
    ///
    /// Returns the seller and whether it was just created. The new record is
    /// only held in memory until the next save.
    pub fn seller_or_create(&mut self, email: &str, created_at: String) -> (&Seller, bool) {
        let (index, created) = match self.sellers.iter().position(|s| s.email == email) {
            Some(index) => (index, false),
            None => {
                self.sellers.push(Seller::new_trial(email, created_at));
                (self.sellers.len() - 1, true)
            }
        };
        (&self.sellers[index], created)
    }

    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    // ─── Analytics Operations ────────────────────────────────────

    pub fn record_event(&mut self, event: AnalyticsEvent) {
        self.analytics.push(event);
    }

    pub fn analytics(&self) -> &[AnalyticsEvent] {
        &self.analytics
    }

    // ─── Persistence ─────────────────────────────────────────────

    /// Rewrite a single collection file.
    pub fn save(&self, collection: Collection) -> Result<(), StoreError> {
        match collection {
            Collection::Items => write_atomic(&self.data_dir, collection, &self.items),
            Collection::Sellers => write_atomic(&self.data_dir, collection, &self.sellers),
            Collection::Analytics => write_atomic(&self.data_dir, collection, &self.analytics),
        }
    }

    /// Rewrite all three collection files.
    pub fn save_all(&self) -> Result<(), StoreError> {
        self.save(Collection::Items)?;
        self.save(Collection::Sellers)?;
        self.save(Collection::Analytics)
    }
}

fn load<T: DeserializeOwned>(data_dir: &Path, collection: Collection) -> Result<Vec<T>, StoreError> {
    let path = data_dir.join(collection.file_name());
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => return Err(StoreError::Io { path, source }),
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&raw).map_err(|source| StoreError::Json { path, source })
}

/// Write pretty JSON to a temp file and rename it over the target.
fn write_atomic<T: Serialize>(
    data_dir: &Path,
    collection: Collection,
    records: &[T],
) -> Result<(), StoreError> {
    let path = data_dir.join(collection.file_name());
    let tmp_path = path.with_extension("json.tmp");

    let json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Json {
        path: path.clone(),
        source,
    })?;

    fs::write(&tmp_path, json).map_err(|source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, &path).map_err(|source| StoreError::Io {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        records = records.len(),
        "Collection saved"
    );
    Ok(())
}

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanId;

    fn sample_item(id: &str, seller_email: &str) -> Item {
        Item {
            id: id.to_string(),
            seller_email: seller_email.to_string(),
            photo_front: "/uploads/front.jpg".to_string(),
            photo_back: "/uploads/back.jpg".to_string(),
            size_table: serde_json::json!({"M": {"chest": 96}}),
            created_at: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_open_missing_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("items.json"), "  \n").unwrap();

        let store = JsonStore::open(dir.path()).unwrap();
        assert!(store.items().is_empty());
        assert!(store.sellers().is_empty());
        assert!(store.analytics().is_empty());
    }

    #[test]
    fn test_open_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sellers.json"), "{not json").unwrap();

        let err = JsonStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }

    #[test]
    fn test_seller_created_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path()).unwrap();

        let (seller, created) = store.seller_or_create("a@x.com", "t0".to_string());
        assert!(created);
        assert_eq!(seller.current_plan, Some(PlanId::Trial));

        let (seller, created) = store.seller_or_create("a@x.com", "t1".to_string());
        assert!(!created);
        assert_eq!(seller.created_at, "t0");
        assert_eq!(store.sellers().len(), 1);
    }

    #[test]
    fn test_add_item_increments_seller_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path()).unwrap();
        store.seller_or_create("a@x.com", "t0".to_string());

        store.add_item(sample_item("one", "a@x.com"));
        store.add_item(sample_item("two", "a@x.com"));

        assert_eq!(store.find_seller("a@x.com").unwrap().items_count, 2);
        assert_eq!(store.find_item("two").unwrap().seller_email, "a@x.com");
        assert!(store.find_item("three").is_none());
    }

    #[test]
    fn test_save_all_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path()).unwrap();
        store.seller_or_create("a@x.com", "t0".to_string());
        store.add_item(sample_item("one", "a@x.com"));
        store.save_all().unwrap();

        assert!(!dir.path().join("items.json.tmp").exists());
        let raw = fs::read_to_string(dir.path().join("items.json")).unwrap();
        assert!(raw.contains("\n  {"), "expected pretty-printed JSON");

        let reopened = JsonStore::open(dir.path()).unwrap();
        assert_eq!(reopened.items(), store.items());
        assert_eq!(reopened.sellers(), store.sellers());
        let loaded: Vec<Item> = reopened.load(Collection::Items).unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_commit_item_rolls_back_on_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path()).unwrap();
        store.seller_or_create("a@x.com", "t0".to_string());
        store.commit_item(sample_item("one", "a@x.com")).unwrap();

        // A directory in the temp file's place makes the next write fail
        fs::create_dir(dir.path().join("items.json.tmp")).unwrap();
        let err = store.commit_item(sample_item("two", "a@x.com")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));

        assert_eq!(store.items().len(), 1);
        assert!(store.find_item("two").is_none());
        assert_eq!(store.find_seller("a@x.com").unwrap().items_count, 1);
    }

    #[test]
    fn test_open_accepts_sellers_without_created_at() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sellers.json"),
            r#"[
                {"email": "old@x.com", "items_count": 2, "current_plan": "trial"},
                {"email": "null@x.com", "created_at": null, "current_plan": "basic"}
            ]"#,
        )
        .unwrap();

        let store = JsonStore::open(dir.path()).unwrap();
        assert_eq!(store.sellers().len(), 2);
        assert_eq!(store.find_seller("old@x.com").unwrap().created_at, "");
        assert_eq!(store.find_seller("old@x.com").unwrap().items_count, 2);
        assert_eq!(store.find_seller("null@x.com").unwrap().created_at, "");
    }

    #[test]
    fn test_save_single_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path()).unwrap();
        store.seller_or_create("a@x.com", "t0".to_string());
        store.record_event(AnalyticsEvent {
            item_id: "x".to_string(),
            height: Some(serde_json::json!(170)),
            chest: None,
            waist: None,
            hips: None,
            weight: None,
            tried_on: true,
            timestamp: "t0".to_string(),
        });
        store.save(Collection::Analytics).unwrap();

        assert!(dir.path().join("analytics.json").exists());
        assert!(!dir.path().join("sellers.json").exists());
    }
}
