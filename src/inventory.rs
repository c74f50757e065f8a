//! Inventory Module
//!
//! The in-memory catalog plus its persistence logic.
//!
//! ## Responsibilities
//! - Hold the record sequence in insertion order
//! - Load the catalog from storage at construction
//! - Persist the whole catalog after every mutation
//! - Serve linear-scan queries from memory only
//!
//! ## Failure Policy: Log-and-Continue
//!
//! `open` and `add` never return errors. A corrupt or unreadable backing
//! file is logged and the catalog starts empty; a failed save is logged and
//! the in-memory state stays authoritative (disk is stale until the next
//! successful save). Callers who want strict handling opt in via the
//! `try_*` variants, and can distinguish "empty because new" from "empty
//! because recovered" through [`LoadStatus`].

use std::path::Path;

use tracing::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::record::Book;
use crate::storage::{CatalogStore, JsonFileStore};

/// Outcome of the most recent load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Backing file existed and parsed; holds the record count
    Loaded(usize),

    /// No backing file existed; catalog started empty
    Fresh,

    /// Backing file existed but was corrupt or unreadable; its contents
    /// were discarded and the catalog started empty
    RecoveredEmpty,
}

/// The personal-library catalog
///
/// Single-threaded and synchronous: every operation runs to completion
/// before returning. The storage handle is fixed at construction.
pub struct Inventory {
    /// Persistence backend (whole-catalog load/save)
    store: Box<dyn CatalogStore>,

    /// Records in insertion order; this order is also the persisted order
    records: Vec<Book>,

    /// Outcome of the most recent load
    load_status: LoadStatus,
}

impl Inventory {
    /// Open an inventory with the given config
    ///
    /// Constructs the default JSON backing-file store and performs the
    /// initial load. Never fails: load problems are logged and the catalog
    /// starts empty (see [`LoadStatus`]).
    pub fn open(config: Config) -> Self {
        Self::with_store(Box::new(JsonFileStore::from_config(&config)))
    }

    /// Open with a backing-file path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Self {
        let config = Config::builder().data_path(path).build();
        Self::open(config)
    }

    /// Open against an arbitrary storage backend
    ///
    /// The seam for substituting a different `CatalogStore` implementation.
    /// Performs the same initial load as [`Inventory::open`].
    pub fn with_store(store: Box<dyn CatalogStore>) -> Self {
        let mut inventory = Self {
            store,
            records: Vec::new(),
            load_status: LoadStatus::Fresh,
        };
        inventory.load();
        inventory
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Load the catalog from storage, replacing the in-memory sequence.
    ///
    /// Log-and-continue: any failure resets the catalog to empty and is
    /// recorded as `RecoveredEmpty`, never propagated.
    fn load(&mut self) {
        match self.store.load() {
            Ok(Some(records)) => {
                info!("loaded {} records from {}", records.len(), self.store.describe());
                self.load_status = LoadStatus::Loaded(records.len());
                self.records = records;
            }
            Ok(None) => {
                info!("no existing data file found, starting fresh");
                self.load_status = LoadStatus::Fresh;
                self.records.clear();
            }
            Err(e) => {
                error!("error loading data from {}: {}", self.store.describe(), e);
                self.load_status = LoadStatus::RecoveredEmpty;
                self.records.clear();
            }
        }
    }

    /// Persist the whole catalog, logging the outcome.
    ///
    /// Log-and-continue: a failed save leaves memory authoritative and disk
    /// stale. Not retried.
    fn save(&self) {
        match self.store.save(&self.records) {
            Ok(()) => info!("data saved successfully"),
            Err(e) => error!("failed to save data: {}", e),
        }
    }

    /// Strict reload: replace the in-memory sequence from storage.
    ///
    /// On error the in-memory sequence is left untouched. Returns the
    /// number of records loaded (0 for a fresh start).
    pub fn try_reload(&mut self) -> Result<usize> {
        match self.store.load()? {
            Some(records) => {
                let count = records.len();
                self.records = records;
                self.load_status = LoadStatus::Loaded(count);
                Ok(count)
            }
            None => {
                self.records.clear();
                self.load_status = LoadStatus::Fresh;
                Ok(0)
            }
        }
    }

    /// Strict save: persist the whole catalog, propagating any failure.
    pub fn try_save(&self) -> Result<()> {
        self.store.save(&self.records)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a record and persist the whole catalog.
    ///
    /// No validation is performed on any field. The record is appended at
    /// the end (insertion order). A save failure is logged, not returned;
    /// the record remains in memory either way.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) {
        let title = title.into();
        self.records.push(Book::new(title.clone(), author, isbn));
        self.save();
        info!("added book: {}", title);
    }

    /// Strict add: append and persist, returning any save failure.
    ///
    /// The record stays in memory even when the save fails; memory is
    /// authoritative and disk is stale until the next successful save.
    pub fn try_add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Result<()> {
        self.records.push(Book::new(title, author, isbn));
        self.try_save()
    }

    // =========================================================================
    // Queries (memory only, cannot fail)
    // =========================================================================

    /// Case-insensitive substring search on titles.
    ///
    /// Returns matches in their current in-memory order. An empty keyword
    /// matches every record. Returned references are read-only views into
    /// the live sequence.
    pub fn search_by_title(&self, keyword: &str) -> Vec<&Book> {
        let keyword = keyword.to_lowercase();
        self.records
            .iter()
            .filter(|b| b.title.to_lowercase().contains(&keyword))
            .collect()
    }

    /// Find the first record whose ISBN exactly equals the argument
    /// (case-sensitive), or `None`.
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.records.iter().find(|b| b.isbn == isbn)
    }

    /// The full record sequence, in insertion order. No defensive copy.
    pub fn display_all(&self) -> &[Book] {
        &self.records
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of records in memory
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Outcome of the most recent load
    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }
}
