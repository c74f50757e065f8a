//! Storage Module
//!
//! The persistence seam between the in-memory catalog and disk.
//!
//! ## Responsibilities
//! - Define the `CatalogStore` trait (whole-catalog load and save)
//! - Provide the default JSON backing-file implementation
//!
//! The default backend rewrites the entire file on every save. That is
//! acceptable at catalog scale; an incremental backend could be substituted
//! behind the same trait without changing the inventory's public contract.

mod json_file;

pub use json_file::JsonFileStore;

use crate::error::Result;
use crate::record::Book;

/// Whole-catalog persistence backend.
pub trait CatalogStore {
    /// Load the full catalog.
    ///
    /// Returns:
    /// - `Ok(Some(records))` — backing location exists and parsed cleanly
    /// - `Ok(None)` — backing location does not exist (fresh start)
    /// - `Err` — I/O failure, or contents that do not parse as a catalog
    fn load(&self) -> Result<Option<Vec<Book>>>;

    /// Persist the full catalog, replacing any previous contents.
    fn save(&self, records: &[Book]) -> Result<()>;

    /// Human-readable location of the backing storage, for log events.
    fn describe(&self) -> String;
}
