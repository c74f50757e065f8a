//! # Bookshelf
//!
//! A minimal personal-library catalog manager with:
//! - Book records (title, author, ISBN) held in insertion order
//! - Whole-file JSON persistence (every add rewrites the backing file)
//! - Linear-scan queries: title substring search and exact ISBN lookup
//! - Log-and-continue persistence errors (strict `try_*` variants opt in)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Inventory                    │
//! │   (in-memory Vec<Book>, insertion order)     │
//! └─────────────────────┬───────────────────────┘
//!                       │ load / save
//! ┌─────────────────────▼───────────────────────┐
//! │              CatalogStore trait              │
//! └─────────────────────┬───────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────┐
//! │               JsonFileStore                  │
//! │      (library_data.json, 4-space indent)     │
//! └─────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod inventory;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ShelfError};
pub use config::Config;
pub use record::Book;
pub use storage::{CatalogStore, JsonFileStore};
pub use inventory::{Inventory, LoadStatus};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Bookshelf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
