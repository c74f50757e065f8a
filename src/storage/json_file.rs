//! JSON backing-file store
//!
//! Persists the catalog as a single JSON array of `{title, author, isbn}`
//! objects, written with 4-space indentation by default.
//!
//! File handles are scoped to each call: opened, used, and closed inside
//! `load` or `save`, released on every exit path including error. There is
//! no atomic rename and no partial-write protection; `save` overwrites
//! whatever is on disk unconditionally.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::Config;
use crate::error::{Result, ShelfError};
use crate::record::Book;
use crate::storage::CatalogStore;

/// Whole-file JSON store
pub struct JsonFileStore {
    /// Backing-file path, fixed at construction
    path: PathBuf,

    /// Indentation string for written output (spaces)
    indent: String,
}

impl JsonFileStore {
    /// Create a store for the given path with 4-space indentation
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            indent: " ".repeat(4),
        }
    }

    /// Create a store from a config (path and indent width)
    pub fn from_config(config: &Config) -> Self {
        Self {
            path: config.data_path.clone(),
            indent: " ".repeat(config.indent_width),
        }
    }

    /// Get the backing-file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonFileStore {
    /// Read and parse the whole file.
    ///
    /// Parsing is all-or-nothing: malformed JSON, or any element with a
    /// missing or unknown key, fails the entire load as `Corrupt`.
    fn load(&self) -> Result<Option<Vec<Book>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;

        let records: Vec<Book> = serde_json::from_str(&contents)
            .map_err(|e| ShelfError::Corrupt(e.to_string()))?;

        Ok(Some(records))
    }

    /// Serialize every record via `to_mapping()` and rewrite the file.
    fn save(&self, records: &[Book]) -> Result<()> {
        let mappings: Vec<_> = records.iter().map(Book::to_mapping).collect();

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        {
            let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
            let mut serializer = Serializer::with_formatter(&mut writer, formatter);
            mappings.serialize(&mut serializer)?;
        }

        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
