//! SQLite-backed catalog of known places.
//!
//! The catalog only supplies names for location suggestions; it never stores
//! itineraries.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod place_queries;

pub use place_queries::SAMPLE_PLACES;

/// Catalog connection and operations handler.
pub struct Catalog {
    connection: Connection,
}

impl Catalog {
    /// Opens the catalog database and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open catalog database")?;

        let catalog = Self { connection };
        catalog.initialize_schema()?;
        Ok(catalog)
    }
}
