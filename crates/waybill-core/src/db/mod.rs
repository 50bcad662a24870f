//! Database operations and SQLite management for parties, items, and
//! step records.
//!
//! This module provides low-level database operations for the Waybill
//! follow-up system. It handles SQLite connections, schema management,
//! and specialized query interfaces for parties, items, and step
//! configuration.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod config_queries;
pub mod item_queries;
pub mod migrations;
pub mod party_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
