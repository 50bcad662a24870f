//! Party CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::Party;

const INSERT_PARTY_SQL: &str =
    "INSERT INTO parties (name, contact, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_PARTY_SQL: &str =
    "SELECT id, name, contact, created_at, updated_at FROM parties WHERE id = ?1";
const SELECT_PARTIES_SQL: &str =
    "SELECT id, name, contact, created_at, updated_at FROM parties ORDER BY id";

impl super::Database {
    fn build_party_from_row(row: &rusqlite::Row) -> rusqlite::Result<Party> {
        Ok(Party {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            contact: row.get(2)?,
            created_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Registers a new party.
    pub fn create_party(&mut self, name: &str, contact: Option<&str>) -> Result<Party> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(INSERT_PARTY_SQL, params![name, contact, &now_str, &now_str])
            .map_err(|e| TrackerError::database_error("Failed to insert party", e))?;

        let id = self.connection.last_insert_rowid() as u64;

        Ok(Party {
            id,
            name: name.into(),
            contact: contact.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a single party by its ID.
    pub fn get_party(&self, party_id: u64) -> Result<Option<Party>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PARTY_SQL)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let party = stmt
            .query_row(params![party_id as i64], Self::build_party_from_row)
            .optional()
            .map_err(|e| TrackerError::database_error("Failed to get party", e))?;

        Ok(party)
    }

    /// Retrieves all parties.
    pub fn list_parties(&self) -> Result<Vec<Party>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PARTIES_SQL)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let parties = stmt
            .query_map([], Self::build_party_from_row)
            .map_err(|e| TrackerError::database_error("Failed to query parties", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::database_error("Failed to fetch parties", e))?;

        Ok(parties)
    }

    /// Checks party existence inside an open transaction.
    pub(super) fn party_exists(tx: &rusqlite::Transaction, party_id: u64) -> Result<bool> {
        tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM parties WHERE id = ?1)",
            params![party_id as i64],
            |row| row.get(0),
        )
        .db_context("Failed to check party existence")
    }
}
