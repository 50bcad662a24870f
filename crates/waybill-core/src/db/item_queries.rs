//! Item CRUD operations, step-record queries, and patch application.

use std::collections::BTreeMap;

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Transaction};

use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::{Item, ItemPatch, Responses, StepRecord, STEP_COUNT};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_ITEM_SQL: &str =
    "INSERT INTO items (party_id, item, qty, cancelled, created_at, updated_at) VALUES (?1, ?2, ?3, 0, ?4, ?5)";
const INSERT_STEP_ROW_SQL: &str =
    "INSERT INTO item_steps (item_id, step_no, planned, actual, responses) VALUES (?1, ?2, ?3, NULL, NULL)";
const SELECT_ITEM_SQL: &str =
    "SELECT id, party_id, item, qty, cancelled, created_at, updated_at FROM items WHERE id = ?1";
const SELECT_ITEMS_SQL: &str =
    "SELECT id, party_id, item, qty, cancelled, created_at, updated_at FROM items ORDER BY id";
const SELECT_PARTY_ITEMS_SQL: &str =
    "SELECT id, party_id, item, qty, cancelled, created_at, updated_at FROM items WHERE party_id = ?1 ORDER BY id";
const SELECT_STEPS_SQL: &str =
    "SELECT step_no, planned, actual, responses FROM item_steps WHERE item_id = ?1 ORDER BY step_no";
const CHECK_ITEM_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM items WHERE id = ?1)";
const UPDATE_STEP_PLANNED_SQL: &str =
    "UPDATE item_steps SET planned = ?1 WHERE item_id = ?2 AND step_no = ?3";
const UPDATE_STEP_ACTUAL_SQL: &str =
    "UPDATE item_steps SET actual = ?1 WHERE item_id = ?2 AND step_no = ?3";
const UPDATE_STEP_RESPONSES_SQL: &str =
    "UPDATE item_steps SET responses = ?1 WHERE item_id = ?2 AND step_no = ?3";
const UPDATE_ITEM_CANCELLED_SQL: &str = "UPDATE items SET cancelled = ?1 WHERE id = ?2";
const UPDATE_ITEM_TIMESTAMP_SQL: &str = "UPDATE items SET updated_at = ?1 WHERE id = ?2";

struct ItemRow {
    id: u64,
    party_id: u64,
    item: String,
    qty: u32,
    cancelled: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

fn parse_timestamp(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn parse_optional_timestamp(
    row: &rusqlite::Row,
    index: usize,
) -> rusqlite::Result<Option<Timestamp>> {
    row.get::<_, Option<String>>(index)?
        .map(|s| {
            s.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

fn parse_responses(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Responses> {
    match row.get::<_, Option<String>>(index)? {
        Some(json) => serde_json::from_str(&json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
        }),
        None => Ok(Responses::new()),
    }
}

impl super::Database {
    fn build_item_row(row: &rusqlite::Row) -> rusqlite::Result<ItemRow> {
        Ok(ItemRow {
            id: row.get::<_, i64>(0)? as u64,
            party_id: row.get::<_, i64>(1)? as u64,
            item: row.get(2)?,
            qty: row.get::<_, i64>(3)? as u32,
            cancelled: row.get::<_, i64>(4)? != 0,
            created_at: parse_timestamp(row, 5)?,
            updated_at: parse_timestamp(row, 6)?,
        })
    }

    fn load_steps(&self, item_id: u64) -> Result<[StepRecord; STEP_COUNT as usize]> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STEPS_SQL)
            .map_err(|e| TrackerError::database_error("Failed to prepare steps query", e))?;

        let rows: BTreeMap<u8, StepRecord> = stmt
            .query_map(params![item_id as i64], |row| {
                let step_no: i64 = row.get(0)?;
                Ok((
                    step_no as u8,
                    StepRecord {
                        planned: parse_optional_timestamp(row, 1)?,
                        actual: parse_optional_timestamp(row, 2)?,
                        responses: parse_responses(row, 3)?,
                    },
                ))
            })
            .map_err(|e| TrackerError::database_error("Failed to query step records", e))?
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| TrackerError::database_error("Failed to fetch step records", e))?;

        let mut steps: [StepRecord; STEP_COUNT as usize] = Default::default();
        for (step_no, record) in rows {
            if (1..=STEP_COUNT).contains(&step_no) {
                steps[usize::from(step_no) - 1] = record;
            }
        }
        Ok(steps)
    }

    fn assemble_item(&self, row: ItemRow) -> Result<Item> {
        let steps = self.load_steps(row.id)?;
        Ok(Item {
            id: row.id,
            party_id: row.party_id,
            item: row.item,
            qty: row.qty,
            cancelled: row.cancelled,
            steps,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    /// Creates a new item under the given party, inserting all eight step
    /// rows with step 1's planned deadline already set.
    pub fn create_item(
        &mut self,
        party_id: u64,
        item: &str,
        qty: u32,
        first_planned: Timestamp,
    ) -> Result<Item> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !Self::party_exists(&tx, party_id)? {
            return Err(TrackerError::PartyNotFound { id: party_id });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_ITEM_SQL,
            params![party_id as i64, item, qty as i64, &now_str, &now_str],
        )
        .map_err(|e| TrackerError::database_error("Failed to insert item", e))?;

        let id = tx.last_insert_rowid() as u64;

        let first_planned_str = first_planned.to_string();
        for step_no in 1..=STEP_COUNT {
            let planned = (step_no == 1).then_some(first_planned_str.as_str());
            tx.execute(INSERT_STEP_ROW_SQL, params![id as i64, step_no, planned])
                .map_err(|e| TrackerError::database_error("Failed to insert step row", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        let mut steps: [StepRecord; STEP_COUNT as usize] = Default::default();
        steps[0].planned = Some(first_planned);

        Ok(Item {
            id,
            party_id,
            item: item.into(),
            qty,
            cancelled: false,
            steps,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a single item with all eight step records.
    pub fn get_item(&self, item_id: u64) -> Result<Option<Item>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ITEM_SQL)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let row = stmt
            .query_row(params![item_id as i64], Self::build_item_row)
            .optional()
            .map_err(|e| TrackerError::database_error("Failed to get item", e))?;

        row.map(|row| self.assemble_item(row)).transpose()
    }

    /// Retrieves the full item collection.
    pub fn get_items(&self) -> Result<Vec<Item>> {
        let rows = self.query_item_rows(SELECT_ITEMS_SQL, [])?;
        rows.into_iter()
            .map(|row| self.assemble_item(row))
            .collect()
    }

    /// Retrieves all items belonging to one party.
    pub fn get_party_items(&self, party_id: u64) -> Result<Vec<Item>> {
        let rows = self.query_item_rows(SELECT_PARTY_ITEMS_SQL, params![party_id as i64])?;
        rows.into_iter()
            .map(|row| self.assemble_item(row))
            .collect()
    }

    fn query_item_rows<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<ItemRow>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let rows = stmt
            .query_map(params, Self::build_item_row)
            .map_err(|e| TrackerError::database_error("Failed to query items", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch items")?;
        Ok(rows)
    }

    /// Applies a minimal diff to one item in a single transaction.
    ///
    /// Only the fields present in the patch are touched; everything else
    /// keeps its stored value.
    pub fn apply_patch(&mut self, item_id: u64, patch: &ItemPatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_ITEM_EXISTS_SQL, params![item_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check item existence")?;
        if !exists {
            return Err(TrackerError::ItemNotFound { id: item_id });
        }

        Self::apply_patch_in_tx(&tx, item_id, patch)?;

        let now_str = Timestamp::now().to_string();
        tx.execute(UPDATE_ITEM_TIMESTAMP_SQL, params![&now_str, item_id as i64])
            .map_err(|e| TrackerError::database_error("Failed to update item timestamp", e))?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    fn apply_patch_in_tx(tx: &Transaction, item_id: u64, patch: &ItemPatch) -> Result<()> {
        for (&step_no, fields) in &patch.steps {
            if let Some(planned) = fields.planned {
                tx.execute(
                    UPDATE_STEP_PLANNED_SQL,
                    params![
                        planned.map(|ts| ts.to_string()),
                        item_id as i64,
                        step_no as i64
                    ],
                )
                .map_err(|e| TrackerError::database_error("Failed to update planned time", e))?;
            }
            if let Some(actual) = fields.actual {
                tx.execute(
                    UPDATE_STEP_ACTUAL_SQL,
                    params![
                        actual.map(|ts| ts.to_string()),
                        item_id as i64,
                        step_no as i64
                    ],
                )
                .map_err(|e| TrackerError::database_error("Failed to update actual time", e))?;
            }
            if let Some(responses) = &fields.responses {
                let json = if responses.is_empty() {
                    None
                } else {
                    Some(serde_json::to_string(responses)?)
                };
                tx.execute(
                    UPDATE_STEP_RESPONSES_SQL,
                    params![json, item_id as i64, step_no as i64],
                )
                .map_err(|e| TrackerError::database_error("Failed to update responses", e))?;
            }
        }

        if let Some(cancelled) = patch.cancelled {
            tx.execute(
                UPDATE_ITEM_CANCELLED_SQL,
                params![i64::from(cancelled), item_id as i64],
            )
            .map_err(|e| TrackerError::database_error("Failed to update cancelled flag", e))?;
        }

        Ok(())
    }
}
