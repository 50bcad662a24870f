//! Step configuration queries.
//!
//! The step_config table is slowly-changing reference data. A missing row
//! is not an error here; the tracker substitutes defaults and logs.

use rusqlite::{params, types::Type};

use crate::error::{DatabaseResultExt, Result, TrackerError};
use crate::models::{StepConfig, TatUnit};

const SELECT_STEP_CONFIGS_SQL: &str =
    "SELECT step_no, doer, tat_value, tat_unit FROM step_config ORDER BY step_no";
const UPSERT_STEP_CONFIG_SQL: &str = "INSERT INTO step_config (step_no, doer, tat_value, tat_unit) VALUES (?1, ?2, ?3, ?4) \
     ON CONFLICT(step_no) DO UPDATE SET doer = ?2, tat_value = ?3, tat_unit = ?4";

impl super::Database {
    fn build_config_from_row(row: &rusqlite::Row) -> rusqlite::Result<StepConfig> {
        let unit_str: String = row.get(3)?;
        let tat_unit = unit_str.parse::<TatUnit>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid TAT unit: {unit_str}").into(),
            )
        })?;

        Ok(StepConfig {
            step: row.get::<_, i64>(0)? as u8,
            doer: row.get(1)?,
            tat_value: row.get(2)?,
            tat_unit,
        })
    }

    /// Retrieves whatever step configuration rows exist.
    pub fn get_step_configs(&self) -> Result<Vec<StepConfig>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STEP_CONFIGS_SQL)
            .map_err(|e| TrackerError::database_error("Failed to prepare query", e))?;

        let configs = stmt
            .query_map([], Self::build_config_from_row)
            .map_err(|e| TrackerError::database_error("Failed to query step config", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TrackerError::database_error("Failed to fetch step config", e))?;

        Ok(configs)
    }

    /// Inserts or replaces the configuration row for one step.
    pub fn upsert_step_config(&mut self, config: &StepConfig) -> Result<()> {
        self.connection
            .execute(
                UPSERT_STEP_CONFIG_SQL,
                params![
                    config.step as i64,
                    config.doer.as_deref(),
                    config.tat_value,
                    config.tat_unit.as_str()
                ],
            )
            .db_context("Failed to upsert step config")?;

        Ok(())
    }
}
