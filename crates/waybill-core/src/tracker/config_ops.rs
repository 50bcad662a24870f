//! TAT configuration operations for the Tracker.

use tokio::task;

use super::Tracker;
use crate::{
    catalog,
    db::Database,
    error::{Result, TrackerError},
    models::{StepConfig, StepConfigSet, TatUnit},
    params::SetStepConfig,
};

impl Tracker {
    /// Retrieves the effective configuration for all eight steps.
    ///
    /// Steps without a stored row are reported with the default TAT.
    pub async fn step_configs(&self) -> Result<StepConfigSet> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            Self::load_config_set(&db)
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Stores the doer and TAT for one step, replacing any existing row.
    pub async fn set_step_config(&self, params: &SetStepConfig) -> Result<StepConfig> {
        let step = params.step;
        catalog::step_definition(step)?;

        if params.tat_value <= 0 {
            return Err(
                TrackerError::validation("tat_value").with_reason("TAT value must be positive")
            );
        }

        let tat_unit = params.tat_unit.parse::<TatUnit>().map_err(|_| {
            TrackerError::validation("tat_unit").with_reason(format!(
                "Unknown TAT unit '{}' (expected hours or days)",
                params.tat_unit
            ))
        })?;

        let config = StepConfig {
            step,
            doer: params.doer.clone(),
            tat_value: params.tat_value,
            tat_unit,
        };

        let db_path = self.db_path.clone();
        let stored = config.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.upsert_step_config(&stored)
        })
        .await
        .map_err(Self::join_error)??;

        Ok(config)
    }
}
