//! Step submission, reset, and follow-up reporting for the Tracker.

use jiff::Timestamp;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    engine::{self, PendingStep},
    error::{Result, TrackerError},
    models::{Item, ItemReport},
    params::{Id, ResetFollowUp, SubmitStep},
};

impl Tracker {
    /// Submits responses for one step of an item.
    ///
    /// The item is read fresh, validated against the catalog, and updated
    /// with a minimal patch in one transaction. The next unskipped step
    /// receives its planned deadline as part of the same write. Returns
    /// the item as stored after the patch.
    pub async fn submit_step(&self, params: &SubmitStep) -> Result<Item> {
        let db_path = self.db_path.clone();
        let tz = self.tz.clone();
        let item_id = params.item_id;
        let step = params.step;
        let responses = params.responses.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let item = db
                .get_item(item_id)?
                .ok_or(TrackerError::ItemNotFound { id: item_id })?;
            let configs = Self::load_config_set(&db)?;
            let now = Timestamp::now().to_zoned(tz);
            let patch = engine::build_submit_patch(&item, step, responses, &now, &configs)?;
            db.apply_patch(item_id, &patch)?;
            db.get_item(item_id)?
                .ok_or(TrackerError::ItemNotFound { id: item_id })
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Clears actuals and responses for the requested range of steps.
    ///
    /// A full reset keeps step 1's planned deadline so the follow-up can
    /// restart without rescheduling; a partial reset keeps the planned
    /// deadline of the step it restarts from and clears everything after.
    pub async fn reset_follow_up(&self, params: &ResetFollowUp) -> Result<Item> {
        let db_path = self.db_path.clone();
        let item_id = params.item_id;
        let scope = params.scope;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let patch = engine::build_reset_patch(scope)?;
            db.apply_patch(item_id, &patch)?;
            db.get_item(item_id)?
                .ok_or(TrackerError::ItemNotFound { id: item_id })
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Returns the step currently awaiting submission for an item.
    pub async fn pending_step(&self, params: &Id) -> Result<PendingStep> {
        let db_path = self.db_path.clone();
        let item_id = params.id;

        let item = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_item(item_id)?
                .ok_or(TrackerError::ItemNotFound { id: item_id })
        })
        .await
        .map_err(Self::join_error)??;

        Ok(engine::pending_step(&item))
    }

    /// Builds the per-step delay report for an item, evaluated at the
    /// current instant.
    pub async fn item_report(&self, params: &Id) -> Result<ItemReport> {
        let db_path = self.db_path.clone();
        let item_id = params.id;

        let item = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_item(item_id)?
                .ok_or(TrackerError::ItemNotFound { id: item_id })
        })
        .await
        .map_err(Self::join_error)??;

        Ok(engine::build_report(&item, Timestamp::now()))
    }
}
