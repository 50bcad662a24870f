//! Item operations for the Tracker.

use jiff::Timestamp;
use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    engine,
    error::Result,
    models::Item,
    params::{CreateItem, Id, ListItems, SetCancelled},
    schedule,
};

impl Tracker {
    /// Creates a new item under a party.
    ///
    /// The first step's planned deadline is scheduled immediately from the
    /// creation time and the step 1 TAT configuration.
    pub async fn create_item(&self, params: &CreateItem) -> Result<Item> {
        let db_path = self.db_path.clone();
        let tz = self.tz.clone();
        let party_id = params.party_id;
        let item = params.item.clone();
        let qty = params.qty;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let configs = Self::load_config_set(&db)?;
            let now = Timestamp::now().to_zoned(tz);
            let first_planned = schedule::next_planned(&now, configs.get(1))?;
            db.create_item(party_id, &item, qty, first_planned.timestamp())
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Retrieves a single item with all of its step records.
    pub async fn get_item(&self, params: &Id) -> Result<Option<Item>> {
        let db_path = self.db_path.clone();
        let item_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_item(item_id)
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Lists items as summaries, optionally filtered to one party.
    ///
    /// Cancelled items are excluded unless `include_cancelled` is set.
    pub async fn list_items(&self, params: &ListItems) -> Result<crate::display::ItemSummaries> {
        let db_path = self.db_path.clone();
        let party_id = params.party_id;
        let include_cancelled = params.include_cancelled;

        let items = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            match party_id {
                Some(id) => db.get_party_items(id),
                None => db.get_items(),
            }
        })
        .await
        .map_err(Self::join_error)??;

        let summaries = items
            .iter()
            .filter(|item| include_cancelled || !item.cancelled)
            .map(engine::summarize)
            .collect();

        Ok(crate::display::ItemSummaries(summaries))
    }

    /// Sets or clears the cancelled flag on an item.
    ///
    /// Cancellation is an overlay: step records keep their values and the
    /// item resumes at the same pending step when restored.
    pub async fn set_cancelled(&self, params: &SetCancelled) -> Result<Item> {
        let db_path = self.db_path.clone();
        let item_id = params.item_id;
        let cancelled = params.cancelled;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let patch = engine::build_cancel_patch(cancelled);
            db.apply_patch(item_id, &patch)?;
            db.get_item(item_id)?
                .ok_or(crate::error::TrackerError::ItemNotFound { id: item_id })
        })
        .await
        .map_err(Self::join_error)?
    }
}
