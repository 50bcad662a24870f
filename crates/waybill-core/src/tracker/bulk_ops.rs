//! Bulk submission operations for the Tracker.
//!
//! One set of responses applied to many items, with per-item failure
//! collection. A failing item never blocks the rest of the batch.

use jiff::Timestamp;
use tokio::task;

use super::Tracker;
use crate::{
    bulk::{self, BulkReport},
    db::Database,
    error::{Result, TrackerError},
    models::{Item, Responses},
    params::{SubmitStepBulk, SubmitStepParty},
};

impl Tracker {
    /// Submits the same responses for one step across an explicit list of
    /// item IDs.
    ///
    /// Unknown IDs become per-item failures in the report rather than
    /// failing the whole batch.
    pub async fn submit_step_bulk(&self, params: &SubmitStepBulk) -> Result<BulkReport> {
        let db_path = self.db_path.clone();
        let tz = self.tz.clone();
        let item_ids = params.item_ids.clone();
        let step = params.step;
        let responses = params.responses.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut report = BulkReport::default();
            let mut items = Vec::with_capacity(item_ids.len());
            for &id in &item_ids {
                match db.get_item(id)? {
                    Some(item) => items.push(item),
                    None => report.record_failure(id, TrackerError::ItemNotFound { id }),
                }
            }
            Self::apply_bulk(&mut db, items, step, &responses, tz, report)
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Submits the same responses for one step across every active item of
    /// a party.
    ///
    /// Cancelled items are skipped. Fails outright if the party does not
    /// exist; an empty active set yields an empty (clean) report.
    pub async fn submit_step_party(&self, params: &SubmitStepParty) -> Result<BulkReport> {
        let db_path = self.db_path.clone();
        let tz = self.tz.clone();
        let party_id = params.party_id;
        let step = params.step;
        let responses = params.responses.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            if db.get_party(party_id)?.is_none() {
                return Err(TrackerError::PartyNotFound { id: party_id });
            }
            let items: Vec<Item> = db
                .get_party_items(party_id)?
                .into_iter()
                .filter(|item| !item.cancelled)
                .collect();
            Self::apply_bulk(&mut db, items, step, &responses, tz, BulkReport::default())
        })
        .await
        .map_err(Self::join_error)?
    }

    fn apply_bulk(
        db: &mut Database,
        items: Vec<Item>,
        step: u8,
        responses: &Responses,
        tz: jiff::tz::TimeZone,
        mut report: BulkReport,
    ) -> Result<BulkReport> {
        let configs = Self::load_config_set(db)?;
        let now = Timestamp::now().to_zoned(tz);

        for (item_id, outcome) in bulk::build_bulk_patches(&items, step, responses, &now, &configs)
        {
            match outcome.and_then(|patch| db.apply_patch(item_id, &patch)) {
                Ok(()) => report.record_applied(item_id),
                Err(error) => report.record_failure(item_id, error),
            }
        }

        Ok(report)
    }
}
