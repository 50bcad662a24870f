//! Party operations for the Tracker.

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::Result,
    models::Party,
    params::{CreateParty, Id},
};

impl Tracker {
    /// Registers a new party with an optional contact string.
    pub async fn create_party(&self, params: &CreateParty) -> Result<Party> {
        let db_path = self.db_path.clone();
        let name = params.name.clone();
        let contact = params.contact.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_party(&name, contact.as_deref())
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Retrieves a single party by its ID.
    pub async fn get_party(&self, params: &Id) -> Result<Option<Party>> {
        let db_path = self.db_path.clone();
        let party_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_party(party_id)
        })
        .await
        .map_err(Self::join_error)?
    }

    /// Retrieves all registered parties.
    pub async fn list_parties(&self) -> Result<crate::display::Parties> {
        let db_path = self.db_path.clone();

        let parties = task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_parties()
        })
        .await
        .map_err(Self::join_error)??;

        Ok(crate::display::Parties(parties))
    }
}
