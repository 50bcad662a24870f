//! High-level tracker API for the order-to-delivery follow-up system.
//!
//! This module provides the main [`Tracker`] interface. The tracker acts
//! as the coordinator between callers and the persistence layer: it loads
//! fresh item state, lets the pure engine compute patches, and hands them
//! to the database for atomic application.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Tracker     │    │     Engine      │    │    Database     │
//! │ (party_ops,     │───▶│ (pure patch     │───▶│    (via db/)    │
//! │  item/step_ops) │    │  computation)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!      Async facade        Business logic        Data persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances
//! - [`party_ops`]: Party registration and listing
//! - [`item_ops`]: Item creation, listing, cancellation
//! - [`step_ops`]: Step submission, reset, and follow-up reports
//! - [`bulk_ops`]: One submission across many items or a whole party
//! - [`config_ops`]: TAT configuration with default fallback
//! - [`sync`]: Periodic background refresh of the item collection
//!
//! Writes are synchronous-until-acknowledged: a failed submission leaves
//! no local trace, and the item is re-read after the database accepts the
//! patch, so a retry always recomputes the pending step from server truth.

use std::path::PathBuf;

use jiff::tz::TimeZone;

use crate::error::{Result, TrackerError};
use crate::models::StepConfigSet;

// Module declarations
pub mod builder;
pub mod bulk_ops;
pub mod config_ops;
pub mod item_ops;
pub mod party_ops;
pub mod step_ops;
pub mod sync;


// Re-export the main types
pub use builder::TrackerBuilder;
pub use sync::SyncLoop;

/// Main tracker interface for managing parties, items, and follow-ups.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) tz: TimeZone,
}

impl Tracker {
    /// Creates a new tracker with the specified database path and timezone.
    pub(crate) fn new(db_path: PathBuf, tz: TimeZone) -> Self {
        Self { db_path, tz }
    }

    pub(crate) fn join_error(e: tokio::task::JoinError) -> TrackerError {
        TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        }
    }

    /// Loads the full configuration set, substituting defaults for steps
    /// without a persisted row. Missing rows are a warning, never an error.
    pub(crate) fn load_config_set(db: &crate::db::Database) -> Result<StepConfigSet> {
        let rows = db.get_step_configs()?;
        let (configs, missing) = StepConfigSet::from_rows(rows);
        if !missing.is_empty() {
            log::warn!("No TAT config for steps {missing:?}; using default (1 hour, no doer)");
        }
        Ok(configs)
    }
}
