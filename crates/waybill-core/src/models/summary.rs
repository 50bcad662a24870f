//! Compact item view for list output.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::engine::PendingStep;

/// List-view projection of an item: identity, quantity, and where it
/// currently sits in the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemSummary {
    /// Unique identifier for the item
    pub id: u64,

    /// ID of the owning party
    pub party_id: u64,

    /// Product name
    pub item: String,

    /// Ordered quantity
    pub qty: u32,

    /// Cancellation flag
    pub cancelled: bool,

    /// Currently pending step, derived skip-aware
    pub pending: PendingStep,

    /// Planned deadline of the pending step, when one is scheduled
    pub pending_planned: Option<Timestamp>,
}
