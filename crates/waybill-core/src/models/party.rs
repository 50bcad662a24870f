//! Party model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The counterparty that owns one or more items.
///
/// Bulk operations may be scoped at this level; the follow-up engine is
/// otherwise agnostic to the grouping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Party {
    /// Unique identifier for the party
    pub id: u64,

    /// Display name of the counterparty
    pub name: String,

    /// Optional contact detail (phone, email)
    pub contact: Option<String>,

    /// Timestamp when the party was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the party was last updated (UTC)
    pub updated_at: Timestamp,
}
