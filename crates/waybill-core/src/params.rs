//! Parameter structures for Waybill operations.
//!
//! Shared parameter structures usable across interfaces (CLI today, other
//! front ends later) without framework-specific derives. Interface layers
//! wrap these with their own derives (clap args, etc.) and convert via
//! `From` impls, keeping the core interface-agnostic.

use serde::{Deserialize, Serialize};

use crate::engine::ResetScope;
use crate::models::Responses;

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_item, cancel, and report generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for registering a new party.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateParty {
    /// Display name of the counterparty (required)
    pub name: String,
    /// Optional contact detail
    pub contact: Option<String>,
}

/// Parameters for creating a new order line item.
///
/// The workflow always starts scheduled: step 1's planned deadline is
/// computed from the configured TAT at creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItem {
    /// ID of the owning party
    pub party_id: u64,
    /// Product name
    pub item: String,
    /// Ordered quantity
    pub qty: u32,
}

/// Parameters for listing items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListItems {
    /// Restrict to one party's items
    pub party_id: Option<u64>,
    /// Include cancelled items
    pub include_cancelled: bool,
}

/// Parameters for submitting a step completion for a single item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitStep {
    /// ID of the item to advance
    pub item_id: u64,
    /// Step number 1-8; must equal the item's pending step
    pub step: u8,
    /// Response fields for the step
    pub responses: Responses,
}

/// Parameters for submitting one step completion across a party's items.
///
/// The submission is offered to every non-cancelled item of the party and
/// validated per item against its own pending step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitStepParty {
    /// ID of the party whose items are targeted
    pub party_id: u64,
    /// Step number 1-8
    pub step: u8,
    /// Response fields for the step
    pub responses: Responses,
}

/// Parameters for submitting one step completion across explicit items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitStepBulk {
    /// IDs of the items targeted
    pub item_ids: Vec<u64>,
    /// Step number 1-8
    pub step: u8,
    /// Response fields for the step
    pub responses: Responses,
}

/// Parameters for resetting an item's follow-up state.
#[derive(Debug, Clone)]
pub struct ResetFollowUp {
    /// ID of the item to reset
    pub item_id: u64,
    /// How much step state to clear
    pub scope: ResetScope,
}

/// Parameters for flipping an item's cancellation flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetCancelled {
    /// ID of the item
    pub item_id: u64,
    /// New cancellation state
    pub cancelled: bool,
}

/// Parameters for updating one step's TAT configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetStepConfig {
    /// Step number 1-8
    pub step: u8,
    /// Responsible-party name, if assigned
    pub doer: Option<String>,
    /// TAT duration value
    pub tat_value: i64,
    /// TAT duration unit as text ("hours" or "days")
    pub tat_unit: String,
}
