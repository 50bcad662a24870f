//! Item and step record definitions.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Number of steps in the order-to-delivery pipeline.
pub const STEP_COUNT: u8 = 8;

/// Named response fields recorded when a step is completed.
///
/// The valid field names for each step are declared by its
/// [`StepDefinition`](crate::catalog::StepDefinition).
pub type Responses = BTreeMap<String, String>;

/// Per-step follow-up state: target time, completion time, and responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StepRecord {
    /// Target completion time (TAT deadline)
    pub planned: Option<Timestamp>,

    /// When the step was actually completed
    pub actual: Option<Timestamp>,

    /// Response fields captured at completion
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub responses: Responses,
}

/// Represents one order line item moving through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique identifier for the item
    pub id: u64,

    /// ID of the owning party
    pub party_id: u64,

    /// Product name
    pub item: String,

    /// Ordered quantity
    pub qty: u32,

    /// Cancellation flag, orthogonal to step progress
    pub cancelled: bool,

    /// Step records indexed by step number 1-8
    pub steps: [StepRecord; STEP_COUNT as usize],

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the item was last updated (UTC)
    pub updated_at: Timestamp,
}

impl Item {
    /// Returns the record for a 1-based step number.
    ///
    /// # Panics
    ///
    /// Panics if `number` is outside `1..=8`. Callers validate step numbers
    /// through [`crate::catalog::step_definition`] first.
    pub fn step(&self, number: u8) -> &StepRecord {
        &self.steps[usize::from(number) - 1]
    }

    /// Mutable access to the record for a 1-based step number.
    ///
    /// # Panics
    ///
    /// Panics if `number` is outside `1..=8`.
    pub fn step_mut(&mut self, number: u8) -> &mut StepRecord {
        &mut self.steps[usize::from(number) - 1]
    }
}
