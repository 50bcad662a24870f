//! Read-side follow-up report combining step state with delay status.

use crate::delay::Delay;
use crate::engine::PendingStep;

use super::Item;

/// Delay status of one step within a report.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDelay {
    /// Step number 1-8
    pub step: u8,

    /// Display name from the step catalog
    pub name: &'static str,

    /// True when the step's skip predicate currently holds
    pub skipped: bool,

    /// Planned-vs-actual classification
    pub delay: Delay,
}

/// Full follow-up report for a single item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReport {
    /// The item the report was computed from
    pub item: Item,

    /// Currently pending step
    pub pending: PendingStep,

    /// One entry per step, in pipeline order
    pub steps: Vec<StepDelay>,
}
