//! Bulk application of one submission across independently-selected items.
//!
//! Each item is evaluated against its own pending-step state; one item's
//! validation failure never blocks the rest. Failures are collected and
//! reported per item rather than aborting the batch.

use jiff::Zoned;

use crate::engine;
use crate::error::{Result, TrackerError};
use crate::models::{Item, ItemPatch, Responses, StepConfigSet};

/// One item that could not be processed, with the reason.
#[derive(Debug)]
pub struct BulkFailure {
    /// The item the failure belongs to
    pub item_id: u64,

    /// Engine or persistence error for this item alone
    pub error: TrackerError,
}

/// Per-item outcome of a bulk submission.
#[derive(Debug, Default)]
pub struct BulkReport {
    /// Items whose patches were applied
    pub applied: Vec<u64>,

    /// Items rejected by validation or the persistence layer
    pub failures: Vec<BulkFailure>,
}

impl BulkReport {
    /// Records a successfully applied item.
    pub fn record_applied(&mut self, item_id: u64) {
        self.applied.push(item_id);
    }

    /// Records a per-item failure.
    pub fn record_failure(&mut self, item_id: u64, error: TrackerError) {
        self.failures.push(BulkFailure { item_id, error });
    }

    /// True when every selected item was applied.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Computes a submission patch for every item in the batch.
///
/// The same step number and response set are offered to each item; the
/// engine validates them against that item's own pending step. Returns one
/// `(item_id, Result<patch>)` pair per input item, in input order.
pub fn build_bulk_patches(
    items: &[Item],
    step: u8,
    responses: &Responses,
    now: &Zoned,
    configs: &StepConfigSet,
) -> Vec<(u64, Result<ItemPatch>)> {
    items
        .iter()
        .map(|item| {
            let patch = engine::build_submit_patch(item, step, responses.clone(), now, configs);
            (item.id, patch)
        })
        .collect()
}
