//! Minimal-diff patch types sent to the persistence layer.
//!
//! The engine never writes a full item; it sends only the fields a
//! submission or reset changed so the database can apply them atomically.
//! `Option<Option<Timestamp>>` distinguishes "leave unchanged" (`None`)
//! from "set" (`Some(Some(_))`) and "clear" (`Some(None)`).

use std::collections::BTreeMap;

use jiff::Timestamp;

use super::{Item, Responses};

/// Changed fields for one step record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepFieldPatch {
    /// New planned timestamp, or `Some(None)` to clear it
    pub planned: Option<Option<Timestamp>>,

    /// New actual timestamp, or `Some(None)` to clear it
    pub actual: Option<Option<Timestamp>>,

    /// Replacement response set; an empty map clears all responses
    pub responses: Option<Responses>,
}

impl StepFieldPatch {
    /// True when no field of the step is touched.
    pub fn is_empty(&self) -> bool {
        self.planned.is_none() && self.actual.is_none() && self.responses.is_none()
    }
}

/// Partial item record containing only changed fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    /// Per-step field changes, keyed by step number 1-8
    pub steps: BTreeMap<u8, StepFieldPatch>,

    /// Cancellation flag change
    pub cancelled: Option<bool>,
}

impl ItemPatch {
    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.cancelled.is_none() && self.steps.values().all(StepFieldPatch::is_empty)
    }

    /// Returns the (possibly fresh) field patch for a step number.
    pub fn step_mut(&mut self, number: u8) -> &mut StepFieldPatch {
        self.steps.entry(number).or_default()
    }

    /// Merges the patch into an in-memory item, mirroring what the
    /// persistence layer does on disk.
    pub fn apply_to(&self, item: &mut Item) {
        for (&number, fields) in &self.steps {
            let record = item.step_mut(number);
            if let Some(planned) = fields.planned {
                record.planned = planned;
            }
            if let Some(actual) = fields.actual {
                record.actual = actual;
            }
            if let Some(responses) = &fields.responses {
                record.responses = responses.clone();
            }
        }
        if let Some(cancelled) = self.cancelled {
            item.cancelled = cancelled;
        }
    }
}
