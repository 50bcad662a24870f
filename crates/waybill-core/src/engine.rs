//! The follow-up state machine.
//!
//! An item's position in the pipeline is derived, never stored: the
//! pending step is the lowest-numbered step without an actual-completion
//! timestamp, after removing steps whose skip predicates hold. Because
//! predicates depend on mutable response data, the derivation is evaluated
//! fresh on every call.
//!
//! All mutations are expressed as an [`ItemPatch`] computed up front and
//! applied atomically by the persistence layer; a rejected submission
//! never produces a partial patch.

use std::fmt;

use jiff::Zoned;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, ResponseKind, COST_PER_UNIT, TOTAL_COST};
use crate::delay;
use crate::error::{Result, TrackerError};
use crate::models::{
    Item, ItemPatch, ItemReport, ItemSummary, Responses, StepConfigSet, StepDelay, STEP_COUNT,
};
use crate::schedule;

/// Where an item currently sits in the pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PendingStep {
    /// The given step number is awaiting completion
    Step(u8),

    /// Every non-skipped step has an actual-completion timestamp
    Complete,
}

impl fmt::Display for PendingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingStep::Step(number) => write!(f, "step {number}"),
            PendingStep::Complete => write!(f, "complete"),
        }
    }
}

/// Range of step state cleared by a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetScope {
    /// Clear every step; only step 1's planned deadline survives
    All,

    /// Clear the given step's completion and everything after it
    FromStep(u8),
}

/// Derives the currently pending step, skip-aware.
///
/// Iterates steps 1 through 8, drops any step whose skip predicate holds
/// against the item's current responses, and returns the first remaining
/// step without an actual timestamp.
pub fn pending_step(item: &Item) -> PendingStep {
    for def in catalog::catalog() {
        if def.is_skipped(item) {
            continue;
        }
        if item.step(def.number).actual.is_none() {
            return PendingStep::Step(def.number);
        }
    }
    PendingStep::Complete
}

/// Validates a response set against a step definition.
///
/// Fixed-choice steps require the primary field to match one of the
/// enumerated options. Free-form steps require a non-empty primary field;
/// secondary fields may stay empty. Fields the step does not declare are
/// rejected.
fn validate_responses(def: &catalog::StepDefinition, responses: &Responses) -> Result<()> {
    for field in responses.keys() {
        if !def.has_field(field) {
            return Err(TrackerError::validation(field.clone()).with_reason(format!(
                "Not a response field of step {} ({})",
                def.number, def.name
            )));
        }
    }

    let primary = def.primary_field();
    let value = responses
        .get(primary)
        .map(String::as_str)
        .unwrap_or_default();

    if value.trim().is_empty() {
        return Err(TrackerError::validation(primary)
            .with_reason(format!("Required for step {} ({})", def.number, def.name)));
    }

    if let ResponseKind::Choice(options) = def.kind {
        if !options.contains(&value) {
            return Err(TrackerError::validation(primary).with_reason(format!(
                "'{value}' is not one of: {}",
                options.join(", ")
            )));
        }
    }

    Ok(())
}

/// Fills in the derived total cost for a billing submission.
///
/// When a numeric cost per unit is entered and no explicit total is given,
/// the total is `cost x qty`. An explicit total always wins, and a
/// non-numeric cost is stored verbatim without deriving anything; this is
/// a convenience default, not an invariant.
fn derive_total_cost(responses: &mut Responses, qty: u32) {
    let cost = responses
        .get(COST_PER_UNIT)
        .map(String::as_str)
        .unwrap_or_default()
        .trim();
    let Ok(cost) = cost.parse::<f64>() else {
        return;
    };

    let total_given = responses
        .get(TOTAL_COST)
        .is_some_and(|value| !value.trim().is_empty());
    if !total_given {
        responses.insert(TOTAL_COST.to_string(), format_amount(cost * f64::from(qty)));
    }
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

/// Validates and applies a step submission, producing the resulting patch.
///
/// Effects computed together, applied as one patch:
/// the step's actual timestamp and responses are set, and the next
/// non-skipped step (evaluated against the just-updated responses) gets a
/// planned deadline from its configured TAT. When no later step remains,
/// the item is complete and no further deadline is written.
pub fn build_submit_patch(
    item: &Item,
    step: u8,
    responses: Responses,
    now: &Zoned,
    configs: &StepConfigSet,
) -> Result<ItemPatch> {
    let def = catalog::step_definition(step)?;

    if item.step(step).actual.is_some() {
        return Err(TrackerError::StaleState {
            item_id: item.id,
            submitted: step,
            pending: pending_step(item),
        });
    }

    let pending = pending_step(item);
    if pending != PendingStep::Step(step) {
        return Err(TrackerError::validation("step").with_reason(format!(
            "Step {step} ({}) is not pending for item {}; {pending} is",
            def.name, item.id
        )));
    }

    let mut responses = responses;
    if def.has_field(COST_PER_UNIT) {
        derive_total_cost(&mut responses, item.qty);
    }
    validate_responses(def, &responses)?;

    let mut patch = ItemPatch::default();
    let submitted = patch.step_mut(step);
    submitted.actual = Some(Some(now.timestamp()));
    submitted.responses = Some(responses.clone());

    // Skip predicates for later steps may flip on the answers just given,
    // so the next target is derived from a probe with the patch applied.
    let mut probe = item.clone();
    patch.apply_to(&mut probe);

    let next = ((step + 1)..=STEP_COUNT)
        .map(|number| catalog::step_definition(number).expect("catalog covers 1-8"))
        .find(|def| !def.is_skipped(&probe));

    if let Some(next_def) = next {
        let planned = schedule::next_planned(now, configs.get(next_def.number))?;
        patch.step_mut(next_def.number).planned = Some(Some(planned.timestamp()));
    }

    Ok(patch)
}

/// Builds the patch for a follow-up reset.
///
/// A blunt range clear that never consults skip predicates; the pending
/// step is re-derived from whatever remains afterwards.
pub fn build_reset_patch(scope: ResetScope) -> Result<ItemPatch> {
    let mut patch = ItemPatch::default();

    match scope {
        ResetScope::All => {
            for number in 1..=STEP_COUNT {
                let fields = patch.step_mut(number);
                fields.actual = Some(None);
                fields.responses = Some(Responses::new());
                // Step 1 keeps its deadline: the item returns to its
                // just-created state.
                if number > 1 {
                    fields.planned = Some(None);
                }
            }
        }
        ResetScope::FromStep(from) => {
            catalog::step_definition(from)?;
            let fields = patch.step_mut(from);
            fields.actual = Some(None);
            fields.responses = Some(Responses::new());
            for number in (from + 1)..=STEP_COUNT {
                let fields = patch.step_mut(number);
                fields.planned = Some(None);
                fields.actual = Some(None);
                fields.responses = Some(Responses::new());
            }
        }
    }

    Ok(patch)
}

/// Builds the patch flipping the cancellation flag. Step data is untouched.
pub fn build_cancel_patch(cancelled: bool) -> ItemPatch {
    ItemPatch {
        steps: Default::default(),
        cancelled: Some(cancelled),
    }
}

/// Computes the read-side follow-up report for an item.
pub fn build_report(item: &Item, now: jiff::Timestamp) -> ItemReport {
    let pending = pending_step(item);
    let steps = catalog::catalog()
        .iter()
        .map(|def| {
            let record = item.step(def.number);
            StepDelay {
                step: def.number,
                name: def.name,
                skipped: def.is_skipped(item),
                delay: delay::classify(record.planned, record.actual, now),
            }
        })
        .collect();

    ItemReport {
        item: item.clone(),
        pending,
        steps,
    }
}

/// Projects an item into its list-view summary.
pub fn summarize(item: &Item) -> ItemSummary {
    let pending = pending_step(item);
    let pending_planned = match pending {
        PendingStep::Step(number) => item.step(number).planned,
        PendingStep::Complete => None,
    };

    ItemSummary {
        id: item.id,
        party_id: item.party_id,
        item: item.item.clone(),
        qty: item.qty,
        cancelled: item.cancelled,
        pending,
        pending_planned,
    }
}
