//! Static definition of the eight order-to-delivery steps.
//!
//! The catalog is the single source of truth for step names, prompts,
//! response field names, fixed-choice options, and skip predicates. Both
//! [`crate::engine::pending_step`] and the next-target computation inside
//! submission handling consult the same predicates here, so a later
//! correction to an earlier answer changes which steps are required
//! without any scattered conditionals.

use crate::error::{Result, TrackerError};
use crate::models::{Item, STEP_COUNT};

/// Response field name for step 1.
pub const DESTINATION: &str = "Destination";
/// Destination choice that makes step 5 skippable once packing is done.
pub const DESTINATION_LOCAL: &str = "Local";
/// Destination choice for out-of-town consignments.
pub const DESTINATION_OUT_STATION: &str = "Out Station";

/// Response field name for step 2.
pub const STOCK_AVAILABILITY: &str = "Stock Availability";
/// Stock choice that makes step 3 (Production) skippable.
pub const STOCK_AVAILABLE: &str = "Stock Available";
/// Stock choice that keeps step 3 required.
pub const STOCK_NOT_AVAILABLE: &str = "Not Available";

/// Primary response field name for step 7.
pub const BILL_NUMBER: &str = "Bill Number";
/// Step 7 field holding the revenue amount.
pub const REVENUE: &str = "Revenue";
/// Step 7 field driving the total-cost derivation.
pub const COST_PER_UNIT: &str = "Cost Per Unit";
/// Step 7 field auto-derived as cost per unit times quantity.
pub const TOTAL_COST: &str = "Total Cost";

/// Shape of the response expected when completing a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// The primary field must match one of the listed options
    Choice(&'static [&'static str]),

    /// Free-form fields; only the primary field is mandatory
    Form,
}

/// Static definition of one pipeline step.
pub struct StepDefinition {
    /// Step number 1-8
    pub number: u8,

    /// Display name
    pub name: &'static str,

    /// Prompt shown when the step is pending
    pub prompt: &'static str,

    /// Response field names; the first entry is the mandatory primary field
    pub fields: &'static [&'static str],

    /// Response shape
    pub kind: ResponseKind,

    skip: Option<fn(&Item) -> bool>,
}

impl StepDefinition {
    /// The mandatory primary response field.
    pub fn primary_field(&self) -> &'static str {
        self.fields[0]
    }

    /// Whether a field name belongs to this step.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains(&name)
    }

    /// Evaluates the skip predicate against the item's current responses.
    /// Steps without a predicate are always required.
    pub fn is_skipped(&self, item: &Item) -> bool {
        self.skip.is_some_and(|predicate| predicate(item))
    }
}

fn skip_production(item: &Item) -> bool {
    item.step(2)
        .responses
        .get(STOCK_AVAILABILITY)
        .is_some_and(|answer| answer == STOCK_AVAILABLE)
}

fn skip_transporter(item: &Item) -> bool {
    item.step(1)
        .responses
        .get(DESTINATION)
        .is_some_and(|answer| answer == DESTINATION_LOCAL)
        && item.step(4).actual.is_some()
}

static CATALOG: [StepDefinition; STEP_COUNT as usize] = [
    StepDefinition {
        number: 1,
        name: "Destination",
        prompt: "Where is this order headed?",
        fields: &[DESTINATION],
        kind: ResponseKind::Choice(&[DESTINATION_LOCAL, DESTINATION_OUT_STATION]),
        skip: None,
    },
    StepDefinition {
        number: 2,
        name: "Stock Availability",
        prompt: "Is the item available in stock?",
        fields: &[STOCK_AVAILABILITY],
        kind: ResponseKind::Choice(&[STOCK_AVAILABLE, STOCK_NOT_AVAILABLE]),
        skip: None,
    },
    StepDefinition {
        number: 3,
        name: "Production",
        prompt: "Record production completion details",
        fields: &["Production Details"],
        kind: ResponseKind::Form,
        skip: Some(skip_production),
    },
    StepDefinition {
        number: 4,
        name: "Packing",
        prompt: "Record packing completion details",
        fields: &["Packing Details"],
        kind: ResponseKind::Form,
        skip: None,
    },
    StepDefinition {
        number: 5,
        name: "Talk to Transporter",
        prompt: "Which transporter will carry this consignment?",
        fields: &["Transporter"],
        kind: ResponseKind::Form,
        skip: Some(skip_transporter),
    },
    StepDefinition {
        number: 6,
        name: "Dispatch",
        prompt: "Record dispatch details",
        fields: &["LR Number", "Vehicle Number"],
        kind: ResponseKind::Form,
        skip: None,
    },
    StepDefinition {
        number: 7,
        name: "Billing",
        prompt: "Record the bill raised for this item",
        fields: &[BILL_NUMBER, REVENUE, COST_PER_UNIT, TOTAL_COST],
        kind: ResponseKind::Form,
        skip: None,
    },
    StepDefinition {
        number: 8,
        name: "Bill Filing",
        prompt: "Where has the bill been filed?",
        fields: &["Filing Reference"],
        kind: ResponseKind::Form,
        skip: None,
    },
];

/// Returns the full catalog in pipeline order.
pub fn catalog() -> &'static [StepDefinition; STEP_COUNT as usize] {
    &CATALOG
}

/// Looks up the definition for a 1-based step number.
pub fn step_definition(number: u8) -> Result<&'static StepDefinition> {
    if (1..=STEP_COUNT).contains(&number) {
        Ok(&CATALOG[usize::from(number) - 1])
    } else {
        Err(TrackerError::validation("step")
            .with_reason(format!("Step number {number} is out of range 1-{STEP_COUNT}")))
    }
}
