//! Data models for parties, items, and step records.
//!
//! This module contains the core domain models of the Waybill follow-up
//! system. An [`Item`] is one order line owned by a [`Party`]; it carries a
//! fixed array of eight [`StepRecord`]s indexed by step number. Response
//! field names inside a step record are resolved through the step catalog
//! ([`crate::catalog`]) rather than hard-coded per step.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] to keep data structures separate from
//! presentation logic.

pub mod config;
pub mod item;
pub mod party;
pub mod patch;
pub mod report;
pub mod summary;


// Re-export all public types at the models level
pub use config::{StepConfig, StepConfigSet, TatUnit};
pub use item::{Item, Responses, StepRecord, STEP_COUNT};
pub use party::Party;
pub use patch::{ItemPatch, StepFieldPatch};
pub use report::{ItemReport, StepDelay};
pub use summary::ItemSummary;
