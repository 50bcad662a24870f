//! Core library for the Waybill order-to-delivery follow-up application.
//!
//! This crate provides the core business logic for tracking order line
//! items through a fixed eight-step dispatch pipeline: step catalog and
//! skip rules, TAT deadline scheduling, delay classification, submission
//! validation, and database operations.
//!
//! # Architecture
//!
//! Submissions flow through three layers:
//!
//! - **Engine** ([`engine`]): Pure functions that validate a submission
//!   against the item's current state and produce a minimal patch
//! - **Tracker** ([`tracker`]): Async facade that reads fresh item state,
//!   invokes the engine, and applies patches atomically
//! - **Database** ([`db`]): SQLite persistence with per-step records
//!
//! Display formatting lives in [`display`], separated from the data models
//! so the same data can be formatted differently per context.
//!
//! # Quick Start
//!
//! ```rust
//! use waybill_core::{TrackerBuilder, params::{CreateItem, CreateParty}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a tracker instance
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Register a party and create an item for it
//! let party = tracker
//!     .create_party(&CreateParty {
//!         name: "Sharma Traders".to_string(),
//!         contact: None,
//!     })
//!     .await?;
//!
//! let item = tracker
//!     .create_item(&CreateItem {
//!         party_id: party.id,
//!         item: "Gasket".to_string(),
//!         qty: 10,
//!     })
//!     .await?;
//! println!("Created item: {}", item);
//! # Ok(())
//! # }
//! ```

pub mod bulk;
pub mod catalog;
pub mod db;
pub mod delay;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;
pub mod tracker;

// Re-export commonly used types
pub use bulk::{BulkFailure, BulkReport};
pub use db::Database;
pub use delay::{Delay, DelayStatus};
pub use display::{CreateResult, ItemSummaries, LocalDateTime, OperationStatus, Parties, UpdateResult};
pub use engine::{PendingStep, ResetScope};
pub use error::{Result, TrackerError};
pub use models::{
    Item, ItemPatch, ItemReport, ItemSummary, Party, Responses, StepConfig, StepConfigSet,
    StepRecord, TatUnit, STEP_COUNT,
};
pub use params::{
    CreateItem, CreateParty, Id, ListItems, ResetFollowUp, SetCancelled, SetStepConfig,
    SubmitStep, SubmitStepBulk, SubmitStepParty,
};
pub use tracker::{SyncLoop, Tracker, TrackerBuilder};
