//! Command-line interface definitions using clap
//!
//! This module defines the complete CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! Each command defines a clap argument struct here and converts it into
//! the matching interface-agnostic parameter type from
//! [`waybill_core::params`] via a `From` impl, keeping the core free of
//! clap derives.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use waybill_core::params::*;
use waybill_core::ResetScope;

/// Main command-line interface for the Waybill follow-up tool
///
/// Waybill tracks order line items through a fixed eight-step
/// order-to-delivery pipeline: destination, stock check, production,
/// packing, transporter, dispatch, billing, and bill filing. Each step
/// carries a TAT deadline and the tool reports which items are delayed.
#[derive(Parser)]
#[command(version, about, name = "wb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waybill/waybill.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waybill CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage parties (customers)
    #[command(alias = "p")]
    Party {
        #[command(subcommand)]
        command: PartyCommands,
    },
    /// Manage order line items
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Submit and reset pipeline steps
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// View or change per-step TAT configuration
    #[command(alias = "c")]
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Watch all items, refreshing periodically
    #[command(alias = "w")]
    Watch(WatchArgs),
}

/// Register a new party
#[derive(ClapArgs)]
pub struct AddPartyArgs {
    /// Display name of the party
    pub name: String,
    /// Contact detail (phone, email)
    #[arg(short, long, help = "Contact detail such as a phone number or email")]
    pub contact: Option<String>,
}

impl From<AddPartyArgs> for CreateParty {
    fn from(val: AddPartyArgs) -> Self {
        CreateParty {
            name: val.name,
            contact: val.contact,
        }
    }
}

#[derive(Subcommand)]
pub enum PartyCommands {
    /// Register a new party
    #[command(alias = "a")]
    Add(AddPartyArgs),
    /// List all parties
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Create a new item under a party
#[derive(ClapArgs)]
pub struct AddItemArgs {
    /// ID of the owning party
    #[arg(help = "Unique identifier of the party this item belongs to")]
    pub party_id: u64,
    /// Product name
    pub item: String,
    /// Ordered quantity
    #[arg(short, long, default_value_t = 1)]
    pub qty: u32,
}

impl From<AddItemArgs> for CreateItem {
    fn from(val: AddItemArgs) -> Self {
        CreateItem {
            party_id: val.party_id,
            item: val.item,
            qty: val.qty,
        }
    }
}

/// List items with their pending step
#[derive(ClapArgs)]
pub struct ListItemsArgs {
    /// Restrict the listing to one party's items
    #[arg(short, long, help = "Show only items belonging to this party ID")]
    pub party: Option<u64>,
    /// Include cancelled items in the listing
    #[arg(long, help = "Include cancelled items, which are hidden by default")]
    pub all: bool,
}

impl From<ListItemsArgs> for ListItems {
    fn from(val: ListItemsArgs) -> Self {
        ListItems {
            party_id: val.party,
            include_cancelled: val.all,
        }
    }
}

/// Show full details of one item
#[derive(ClapArgs)]
pub struct ShowItemArgs {
    /// ID of the item to display
    #[arg(help = "Unique identifier of the item to show details for")]
    pub id: u64,
}

impl From<ShowItemArgs> for Id {
    fn from(val: ShowItemArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show the delay report for one item
#[derive(ClapArgs)]
pub struct ReportItemArgs {
    /// ID of the item to report on
    #[arg(help = "Unique identifier of the item to build the delay report for")]
    pub id: u64,
}

impl From<ReportItemArgs> for Id {
    fn from(val: ReportItemArgs) -> Self {
        Id { id: val.id }
    }
}

/// Cancel an item
///
/// Cancellation hides the item from default listings and exempts it from
/// party-wide submissions. Step state is preserved; a restored item
/// resumes at the same pending step.
#[derive(ClapArgs)]
pub struct CancelItemArgs {
    /// ID of the item to cancel
    #[arg(help = "Unique identifier of the item to cancel")]
    pub id: u64,
}

impl From<CancelItemArgs> for SetCancelled {
    fn from(val: CancelItemArgs) -> Self {
        SetCancelled {
            item_id: val.id,
            cancelled: true,
        }
    }
}

/// Restore a cancelled item
#[derive(ClapArgs)]
pub struct RestoreItemArgs {
    /// ID of the item to restore
    #[arg(help = "Unique identifier of the cancelled item to restore")]
    pub id: u64,
}

impl From<RestoreItemArgs> for SetCancelled {
    fn from(val: RestoreItemArgs) -> Self {
        SetCancelled {
            item_id: val.id,
            cancelled: false,
        }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Create a new item under a party
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// List items with their pending step
    #[command(aliases = ["l", "ls"])]
    List(ListItemsArgs),
    /// Show full details of one item
    #[command(alias = "s")]
    Show(ShowItemArgs),
    /// Show the delay report for one item
    #[command(alias = "r")]
    Report(ReportItemArgs),
    /// Cancel an item
    Cancel(CancelItemArgs),
    /// Restore a cancelled item
    Restore(RestoreItemArgs),
}

/// Submit responses for a pipeline step
///
/// Exactly one addressing mode must be chosen: a single item (--item),
/// every active item of a party (--party), or an explicit ID list
/// (--items). Responses are given as repeated --set "Field=Value" pairs;
/// the step's primary field is mandatory.
#[derive(ClapArgs)]
pub struct SubmitStepArgs {
    /// Step number 1-8; must be the item's pending step
    #[arg(short, long)]
    pub step: u8,

    /// Response field, as "Field=Value"; repeat for multiple fields
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Submit for a single item
    #[arg(long, group = "target")]
    pub item: Option<u64>,

    /// Submit for every active item of this party
    #[arg(long, group = "target")]
    pub party: Option<u64>,

    /// Submit for an explicit comma-separated list of item IDs
    #[arg(long, value_delimiter = ',', group = "target")]
    pub items: Option<Vec<u64>>,
}

/// Reset an item's follow-up state
///
/// Without --from, clears all eight steps back to the starting state
/// (only step 1's deadline survives). With --from N, clears step N's
/// completion and everything after it, keeping N's deadline so the
/// follow-up resumes there.
#[derive(ClapArgs)]
pub struct ResetStepArgs {
    /// ID of the item to reset
    #[arg(help = "Unique identifier of the item to reset")]
    pub id: u64,
    /// Restart from this step instead of resetting everything
    #[arg(long, value_name = "STEP")]
    pub from: Option<u8>,
}

impl From<ResetStepArgs> for ResetFollowUp {
    fn from(val: ResetStepArgs) -> Self {
        ResetFollowUp {
            item_id: val.id,
            scope: match val.from {
                Some(step) => ResetScope::FromStep(step),
                None => ResetScope::All,
            },
        }
    }
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Submit responses for a pipeline step
    #[command(alias = "s")]
    Submit(SubmitStepArgs),
    /// Reset an item's follow-up state
    #[command(alias = "r")]
    Reset(ResetStepArgs),
}

/// Set the TAT and doer for one step
#[derive(ClapArgs)]
pub struct SetConfigArgs {
    /// Step number 1-8
    pub step: u8,
    /// TAT duration value
    #[arg(long)]
    pub tat: i64,
    /// TAT duration unit (hours or days)
    #[arg(long, default_value = "hours")]
    pub unit: String,
    /// Name of the responsible party
    #[arg(long)]
    pub doer: Option<String>,
}

impl From<SetConfigArgs> for SetStepConfig {
    fn from(val: SetConfigArgs) -> Self {
        SetStepConfig {
            step: val.step,
            doer: val.doer,
            tat_value: val.tat,
            tat_unit: val.unit,
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective TAT configuration for all steps
    #[command(alias = "s")]
    Show,
    /// Set the TAT and doer for one step
    Set(SetConfigArgs),
}

/// Watch all items, refreshing periodically
#[derive(ClapArgs)]
pub struct WatchArgs {
    /// Refresh interval in seconds
    #[arg(short, long, default_value_t = 30)]
    pub interval: u64,
}
