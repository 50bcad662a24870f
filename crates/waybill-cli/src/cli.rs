//! Command handlers bridging parsed arguments to the tracker.
//!
//! Each handler converts its clap argument struct into the matching core
//! parameter type, invokes the tracker, and renders the result through
//! the terminal renderer. Domain failures surface as rendered error
//! messages; only infrastructure failures propagate as errors.

use anyhow::{bail, Context, Result};
use tokio::time::Duration;
use waybill_core::{
    display::{CreateResult, OperationStatus, UpdateResult},
    engine,
    params::{Id, ListItems, SubmitStep, SubmitStepBulk, SubmitStepParty},
    ItemSummaries, Responses, Tracker,
};

use crate::args::{
    ConfigCommands, ItemCommands, PartyCommands, StepCommands, SubmitStepArgs, WatchArgs,
};
use crate::renderer::TerminalRenderer;

/// Command dispatcher holding the tracker and renderer.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_party_command(&self, command: PartyCommands) -> Result<()> {
        match command {
            PartyCommands::Add(args) => {
                let party = self.tracker.create_party(&args.into()).await?;
                self.renderer.render(&CreateResult::new(party).to_string())
            }
            PartyCommands::List => {
                let parties = self.tracker.list_parties().await?;
                self.renderer.render(&parties.to_string())
            }
        }
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => {
                let item = self.tracker.create_item(&args.into()).await?;
                self.renderer.render(&CreateResult::new(item).to_string())
            }
            ItemCommands::List(args) => self.list_items(&args.into()).await,
            ItemCommands::Show(args) => {
                let params: Id = args.into();
                match self.tracker.get_item(&params).await? {
                    Some(item) => self.renderer.render(&item.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!("Item {} not found", params.id))
                            .to_string(),
                    ),
                }
            }
            ItemCommands::Report(args) => {
                let report = self.tracker.item_report(&args.into()).await?;
                self.renderer.render(&report.to_string())
            }
            ItemCommands::Cancel(args) => {
                let item = self.tracker.set_cancelled(&args.into()).await?;
                let changes = vec![format!("Cancelled item {}", item.id)];
                self.renderer
                    .render(&UpdateResult::with_changes(item, changes).to_string())
            }
            ItemCommands::Restore(args) => {
                let item = self.tracker.set_cancelled(&args.into()).await?;
                let changes = vec![format!("Restored item {}", item.id)];
                self.renderer
                    .render(&UpdateResult::with_changes(item, changes).to_string())
            }
        }
    }

    pub async fn handle_step_command(&self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Submit(args) => self.submit_step(args).await,
            StepCommands::Reset(args) => {
                let item = self.tracker.reset_follow_up(&args.into()).await?;
                let changes = vec![format!(
                    "Reset follow-up; pending is now {}",
                    engine::pending_step(&item)
                )];
                self.renderer
                    .render(&UpdateResult::with_changes(item, changes).to_string())
            }
        }
    }

    async fn submit_step(&self, args: SubmitStepArgs) -> Result<()> {
        let responses = parse_responses(&args.set)?;

        if let Some(item_id) = args.item {
            let item = self
                .tracker
                .submit_step(&SubmitStep {
                    item_id,
                    step: args.step,
                    responses,
                })
                .await?;
            let changes = vec![format!("Completed step {}", args.step)];
            return self
                .renderer
                .render(&UpdateResult::with_changes(item, changes).to_string());
        }

        let report = if let Some(party_id) = args.party {
            self.tracker
                .submit_step_party(&SubmitStepParty {
                    party_id,
                    step: args.step,
                    responses,
                })
                .await?
        } else if let Some(item_ids) = args.items {
            self.tracker
                .submit_step_bulk(&SubmitStepBulk {
                    item_ids,
                    step: args.step,
                    responses,
                })
                .await?
        } else {
            bail!("Specify a target: --item, --party, or --items");
        };

        self.renderer.render(&report.to_string())
    }

    pub async fn handle_config_command(&self, command: ConfigCommands) -> Result<()> {
        match command {
            ConfigCommands::Show => {
                let configs = self.tracker.step_configs().await?;
                self.renderer.render(&configs.to_string())
            }
            ConfigCommands::Set(args) => {
                let config = self.tracker.set_step_config(&args.into()).await?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Step {} TAT set to {} {}",
                        config.step,
                        config.tat_value,
                        config.tat_unit.as_str()
                    ))
                    .to_string(),
                )
            }
        }
    }

    pub async fn list_items(&self, params: &ListItems) -> Result<()> {
        let summaries = self.tracker.list_items(params).await?;
        self.renderer.render(&summaries.to_string())
    }

    /// Print the item snapshot on every refresh until interrupted.
    pub async fn watch(&self, args: WatchArgs) -> Result<()> {
        let period = Duration::from_secs(args.interval.max(1));
        let sync = self.tracker.spawn_sync(period);
        let mut ticker = tokio::time::interval(period);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let items = sync.items().await;
                    let summaries = ItemSummaries(
                        items
                            .iter()
                            .filter(|item| !item.cancelled)
                            .map(engine::summarize)
                            .collect(),
                    );
                    self.renderer.render(&summaries.to_string())?;
                }
                _ = tokio::signal::ctrl_c() => {
                    break;
                }
            }
        }

        sync.shutdown().await;
        Ok(())
    }
}

/// Parses repeated "Field=Value" pairs into a response map.
fn parse_responses(pairs: &[String]) -> Result<Responses> {
    let mut responses = Responses::new();
    for pair in pairs {
        let (field, value) = pair
            .split_once('=')
            .with_context(|| format!("Invalid response '{pair}'; expected FIELD=VALUE"))?;
        responses.insert(field.trim().to_string(), value.trim().to_string());
    }
    Ok(responses)
}
