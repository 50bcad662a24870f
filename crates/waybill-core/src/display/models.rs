//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core
//! domain models, separated from the model definitions to maintain clean
//! separation of concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with state icons and structured sections
//! - Skip-aware step rendering driven by the step catalog

use std::fmt;

use super::datetime::LocalDateTime;
use crate::bulk::BulkReport;
use crate::catalog;
use crate::engine::{self, PendingStep};
use crate::models::{Item, ItemReport, ItemSummary, Party, StepConfigSet};

/// Presentation state of one step within an item.
enum StepState {
    Done,
    Pending,
    Waiting,
    Skipped,
}

impl StepState {
    fn of(item: &Item, number: u8, pending: PendingStep) -> Self {
        let def = &catalog::catalog()[usize::from(number) - 1];
        if def.is_skipped(item) {
            StepState::Skipped
        } else if item.step(number).actual.is_some() {
            StepState::Done
        } else if pending == PendingStep::Step(number) {
            StepState::Pending
        } else {
            StepState::Waiting
        }
    }

    fn with_icon(&self) -> &'static str {
        match self {
            StepState::Done => "✓ Done",
            StepState::Pending => "➤ Pending",
            StepState::Waiting => "○ Waiting",
            StepState::Skipped => "– Skipped",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        if let Some(contact) = &self.contact {
            writeln!(f, "- Contact: {contact}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.item)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Party ID: {}", self.party_id)?;
        writeln!(f, "- Quantity: {}", self.qty)?;
        if self.cancelled {
            writeln!(f, "- Status: cancelled")?;
        } else {
            writeln!(f, "- Pending: {}", engine::pending_step(self))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f, "\n## Steps")?;
        writeln!(f)?;

        let pending = engine::pending_step(self);
        for def in catalog::catalog() {
            let record = self.step(def.number);
            let state = StepState::of(self, def.number, pending);
            writeln!(f, "### {}. {} ({})", def.number, def.name, state.with_icon())?;
            writeln!(f)?;

            if let Some(planned) = &record.planned {
                writeln!(f, "- Planned: {}", LocalDateTime(planned))?;
            }
            if let Some(actual) = &record.actual {
                writeln!(f, "- Actual: {}", LocalDateTime(actual))?;
            }
            for (field, value) in &record.responses {
                writeln!(f, "- {field}: {value}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for ItemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.item, self.id)?;
        writeln!(f)?;

        writeln!(f, "- **Party ID**: {}", self.party_id)?;
        writeln!(f, "- **Quantity**: {}", self.qty)?;
        if self.cancelled {
            writeln!(f, "- **Status**: cancelled")?;
        } else {
            writeln!(f, "- **Pending**: {}", self.pending)?;
        }
        if let Some(planned) = &self.pending_planned {
            writeln!(f, "- **Due**: {}", LocalDateTime(planned))?;
        }
        writeln!(f)?; // Add blank line after each item

        Ok(())
    }
}

impl fmt::Display for ItemReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Follow-up: {} (ID: {})", self.item.item, self.item.id)?;
        writeln!(f)?;
        writeln!(f, "- Pending: {}", self.pending)?;
        writeln!(f)?;

        for entry in &self.steps {
            if entry.skipped {
                writeln!(f, "- {}. {}: skipped", entry.step, entry.name)?;
            } else {
                writeln!(f, "- {}. {}: {}", entry.step, entry.name, entry.delay)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for StepConfigSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for config in self.iter() {
            let def = &catalog::catalog()[usize::from(config.step) - 1];
            write!(
                f,
                "- Step {}. {}: {} {}",
                config.step,
                def.name,
                config.tat_value,
                config.tat_unit.as_str()
            )?;
            match &config.doer {
                Some(doer) => writeln!(f, " (doer: {doer})")?,
                None => writeln!(f)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for BulkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Applied to {} item(s).", self.applied.len())?;
        if !self.failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "Failures:")?;
            for failure in &self.failures {
                writeln!(f, "- Item {}: {}", failure.item_id, failure.error)?;
            }
        }
        Ok(())
    }
}
