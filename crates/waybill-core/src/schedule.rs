//! TAT deadline computation.
//!
//! Planned timestamps are derived from a reference time plus the step's
//! configured turn-around time. Sunday is the designated non-working day:
//! a deadline landing on Sunday rolls forward by exactly one day. The
//! rollover is deliberately single-step, matching the upstream policy of
//! never advancing more than once.

use jiff::civil::Weekday;
use jiff::{Span, Zoned};

use crate::error::Result;
use crate::models::{StepConfig, TatUnit};

/// Computes the planned deadline for a step from a zoned reference time.
///
/// Pure and deterministic: identical inputs always produce identical
/// outputs. The reference carries its own timezone, so the Sunday check
/// follows local wall-clock time.
pub fn next_planned(reference: &Zoned, config: &StepConfig) -> Result<Zoned> {
    let span = match config.tat_unit {
        TatUnit::Hours => Span::new().try_hours(config.tat_value)?,
        TatUnit::Days => Span::new().try_days(config.tat_value)?,
    };

    let mut planned = reference.checked_add(span)?;
    if planned.weekday() == Weekday::Sunday {
        planned = planned.checked_add(Span::new().try_days(1)?)?;
    }

    Ok(planned)
}
