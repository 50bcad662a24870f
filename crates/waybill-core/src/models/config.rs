//! Per-step TAT configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::STEP_COUNT;

/// Type-safe enumeration of TAT duration units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TatUnit {
    /// TAT value is a number of hours
    #[default]
    Hours,

    /// TAT value is a number of calendar days
    Days,
}

impl FromStr for TatUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hours" | "hour" | "h" => Ok(TatUnit::Hours),
            "days" | "day" | "d" => Ok(TatUnit::Days),
            _ => Err(format!("Invalid TAT unit: {s}")),
        }
    }
}

impl TatUnit {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TatUnit::Hours => "hours",
            TatUnit::Days => "days",
        }
    }
}

/// Configured turn-around time and responsible party for one step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepConfig {
    /// Step number 1-8
    pub step: u8,

    /// Name of the responsible party ("doer"); reference data only
    pub doer: Option<String>,

    /// TAT duration value
    pub tat_value: i64,

    /// TAT duration unit
    pub tat_unit: TatUnit,
}

impl StepConfig {
    /// The fallback configuration used when no row exists for a step:
    /// one hour, no doer assigned.
    pub fn default_for(step: u8) -> Self {
        Self {
            step,
            doer: None,
            tat_value: 1,
            tat_unit: TatUnit::Hours,
        }
    }
}

/// Complete configuration table: exactly one entry per step number 1-8.
#[derive(Debug, Clone, PartialEq)]
pub struct StepConfigSet {
    configs: [StepConfig; STEP_COUNT as usize],
}

impl StepConfigSet {
    /// Builds a full set from persisted rows, substituting the default for
    /// any step without a row. Returns the set together with the step
    /// numbers that had to fall back so the caller can log them.
    pub fn from_rows(rows: Vec<StepConfig>) -> (Self, Vec<u8>) {
        let mut configs: Vec<StepConfig> =
            (1..=STEP_COUNT).map(StepConfig::default_for).collect();
        let mut missing: Vec<u8> = (1..=STEP_COUNT).collect();

        for row in rows {
            if (1..=STEP_COUNT).contains(&row.step) {
                missing.retain(|&s| s != row.step);
                let slot = usize::from(row.step) - 1;
                configs[slot] = row;
            }
        }

        let configs: [StepConfig; STEP_COUNT as usize] = configs
            .try_into()
            .unwrap_or_else(|_| unreachable!("config vector is built with exactly 8 entries"));

        (Self { configs }, missing)
    }

    /// Returns the configuration for a 1-based step number.
    ///
    /// # Panics
    ///
    /// Panics if `step` is outside `1..=8`.
    pub fn get(&self, step: u8) -> &StepConfig {
        &self.configs[usize::from(step) - 1]
    }

    /// Iterates configurations in step order.
    pub fn iter(&self) -> impl Iterator<Item = &StepConfig> {
        self.configs.iter()
    }
}

impl Default for StepConfigSet {
    fn default() -> Self {
        Self::from_rows(Vec::new()).0
    }
}
