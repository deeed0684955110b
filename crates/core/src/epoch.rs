//! Year-driven tables: debris spawn cadence and status-line milestones.

use serde::{Deserialize, Serialize};

use space_garbage_types::{MILESTONES, SPAWN_CADENCE};

use crate::error::CoreError;

/// One row of the cadence table: from `from_year` on, attempt a spawn every
/// `delay_ticks` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadenceStep {
    pub from_year: i32,
    pub delay_ticks: u32,
}

/// Step table mapping a year to the delay between debris spawn attempts.
///
/// Years before the first step spawn nothing. Later steps never spawn slower
/// than earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpawnCadence {
    steps: Vec<CadenceStep>,
}

impl Default for SpawnCadence {
    fn default() -> Self {
        Self {
            steps: SPAWN_CADENCE
                .iter()
                .map(|&(from_year, delay_ticks)| CadenceStep {
                    from_year,
                    delay_ticks,
                })
                .collect(),
        }
    }
}

impl SpawnCadence {
    pub fn new(steps: Vec<CadenceStep>) -> Result<Self, CoreError> {
        let cadence = Self { steps };
        cadence.validate()?;
        Ok(cadence)
    }

    pub fn steps(&self) -> &[CadenceStep] {
        &self.steps
    }

    /// Ticks between spawn attempts in `year`, or `None` while spawning is off.
    pub fn delay_for(&self, year: i32) -> Option<u32> {
        self.steps
            .iter()
            .take_while(|step| step.from_year <= year)
            .last()
            .map(|step| step.delay_ticks)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(step) = self.steps.iter().find(|step| step.delay_ticks == 0) {
            return Err(CoreError::invalid_config(format!(
                "cadence delay for {} must be positive",
                step.from_year
            )));
        }
        for pair in self.steps.windows(2) {
            if pair[0].from_year >= pair[1].from_year {
                return Err(CoreError::invalid_config(format!(
                    "cadence years must increase ({} then {})",
                    pair[0].from_year, pair[1].from_year
                )));
            }
            if pair[0].delay_ticks < pair[1].delay_ticks {
                return Err(CoreError::invalid_config(format!(
                    "cadence delay grows from {} to {} ticks in {}",
                    pair[0].delay_ticks, pair[1].delay_ticks, pair[1].from_year
                )));
            }
        }
        Ok(())
    }
}

/// Milestone announced exactly in `year`.
pub fn milestone(year: i32) -> Option<&'static str> {
    MILESTONES
        .iter()
        .find(|&&(at, _)| at == year)
        .map(|&(_, text)| text)
}

/// Most recent milestone at or before `year`.
pub fn latest_milestone(year: i32) -> Option<&'static str> {
    MILESTONES
        .iter()
        .take_while(|&&(at, _)| at <= year)
        .last()
        .map(|&(_, text)| text)
}

/// Status line text, e.g. `Year 1969: Armstrong got on the moon!`.
pub fn status_line(year: i32) -> String {
    match latest_milestone(year) {
        Some(text) => format!("Year {year}: {text}"),
        None => format!("Year {year}"),
    }
}
