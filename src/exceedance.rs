//! Exceedance (F-N) curve construction.
//!
//! Scenarios are ordered by injury count, largest first, with ties broken by
//! ascending frequency. The running sum of frequency down that order gives,
//! at the last row for each injury count N, the annual frequency of events
//! causing N or more injuries.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{ExceedanceRow, FnPoint, Scenario};

/// Ordered collection of scenarios, as generated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScenarioTable {
    scenarios: Vec<Scenario>,
}

impl ScenarioTable {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Zip positionally aligned frequency and injury-count columns.
    pub fn from_columns(frequencies: &[f64], injury_counts: &[u32]) -> Result<Self> {
        if frequencies.len() != injury_counts.len() {
            return Err(Error::ColumnLengthMismatch {
                frequencies: frequencies.len(),
                injuries: injury_counts.len(),
            });
        }
        let scenarios = frequencies
            .iter()
            .zip(injury_counts)
            .map(|(&frequency, &injury_count)| Scenario {
                frequency,
                injury_count,
            })
            .collect();
        Ok(Self { scenarios })
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Exceedance order: injury count descending, then frequency ascending.
#[inline]
pub fn exceedance_order(a: &Scenario, b: &Scenario) -> Ordering {
    b.injury_count
        .cmp(&a.injury_count)
        .then_with(|| a.frequency.total_cmp(&b.frequency))
}

/// Stable sort into exceedance order.
pub fn sort_scenarios(scenarios: &mut [Scenario]) {
    scenarios.sort_by(exceedance_order);
}

/// The sorted table with its cumulative frequency column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExceedanceCurve {
    rows: Vec<ExceedanceRow>,
}

impl ExceedanceCurve {
    pub fn rows(&self) -> &[ExceedanceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The sorted scenarios without the cumulative column.
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.rows
            .iter()
            .map(|r| Scenario {
                frequency: r.frequency,
                injury_count: r.injury_count,
            })
            .collect()
    }

    /// Sum of every scenario's frequency (the last cumulative value).
    pub fn total_frequency(&self) -> f64 {
        self.rows.last().map_or(0.0, |r| r.cumulative_frequency)
    }

    pub fn max_injuries(&self) -> u32 {
        self.rows.first().map_or(0, |r| r.injury_count)
    }

    /// Frequency of scenarios causing at least `injuries` injuries.
    pub fn frequency_at_least(&self, injuries: u32) -> f64 {
        let end = self.rows.partition_point(|r| r.injury_count >= injuries);
        if end == 0 {
            0.0
        } else {
            self.rows[end - 1].cumulative_frequency
        }
    }

    /// One point per distinct injury count, largest N first.
    pub fn fn_points(&self) -> Vec<FnPoint> {
        let mut points: Vec<FnPoint> = Vec::new();
        for row in &self.rows {
            match points.last_mut() {
                Some(p) if p.injuries == row.injury_count => {
                    p.frequency = row.cumulative_frequency;
                }
                _ => points.push(FnPoint {
                    injuries: row.injury_count,
                    frequency: row.cumulative_frequency,
                }),
            }
        }
        points
    }
}

/// Sort the table into exceedance order and derive cumulative frequency.
pub fn build_curve(table: ScenarioTable) -> ExceedanceCurve {
    let mut scenarios = table.scenarios;
    sort_scenarios(&mut scenarios);

    let mut running = 0.0f64;
    let rows: Vec<ExceedanceRow> = scenarios
        .into_iter()
        .map(|s| {
            running += s.frequency;
            ExceedanceRow {
                frequency: s.frequency,
                injury_count: s.injury_count,
                cumulative_frequency: running,
            }
        })
        .collect();

    debug!(
        rows = rows.len(),
        total_frequency = running,
        "built exceedance curve"
    );
    ExceedanceCurve { rows }
}
