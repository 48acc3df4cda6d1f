//! Core data types shared across the pipeline.

use serde::Serialize;

use crate::constants::*;

/// Parameters of the synthetic scenario population.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioParams {
    pub scenario_count: usize,
    /// Integer frequency draw is uniform in `frequency_low..frequency_high`.
    pub frequency_low: u32,
    pub frequency_high: u32,
    pub frequency_scale: f64,
    pub injury_mean: f64,
    pub injury_std_dev: f64,
    pub occupancy: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            scenario_count: SCENARIO_COUNT,
            frequency_low: FREQUENCY_LOW,
            frequency_high: FREQUENCY_HIGH,
            frequency_scale: FREQUENCY_SCALE,
            injury_mean: INJURY_MEAN,
            injury_std_dev: INJURY_STD_DEV,
            occupancy: OCCUPANCY,
        }
    }
}

/// Positionally aligned per-scenario draws before normalization.
#[derive(Clone, Debug)]
pub struct RawSamples {
    pub frequencies: Vec<f64>,
    pub raw_probabilities: Vec<f64>,
}

/// One loss-of-containment scenario.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    /// Annual occurrence rate, in (0, 5e-7].
    pub frequency: f64,
    pub injury_count: u32,
}

/// A scenario placed on the exceedance curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExceedanceRow {
    pub frequency: f64,
    pub injury_count: u32,
    /// Sum of `frequency` over this row and every row above it.
    pub cumulative_frequency: f64,
}

/// One distinct point of the F-N curve: frequency of `injuries` or more.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FnPoint {
    pub injuries: u32,
    pub frequency: f64,
}
