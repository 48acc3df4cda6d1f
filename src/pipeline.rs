//! End-to-end pipeline: samples → injury counts → exceedance curve.

use rand::rngs::SmallRng;
use tracing::info;

use crate::error::Result;
use crate::exceedance::{build_curve, ExceedanceCurve, ScenarioTable};
use crate::generator::generate_samples;
use crate::normalize::injury_counts;
use crate::types::ScenarioParams;

/// Everything a single run produces, in pipeline order.
pub struct RunOutput {
    pub frequencies: Vec<f64>,
    pub raw_probabilities: Vec<f64>,
    /// Aligned with `frequencies` (generation order, not curve order).
    pub injury_counts: Vec<u32>,
    pub curve: ExceedanceCurve,
}

pub fn run(params: &ScenarioParams, rng: &mut SmallRng) -> Result<RunOutput> {
    let samples = generate_samples(rng, params)?;
    let counts = injury_counts(&samples.raw_probabilities, params.occupancy)?;
    let table = ScenarioTable::from_columns(&samples.frequencies, &counts)?;
    let curve = build_curve(table);

    info!(
        scenarios = curve.len(),
        max_injuries = curve.max_injuries(),
        total_frequency = curve.total_frequency(),
        "pipeline complete"
    );

    Ok(RunOutput {
        frequencies: samples.frequencies,
        raw_probabilities: samples.raw_probabilities,
        injury_counts: counts,
        curve,
    })
}
