//! Projection of raw injury probabilities onto [0, 1] and scaling by occupancy.
//!
//! Min-max normalization uses the sample's own extremes, so the smallest raw
//! value maps to 0 and the largest to 1. A sample whose values are all equal
//! has no span to divide by; that case is reported as
//! [`Error::DegenerateSample`] rather than producing NaNs.

use crate::error::{Error, Result};

/// Rescale `samples` elementwise to `(x - min) / (max - min)`.
pub fn min_max_normalize(samples: &[f64]) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(Error::EmptySample);
    }
    if let Some(index) = samples.iter().position(|x| !x.is_finite()) {
        return Err(Error::NonFiniteSample { index });
    }

    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    let span = max - min;
    if span == 0.0 {
        return Err(Error::DegenerateSample {
            value: min,
            count: samples.len(),
        });
    }

    Ok(samples.iter().map(|&x| (x - min) / span).collect())
}

/// Multiply each normalized probability by `occupancy` and round half to even.
///
/// Inputs are expected in [0, 1]; anything below zero clamps to 0 injuries.
pub fn scale_to_injuries(normalized: &[f64], occupancy: f64) -> Vec<u32> {
    normalized
        .iter()
        .map(|&p| (p * occupancy).round_ties_even().max(0.0) as u32)
        .collect()
}

/// Normalize then scale: raw probabilities to expected injury counts.
pub fn injury_counts(raw_probabilities: &[f64], occupancy: f64) -> Result<Vec<u32>> {
    let normalized = min_max_normalize(raw_probabilities)?;
    Ok(scale_to_injuries(&normalized, occupancy))
}
