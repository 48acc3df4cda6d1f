//! Fixed scenario parameters and reference-line coordinates.
//!
//! Frequencies are drawn as integers in [`FREQUENCY_LOW`, `FREQUENCY_HIGH`)
//! and multiplied by [`FREQUENCY_SCALE`], so every frequency lies in
//! (0, 5×10⁻⁷]. Raw injury probabilities come from N([`INJURY_MEAN`],
//! [`INJURY_STD_DEV`]²) and are rescaled onto [0, 1] before being multiplied
//! by [`OCCUPANCY`].

/// Number of loss-of-containment scenarios generated per run.
pub const SCENARIO_COUNT: usize = 100;

/// Inclusive lower bound of the integer frequency draw.
pub const FREQUENCY_LOW: u32 = 1;

/// Exclusive upper bound of the integer frequency draw.
pub const FREQUENCY_HIGH: u32 = 500_000;

/// Converts the integer draw into an annual frequency (1e-12 per unit).
pub const FREQUENCY_SCALE: f64 = 1e-12;

/// Upper bound on any generated frequency.
pub const MAX_FREQUENCY: f64 = 5e-7;

pub const INJURY_MEAN: f64 = 0.5;
pub const INJURY_STD_DEV: f64 = 1.0;

/// Building occupancy used to turn a normalized probability into an injury count.
pub const OCCUPANCY: f64 = 533.0 / 3.0;

/// Upper (intolerable) F-N criterion line, as (N, frequency) vertices.
pub const UPPER_REFERENCE: [(f64, f64); 3] = [(1.0, 1e-2), (10.0, 1e-3), (1000.0, 1e-5)];

/// Lower (broadly acceptable) F-N criterion line, as (N, frequency) vertices.
pub const LOWER_REFERENCE: [(f64, f64); 3] = [(1.0, 1e-4), (10.0, 1e-5), (1000.0, 1e-7)];

/// Number of sorted rows shown in the head view of the report.
pub const TABLE_HEAD_ROWS: usize = 5;

pub const CHART_FILE_NAME: &str = "exceedance_curve.svg";
pub const STATISTICS_FILE_NAME: &str = "curve_statistics.json";

/// Largest injury count the scaler can produce: round(OCCUPANCY).
#[inline]
pub fn max_injury_count(occupancy: f64) -> u32 {
    occupancy.round_ties_even().max(0.0) as u32
}
