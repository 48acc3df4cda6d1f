//! # Exceedance: loss-of-containment F-N curves
//!
//! Synthesizes a population of loss-of-containment scenarios, turns it into
//! a cumulative-frequency exceedance curve, and renders that curve on log-log
//! axes against two criterion lines.
//!
//! ## Pipeline
//!
//! | Step | Module | Description |
//! |------|--------|-------------|
//! | 1 | [`generator`] | Draw per-scenario frequencies (uniform, scaled to ≤ 5e-7/yr) and raw injury probabilities (normal) |
//! | 2 | [`normalize`] | Min-max normalize raw probabilities, multiply by occupancy, round to injury counts |
//! | 3 | [`exceedance`] | Stable sort by (injuries desc, frequency asc), running sum of frequency |
//! | 4 | [`render`] | Log-log scatter of the curve plus the reference lines, written as SVG |
//! | 5 | [`statistics`] | Distinct F-N points classified against the reference lines, saved as JSON |
//!
//! [`pipeline::run`] chains steps 1 to 3. Each step takes its inputs as
//! arguments and returns owned output; nothing is shared between runs.
//!
//! ## Reading the curve
//!
//! After sorting, the cumulative frequency at the last row with injury count
//! N is the annual frequency of scenarios causing N or more injuries. Rows
//! with zero injuries cannot be placed on the log axis and are not drawn.

pub mod constants;
pub mod env_config;
pub mod error;
pub mod exceedance;
pub mod generator;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod statistics;
pub mod types;

pub use error::{Error, Result};
