//! Statistics aggregation for a built exceedance curve.
//!
//! Summarizes the curve (totals, extremes, distinct F-N points) and places
//! every F-N point relative to the two criterion lines. The lines are
//! interpolated linearly in log-log space between their vertices; beyond
//! the first or last vertex the end segment is extended.

use serde::Serialize;
use std::path::Path;

use crate::error::{Error, Result};
use crate::exceedance::ExceedanceCurve;
use crate::types::{FnPoint, ScenarioParams};

// ── Top-level statistics ────────────────────────────────────────────

#[derive(Serialize)]
pub struct CurveStatistics {
    pub num_scenarios: usize,
    pub seed: u64,
    pub params: ScenarioParams,
    pub total_frequency: f64,
    pub max_injuries: u32,
    pub mean_injuries: f64,
    /// Scenarios with no injuries; these do not appear on the log-log chart.
    pub zero_injury_scenarios: usize,
    pub fn_points: Vec<ClassifiedPoint>,
    pub criteria: CriteriaSummary,
}

#[derive(Serialize)]
pub struct ClassifiedPoint {
    pub injuries: u32,
    /// Frequency of `injuries` or more.
    pub frequency: f64,
    pub region: CriteriaRegion,
}

// ── Criterion regions ───────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaRegion {
    /// Above the upper line.
    Intolerable,
    /// Between the lines, inclusive.
    Alarp,
    /// Below the lower line.
    BroadlyAcceptable,
    /// N = 0 or a reference line with fewer than two vertices.
    Unclassified,
}

#[derive(Default, Serialize)]
pub struct CriteriaSummary {
    pub intolerable: usize,
    pub alarp: usize,
    pub broadly_acceptable: usize,
    pub unclassified: usize,
}

impl CriteriaSummary {
    fn record(&mut self, region: CriteriaRegion) {
        match region {
            CriteriaRegion::Intolerable => self.intolerable += 1,
            CriteriaRegion::Alarp => self.alarp += 1,
            CriteriaRegion::BroadlyAcceptable => self.broadly_acceptable += 1,
            CriteriaRegion::Unclassified => self.unclassified += 1,
        }
    }
}

/// Value of a log-log polyline at `n`. Vertices must be sorted by N and
/// strictly positive.
pub fn interpolate_log_log(line: &[(f64, f64)], n: f64) -> Option<f64> {
    if line.len() < 2 || n <= 0.0 {
        return None;
    }
    let seg = line
        .windows(2)
        .position(|w| n <= w[1].0)
        .unwrap_or(line.len() - 2);
    let (x0, y0) = line[seg];
    let (x1, y1) = line[seg + 1];
    let (lx0, lx1) = (x0.log10(), x1.log10());
    if lx1 == lx0 {
        return None;
    }
    let (ly0, ly1) = (y0.log10(), y1.log10());
    let ly = ly0 + (n.log10() - lx0) * (ly1 - ly0) / (lx1 - lx0);
    Some(10f64.powf(ly))
}

pub fn classify_point(
    point: &FnPoint,
    upper: &[(f64, f64)],
    lower: &[(f64, f64)],
) -> CriteriaRegion {
    let n = point.injuries as f64;
    let (Some(hi), Some(lo)) = (interpolate_log_log(upper, n), interpolate_log_log(lower, n))
    else {
        return CriteriaRegion::Unclassified;
    };
    if point.frequency > hi {
        CriteriaRegion::Intolerable
    } else if point.frequency < lo {
        CriteriaRegion::BroadlyAcceptable
    } else {
        CriteriaRegion::Alarp
    }
}

// ── Aggregation ─────────────────────────────────────────────────────

pub fn aggregate_statistics(
    curve: &ExceedanceCurve,
    params: &ScenarioParams,
    seed: u64,
    upper: &[(f64, f64)],
    lower: &[(f64, f64)],
) -> CurveStatistics {
    let rows = curve.rows();
    let mean_injuries = if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(|r| r.injury_count as f64).sum::<f64>() / rows.len() as f64
    };
    let zero_injury_scenarios = rows.iter().filter(|r| r.injury_count == 0).count();

    let mut criteria = CriteriaSummary::default();
    let fn_points: Vec<ClassifiedPoint> = curve
        .fn_points()
        .iter()
        .map(|p| {
            let region = classify_point(p, upper, lower);
            criteria.record(region);
            ClassifiedPoint {
                injuries: p.injuries,
                frequency: p.frequency,
                region,
            }
        })
        .collect();

    CurveStatistics {
        num_scenarios: rows.len(),
        seed,
        params: params.clone(),
        total_frequency: curve.total_frequency(),
        max_injuries: curve.max_injuries(),
        mean_injuries,
        zero_injury_scenarios,
        fn_points,
        criteria,
    }
}

/// Write statistics as pretty-printed JSON, creating parent directories.
pub fn save_statistics(stats: &CurveStatistics, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let json = serde_json::to_string_pretty(stats)?;
    std::fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
