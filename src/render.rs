//! Log-log rendering of the exceedance curve to SVG.
//!
//! Every curve row with at least one injury becomes a scatter point at
//! (injury count, cumulative frequency). Rows with zero injuries have no
//! position on a logarithmic axis and are left out. The two criterion lines
//! are drawn as polylines through their fixed vertices.

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use tracing::{debug, info};

use crate::constants::{LOWER_REFERENCE, UPPER_REFERENCE};
use crate::error::{Error, Result};
use crate::exceedance::ExceedanceCurve;

pub const X_AXIS_LABEL: &str = "N or More Injuries";
pub const Y_AXIS_LABEL: &str = "Cumulative Frequency";

#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub caption: Option<String>,
    pub upper_reference: Vec<(f64, f64)>,
    pub lower_reference: Vec<(f64, f64)>,
    pub point_radius: i32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 750,
            caption: Some("Loss of Containment F-N Curve".to_string()),
            upper_reference: UPPER_REFERENCE.to_vec(),
            lower_reference: LOWER_REFERENCE.to_vec(),
            point_radius: 4,
        }
    }
}

/// Scatter coordinates for the curve; zero-injury rows are dropped.
pub fn curve_points(curve: &ExceedanceCurve) -> Vec<(f64, f64)> {
    curve
        .rows()
        .iter()
        .filter(|r| r.injury_count > 0 && r.cumulative_frequency > 0.0)
        .map(|r| (r.injury_count as f64, r.cumulative_frequency))
        .collect()
}

/// Log-axis ranges spanning the points and both reference lines, padded
/// by a fraction of a decade on each side.
pub fn axis_ranges(
    points: &[(f64, f64)],
    upper: &[(f64, f64)],
    lower: &[(f64, f64)],
) -> (Range<f64>, Range<f64>) {
    let all = points
        .iter()
        .chain(upper)
        .chain(lower)
        .filter(|(x, y)| *x > 0.0 && *y > 0.0);

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in all {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !x_min.is_finite() {
        return (1.0..1000.0, 1e-8..1e-1);
    }
    if x_max <= x_min {
        x_max = x_min * 10.0;
    }
    if y_max <= y_min {
        y_max = y_min * 10.0;
    }
    ((x_min / 1.25)..(x_max * 1.25), (y_min / 2.0)..(y_max * 2.0))
}

/// Draw the curve and reference lines to an SVG file at `path`.
pub fn render_curve(curve: &ExceedanceCurve, config: &ChartConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let points = curve_points(curve);
    let skipped = curve.len() - points.len();
    if skipped > 0 {
        debug!(skipped, "rows with zero injuries omitted from log-log chart");
    }

    draw_chart(&points, config, path).map_err(|e| Error::Render(e.to_string()))?;
    info!(path = %path.display(), points = points.len(), "rendered exceedance curve");
    Ok(())
}

fn draw_chart(
    points: &[(f64, f64)],
    config: &ChartConfig,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (x_range, y_range) =
        axis_ranges(points, &config.upper_reference, &config.lower_reference);

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(80);
    if let Some(caption) = &config.caption {
        builder.caption(caption, ("sans-serif", 22));
    }
    let mut chart = builder.build_cartesian_2d(x_range.log_scale(), y_range.log_scale())?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .y_label_formatter(&|y| format!("{:.0e}", y))
        .draw()?;

    let radius = config.point_radius;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), radius, BLUE.mix(0.5).filled())),
    )?;
    chart.draw_series(LineSeries::new(config.upper_reference.iter().copied(), &RED))?;
    chart.draw_series(LineSeries::new(config.lower_reference.iter().copied(), &GREEN))?;

    root.present()?;
    Ok(())
}
