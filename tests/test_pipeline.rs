//! End-to-end tests: seeded runs, rendering, and statistics output.

use std::path::PathBuf;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use exceedance::constants::{LOWER_REFERENCE, UPPER_REFERENCE};
use exceedance::exceedance::{build_curve, ScenarioTable};
use exceedance::pipeline::run;
use exceedance::render::{render_curve, ChartConfig};
use exceedance::statistics::{aggregate_statistics, save_statistics};
use exceedance::types::ScenarioParams;
use exceedance::Error;

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("exceedance-{}-{}", name, std::process::id()))
}

#[test]
fn same_seed_same_curve() {
    let params = ScenarioParams::default();
    let a = run(&params, &mut SmallRng::seed_from_u64(314)).unwrap();
    let b = run(&params, &mut SmallRng::seed_from_u64(314)).unwrap();
    assert_eq!(a.curve, b.curve);
    assert_eq!(a.injury_counts, b.injury_counts);

    let c = run(&params, &mut SmallRng::seed_from_u64(315)).unwrap();
    assert_ne!(a.frequencies, c.frequencies);
}

#[test]
fn documented_three_row_example() {
    let table = ScenarioTable::from_columns(&[3e-7, 2e-7, 1e-7], &[2, 5, 5]).unwrap();
    let curve = build_curve(table);
    let got: Vec<(f64, u32)> = curve
        .rows()
        .iter()
        .map(|r| (r.frequency, r.injury_count))
        .collect();
    assert_eq!(got, vec![(1e-7, 5), (2e-7, 5), (3e-7, 2)]);
    let cum: Vec<f64> = curve.rows().iter().map(|r| r.cumulative_frequency).collect();
    for (c, want) in cum.iter().zip([1e-7, 3e-7, 6e-7]) {
        assert!((c - want).abs() < 1e-20, "{c} vs {want}");
    }
}

#[test]
fn degenerate_population_is_an_error() {
    let params = ScenarioParams {
        injury_std_dev: 0.0,
        ..ScenarioParams::default()
    };
    match run(&params, &mut SmallRng::seed_from_u64(9)) {
        Err(Error::DegenerateSample { value, count }) => {
            assert_eq!(value, 0.5);
            assert_eq!(count, 100);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected DegenerateSample"),
    }
}

#[test]
fn full_run_writes_chart_and_statistics() {
    let dir = scratch_dir("full-run");
    let params = ScenarioParams::default();
    let out = run(&params, &mut SmallRng::seed_from_u64(77)).unwrap();

    let chart = ChartConfig::default();
    let chart_path = dir.join("curve.svg");
    render_curve(&out.curve, &chart, &chart_path).unwrap();
    let svg = std::fs::read_to_string(&chart_path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("N or More Injuries"));
    assert!(svg.contains("Cumulative Frequency"));
    assert_eq!(svg.matches("stroke=\"#FF0000\"").count(), 1);
    assert_eq!(svg.matches("stroke=\"#00FF00\"").count(), 1);

    let stats = aggregate_statistics(&out.curve, &params, 77, &UPPER_REFERENCE, &LOWER_REFERENCE);
    assert_eq!(stats.num_scenarios, 100);
    assert_eq!(stats.max_injuries, 178);
    assert!(stats.zero_injury_scenarios >= 1);
    let c = &stats.criteria;
    assert_eq!(
        c.intolerable + c.alarp + c.broadly_acceptable + c.unclassified,
        stats.fn_points.len()
    );
    // Total frequency is at most 100 * 5e-7, under the upper line's 1e-2/178.
    assert_eq!(c.intolerable, 0);

    let stats_path = dir.join("stats.json");
    save_statistics(&stats, &stats_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&stats_path).unwrap()).unwrap();
    assert_eq!(json["seed"], 77);
    assert_eq!(json["max_injuries"], 178);

    let _ = std::fs::remove_dir_all(&dir);
}
