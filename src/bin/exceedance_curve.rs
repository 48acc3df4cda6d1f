use std::io::{self, Write};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{error, info};

use exceedance::constants::{CHART_FILE_NAME, STATISTICS_FILE_NAME, TABLE_HEAD_ROWS};
use exceedance::env_config;
use exceedance::pipeline::{run, RunOutput};
use exceedance::render::{render_curve, ChartConfig};
use exceedance::report::write_run_report;
use exceedance::statistics::{aggregate_statistics, save_statistics};
use exceedance::types::ScenarioParams;
use exceedance::Error;

fn main() {
    env_config::init_logging();
    match run_main() {
        Ok(()) => {}
        // Reader went away (e.g. piped into `head`); files are already written.
        Err(Error::Report(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run_main() -> exceedance::Result<()> {
    let seed = env_config::seed();
    let output_dir = env_config::output_dir();
    let params = ScenarioParams::default();
    let chart = ChartConfig::default();

    let t0 = Instant::now();
    let mut rng = SmallRng::seed_from_u64(seed);
    let RunOutput {
        injury_counts,
        curve,
        ..
    } = run(&params, &mut rng)?;
    let pipeline_ms = t0.elapsed().as_secs_f64() * 1000.0;

    let chart_path = output_dir.join(CHART_FILE_NAME);
    let t1 = Instant::now();
    render_curve(&curve, &chart, &chart_path)?;
    let render_ms = t1.elapsed().as_secs_f64() * 1000.0;

    let stats = aggregate_statistics(
        &curve,
        &params,
        seed,
        &chart.upper_reference,
        &chart.lower_reference,
    );
    let stats_path = output_dir.join(STATISTICS_FILE_NAME);
    save_statistics(&stats, &stats_path)?;
    info!(path = %stats_path.display(), "saved curve statistics");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut print = || -> io::Result<()> {
        writeln!(
            out,
            "Loss-of-containment exceedance curve ({} scenarios, seed {})",
            params.scenario_count, seed
        )?;
        writeln!(out)?;
        write_run_report(&mut out, &injury_counts, &curve, TABLE_HEAD_ROWS)?;

        writeln!(out)?;
        writeln!(out, "Results:")?;
        writeln!(out, "  Total frequency:    {:.4e} /yr", stats.total_frequency)?;
        writeln!(out, "  Max injuries:       {}", stats.max_injuries)?;
        writeln!(out, "  Mean injuries:      {:.2}", stats.mean_injuries)?;
        writeln!(out, "  Zero-injury rows:   {}", stats.zero_injury_scenarios)?;
        writeln!(out, "  F-N points:         {}", stats.fn_points.len())?;
        writeln!(
            out,
            "  Criteria:           {} intolerable, {} ALARP, {} broadly acceptable",
            stats.criteria.intolerable, stats.criteria.alarp, stats.criteria.broadly_acceptable
        )?;
        writeln!(out)?;
        writeln!(out, "  Chart:       {}", chart_path.display())?;
        writeln!(out, "  Statistics:  {}", stats_path.display())?;
        writeln!(out, "  Pipeline:    {:.2} ms", pipeline_ms)?;
        writeln!(out, "  Render:      {:.1} ms", render_ms)?;
        out.flush()
    };
    print().map_err(Error::Report)
}
