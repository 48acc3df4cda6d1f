//! Plain-text listings printed by the binary.

use std::io;

use crate::exceedance::ExceedanceCurve;
use crate::types::{ExceedanceRow, Scenario};

/// A row that can be listed in a fixed-width table.
pub trait ReportRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl ReportRow for Scenario {
    fn headers() -> &'static [&'static str] {
        &["frequency", "injuries"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{:.6e}", self.frequency),
            self.injury_count.to_string(),
        ]
    }
}

impl ReportRow for ExceedanceRow {
    fn headers() -> &'static [&'static str] {
        &["frequency", "injuries", "cumulative"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{:.6e}", self.frequency),
            self.injury_count.to_string(),
            format!("{:.6e}", self.cumulative_frequency),
        ]
    }
}

const COLUMN_WIDTH: usize = 14;
const COUNTS_PER_LINE: usize = 20;

/// Injury counts as a bracketed array, wrapped every 20 values.
pub fn format_injury_counts(counts: &[u32]) -> String {
    use std::fmt::Write;

    let mut out = String::from("[");
    for (i, c) in counts.iter().enumerate() {
        if i > 0 {
            if i % COUNTS_PER_LINE == 0 {
                out.push_str("\n ");
            } else {
                out.push(' ');
            }
        }
        let _ = write!(out, "{:>3}", c);
    }
    out.push(']');
    out
}

/// Fixed-width table with a row index column. `limit` keeps only the first
/// rows and notes how many were left out.
pub fn format_table<R: ReportRow>(rows: &[R], limit: Option<usize>) -> String {
    use std::fmt::Write;

    let shown = limit.map_or(rows.len(), |l| l.min(rows.len()));
    let index_width = rows.len().max(1).to_string().len();
    let width = COLUMN_WIDTH;

    let mut out = String::new();
    let _ = write!(out, "{:>index_width$}", "");
    for h in R::headers() {
        let _ = write!(out, "{:>width$}", h);
    }
    out.push('\n');

    for (i, row) in rows.iter().take(shown).enumerate() {
        let _ = write!(out, "{:>index_width$}", i);
        for cell in row.cells() {
            let _ = write!(out, "{:>width$}", cell);
        }
        out.push('\n');
    }

    if shown < rows.len() {
        let _ = writeln!(out, "... ({} more rows)", rows.len() - shown);
    }
    let _ = write!(out, "[{} rows x {} columns]", rows.len(), R::headers().len());
    out
}

/// Injury-count array, sorted head view, and full curve table for one run.
pub fn write_run_report<W: io::Write>(
    out: &mut W,
    injury_counts: &[u32],
    curve: &ExceedanceCurve,
    head_rows: usize,
) -> io::Result<()> {
    writeln!(out, "Injury counts:")?;
    writeln!(out, "{}", format_injury_counts(injury_counts))?;
    writeln!(out)?;
    writeln!(out, "Sorted scenarios (head):")?;
    writeln!(out, "{}", format_table(&curve.scenarios(), Some(head_rows)))?;
    writeln!(out)?;
    writeln!(out, "Exceedance curve:")?;
    writeln!(out, "{}", format_table(curve.rows(), None))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exceedance::{build_curve, ScenarioTable};

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn small_curve() -> ExceedanceCurve {
        build_curve(ScenarioTable::from_columns(&[1e-7, 2e-7, 3e-7], &[5, 5, 2]).unwrap())
    }

    #[test]
    fn test_run_report_sections() {
        let mut buf: Vec<u8> = Vec::new();
        write_run_report(&mut buf, &[5, 5, 2], &small_curve(), 2).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Injury counts:\n[  5   5   2]\n"));
        assert!(text.contains("Sorted scenarios (head):"));
        assert!(text.contains("... (1 more rows)\n[3 rows x 2 columns]"));
        assert!(text.contains("Exceedance curve:"));
        assert!(text.ends_with("[3 rows x 3 columns]\n"));
    }

    #[test]
    fn test_run_report_closed_output_is_an_error() {
        let err = write_run_report(&mut ClosedPipe, &[5, 5, 2], &small_curve(), 2).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_injury_counts_wrap() {
        let counts: Vec<u32> = (0..25).collect();
        let text = format_injury_counts(&counts);
        assert!(text.starts_with("[  0   1"));
        assert!(text.ends_with(" 24]"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_table_head() {
        let rows: Vec<Scenario> = (0..8)
            .map(|i| Scenario {
                frequency: 1e-7,
                injury_count: 10 - i,
            })
            .collect();
        let text = format_table(&rows, Some(3));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("frequency") && lines[0].contains("injuries"));
        assert_eq!(lines.len(), 1 + 3 + 2);
        assert!(lines[1].contains("1.000000e-7"));
        assert!(lines[1].trim_end().ends_with("10"));
        assert_eq!(lines[4], "... (5 more rows)");
        assert_eq!(lines[5], "[8 rows x 2 columns]");
    }

    #[test]
    fn test_table_full_curve() {
        let rows = vec![ExceedanceRow {
            frequency: 2e-7,
            injury_count: 7,
            cumulative_frequency: 2e-7,
        }];
        let text = format_table(&rows, None);
        assert!(text.contains("cumulative"));
        assert!(!text.contains("more rows"));
        assert!(text.ends_with("[1 rows x 3 columns]"));
    }
}
