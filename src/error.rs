use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot normalize an empty sample")]
    EmptySample,

    /// Every sample equals `value`, so the min-max span is zero.
    #[error("cannot normalize: all {count} samples equal {value}")]
    DegenerateSample { value: f64, count: usize },

    #[error("sample {index} is not finite")]
    NonFiniteSample { index: usize },

    #[error("frequency range {low}..{high} must be non-empty and start above zero")]
    InvalidFrequencyRange { low: u32, high: u32 },

    #[error("invalid injury distribution: {0}")]
    InvalidDistribution(String),

    #[error("column length mismatch: {frequencies} frequencies vs {injuries} injury counts")]
    ColumnLengthMismatch { frequencies: usize, injuries: usize },

    #[error("failed to render chart: {0}")]
    Render(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the console report failed, e.g. stdout was closed early.
    #[error("failed to write report: {0}")]
    Report(#[source] std::io::Error),

    #[error("failed to serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),
}
