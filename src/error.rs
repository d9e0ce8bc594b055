//! Error types for loading and plotting.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Everything that can stop a plot run.
#[derive(Error, Debug)]
pub enum PlotError {
    /// Input file does not exist
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other IO failure while reading or writing a file
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Token that isn't a number
    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },

    /// Row width differs from the first row
    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// No data rows at all
    #[error("table has no data rows")]
    EmptyTable,

    /// A series needs a dimension column and a throughput column
    #[error("need at least 2 columns, found {found}")]
    TooFewColumns { found: usize },

    /// Table error, tagged with the file it came from
    #[error("{}: {source}", path.display())]
    InSeries {
        path: PathBuf,
        #[source]
        source: Box<PlotError>,
    },

    /// Unrecognised line style format string
    #[error("bad line style: {0}")]
    BadStyle(String),

    /// `show` called before anything was plotted
    #[error("nothing to show: no lines were plotted")]
    NothingToShow,

    /// Drawing backend failure
    #[error("render failed: {0}")]
    Render(String),
}

impl PlotError {
    /// Numeric exit status for this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::FileNotFound(_) => 3,
            Self::Parse { .. }
            | Self::RaggedRow { .. }
            | Self::EmptyTable
            | Self::TooFewColumns { .. } => 4,
            Self::BadStyle(_) | Self::NothingToShow | Self::Render(_) => 5,
            Self::Io { .. } => 7,
            Self::InSeries { source, .. } => source.exit_status(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Innermost error, looking through `InSeries` wrappers.
    pub fn root(&self) -> &PlotError {
        match self {
            Self::InSeries { source, .. } => source.root(),
            other => other,
        }
    }
}
