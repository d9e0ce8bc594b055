//! Command-line configuration.
//!
//! With no arguments the tool reads `out_row`, `out_col` and `out_blas`
//! from the working directory, which is what the benchmark drivers write,
//! and shows the chart in a window without writing any file.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "mvplot")]
#[command(about = "Plot row-major, column-major and BLAS matrix-vector benchmark results")]
#[command(version)]
pub struct Cli {
    /// Row-major driver output
    #[arg(long, default_value = "out_row")]
    pub row: PathBuf,

    /// Column-major driver output
    #[arg(long, default_value = "out_col")]
    pub col: PathBuf,

    /// BLAS driver output
    #[arg(long, default_value = "out_blas")]
    pub blas: PathBuf,

    /// Write the figure to this file instead of showing it in a window
    /// (.svg for vector output, otherwise a bitmap)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default `env_logger` filter for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_cli(args: &[&str]) -> Result<Cli, clap::error::Error> {
        Cli::try_parse_from(std::iter::once("mvplot").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_args_uses_driver_file_names() {
        let cli = parse_cli(&[]).unwrap();
        assert_eq!(cli.row, PathBuf::from("out_row"));
        assert_eq!(cli.col, PathBuf::from("out_col"));
        assert_eq!(cli.blas, PathBuf::from("out_blas"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.size(), (1024, 768));
        assert_eq!(cli.log_filter(), "info");
    }

    #[test]
    fn test_overrides() {
        let cli = parse_cli(&[
            "--row", "r.txt", "--blas", "b.txt", "-o", "fig.svg", "--width", "800", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.row, PathBuf::from("r.txt"));
        assert_eq!(cli.col, PathBuf::from("out_col"));
        assert_eq!(cli.blas, PathBuf::from("b.txt"));
        assert_eq!(cli.output, Some(PathBuf::from("fig.svg")));
        assert_eq!(cli.size(), (800, 768));
        assert_eq!(cli.log_filter(), "trace");
    }

    #[test]
    fn test_rejects_positional_args() {
        assert!(parse_cli(&["out_row"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
