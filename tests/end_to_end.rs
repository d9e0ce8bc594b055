use std::fs;
use std::path::PathBuf;

use mvplot::render::{CanvasCall, Color, LegendLoc, Marker, RecordingCanvas};
use mvplot::{PlotError, load_matvec, plot_matvec};
use tempfile::TempDir;

const TABLE: &str = "10 100.0\n20 250.0\n30 400.0\n";

fn driver_files(dir: &TempDir, row: &str, col: &str, blas: &str) -> [PathBuf; 3] {
    let mut paths = Vec::new();
    for (name, text) in [("out_row", row), ("out_col", col), ("out_blas", blas)] {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        paths.push(path);
    }
    [paths[0].clone(), paths[1].clone(), paths[2].clone()]
}

// ============================================================
// Three identical tables through the whole pipeline
// ============================================================

#[test]
fn test_three_identical_tables_load() {
    let dir = TempDir::new().unwrap();
    let [row, col, blas] = driver_files(&dir, TABLE, TABLE, TABLE);

    let series = load_matvec(&row, &col, &blas).unwrap();

    let expected = [(10.0, 100.0), (20.0, 250.0), (30.0, 400.0)];
    for s in &series {
        assert_eq!(s.points(), &expected);
    }
    let names: Vec<&str> = series.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["row", "col", "blas"]);
}

#[test]
fn test_three_identical_tables_render_calls() {
    let dir = TempDir::new().unwrap();
    let [row, col, blas] = driver_files(&dir, TABLE, TABLE, TABLE);
    let mut canvas = RecordingCanvas::new();

    plot_matvec(&row, &col, &blas, &mut canvas).unwrap();

    assert_eq!(canvas.count(|c| matches!(c, CanvasCall::Plot(_))), 1);
    assert_eq!(canvas.count(|c| matches!(c, CanvasCall::Legend(_))), 1);
    assert_eq!(canvas.count(|c| matches!(c, CanvasCall::Grid(true))), 1);
    assert_eq!(canvas.count(|c| matches!(c, CanvasCall::Show)), 1);

    let expected = vec![(10.0, 100.0), (20.0, 250.0), (30.0, 400.0)];
    for call in canvas.calls() {
        match call {
            CanvasCall::Plot(lines) => {
                assert_eq!(lines.len(), 3);
                for line in lines {
                    assert_eq!(line.points, expected);
                }
                let markers: Vec<Marker> = lines.iter().map(|l| l.style.marker).collect();
                assert_eq!(markers, vec![Marker::Circle, Marker::Hexagon, Marker::Star]);
                let colors: Vec<Color> = lines.iter().map(|l| l.style.color).collect();
                assert_eq!(colors, vec![Color::Black, Color::Blue, Color::Red]);
            }
            CanvasCall::Legend(legend) => {
                assert_eq!(legend.labels, vec!["row", "columb", "blas"]);
                assert_eq!(legend.loc, LegendLoc::Best);
                assert_eq!(legend.numpoints, 1);
            }
            CanvasCall::XLabel(label) => assert_eq!(label, "matrix dimension"),
            CanvasCall::YLabel(label) => assert_eq!(label, "Mflops"),
            CanvasCall::Style(style) => {
                assert_eq!(style.font_family, "serif");
                assert!(style.autolayout);
            }
            CanvasCall::Grid(_) | CanvasCall::Show => {}
        }
    }
}

#[test]
fn test_series_need_not_align() {
    let dir = TempDir::new().unwrap();
    let [row, col, blas] = driver_files(&dir, "16 90\n32 95\n", "8 40\n", "64 700\n128 900\n256 950\n");
    let mut canvas = RecordingCanvas::new();

    plot_matvec(&row, &col, &blas, &mut canvas).unwrap();

    let lens: Vec<usize> = canvas
        .calls()
        .iter()
        .filter_map(|c| match c {
            CanvasCall::Plot(lines) => Some(lines.iter().map(|l| l.points.len()).collect::<Vec<_>>()),
            _ => None,
        })
        .flatten()
        .collect();
    assert_eq!(lens, vec![2, 1, 3]);
}

// ============================================================
// Failures stop the run before anything is drawn
// ============================================================

#[test]
fn test_missing_blas_file_draws_nothing() {
    let dir = TempDir::new().unwrap();
    let [row, col, blas] = driver_files(&dir, TABLE, TABLE, TABLE);
    fs::remove_file(&blas).unwrap();
    let mut canvas = RecordingCanvas::new();

    let err = plot_matvec(&row, &col, &blas, &mut canvas).unwrap_err();

    assert!(matches!(err, PlotError::FileNotFound(ref p) if *p == blas), "got {:?}", err);
    assert!(canvas.calls().is_empty());
}

#[test]
fn test_malformed_row_file_draws_nothing() {
    let dir = TempDir::new().unwrap();
    let [row, col, blas] = driver_files(&dir, "10 100.0\n20 250.0 3\n", TABLE, TABLE);
    let mut canvas = RecordingCanvas::new();

    let err = plot_matvec(&row, &col, &blas, &mut canvas).unwrap_err();

    assert!(matches!(err.root(), PlotError::RaggedRow { .. }), "got {:?}", err);
    assert_eq!(err.exit_status(), 4);
    assert!(canvas.calls().is_empty());
}

// ============================================================
// Command line
// ============================================================

#[test]
fn test_run_with_output_writes_file() {
    use clap::Parser;
    use mvplot::config::Cli;
    use std::ffi::OsStr;

    let dir = TempDir::new().unwrap();
    let [row, col, blas] = driver_files(&dir, TABLE, TABLE, TABLE);
    let out = dir.path().join("matvec.svg");
    let cli = Cli::try_parse_from([
        OsStr::new("mvplot"),
        OsStr::new("--row"),
        row.as_os_str(),
        OsStr::new("--col"),
        col.as_os_str(),
        OsStr::new("--blas"),
        blas.as_os_str(),
        OsStr::new("-o"),
        out.as_os_str(),
    ])
    .unwrap();

    mvplot::run(&cli).unwrap();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("columb"));
}
