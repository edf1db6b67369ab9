//! Export command handler
//!
//! Writes the composed grid and progress summary to a CSV file.

use crate::args::{ProgressTypeArg, ViewArgs};
use crate::commands::view::{load_session, Session};
use course_grid::config::Config;
use course_grid::core::export::export_grid_csv;
use course_grid::core::progress::ProgressType;
use course_grid::core::report::ReportContext;
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Default output file name when no --output is given
const DEFAULT_EXPORT_NAME: &str = "course-grid.csv";

/// Run the export command.
pub fn run(
    view: &ViewArgs,
    progress_type: ProgressTypeArg,
    output: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = export_grid(view, progress_type, output, config) {
        error!("Grid export failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Resolve the output path: explicit --output, or `exports_dir` from config
fn resolve_output_path(output: Option<&Path>, config: &Config) -> Result<PathBuf, String> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }

    let exports_dir = PathBuf::from(&config.paths.exports_dir);
    std::fs::create_dir_all(&exports_dir).map_err(|e| {
        format!(
            "✗ Failed to create exports directory {}: {e}",
            exports_dir.display()
        )
    })?;
    Ok(exports_dir.join(DEFAULT_EXPORT_NAME))
}

/// Load the session, compose the view, and write the CSV
fn export_grid(
    view: &ViewArgs,
    progress_type: ProgressTypeArg,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let output_path = resolve_output_path(output, config)?;

    let Session {
        catalog,
        filter,
        sort,
        selection,
    } = load_session(view, config)?;

    let ctx = ReportContext::new(
        &catalog,
        &filter,
        sort,
        &selection,
        ProgressType::from(progress_type),
    );

    export_grid_csv(&ctx, &output_path)
        .map_err(|e| format!("✗ Failed to export grid CSV: {e}"))?;

    info!("Grid exported: {}", output_path.display());
    println!("✓ Grid exported: {}", output_path.display());
    Ok(())
}
