//! Report command handler
//!
//! Renders the composed grid and progress panel to Markdown or HTML.

use crate::args::{ProgressTypeArg, ViewArgs};
use crate::commands::view::{load_session, Session};
use course_grid::config::Config;
use course_grid::core::progress::ProgressType;
use course_grid::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default output file stem when no --output is given
const DEFAULT_REPORT_STEM: &str = "course-grid";

/// Run the report command.
pub fn run(
    view: &ViewArgs,
    progress_type: ProgressTypeArg,
    output: Option<&Path>,
    format_str: &str,
    config: &Config,
) {
    if let Err(err) = generate_report(view, progress_type, output, format_str, config) {
        error!("Report generation failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Resolve the output path: explicit --output, or `reports_dir` from config
fn resolve_output_path(
    output: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output {
        return Ok(path.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(reports_dir.join(format!("{DEFAULT_REPORT_STEM}.{}", format.extension())))
}

/// Load the session, compose the view, and write the report
fn generate_report(
    view: &ViewArgs,
    progress_type: ProgressTypeArg,
    output: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;
    let output_path = resolve_output_path(output, format, config)?;

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

    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
    };
    result.map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    info!("Report generated: {}", output_path.display());
    println!("✓ Report generated: {}", output_path.display());
    Ok(())
}
