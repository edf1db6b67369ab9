//! Progress command handler
//!
//! Aggregates degree progress over the selected courses and prints the
//! rings that apply to the chosen requirement set.

use crate::args::ProgressTypeArg;
use crate::commands::view::resolve_catalog_path;
use course_grid::config::Config;
use course_grid::core::models::Catalog;
use course_grid::core::progress::{Progress, ProgressType, LEVEL300_TARGET};
use course_grid::core::report::format_credits;
use course_grid::core::selection::Selection;
use logger::info;
use std::path::Path;

/// Run the progress command.
pub fn run(
    catalog_path: Option<&Path>,
    select: &[u32],
    progress_type: ProgressTypeArg,
    config: &Config,
) {
    let resolved = match resolve_catalog_path(catalog_path, config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let catalog = match Catalog::load(&resolved) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let selection = Selection::from_ids(select.iter().copied());
    let progress_type = ProgressType::from(progress_type);
    let progress = Progress::aggregate(&catalog, &selection);
    info!(
        "Aggregated progress over {} selected ids ({progress_type})",
        selection.len()
    );

    print_progress(&progress, progress_type, selection.len());
}

/// Print the progress rings for the chosen requirement set
fn print_progress(progress: &Progress, progress_type: ProgressType, selected: usize) {
    println!("Progress ({progress_type}): {selected} course(s) selected\n");

    println!(
        "  {:<20} {}/{}",
        "Total Credits",
        format_credits(progress.total_credits),
        format_credits(progress_type.credit_target())
    );

    if progress_type.shows_level300() {
        println!(
            "  {:<20} {}/{}",
            "300-Level Credits", progress.level300_count, LEVEL300_TARGET
        );
    }

    if progress_type.shows_attributes() {
        println!(
            "  {:<20} {}/{}",
            "Course Attributes",
            progress.attribute_coverage,
            ProgressType::attribute_target()
        );
    }
}
