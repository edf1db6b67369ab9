//! Export the composed grid to CSV

use crate::core::models::Catalog;
use crate::core::report::{format_credits, ReportContext};
use std::error::Error;
use std::path::Path;

/// Trait for exporting the composed course grid in different formats
pub trait GridExporter {
    /// Export the current browsing session
    ///
    /// # Errors
    /// Returns an error if export fails
    fn export(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;
}

/// CSV exporter for the composed grid
pub struct CsvExporter;

impl GridExporter for CsvExporter {
    fn export(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        export_grid_csv(ctx, output_path)
    }
}

/// Export the composed grid and progress summary to CSV format
///
/// The file starts with summary rows (one item per row), followed by a
/// `Courses` section listing the display list in composed order.
///
/// # Errors
/// Returns an error if file writing fails
pub fn export_grid_csv<P: AsRef<Path>>(
    ctx: &ReportContext,
    output_path: P,
) -> Result<(), Box<dyn Error>> {
    use std::fs::File;
    use std::io::Write;

    let mut file = File::create(output_path.as_ref())?;
    let progress = ctx.progress();

    // Summary section - one item per row
    writeln!(file, "Progress Type,{}", ctx.progress_type)?;
    writeln!(
        file,
        "Total Credits,{},{}",
        format_credits(progress.total_credits),
        format_credits(ctx.progress_type.credit_target())
    )?;
    writeln!(file, "300-Level Courses,{}", progress.level300_count)?;
    writeln!(file, "Attributes Covered,{}", progress.attribute_coverage)?;
    writeln!(file, "Courses Shown,{}", ctx.course_count())?;
    writeln!(file, "Courses Selected,{}", ctx.selected_count())?;

    let filters = ctx.active_filters();
    if !filters.is_empty() {
        writeln!(file, "Active Filters,\"{}\"", filters.join("; "))?;
    }

    // Courses section
    writeln!(file, "Courses")?;
    writeln!(
        file,
        "Course ID,Name,Department,Level,Credits,Tags,Selected"
    )?;

    logger::debug!("Exporting {} courses from grid", ctx.course_count());

    for course in ctx.view() {
        let tags: Vec<String> = course
            .attributes()
            .iter()
            .map(|tag| tag.as_str().to_uppercase())
            .collect();
        let selected = if ctx.selection.contains(course.id) {
            "yes"
        } else {
            "no"
        };

        writeln!(
            file,
            "{},\"{}\",\"{}\",{},{},\"{}\",{}",
            Catalog::display_id(course),
            course.name,
            course.department,
            course.level,
            format_credits(course.credits),
            tags.join(";"),
            selected
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::FilterState;
    use crate::core::models::{Attribute, Course};
    use crate::core::progress::ProgressType;
    use crate::core::selection::Selection;
    use crate::core::sort::SortKey;
    use std::fs;

    fn catalog() -> Catalog {
        Catalog::from_courses(vec![
            Course::new(
                1,
                "Intro".to_string(),
                String::new(),
                "DCS".to_string(),
                1.0,
                "100".to_string(),
            )
            .with_attributes(&[Attribute::Cs1]),
            Course::new(
                3,
                "Capstone".to_string(),
                String::new(),
                "DCS".to_string(),
                1.0,
                "300".to_string(),
            )
            .with_attributes(&[Attribute::Dsav, Attribute::Cel]),
        ])
    }

    #[test]
    fn exports_summary_and_courses() {
        let catalog = catalog();
        let filter = FilterState::new();
        let selection = Selection::from_ids([3]);
        let ctx = ReportContext::new(
            &catalog,
            &filter,
            SortKey::None,
            &selection,
            ProgressType::Major,
        );

        let output_path = std::env::temp_dir().join("coursegrid_test_export.csv");
        export_grid_csv(&ctx, &output_path).expect("export grid");

        let contents = fs::read_to_string(&output_path).expect("read file");
        assert!(contents.contains("Progress Type,Major"));
        assert!(contents.contains("Total Credits,1,10"));
        assert!(contents.contains("300-Level Courses,1"));
        assert!(contents.contains("Attributes Covered,2"));
        assert!(contents.contains("Course ID,Name,Department"));
        assert!(contents.contains("\"Capstone\""));
        assert!(contents.contains("DSAV;CEL"));

        // Selected course is pinned to the first data row
        let courses_section: Vec<&str> = contents
            .lines()
            .skip_while(|line| *line != "Courses")
            .collect();
        assert!(courses_section[2].starts_with('3'));

        fs::remove_file(&output_path).ok();
    }

    #[test]
    fn csv_exporter_trait_works() {
        let catalog = catalog();
        let filter = FilterState::new();
        let selection = Selection::new();
        let ctx = ReportContext::new(
            &catalog,
            &filter,
            SortKey::None,
            &selection,
            ProgressType::Gec,
        );

        let output_path = std::env::temp_dir().join("coursegrid_test_exporter_trait.csv");
        let exporter = CsvExporter;
        exporter.export(&ctx, &output_path).expect("export grid");

        assert!(output_path.exists());
        fs::remove_file(&output_path).ok();
    }
}
