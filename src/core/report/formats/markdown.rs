//! Markdown report generator
//!
//! Renders the browsing session as a Markdown document with a progress
//! table and the composed course grid. These reports render well in
//! GitHub, GitLab, and VS Code.

use crate::core::models::Catalog;
use crate::core::report::{format_credits, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{progress_type}}", &ctx.progress_type.to_string());
        output = output.replace("{{sort_label}}", ctx.sort.label());

        let filters = ctx.active_filters();
        let filters_line = if filters.is_empty() {
            "none".to_string()
        } else {
            filters.join(", ")
        };
        output = output.replace("{{active_filters}}", &filters_line);

        output = output.replace("{{progress_rows}}", &Self::generate_progress_rows(ctx));
        output = output.replace("{{selected_count}}", &ctx.selected_count().to_string());
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{course_table}}", &Self::generate_course_table(ctx));

        output
    }

    /// Generate the progress ring table rows
    fn generate_progress_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();

        for (label, value, target) in ctx.rings() {
            let _ = writeln!(rows, "| {label} | {value}/{target} |");
        }

        rows
    }

    /// Generate the course grid table
    fn generate_course_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| | ID | Course | Department | Level | Credits | Tags |\n");
        table.push_str("|---|---|---|---|---|---|---|\n");

        for course in ctx.view() {
            let marker = if ctx.selection.contains(course.id) {
                "✓"
            } else {
                ""
            };
            let level = if course.level == "Short" {
                "Short Term".to_string()
            } else {
                format!("{}-level", course.level)
            };
            let tags: Vec<String> = course
                .attributes()
                .iter()
                .map(|tag| tag.as_str().to_uppercase())
                .collect();

            let _ = writeln!(
                table,
                "| {marker} | {} | {} | {} | {level} | {} | {} |",
                Catalog::display_id(course),
                course.name,
                course.department,
                format_credits(course.credits),
                tags.join(", ")
            );
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::FilterState;
    use crate::core::models::{Attribute, Course};
    use crate::core::progress::ProgressType;
    use crate::core::selection::Selection;
    use crate::core::sort::SortKey;

    #[test]
    fn renders_progress_and_courses() {
        let catalog = Catalog::from_courses(vec![Course::new(
            2,
            "Data Visualization".to_string(),
            "Charts and graphics.".to_string(),
            "DCS".to_string(),
            1.0,
            "300".to_string(),
        )
        .with_attributes(&[Attribute::Dsav])]);
        let filter = FilterState::new();
        let selection = Selection::from_ids([2]);

        let ctx = ReportContext::new(
            &catalog,
            &filter,
            SortKey::None,
            &selection,
            ProgressType::Major,
        );
        let rendered = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(rendered.contains("**Progress type:** Major"));
        assert!(rendered.contains("| Total Credits | 1/10 |"));
        assert!(rendered.contains("| 300-Level Credits | 1/2 |"));
        assert!(rendered.contains("| Course Attributes | 1/4 |"));
        assert!(rendered.contains("Data Visualization"));
        assert!(rendered.contains("DSAV"));
        assert!(rendered.contains("✓"));
    }
}
