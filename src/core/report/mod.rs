//! Report generation for the course grid
//!
//! Renders a snapshot of the browsing session (the composed grid plus the
//! progress panel) in various formats (Markdown, HTML).

pub mod formats;

use crate::core::compose::compose;
use crate::core::filter::FilterState;
use crate::core::models::{Catalog, Course};
use crate::core::progress::{Progress, ProgressType, LEVEL300_TARGET};
use crate::core::selection::Selection;
use crate::core::sort::SortKey;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Format a credit value the way the catalog displays it
///
/// Whole values print without a fraction ("1"), others as-is ("0.5").
#[must_use]
pub fn format_credits(credits: f32) -> String {
    if credits.fract().abs() < f32::EPSILON {
        format!("{credits:.0}")
    } else {
        format!("{credits}")
    }
}

/// Data context for report generation
///
/// Aggregates everything needed to render a session snapshot: the composed
/// display list and the progress metrics are computed once at construction,
/// giving templates a single source of truth.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Full course catalog
    pub catalog: &'a Catalog,
    /// Active filter dimensions
    pub filter: &'a FilterState,
    /// Active sort key
    pub sort: SortKey,
    /// Selected course ids
    pub selection: &'a Selection,
    /// Requirement set the progress panel tracks
    pub progress_type: ProgressType,
    view: Vec<&'a Course>,
    progress: Progress,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context, composing the view and aggregating
    /// progress from the inputs
    #[must_use]
    pub fn new(
        catalog: &'a Catalog,
        filter: &'a FilterState,
        sort: SortKey,
        selection: &'a Selection,
        progress_type: ProgressType,
    ) -> Self {
        let view = compose(catalog, filter, sort, selection);
        let progress = Progress::aggregate(catalog, selection);
        Self {
            catalog,
            filter,
            sort,
            selection,
            progress_type,
            view,
            progress,
        }
    }

    /// The composed display list (selected courses pinned first)
    #[must_use]
    pub fn view(&self) -> &[&'a Course] {
        &self.view
    }

    /// The aggregated progress metrics
    #[must_use]
    pub const fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Number of courses in the display list
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.view.len()
    }

    /// Number of displayed courses that are selected
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.view
            .iter()
            .filter(|course| self.selection.contains(course.id))
            .count()
    }

    /// Labels for the active filter dimensions, in pill order
    ///
    /// Mirrors the filter pills of the grid UI: tags first, then level,
    /// credits, and department, with the search text leading when present.
    #[must_use]
    pub fn active_filters(&self) -> Vec<String> {
        let mut pills = Vec::new();

        if !self.filter.search.is_empty() {
            pills.push(format!("Search: \"{}\"", self.filter.search));
        }
        for tag in &self.filter.tags {
            pills.push(format!("Tag: {}", tag.as_str().to_uppercase()));
        }
        if let Some(level) = &self.filter.level {
            if level == "Short" {
                pills.push("Short Term".to_string());
            } else {
                pills.push(format!("{level} Level"));
            }
        }
        if let Some(credits) = self.filter.credits {
            let suffix = if credits > 1.0 { "s" } else { "" };
            pills.push(format!("{} Credit{suffix}", format_credits(credits)));
        }
        if let Some(department) = &self.filter.department {
            pills.push(department.clone());
        }

        pills
    }

    /// The progress rings shown for the active progress type
    ///
    /// Each entry is (label, value, target). The 300-level ring is
    /// Major-only; the attribute ring is Major-or-Minor.
    #[must_use]
    pub fn rings(&self) -> Vec<(String, String, String)> {
        let mut rings = vec![(
            "Total Credits".to_string(),
            format_credits(self.progress.total_credits),
            format_credits(self.progress_type.credit_target()),
        )];

        if self.progress_type.shows_level300() {
            rings.push((
                "300-Level Credits".to_string(),
                self.progress.level300_count.to_string(),
                LEVEL300_TARGET.to_string(),
            ));
        }

        if self.progress_type.shows_attributes() {
            rings.push((
                "Course Attributes".to_string(),
                self.progress.attribute_coverage.to_string(),
                ProgressType::attribute_target().to_string(),
            ));
        }

        rings
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Attribute;

    fn catalog() -> Catalog {
        Catalog::from_courses(vec![
            Course::new(
                1,
                "Intro".to_string(),
                String::new(),
                "DCS".to_string(),
                1.0,
                "100".to_string(),
            ),
            Course::new(
                2,
                "Capstone".to_string(),
                String::new(),
                "DCS".to_string(),
                0.5,
                "300".to_string(),
            )
            .with_attributes(&[Attribute::Dsav]),
        ])
    }

    #[test]
    fn context_composes_view_and_progress() {
        let catalog = catalog();
        let filter = FilterState::new();
        let selection = Selection::from_ids([2]);

        let ctx = ReportContext::new(
            &catalog,
            &filter,
            SortKey::None,
            &selection,
            ProgressType::Major,
        );

        assert_eq!(ctx.course_count(), 2);
        assert_eq!(ctx.selected_count(), 1);
        // Selected course pinned first
        assert_eq!(ctx.view()[0].id, 2);
        assert_eq!(ctx.progress().level300_count, 1);
    }

    #[test]
    fn rings_follow_progress_type() {
        let catalog = catalog();
        let filter = FilterState::new();
        let selection = Selection::new();

        let major = ReportContext::new(
            &catalog,
            &filter,
            SortKey::None,
            &selection,
            ProgressType::Major,
        );
        assert_eq!(major.rings().len(), 3);

        let minor = ReportContext::new(
            &catalog,
            &filter,
            SortKey::None,
            &selection,
            ProgressType::Minor,
        );
        assert_eq!(minor.rings().len(), 2);

        let gec = ReportContext::new(
            &catalog,
            &filter,
            SortKey::None,
            &selection,
            ProgressType::Gec,
        );
        assert_eq!(gec.rings().len(), 1);
    }

    #[test]
    fn active_filter_pills_mirror_the_ui() {
        let catalog = catalog();
        let filter = FilterState {
            search: "data".to_string(),
            tags: vec![Attribute::Dsav],
            level: Some("Short".to_string()),
            credits: Some(0.5),
            department: Some("DCS".to_string()),
        };
        let selection = Selection::new();

        let ctx = ReportContext::new(
            &catalog,
            &filter,
            SortKey::None,
            &selection,
            ProgressType::Major,
        );

        assert_eq!(
            ctx.active_filters(),
            vec![
                "Search: \"data\"".to_string(),
                "Tag: DSAV".to_string(),
                "Short Term".to_string(),
                "0.5 Credit".to_string(),
                "DCS".to_string(),
            ]
        );
    }

    #[test]
    fn credits_format_drops_whole_fractions() {
        assert_eq!(format_credits(1.0), "1");
        assert_eq!(format_credits(0.5), "0.5");
        assert_eq!(format_credits(1.5), "1.5");
    }
}
