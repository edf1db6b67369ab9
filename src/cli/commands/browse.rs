//! Browse command handler
//!
//! Composes the grid view (filter, sort, pin selection) and prints it as a
//! table.

use crate::args::ViewArgs;
use crate::commands::view::{load_session, Session};
use course_grid::config::Config;
use course_grid::core::compose::compose;
use course_grid::core::models::{Catalog, Course};
use course_grid::core::report::format_credits;
use logger::info;

/// Run the browse command.
pub fn run(view: &ViewArgs, config: &Config, verbose: bool) {
    let session = match load_session(view, config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let Session {
        catalog,
        filter,
        sort,
        selection,
    } = &session;

    let rows = compose(catalog, filter, *sort, selection);
    info!(
        "Composed {} of {} courses (sort: {sort})",
        rows.len(),
        catalog.len()
    );

    if verbose {
        println!(
            "Showing {} of {} courses, sorted by {}",
            rows.len(),
            catalog.len(),
            sort.label()
        );
    }

    if rows.is_empty() {
        println!("No courses match the current filters.");
        return;
    }

    println!(
        "  {:<6} {:<44} {:<12} {:>7}  {}",
        "ID", "Course", "Level", "Credits", "Tags"
    );
    for course in rows {
        println!("{}", format_row(course, selection.contains(course.id)));
    }
}

/// Format one grid row for terminal output
fn format_row(course: &Course, selected: bool) -> String {
    let marker = if selected { "✓" } else { " " };
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

    format!(
        "{marker} {:<6} {:<44} {level:<12} {:>7}  {}",
        Catalog::display_id(course),
        truncate(&course.name, 44),
        format_credits(course.credits),
        tags.join(" ")
    )
}

/// Truncate a name to fit its column, adding an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> Course {
        Course::new(
            229,
            "Data Structures and Algorithms".to_string(),
            String::new(),
            "DCS".to_string(),
            1.0,
            "200".to_string(),
        )
    }

    #[test]
    fn row_marks_selected_courses() {
        let selected = format_row(&course(), true);
        let unselected = format_row(&course(), false);

        assert!(selected.starts_with('✓'));
        assert!(unselected.starts_with(' '));
        assert!(selected.contains("229"));
        assert!(selected.contains("200-level"));
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "A".repeat(60);
        assert_eq!(truncate(&long, 44).chars().count(), 44);
        assert!(truncate(&long, 44).ends_with('…'));
        assert_eq!(truncate("short", 44), "short");
    }
}
