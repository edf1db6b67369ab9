//! HTML report generator
//!
//! Renders the browsing session as a self-contained HTML page with
//! embedded CSS: a progress panel beside a card grid, with selected
//! courses highlighted and pinned first.

use crate::core::models::Catalog;
use crate::core::report::{format_credits, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{progress_type}}", &ctx.progress_type.to_string());
        output = output.replace("{{progress_rings}}", &Self::generate_rings(ctx));
        output = output.replace("{{filter_pills}}", &Self::generate_pills(ctx));
        output = output.replace("{{sort_label}}", ctx.sort.label());
        output = output.replace("{{selected_count}}", &ctx.selected_count().to_string());
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{course_cards}}", &Self::generate_cards(ctx));

        output
    }

    /// Generate the progress ring HTML
    fn generate_rings(ctx: &ReportContext) -> String {
        let mut html = String::new();

        for (label, value, target) in ctx.rings() {
            let _ = writeln!(html, "<div class=\"ring\">");
            let _ = writeln!(html, "  <div class=\"value\">{value}/{target}</div>");
            let _ = writeln!(html, "  <div class=\"label\">{label}</div>");
            let _ = writeln!(html, "</div>");
        }

        html
    }

    /// Generate the active filter pills
    fn generate_pills(ctx: &ReportContext) -> String {
        ctx.active_filters()
            .iter()
            .map(|pill| format!("<span class=\"pill\">{}</span>", escape(pill)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generate one card per course in the composed display order
    fn generate_cards(ctx: &ReportContext) -> String {
        let mut html = String::new();

        for course in ctx.view() {
            let selected = ctx.selection.contains(course.id);
            let card_class = if selected { "card selected" } else { "card" };
            let level = if course.level == "Short" {
                "Short Term".to_string()
            } else {
                format!("{}-level", course.level)
            };
            let credits = format_credits(course.credits);
            let credit_word = if course.credits > 1.0 {
                "credits"
            } else {
                "credit"
            };

            let _ = writeln!(html, "<div class=\"{card_class}\">");
            let _ = writeln!(html, "  <h3>{}</h3>", escape(&course.name));
            let _ = writeln!(
                html,
                "  <div class=\"meta\">{} | {level} | {credits} {credit_word}</div>",
                escape(&course.department)
            );
            let _ = writeln!(
                html,
                "  <div class=\"description\">{}</div>",
                escape(&course.description)
            );

            let tags: String = course
                .attributes()
                .iter()
                .map(|tag| format!("<span class=\"tag\">{}</span>", tag.as_str().to_uppercase()))
                .collect();
            let _ = writeln!(html, "  <div class=\"tags\">{tags}</div>");

            let _ = writeln!(html, "  <div class=\"footer\">");
            let _ = writeln!(
                html,
                "    <span>Course ID: {}</span>",
                Catalog::display_id(course)
            );
            if selected {
                let _ = writeln!(html, "    <span class=\"selected-badge\">Selected</span>");
            }
            let _ = writeln!(html, "  </div>");
            let _ = writeln!(html, "</div>");
        }

        html
    }
}

/// Minimal HTML escaping for text content
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
