//! Degree-progress aggregation over the selection

use crate::core::models::{Attribute, Catalog, Course};
use crate::core::selection::Selection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target number of 300-level courses (Major ring only)
pub const LEVEL300_TARGET: usize = 2;

/// The degree requirement set being tracked
///
/// The type never filters which courses may be selected; it only fixes the
/// credit denominator and which progress rings are shown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProgressType {
    /// Major: 10 credits, 300-level and attribute rings shown
    #[default]
    Major,
    /// Minor: 6 credits, attribute ring shown
    Minor,
    /// General education concentration: 4 credits, credits ring only
    Gec,
}

impl ProgressType {
    /// Total-credit target for this requirement set
    #[must_use]
    pub const fn credit_target(self) -> f32 {
        match self {
            Self::Major => 10.0,
            Self::Minor => 6.0,
            Self::Gec => 4.0,
        }
    }

    /// Whether the 300-level ring applies (Major only)
    #[must_use]
    pub const fn shows_level300(self) -> bool {
        matches!(self, Self::Major)
    }

    /// Whether the attribute-coverage ring applies (Major or Minor)
    #[must_use]
    pub const fn shows_attributes(self) -> bool {
        matches!(self, Self::Major | Self::Minor)
    }

    /// Target for the attribute-coverage ring
    #[must_use]
    pub const fn attribute_target() -> usize {
        Attribute::COVERAGE.len()
    }
}

impl fmt::Display for ProgressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Gec => "GEC",
        };
        write!(f, "{as_str}")
    }
}

/// Raw progress counts over the selected courses
///
/// Computed against the FULL catalog, never the filtered view: hiding a
/// selected course behind a filter must not change these numbers.
/// Denominators live on [`ProgressType`]; this record carries counts only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    /// Sum of credits over selected courses
    pub total_credits: f32,
    /// Selected courses at exactly the 300 level
    pub level300_count: usize,
    /// Distinct coverage attributes carried by at least one selected course
    pub attribute_coverage: usize,
}

impl Progress {
    /// Aggregate progress for a selection against the full catalog
    ///
    /// Selected ids the catalog does not contain contribute nothing.
    /// Attribute coverage counts distinct attributes, not occurrences:
    /// three selected `dsav` courses still cover exactly one attribute.
    #[must_use]
    pub fn aggregate(catalog: &Catalog, selection: &Selection) -> Self {
        let selected: Vec<&Course> = catalog
            .iter()
            .filter(|course| selection.contains(course.id))
            .collect();

        let total_credits = selected.iter().map(|course| course.credits).sum();

        let level300_count = selected
            .iter()
            .filter(|course| course.level == "300")
            .count();

        let attribute_coverage = Attribute::COVERAGE
            .iter()
            .filter(|attribute| selected.iter().any(|course| attribute.of(course)))
            .count();

        Self {
            total_credits,
            level300_count,
            attribute_coverage,
        }
    }
}
