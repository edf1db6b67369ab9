//! Filter predicate over the course catalog

use crate::core::models::{Attribute, Course};
use serde::{Deserialize, Serialize};

/// Compare two credit values for filter equality
///
/// Credit values come from a small closed set (1 and 0.5 in current data),
/// so an epsilon comparison is exact in practice.
#[must_use]
pub fn credits_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < f32::EPSILON
}

/// The active filter dimensions for a browsing session
///
/// Each dimension is independently optional; the overall predicate is the
/// AND of every active dimension, so an empty state matches every course
/// and activating another dimension can only narrow the match set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search, matched case-insensitively against name or description
    #[serde(default)]
    pub search: String,

    /// Required attributes; a course must carry ALL of them
    #[serde(default)]
    pub tags: Vec<Attribute>,

    /// Required level (exact string match), or `None` for no constraint
    #[serde(default)]
    pub level: Option<String>,

    /// Required credit value, or `None` for no constraint
    #[serde(default)]
    pub credits: Option<f32>,

    /// Required department (exact string match), or `None` for no constraint
    #[serde(default)]
    pub department: Option<String>,
}

impl FilterState {
    /// A filter with no active dimensions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no dimension is active (such a filter matches every course)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.tags.is_empty()
            && self.level.is_none()
            && self.credits.is_none()
            && self.department.is_none()
    }

    /// Deactivate every dimension
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a course passes every active dimension
    ///
    /// Pure predicate, short-circuits on the first failing dimension.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !course.name.to_lowercase().contains(&needle)
                && !course.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        // Tags are AND semantics: every selected tag must be carried.
        for tag in &self.tags {
            if !tag.of(course) {
                return false;
            }
        }

        if let Some(level) = &self.level {
            if course.level != *level {
                return false;
            }
        }

        if let Some(credits) = self.credits {
            if !credits_eq(course.credits, credits) {
                return false;
            }
        }

        if let Some(department) = &self.department {
            if course.department != *department {
                return false;
            }
        }

        true
    }
}
