//! Catalog model: the immutable course store for a session

use super::Course;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The course catalog for a browsing session
///
/// Owns the `Course` records exclusively and is read-only after load.
/// File order is preserved: it is the identity display order when no sort
/// key is chosen.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    /// Courses in catalog (file) order
    courses: Vec<Course>,

    /// Index from course id to position in `courses`
    #[serde(skip)]
    index: HashMap<u32, usize>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a sequence of courses, preserving order
    ///
    /// Ids are unique across the catalog; if a duplicate id appears the
    /// first record wins and the duplicate is dropped with a warning.
    #[must_use]
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let mut catalog = Self::new();
        for course in courses {
            if catalog.index.contains_key(&course.id) {
                logger::warn!("Duplicate course id {} dropped from catalog", course.id);
                continue;
            }
            catalog.index.insert(course.id, catalog.courses.len());
            catalog.courses.push(course);
        }
        catalog
    }

    /// Parse a catalog from a JSON array of course records
    ///
    /// Records that fail to deserialize as a [`Course`] (missing or
    /// wrong-typed fields) are skipped with a warning; they never enter the
    /// catalog, so they can never match a filter and never sort anywhere.
    ///
    /// # Errors
    /// Returns an error if the document is not valid JSON or not an array.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| format!("Catalog is not a JSON array of courses: {e}"))?;

        let total = entries.len();
        let mut courses = Vec::with_capacity(total);
        for (position, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Course>(entry) {
                Ok(course) => courses.push(course),
                Err(e) => {
                    logger::warn!("Skipping malformed catalog entry at index {position}: {e}");
                }
            }
        }

        logger::debug!("Parsed {} of {} catalog entries", courses.len(), total);
        Ok(Self::from_courses(courses))
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON array.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read catalog {}: {e}", path.display()))?;
        let catalog = Self::from_json(&content)
            .map_err(|e| format!("Failed to parse catalog {}: {e}", path.display()))?;
        logger::info!(
            "Catalog loaded: {} courses from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Look up a course by id
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Course> {
        self.index.get(&id).map(|&position| &self.courses[position])
    }

    /// Iterate courses in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Courses as a slice, in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// The id string shown for a course
    ///
    /// Short-term courses display as `s` followed by the numeric id with
    /// its leading `5` stripped (ids of short-term courses start with 5 in
    /// the source data); all other courses display the numeric id as-is.
    /// Display-only: lookups always use the numeric id.
    #[must_use]
    pub fn display_id(course: &Course) -> String {
        if course.level.to_lowercase().starts_with("short") {
            let digits = course.id.to_string();
            let trimmed = digits.strip_prefix('5').unwrap_or(&digits);
            format!("s{trimmed}")
        } else {
            course.id.to_string()
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Attribute;

    fn course(id: u32, level: &str) -> Course {
        Course::new(
            id,
            format!("Course {id}"),
            "A description.".to_string(),
            "DCS".to_string(),
            1.0,
            level.to_string(),
        )
    }

    #[test]
    fn test_from_courses_indexes_by_id() {
        let catalog = Catalog::from_courses(vec![course(109, "100"), course(229, "200")]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(229).map(|c| c.id), Some(229));
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut second = course(109, "200");
        second.name = "Imposter".to_string();

        let catalog = Catalog::from_courses(vec![course(109, "100"), second]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(109).map(|c| c.level.as_str()), Some("100"));
    }

    #[test]
    fn test_from_json_parses_records() {
        let json = r#"[
            {"id": 109, "name": "Intro", "description": "Python.", "department": "DCS",
             "credits": 1, "level": "100",
             "cs1": true, "cs2": false, "dsav": false, "cds": false, "hcd": false, "cel": false}
        ]"#;

        let catalog = Catalog::from_json(json).expect("parse catalog");

        assert_eq!(catalog.len(), 1);
        let loaded = catalog.get(109).expect("course present");
        assert!(loaded.has(Attribute::Cs1));
        assert!((loaded.credits - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        // Second entry is missing most fields; third has a wrong-typed id.
        let json = r#"[
            {"id": 109, "name": "Intro", "description": "Python.", "department": "DCS",
             "credits": 1, "level": "100",
             "cs1": false, "cs2": false, "dsav": false, "cds": false, "hcd": false, "cel": false},
            {"id": 201},
            {"id": "nope", "name": "Bad", "description": "", "department": "DCS",
             "credits": 1, "level": "200",
             "cs1": false, "cs2": false, "dsav": false, "cds": false, "hcd": false, "cel": false}
        ]"#;

        let catalog = Catalog::from_json(json).expect("parse catalog");

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(109).is_some());
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(Catalog::from_json("{\"not\": \"an array\"}").is_err());
        assert!(Catalog::from_json("definitely not json").is_err());
    }

    #[test]
    fn test_display_id_for_short_term() {
        let short = course(501, "Short");
        let regular = course(229, "200");

        assert_eq!(Catalog::display_id(&short), "s01");
        assert_eq!(Catalog::display_id(&regular), "229");
    }

    #[test]
    fn test_display_id_without_leading_five() {
        // Defensive: a short-term id that does not start with 5 is kept whole.
        let short = course(801, "Short");
        assert_eq!(Catalog::display_id(&short), "s801");
    }
}
