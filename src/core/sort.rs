//! Sort comparators for the course grid

use crate::core::models::{Attribute, Course};
use std::cmp::Ordering;
use std::fmt;

/// The chosen sort order for the course grid
///
/// Every key yields a total preorder; ties are left to the stable sort, so
/// equal-rank courses keep their relative catalog order. [`SortKey::None`]
/// is the default and preserves catalog order outright.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Level 100 → Short
    LevelAsc,
    /// Short → level 100
    LevelDesc,
    /// Department, lexicographic
    Department,
    /// Fewest credits first
    CreditsAsc,
    /// Most credits first
    CreditsDesc,
    /// Group by highest-priority attribute carried
    TagGroup,
    /// Identity: preserve catalog order
    #[default]
    None,
}

/// Ordinal for level sorting: numeric tiers first, then short term, then
/// anything unrecognized.
fn level_rank(level: &str) -> u8 {
    match level {
        "100" => 1,
        "200" => 2,
        "300" => 3,
        _ if level.to_lowercase().starts_with("short") => 4,
        _ => 5,
    }
}

/// Rank for tag-group sorting: the index of the first priority-order
/// attribute the course carries, or one past the end when it carries none.
fn tag_rank(course: &Course) -> usize {
    Attribute::TAG_PRIORITY
        .iter()
        .position(|tag| tag.of(course))
        .unwrap_or(Attribute::TAG_PRIORITY.len())
}

impl SortKey {
    /// Parse a sort key from its wire string
    ///
    /// Total: unknown or empty input falls back to [`SortKey::None`]
    /// (identity order) rather than erroring.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "level-asc" => Self::LevelAsc,
            "level-desc" => Self::LevelDesc,
            "department" => Self::Department,
            "credits-asc" => Self::CreditsAsc,
            "credits-desc" => Self::CreditsDesc,
            "tag-group" | "tag" => Self::TagGroup,
            _ => Self::None,
        }
    }

    /// Wire string for this key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LevelAsc => "level-asc",
            Self::LevelDesc => "level-desc",
            Self::Department => "department",
            Self::CreditsAsc => "credits-asc",
            Self::CreditsDesc => "credits-desc",
            Self::TagGroup => "tag-group",
            Self::None => "none",
        }
    }

    /// Human-readable label, as shown in the sort dropdown
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LevelAsc => "Level: Ascending",
            Self::LevelDesc => "Level: Descending",
            Self::Department => "Department",
            Self::CreditsAsc => "Credits: Ascending",
            Self::CreditsDesc => "Credits: Descending",
            Self::TagGroup => "Tag",
            Self::None => "Catalog Order",
        }
    }

    /// Compare two courses under this key
    ///
    /// Returns [`Ordering::Equal`] for ties (and always for
    /// [`SortKey::None`]); a stable sort then preserves the pre-sort
    /// relative order of tied courses.
    #[must_use]
    pub fn compare(self, a: &Course, b: &Course) -> Ordering {
        match self {
            Self::LevelAsc => level_rank(&a.level).cmp(&level_rank(&b.level)),
            Self::LevelDesc => level_rank(&b.level).cmp(&level_rank(&a.level)),
            Self::Department => a.department.cmp(&b.department),
            Self::CreditsAsc => a.credits.total_cmp(&b.credits),
            Self::CreditsDesc => b.credits.total_cmp(&a.credits),
            Self::TagGroup => tag_rank(a).cmp(&tag_rank(b)),
            Self::None => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: u32, level: &str, credits: f32) -> Course {
        Course::new(
            id,
            format!("Course {id}"),
            String::new(),
            "DCS".to_string(),
            credits,
            level.to_string(),
        )
    }

    #[test]
    fn parse_known_keys() {
        assert_eq!(SortKey::parse("level-asc"), SortKey::LevelAsc);
        assert_eq!(SortKey::parse("CREDITS-DESC"), SortKey::CreditsDesc);
        assert_eq!(SortKey::parse("tag-group"), SortKey::TagGroup);
    }

    #[test]
    fn parse_unknown_falls_back_to_identity() {
        assert_eq!(SortKey::parse("alphabetical"), SortKey::None);
        assert_eq!(SortKey::parse(""), SortKey::None);
    }

    #[test]
    fn level_ordinals_put_short_after_numeric() {
        assert!(level_rank("100") < level_rank("200"));
        assert!(level_rank("200") < level_rank("300"));
        assert!(level_rank("300") < level_rank("Short"));
        assert!(level_rank("short term") < level_rank("Seminar"));
    }

    #[test]
    fn level_desc_reverses_asc() {
        let lo = course(1, "100", 1.0);
        let hi = course(2, "Short", 1.0);

        assert_eq!(SortKey::LevelAsc.compare(&lo, &hi), Ordering::Less);
        assert_eq!(SortKey::LevelDesc.compare(&lo, &hi), Ordering::Greater);
    }

    #[test]
    fn credits_compare_numerically() {
        let half = course(1, "100", 0.5);
        let full = course(2, "100", 1.0);

        assert_eq!(SortKey::CreditsAsc.compare(&half, &full), Ordering::Less);
        assert_eq!(SortKey::CreditsDesc.compare(&half, &full), Ordering::Greater);
    }

    #[test]
    fn department_compares_lexicographically() {
        let a = Course::new(1, String::new(), String::new(), "ANTH".into(), 1.0, "100".into());
        let b = Course::new(2, String::new(), String::new(), "DCS".into(), 1.0, "100".into());

        assert_eq!(SortKey::Department.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn tag_group_ranks_by_first_priority_match() {
        // Priority order is cs1, cs2, cds, cel, dsav, hcd.
        let cs1 = course(1, "100", 1.0).with_attributes(&[Attribute::Cs1, Attribute::Hcd]);
        let cds = course(2, "100", 1.0).with_attributes(&[Attribute::Cds]);
        let untagged = course(3, "100", 1.0);

        assert_eq!(SortKey::TagGroup.compare(&cs1, &cds), Ordering::Less);
        assert_eq!(SortKey::TagGroup.compare(&cds, &untagged), Ordering::Less);
        assert_eq!(SortKey::TagGroup.compare(&untagged, &untagged), Ordering::Equal);
    }

    #[test]
    fn none_reports_every_pair_equal() {
        let a = course(1, "100", 0.5);
        let b = course(2, "300", 1.0);
        assert_eq!(SortKey::None.compare(&a, &b), Ordering::Equal);
    }
}
