//! Display-list composition: filter, sort, and pin the selection on top

use crate::core::filter::FilterState;
use crate::core::models::{Catalog, Course};
use crate::core::selection::Selection;
use crate::core::sort::SortKey;

/// Compose the ordered display list for the grid
///
/// Pipeline: filter the catalog, stable-sort the survivors under `sort`,
/// then partition into selected and unselected subsequences (each keeping
/// its post-sort relative order) and put the selected ones first.
///
/// The partition is a separate pass on purpose: selection state is
/// independent of the sort key and must not perturb the ordering among
/// courses with the same selection status. Composing twice with identical
/// inputs yields identical output.
#[must_use]
pub fn compose<'a>(
    catalog: &'a Catalog,
    filter: &FilterState,
    sort: SortKey,
    selection: &Selection,
) -> Vec<&'a Course> {
    let mut rows: Vec<&Course> = catalog.iter().filter(|course| filter.matches(course)).collect();

    // sort_by is stable: ties keep their filtered (catalog) order, and the
    // identity key compares everything equal, leaving the order untouched.
    rows.sort_by(|a, b| sort.compare(a, b));

    let (selected, unselected): (Vec<&Course>, Vec<&Course>) = rows
        .into_iter()
        .partition(|course| selection.contains(course.id));

    selected.into_iter().chain(unselected).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Attribute;

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

    fn ids(view: &[&Course]) -> Vec<u32> {
        view.iter().map(|c| c.id).collect()
    }

    fn catalog() -> Catalog {
        Catalog::from_courses(vec![
            course(1, "100", 1.0).with_attributes(&[Attribute::Cs1]),
            course(2, "300", 0.5).with_attributes(&[Attribute::Dsav]),
            course(3, "300", 1.0).with_attributes(&[Attribute::Dsav]),
            course(4, "200", 1.0),
        ])
    }

    #[test]
    fn default_view_is_catalog_order() {
        let catalog = catalog();
        let view = compose(
            &catalog,
            &FilterState::new(),
            SortKey::None,
            &Selection::new(),
        );

        assert_eq!(ids(&view), vec![1, 2, 3, 4]);
    }

    #[test]
    fn filter_then_sort_then_pin() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.level = Some("300".to_string());

        // credits-desc alone puts 3 (1.0) before 2 (0.5); pinning 2 wins.
        let selection = Selection::from_ids([2]);
        let view = compose(&catalog, &filter, SortKey::CreditsDesc, &selection);

        assert_eq!(ids(&view), vec![2, 3]);
    }

    #[test]
    fn stable_sort_keeps_catalog_order_on_ties() {
        let catalog = catalog();

        // Courses 1, 3, and 4 share credits = 1.0; their relative order
        // must survive a credits sort.
        let view = compose(
            &catalog,
            &FilterState::new(),
            SortKey::CreditsAsc,
            &Selection::new(),
        );

        assert_eq!(ids(&view), vec![2, 1, 3, 4]);
    }

    #[test]
    fn pinning_preserves_order_within_each_partition() {
        let catalog = catalog();
        let selection = Selection::from_ids([4, 2]);

        let view = compose(
            &catalog,
            &FilterState::new(),
            SortKey::LevelAsc,
            &selection,
        );

        // Sorted order is 1, 4, 2, 3 (levels 100, 200, 300, 300 with the
        // 300s tied in catalog order); selected subsequence [4, 2] floats
        // up intact, unselected [1, 3] follows intact.
        assert_eq!(ids(&view), vec![4, 2, 1, 3]);
    }

    #[test]
    fn composition_is_idempotent_and_toggle_reversible() {
        let catalog = catalog();
        let filter = FilterState::new();
        let mut selection = Selection::from_ids([3]);

        let before = ids(&compose(&catalog, &filter, SortKey::TagGroup, &selection));
        let again = ids(&compose(&catalog, &filter, SortKey::TagGroup, &selection));
        assert_eq!(before, again);

        selection.toggle(1);
        selection.toggle(1);
        let after = ids(&compose(&catalog, &filter, SortKey::TagGroup, &selection));
        assert_eq!(before, after);
    }

    #[test]
    fn selected_ids_missing_from_catalog_do_not_appear() {
        let catalog = catalog();
        let selection = Selection::from_ids([99]);

        let view = compose(&catalog, &FilterState::new(), SortKey::None, &selection);
        assert_eq!(ids(&view), vec![1, 2, 3, 4]);
    }
}
