//! Shared helpers for the grid commands
//!
//! Resolves the catalog path and turns CLI flags into the engine's value
//! objects (filter state, sort key, selection).

use crate::args::ViewArgs;
use course_grid::config::Config;
use course_grid::core::filter::FilterState;
use course_grid::core::models::{Attribute, Catalog};
use course_grid::core::selection::Selection;
use course_grid::core::sort::SortKey;
use std::path::{Path, PathBuf};

/// The loaded session inputs for one command invocation
pub struct Session {
    /// The loaded catalog
    pub catalog: Catalog,
    /// Filter state built from CLI flags
    pub filter: FilterState,
    /// Sort key built from CLI flags
    pub sort: SortKey,
    /// Selection built from CLI flags
    pub selection: Selection,
}

/// Resolve the catalog path: explicit argument first, then config
///
/// # Errors
/// Returns an error if neither the argument nor config names a catalog.
pub fn resolve_catalog_path(arg: Option<&Path>, config: &Config) -> Result<PathBuf, String> {
    if let Some(path) = arg {
        return Ok(path.to_path_buf());
    }
    if config.paths.catalog.is_empty() {
        return Err(
            "✗ No catalog given: pass a CATALOG argument or set the `catalog` config key"
                .to_string(),
        );
    }
    Ok(PathBuf::from(&config.paths.catalog))
}

/// Build the filter state from CLI flags
///
/// # Errors
/// Returns an error naming the offending value if a tag is not one of the
/// six known attributes.
pub fn build_filter(view: &ViewArgs) -> Result<FilterState, String> {
    let mut tags = Vec::with_capacity(view.tags.len());
    for raw in &view.tags {
        let tag: Attribute = raw.parse().map_err(|e| {
            format!(
                "✗ {e} (expected one of: {})",
                Attribute::ALL.map(Attribute::as_str).join(", ")
            )
        })?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    Ok(FilterState {
        search: view.search.clone().unwrap_or_default(),
        tags,
        level: view.level.clone(),
        credits: view.credits,
        department: view.department.clone(),
    })
}

/// Load the catalog and assemble the session inputs from CLI flags
///
/// # Errors
/// Returns an error if the catalog cannot be resolved or loaded, or if a
/// tag flag is invalid.
pub fn load_session(view: &ViewArgs, config: &Config) -> Result<Session, String> {
    let catalog_path = resolve_catalog_path(view.catalog.as_deref(), config)?;
    let catalog = Catalog::load(&catalog_path).map_err(|e| format!("✗ {e}"))?;

    let filter = build_filter(view)?;
    let sort = view.sort.as_deref().map(SortKey::parse).unwrap_or_default();
    let selection = Selection::from_ids(view.select.iter().copied());

    Ok(Session {
        catalog,
        filter,
        sort,
        selection,
    })
}
