//! Core module: the catalog browsing engine and its host surfaces

pub mod compose;
pub mod config;
pub mod export;
pub mod filter;
pub mod models;
pub mod progress;
pub mod report;
pub mod selection;
pub mod sort;

/// Returns the current version of the `course-grid` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
