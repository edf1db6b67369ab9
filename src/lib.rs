//! Shared library for `course-grid`
//! Contains the catalog browsing engine used by the CLI.

pub mod core;

pub use self::core::config;
