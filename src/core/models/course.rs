//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a course in the catalog
///
/// Identity is the numeric `id`, unique across the catalog and stable for
/// the catalog lifetime. Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course id (e.g., 109)
    pub id: u32,

    /// Course name (e.g., "Introduction to Computing and Programming")
    pub name: String,

    /// Catalog description text
    pub description: String,

    /// Department code (e.g., "DCS")
    pub department: String,

    /// Credit value (can be fractional; observed values are 1 and 0.5)
    pub credits: f32,

    /// Course level: "100", "200", "300", or "Short" for short-term courses.
    /// Any other value is tolerated and sorts after the known tiers.
    pub level: String,

    /// Computer science 1 attribute
    pub cs1: bool,
    /// Computer science 2 attribute
    pub cs2: bool,
    /// Data structures, algorithms, and visualization attribute
    pub dsav: bool,
    /// Critical digital studies attribute
    pub cds: bool,
    /// Human-centered design attribute
    pub hcd: bool,
    /// Community-engaged learning attribute
    pub cel: bool,
}

impl Course {
    /// Create a new course with no attribute flags set
    ///
    /// # Arguments
    /// * `id` - Unique course id
    /// * `name` - Full course name
    /// * `description` - Catalog description
    /// * `department` - Department code
    /// * `credits` - Credit value (can be fractional)
    /// * `level` - Course level string
    #[must_use]
    pub const fn new(
        id: u32,
        name: String,
        description: String,
        department: String,
        credits: f32,
        level: String,
    ) -> Self {
        Self {
            id,
            name,
            description,
            department,
            credits,
            cs1: false,
            cs2: false,
            dsav: false,
            cds: false,
            hcd: false,
            cel: false,
            level,
        }
    }

    /// Set the given attribute flags, consuming and returning the course
    #[must_use]
    pub fn with_attributes(mut self, attributes: &[Attribute]) -> Self {
        for attribute in attributes {
            match attribute {
                Attribute::Cs1 => self.cs1 = true,
                Attribute::Cs2 => self.cs2 = true,
                Attribute::Dsav => self.dsav = true,
                Attribute::Cds => self.cds = true,
                Attribute::Hcd => self.hcd = true,
                Attribute::Cel => self.cel = true,
            }
        }
        self
    }

    /// Whether this course carries the given attribute
    #[must_use]
    pub const fn has(&self, attribute: Attribute) -> bool {
        attribute.of(self)
    }

    /// All attributes this course carries, in declaration order
    #[must_use]
    pub fn attributes(&self) -> Vec<Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(|attribute| attribute.of(self))
            .collect()
    }
}

/// The six course attribute flags
///
/// Courses carry zero or more attributes; they drive both tag filtering and
/// degree attribute coverage. Access goes through [`Attribute::of`] so the
/// flag set stays a closed, statically enumerated vocabulary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Computer science 1
    Cs1,
    /// Computer science 2
    Cs2,
    /// Data structures, algorithms, and visualization
    Dsav,
    /// Critical digital studies
    Cds,
    /// Human-centered design
    Hcd,
    /// Community-engaged learning
    Cel,
}

impl Attribute {
    /// All attributes in declaration order (the filter vocabulary)
    pub const ALL: [Self; 6] = [
        Self::Cs1,
        Self::Cs2,
        Self::Dsav,
        Self::Cds,
        Self::Hcd,
        Self::Cel,
    ];

    /// Fixed priority order used by tag-group sorting
    pub const TAG_PRIORITY: [Self; 6] = [
        Self::Cs1,
        Self::Cs2,
        Self::Cds,
        Self::Cel,
        Self::Dsav,
        Self::Hcd,
    ];

    /// The attributes counted by degree attribute coverage
    pub const COVERAGE: [Self; 4] = [Self::Dsav, Self::Cds, Self::Hcd, Self::Cel];

    /// Read this attribute's flag on a course
    #[must_use]
    pub const fn of(self, course: &Course) -> bool {
        match self {
            Self::Cs1 => course.cs1,
            Self::Cs2 => course.cs2,
            Self::Dsav => course.dsav,
            Self::Cds => course.cds,
            Self::Hcd => course.hcd,
            Self::Cel => course.cel,
        }
    }

    /// Lowercase name as it appears in catalog data and filter input
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cs1 => "cs1",
            Self::Cs2 => "cs2",
            Self::Dsav => "dsav",
            Self::Cds => "cds",
            Self::Hcd => "hcd",
            Self::Cel => "cel",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cs1" => Ok(Self::Cs1),
            "cs2" => Ok(Self::Cs2),
            "dsav" => Ok(Self::Dsav),
            "cds" => Ok(Self::Cds),
            "hcd" => Ok(Self::Hcd),
            "cel" => Ok(Self::Cel),
            _ => Err(format!("Unknown attribute: '{s}'")),
        }
    }
}
