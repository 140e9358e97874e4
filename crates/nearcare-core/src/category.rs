//! Professional categories and the view filter selection.
//!
//! [`Category`] is attached to every record at merge time; the directory
//! service never returns it. Presentation attributes (label, accent) live in
//! one capability table here instead of being branched on at call sites.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The kind of nearby provider a record was fetched as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Doctor,
    Nurse,
    Ambulance,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Doctor, Category::Nurse, Category::Ambulance];

    /// Wire name, e.g. `"doctor"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Doctor => "doctor",
            Category::Nurse => "nurse",
            Category::Ambulance => "ambulance",
        }
    }

    /// Human-readable label shown next to each record.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Doctor => "Doctor",
            Category::Nurse => "Nurse",
            Category::Ambulance => "Ambulance",
        }
    }

    /// Stable accent identifier a renderer maps to its own palette.
    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Category::Doctor => "accent-doctor",
            Category::Nurse => "accent-nurse",
            Category::Ambulance => "accent-ambulance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which fetched sets are included in the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterSelection {
    #[default]
    All,
    Doctors,
    Nurses,
    Ambulances,
}

impl FilterSelection {
    /// Returns `true` if records of `category` pass this filter.
    #[must_use]
    pub fn includes(self, category: Category) -> bool {
        matches!(
            (self, category),
            (FilterSelection::All, _)
                | (FilterSelection::Doctors, Category::Doctor)
                | (FilterSelection::Nurses, Category::Nurse)
                | (FilterSelection::Ambulances, Category::Ambulance)
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterSelection::All => "all",
            FilterSelection::Doctors => "doctors",
            FilterSelection::Nurses => "nurses",
            FilterSelection::Ambulances => "ambulances",
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterSelection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterSelection::All),
            "doctors" => Ok(FilterSelection::Doctors),
            "nurses" => Ok(FilterSelection::Nurses),
            "ambulances" => Ok(FilterSelection::Ambulances),
            _ => Err(CoreError::UnknownFilter(s.to_string())),
        }
    }
}
