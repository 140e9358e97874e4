use serde::{Deserialize, Serialize};

use crate::category::{Category, FilterSelection};
use crate::error::CoreError;
use crate::filter::select;
use crate::geo::haversine_km;

/// A validated latitude/longitude pair in decimal degrees.
///
/// Fields are private so a value cannot change after
/// [`Coordinates::new`] has checked it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinates`] if either component is not
    /// finite or falls outside `[-90, 90]` / `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        let invalid = |reason| CoreError::InvalidCoordinates {
            latitude,
            longitude,
            reason,
        };
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(invalid("components must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in kilometres.
    #[must_use]
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        haversine_km(self, other)
    }
}

/// A directory entry as returned by the external directory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Doctors' specialty; nurses and ambulances usually omit it.
    #[serde(default)]
    pub specialization: Option<String>,
    /// Opaque identifier for the booking flow. Falls back to `id` when absent.
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl ProfessionalRecord {
    /// The identifier handed to the booking flow.
    #[must_use]
    pub fn booking_target(&self) -> &str {
        self.booking_id.as_deref().unwrap_or(&self.id)
    }

    /// The record's position, if the service supplied a valid one.
    #[must_use]
    pub fn position(&self) -> Option<Coordinates> {
        Coordinates::new(self.latitude?, self.longitude?).ok()
    }
}

/// A record paired with the category of the lookup that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedRecord {
    pub record: ProfessionalRecord,
    pub category: Category,
}

impl TaggedRecord {
    /// Distance from `origin`, or `None` when the record has no position.
    #[must_use]
    pub fn distance_km(&self, origin: &Coordinates) -> Option<f64> {
        self.record.position().map(|p| origin.distance_km(&p))
    }
}

/// The three category sets produced by one aggregate fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NearbyResults {
    pub doctors: Vec<TaggedRecord>,
    pub nurses: Vec<TaggedRecord>,
    pub ambulances: Vec<TaggedRecord>,
}

impl NearbyResults {
    /// Records visible under `filter`, in display order.
    #[must_use]
    pub fn select(&self, filter: FilterSelection) -> Vec<&TaggedRecord> {
        select(&self.doctors, &self.nurses, &self.ambulances, filter)
    }

    #[must_use]
    pub fn for_category(&self, category: Category) -> &[TaggedRecord] {
        match category {
            Category::Doctor => &self.doctors,
            Category::Nurse => &self.nurses,
            Category::Ambulance => &self.ambulances,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.doctors.len() + self.nurses.len() + self.ambulances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
