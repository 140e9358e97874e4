//! Concurrent, fail-fast retrieval of nearby doctors, nurses and ambulances.
//!
//! [`fetch_nearby`] issues the three directory lookups on the calling task
//! and joins them. The aggregate resolves only once all three succeed; the
//! first failure rejects it and the other results are discarded, so callers
//! never see a partial set. Records are tagged with the category of the
//! lookup that produced them. Nothing is cached between calls.

use std::future::Future;

use futures::future::try_join3;
use thiserror::Error;

use crate::category::Category;
use crate::types::{Coordinates, NearbyResults, ProfessionalRecord, TaggedRecord};

/// Search radius used when none is configured.
pub const DEFAULT_RADIUS_KM: f64 = 15.0;

/// Categories served by the directory's professionals endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfessionalKind {
    Doctor,
    Nurse,
}

impl ProfessionalKind {
    /// Value of the `category` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProfessionalKind::Doctor => "doctor",
            ProfessionalKind::Nurse => "nurse",
        }
    }

    #[must_use]
    pub fn category(self) -> Category {
        match self {
            ProfessionalKind::Doctor => Category::Doctor,
            ProfessionalKind::Nurse => Category::Nurse,
        }
    }
}

/// External directory of nearby care providers.
pub trait DirectoryService {
    type Error: std::error::Error + Send + Sync + 'static;

    fn nearby_professionals(
        &self,
        kind: ProfessionalKind,
        coordinates: Coordinates,
        radius_km: f64,
    ) -> impl Future<Output = Result<Vec<ProfessionalRecord>, Self::Error>> + Send;

    fn nearby_ambulances(
        &self,
        coordinates: Coordinates,
        radius_km: f64,
    ) -> impl Future<Output = Result<Vec<ProfessionalRecord>, Self::Error>> + Send;
}

/// One of the three lookups failed; no category data is available.
#[derive(Debug, Error)]
#[error("failed to fetch nearby {category} records: {source}")]
pub struct AggregateFetchFailed {
    /// The lookup whose failure rejected the aggregate.
    pub category: Category,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

/// Fetches all three categories around `coordinates` concurrently.
///
/// # Errors
///
/// Returns [`AggregateFetchFailed`] as soon as any lookup fails.
pub async fn fetch_nearby<D: DirectoryService>(
    directory: &D,
    coordinates: Coordinates,
    radius_km: f64,
) -> Result<NearbyResults, AggregateFetchFailed> {
    let doctors = tagged(
        Category::Doctor,
        directory.nearby_professionals(ProfessionalKind::Doctor, coordinates, radius_km),
    );
    let nurses = tagged(
        Category::Nurse,
        directory.nearby_professionals(ProfessionalKind::Nurse, coordinates, radius_km),
    );
    let ambulances = tagged(
        Category::Ambulance,
        directory.nearby_ambulances(coordinates, radius_km),
    );

    let (doctors, nurses, ambulances) = try_join3(doctors, nurses, ambulances)
        .await
        .inspect_err(|e| {
            tracing::warn!(category = %e.category, error = %e.source, "nearby lookup failed");
        })?;

    tracing::debug!(
        radius_km,
        doctors = doctors.len(),
        nurses = nurses.len(),
        ambulances = ambulances.len(),
        "fetched nearby providers"
    );

    Ok(NearbyResults {
        doctors,
        nurses,
        ambulances,
    })
}

async fn tagged<F, E>(
    category: Category,
    lookup: F,
) -> Result<Vec<TaggedRecord>, AggregateFetchFailed>
where
    F: Future<Output = Result<Vec<ProfessionalRecord>, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    let records = lookup.await.map_err(|e| AggregateFetchFailed {
        category,
        source: Box::new(e),
    })?;
    Ok(records
        .into_iter()
        .map(|record| TaggedRecord { record, category })
        .collect())
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
