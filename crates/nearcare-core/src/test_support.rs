//! In-memory fakes shared by the unit tests in this crate.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;

use crate::aggregator::{DirectoryService, ProfessionalKind};
use crate::category::Category;
use crate::types::{Coordinates, ProfessionalRecord};

#[derive(Debug, Clone, thiserror::Error)]
#[error("directory unavailable: {0}")]
pub(crate) struct FakeError(pub String);

type Response = Result<Vec<ProfessionalRecord>, FakeError>;

/// A directory whose per-category responses, delays and gates are set by
/// the test. Slots are indexed doctor, nurse, ambulance.
pub(crate) struct FakeDirectory {
    responses: [Response; 3],
    delays: [Duration; 3],
    gates: [Option<Arc<Notify>>; 3],
    calls: [AtomicU32; 3],
    queries: Mutex<Vec<(Category, Coordinates, f64)>>,
}

fn slot(category: Category) -> usize {
    match category {
        Category::Doctor => 0,
        Category::Nurse => 1,
        Category::Ambulance => 2,
    }
}

impl FakeDirectory {
    pub(crate) fn new(
        doctors: Vec<ProfessionalRecord>,
        nurses: Vec<ProfessionalRecord>,
        ambulances: Vec<ProfessionalRecord>,
    ) -> Self {
        Self {
            responses: [Ok(doctors), Ok(nurses), Ok(ambulances)],
            delays: [Duration::ZERO; 3],
            gates: [None, None, None],
            calls: [AtomicU32::new(0), AtomicU32::new(0), AtomicU32::new(0)],
            queries: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    pub(crate) fn failing(mut self, category: Category, message: &str) -> Self {
        self.responses[slot(category)] = Err(FakeError(message.to_string()));
        self
    }

    pub(crate) fn delayed(mut self, category: Category, delay: Duration) -> Self {
        self.delays[slot(category)] = delay;
        self
    }

    /// Holds the lookup for `category` until the returned handle is notified.
    pub(crate) fn gated(mut self, category: Category) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gates[slot(category)] = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub(crate) fn calls(&self, category: Category) -> u32 {
        self.calls[slot(category)].load(Ordering::SeqCst)
    }

    pub(crate) fn total_calls(&self) -> u32 {
        Category::ALL.into_iter().map(|c| self.calls(c)).sum()
    }

    pub(crate) fn queries(&self) -> Vec<(Category, Coordinates, f64)> {
        self.queries.lock().expect("query log poisoned").clone()
    }

    async fn respond(
        &self,
        category: Category,
        coordinates: Coordinates,
        radius_km: f64,
    ) -> Response {
        let i = slot(category);
        self.calls[i].fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .expect("query log poisoned")
            .push((category, coordinates, radius_km));

        if !self.delays[i].is_zero() {
            tokio::time::sleep(self.delays[i]).await;
        }
        if let Some(gate) = &self.gates[i] {
            gate.notified().await;
        }
        self.responses[i].clone()
    }
}

impl DirectoryService for FakeDirectory {
    type Error = FakeError;

    async fn nearby_professionals(
        &self,
        kind: ProfessionalKind,
        coordinates: Coordinates,
        radius_km: f64,
    ) -> Result<Vec<ProfessionalRecord>, FakeError> {
        self.respond(kind.category(), coordinates, radius_km).await
    }

    async fn nearby_ambulances(
        &self,
        coordinates: Coordinates,
        radius_km: f64,
    ) -> Result<Vec<ProfessionalRecord>, FakeError> {
        self.respond(Category::Ambulance, coordinates, radius_km)
            .await
    }
}

pub(crate) fn record(id: &str) -> ProfessionalRecord {
    ProfessionalRecord {
        id: id.to_string(),
        name: format!("name-{id}"),
        specialization: None,
        booking_id: None,
        latitude: None,
        longitude: None,
    }
}

pub(crate) fn here() -> Coordinates {
    Coordinates::new(12.34, 56.78).expect("valid coordinates")
}
