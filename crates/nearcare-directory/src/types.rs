//! Directory service response envelope.

use nearcare_core::ProfessionalRecord;
use serde::Deserialize;

/// Every lookup endpoint wraps its records as `{ "data": [ ... ] }`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope {
    pub data: Vec<ProfessionalRecord>,
}
