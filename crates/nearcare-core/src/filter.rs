//! View filter over already-fetched category sets.

use crate::category::{Category, FilterSelection};
use crate::types::TaggedRecord;

/// Selects the records visible under `filter`.
///
/// With [`FilterSelection::All`] the result is doctors, then nurses, then
/// ambulances, each in the order the directory returned them. A single
/// category filter returns only that set. Nothing is deduplicated or
/// re-sorted; empty inputs yield an empty list.
#[must_use]
pub fn select<'a>(
    doctors: &'a [TaggedRecord],
    nurses: &'a [TaggedRecord],
    ambulances: &'a [TaggedRecord],
    filter: FilterSelection,
) -> Vec<&'a TaggedRecord> {
    [
        (Category::Doctor, doctors),
        (Category::Nurse, nurses),
        (Category::Ambulance, ambulances),
    ]
    .into_iter()
    .filter(|(category, _)| filter.includes(*category))
    .flat_map(|(_, set)| set.iter())
    .collect()
}
