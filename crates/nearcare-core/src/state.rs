//! Screen state and its reducer.
//!
//! All mutation goes through [`ScreenState::update`], one [`Message`] per
//! transition. I/O is never performed here: the reducer returns an
//! [`Effect`] for the driver to run, and the driver feeds the outcome back
//! in as the next message.

use crate::aggregator::AggregateFetchFailed;
use crate::category::FilterSelection;
use crate::location::LocationError;
use crate::types::{Coordinates, NearbyResults, TaggedRecord};

/// A blocking, user-visible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum Message {
    /// The screen was opened.
    Started,
    LocationResolved(Coordinates),
    LocationFailed(LocationError),
    FetchSucceeded(NearbyResults),
    FetchFailed(AggregateFetchFailed),
    FilterChanged(FilterSelection),
    /// The user chose a record; carries its booking identifier.
    BookRequested(String),
}

/// Work requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ResolveLocation,
    FetchNearby {
        coordinates: Coordinates,
        radius_km: f64,
    },
    ShowNotice(Notice),
    /// Hand control to the booking flow. The outcome is not reported back.
    OpenBooking { booking_id: String },
}

#[derive(Debug, Clone)]
pub struct ScreenState {
    loading: bool,
    radius_km: f64,
    coordinates: Option<Coordinates>,
    results: NearbyResults,
    filter: FilterSelection,
}

impl ScreenState {
    #[must_use]
    pub fn new(radius_km: f64) -> Self {
        Self {
            loading: false,
            radius_km,
            coordinates: None,
            results: NearbyResults::default(),
            filter: FilterSelection::default(),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    #[must_use]
    pub fn results(&self) -> &NearbyResults {
        &self.results
    }

    #[must_use]
    pub fn filter(&self) -> FilterSelection {
        self.filter
    }

    /// Records visible under the active filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&TaggedRecord> {
        self.results.select(self.filter)
    }

    /// Applies `message` and returns the follow-up effect, if any.
    pub fn update(&mut self, message: Message) -> Option<Effect> {
        match message {
            Message::Started => {
                self.loading = true;
                Some(Effect::ResolveLocation)
            }
            Message::LocationResolved(coordinates) => {
                self.coordinates = Some(coordinates);
                Some(Effect::FetchNearby {
                    coordinates,
                    radius_km: self.radius_km,
                })
            }
            Message::LocationFailed(err) => {
                self.loading = false;
                let title = match err {
                    LocationError::PermissionDenied => "Location permission denied",
                    LocationError::LocationUnavailable(_) => "Location unavailable",
                };
                Some(Effect::ShowNotice(Notice {
                    title,
                    message: err.to_string(),
                }))
            }
            Message::FetchSucceeded(results) => {
                self.results = results;
                self.loading = false;
                None
            }
            Message::FetchFailed(err) => {
                self.results = NearbyResults::default();
                self.loading = false;
                Some(Effect::ShowNotice(Notice {
                    title: "Could not load nearby providers",
                    message: err.to_string(),
                }))
            }
            Message::FilterChanged(filter) => {
                self.filter = filter;
                None
            }
            Message::BookRequested(booking_id) => Some(Effect::OpenBooking { booking_id }),
        }
    }
}
