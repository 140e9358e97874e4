//! Drives a [`ScreenState`] by running the effects its reducer emits.

use crate::aggregator::{fetch_nearby, DirectoryService};
use crate::category::FilterSelection;
use crate::location::{LocationResolver, PositioningService};
use crate::state::{Effect, Message, Notice, ScreenState};

/// Entry point of the external booking flow.
pub trait BookingFlow {
    /// Takes over with the chosen record's booking identifier.
    fn open(&self, booking_id: &str);
}

/// The nearby-providers screen: one location resolution, one aggregate
/// fetch, and any number of filter changes over the fetched data.
pub struct NearbyScreen<P, D, B> {
    resolver: LocationResolver<P>,
    directory: D,
    booking: B,
    state: ScreenState,
}

impl<P, D, B> NearbyScreen<P, D, B>
where
    P: PositioningService,
    D: DirectoryService,
    B: BookingFlow,
{
    pub fn new(resolver: LocationResolver<P>, directory: D, booking: B, radius_km: f64) -> Self {
        Self {
            resolver,
            directory,
            booking,
            state: ScreenState::new(radius_km),
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Resolves the location and loads the three category sets. Returns the
    /// blocking notices raised along the way; the loading flag is always
    /// cleared when this returns.
    pub async fn start(&mut self) -> Vec<Notice> {
        self.dispatch(Message::Started).await
    }

    pub async fn change_filter(&mut self, filter: FilterSelection) {
        self.dispatch(Message::FilterChanged(filter)).await;
    }

    pub async fn book(&mut self, booking_id: impl Into<String>) {
        let message = Message::BookRequested(booking_id.into());
        self.dispatch(message).await;
    }

    async fn dispatch(&mut self, message: Message) -> Vec<Notice> {
        let mut notices = Vec::new();
        let mut pending = self.state.update(message);

        while let Some(effect) = pending {
            pending = match effect {
                Effect::ResolveLocation => {
                    let message = match self.resolver.resolve().await {
                        Ok(coordinates) => Message::LocationResolved(coordinates),
                        Err(e) => Message::LocationFailed(e),
                    };
                    self.state.update(message)
                }
                Effect::FetchNearby {
                    coordinates,
                    radius_km,
                } => {
                    let fetched = fetch_nearby(&self.directory, coordinates, radius_km).await;
                    let message = match fetched {
                        Ok(results) => Message::FetchSucceeded(results),
                        Err(e) => Message::FetchFailed(e),
                    };
                    self.state.update(message)
                }
                Effect::ShowNotice(notice) => {
                    tracing::warn!(
                        title = notice.title,
                        message = %notice.message,
                        "blocking notice"
                    );
                    notices.push(notice);
                    None
                }
                Effect::OpenBooking { booking_id } => {
                    tracing::info!(booking_id = %booking_id, "handing off to booking flow");
                    self.booking.open(&booking_id);
                    None
                }
            };
        }

        notices
    }
}
