//! `nearby` command: resolve location, load providers, print the filtered list.

use std::fmt::Write as _;

use anyhow::{bail, Context};
use nearcare_core::{
    AppConfig, Coordinates, FilterSelection, LocationResolver, NearbyScreen, StaticPositioning,
    TaggedRecord,
};
use nearcare_directory::DirectoryClient;

use crate::booking::TerminalBooking;

pub(crate) struct NearbyArgs {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub filter: FilterSelection,
    pub deny_location: bool,
    pub book: Option<String>,
}

pub(crate) async fn run(config: &AppConfig, args: NearbyArgs) -> anyhow::Result<()> {
    let positioning = if args.deny_location {
        StaticPositioning::denied()
    } else {
        let coordinates = match (args.lat, args.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)?),
            _ => None,
        };
        StaticPositioning::new(coordinates)
    };

    let mut client = DirectoryClient::new(
        &config.directory_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build directory client")?;
    if let Some(token) = &config.api_token {
        client = client.with_api_token(token.clone());
    }

    let mut screen = NearbyScreen::new(
        LocationResolver::new(positioning),
        client,
        TerminalBooking,
        config.search_radius_km,
    );

    if let Some(notice) = screen.start().await.into_iter().next() {
        bail!("{}: {}", notice.title, notice.message);
    }
    screen.change_filter(args.filter).await;

    let origin = screen.state().coordinates();
    let visible = screen.state().visible();
    if visible.is_empty() {
        println!(
            "No {} found within {} km.",
            args.filter,
            screen.state().radius_km()
        );
    }
    for tagged in &visible {
        println!("{}", render_line(tagged, origin.as_ref()));
    }

    if let Some(booking_id) = args.book {
        let listed = visible
            .iter()
            .any(|t| t.record.booking_target() == booking_id);
        if !listed {
            bail!("no listed provider has booking id '{booking_id}'");
        }
        screen.book(booking_id).await;
    }

    Ok(())
}

/// One output line per record: label, name, specialization and distance when
/// known, then the booking id.
fn render_line(tagged: &TaggedRecord, origin: Option<&Coordinates>) -> String {
    // Writing into a `String` cannot fail.
    let mut line = format!("{:<10} {}", tagged.category.label(), tagged.record.name);
    if let Some(specialization) = &tagged.record.specialization {
        let _ = write!(line, " ({specialization})");
    }
    if let Some(km) = origin.and_then(|o| tagged.distance_km(o)) {
        let _ = write!(line, ", {km:.1} km");
    }
    let _ = write!(line, "  [book: {}]", tagged.record.booking_target());
    line
}
