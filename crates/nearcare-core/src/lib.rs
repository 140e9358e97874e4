pub mod aggregator;
pub mod app_config;
pub mod category;
pub mod config;
pub mod error;
pub mod filter;
pub mod geo;
pub mod location;
pub mod screen;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_support;

pub use aggregator::{fetch_nearby, AggregateFetchFailed, DirectoryService, ProfessionalKind};
pub use app_config::{AppConfig, Environment};
pub use category::{Category, FilterSelection};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use filter::select;
pub use location::{
    LocationError, LocationResolver, Permission, PositionError, PositioningService,
    StaticPositioning,
};
pub use screen::{BookingFlow, NearbyScreen};
pub use state::{Effect, Message, Notice, ScreenState};
pub use types::{Coordinates, NearbyResults, ProfessionalRecord, TaggedRecord};
