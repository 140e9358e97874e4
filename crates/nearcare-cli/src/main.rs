mod booking;
mod nearby;

use clap::{Parser, Subcommand};
use nearcare_core::FilterSelection;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nearcare-cli")]
#[command(about = "Find doctors, nurses, and ambulances near you")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List nearby doctors, nurses, and ambulances
    Nearby {
        /// Current latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        /// Current longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,

        /// Which categories to show: all, doctors, nurses, ambulances
        #[arg(long, default_value = "all")]
        filter: FilterSelection,

        /// Decline the location permission prompt
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        deny_location: bool,

        /// Book the listed provider with this booking id
        #[arg(long, value_name = "BOOKING_ID")]
        book: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = nearcare_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Nearby {
            lat,
            lon,
            filter,
            deny_location,
            book,
        } => {
            let args = nearby::NearbyArgs {
                lat,
                lon,
                filter,
                deny_location,
                book,
            };
            nearby::run(&config, args).await
        }
    }
}
