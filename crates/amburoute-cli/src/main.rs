mod backend;
mod emergency;
mod session;
mod store;
mod views;

use amburoute_core::Coordinate;
use amburoute_osm::NominatimClient;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::backend::BackendClient;
use crate::emergency::{run_emergency, EmergencyRequest};
use crate::store::LocalStore;

#[derive(Debug, Parser)]
#[command(name = "amburoute")]
#[command(about = "Ambulance driver console: find and rank nearby emergency hospitals")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Record the driver at the wheel
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long = "ambulance-no")]
        ambulance_no: String,
    },
    /// Clear the stored driver session
    Logout,
    /// Show the logged-in driver
    Dashboard,
    /// Find and rank hospitals around the ambulance
    Emergency {
        /// Current latitude in decimal degrees
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Current longitude in decimal degrees
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
        /// Rank the bundled hospital list without calling the backend
        #[arg(long)]
        offline: bool,
        /// Look up a place name for the current position
        #[arg(long)]
        place: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = amburoute_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let store = LocalStore::new(config.session_dir.clone());
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Login {
            name,
            phone,
            ambulance_no,
        }) => {
            let driver = session::login(&store, &name, &phone, &ambulance_no)?;
            println!("logged in as {} ({})", driver.name, driver.ambulance_no);
        }
        Some(Commands::Logout) => {
            if session::logout(&store)? {
                println!("logged out");
            } else {
                println!("no driver was logged in");
            }
        }
        Some(Commands::Dashboard) => match session::current_driver(&store)? {
            Some(driver) => println!("{}", views::render_dashboard(&driver)),
            None => println!("{}", views::NOT_LOGGED_IN),
        },
        Some(Commands::Emergency {
            lat,
            lng,
            offline,
            place,
        }) => {
            let Some(driver) = session::current_driver(&store)? else {
                println!("{}", views::NOT_LOGGED_IN);
                return Ok(());
            };

            let position = match (lat, lng) {
                (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)?),
                _ => None,
            };

            let backend = BackendClient::new(
                &config.api_url,
                config.request_timeout_secs,
                &config.user_agent,
            )?;
            let geocoder = if place {
                Some(NominatimClient::new(
                    &config.nominatim_url,
                    config.request_timeout_secs,
                    &config.user_agent,
                )?)
            } else {
                None
            };

            let request = EmergencyRequest {
                position,
                offline,
                describe_place: place,
            };
            let view = run_emergency(request, &backend, geocoder.as_ref()).await;
            println!("{}", views::render_emergency(&driver, &view));
        }
        None => println!("amburoute: run `amburoute --help` for commands"),
    }

    Ok(())
}
