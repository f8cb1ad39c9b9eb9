use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlaceCommands, TripCommands};

/// Plan a trip one leg at a time
///
/// Roteiro keeps an itinerary of trip legs (origin, destination, activity
/// type, date and time) in chronological order, annotates each leg with
/// driving distance and duration, and saves the itinerary as plain text.
/// Origins and destinations can be completed from a catalog of places.
#[derive(Parser)]
#[command(version, about, name = "roteiro")]
pub struct Args {
    /// Path to the SQLite place catalog. Defaults to
    /// $XDG_DATA_HOME/roteiro/catalog.db
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Itinerary file loaded at start and saved after changes. Defaults to
    /// $XDG_DATA_HOME/roteiro/itinerary.txt
    #[arg(long, global = true)]
    pub itinerary_file: Option<PathBuf>,

    /// Google Maps API key used for distance and duration lookups
    #[arg(long, global = true, env = "ROTEIRO_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Travel mode for distance and duration lookups
    #[arg(
        long,
        global = true,
        default_value = "driving",
        value_parser = ["driving", "walking", "bicycling", "transit"]
    )]
    pub travel_mode: String,

    /// Skip distance and duration lookups
    #[arg(long, global = true)]
    pub no_route: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Roteiro CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the legs of the itinerary
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage the place catalog used for suggestions
    #[command(alias = "p")]
    Place {
        #[command(subcommand)]
        command: PlaceCommands,
    },
}
