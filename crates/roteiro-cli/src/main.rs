//! Roteiro CLI Application
//!
//! Command-line interface for the roteiro trip itinerary planner.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use commands::Cli;
use log::{info, warn};
use renderer::TerminalRenderer;
use roteiro_core::{
    default_itinerary_path, DirectionsConfig, GoogleDirections, TripPlannerBuilder,
};
use Commands::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        itinerary_file,
        api_key,
        travel_mode,
        no_route,
        no_color,
        command,
    } = Args::parse();

    let mut builder = TripPlannerBuilder::new().with_catalog_path(catalog_file);
    match api_key.filter(|_| !no_route) {
        Some(key) => match GoogleDirections::new(
            DirectionsConfig::new(key).with_mode(travel_mode),
        ) {
            Ok(router) => builder = builder.with_route_annotator(router),
            Err(e) => warn!("Route lookups disabled: {e}"),
        },
        None => info!("No Maps API key given; legs are stored without routes"),
    }
    let mut planner = builder
        .build()
        .await
        .context("Failed to initialize planner")?;

    let itinerary_path = match itinerary_file {
        Some(path) => path,
        None => default_itinerary_path().context("Failed to locate itinerary file")?,
    };
    let loaded = planner
        .load_or_start(&itinerary_path)
        .with_context(|| format!("Failed to load {}", itinerary_path.display()))?;

    info!(
        "Roteiro started with {} trips from {}",
        loaded.loaded,
        itinerary_path.display()
    );
    if loaded.skipped > 0 {
        warn!(
            "{} blocks in {} have no valid date and time",
            loaded.skipped,
            itinerary_path.display()
        );
    }

    let cli = Cli::new(
        planner,
        TerminalRenderer::new(!no_color),
        itinerary_path,
        loaded.skipped,
    );
    match command {
        Some(Trip { command }) => cli.handle_trip_command(command).await,
        Some(Place { command }) => cli.handle_place_command(command).await,
        None => {
            cli.list_trips();
            Ok(())
        }
    }
}
