//! Command-line argument definitions using clap
//!
//! Each argument struct carries clap-specific attributes and converts into a
//! core parameter type with `From`, keeping clap out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripPlanner
//! ```
//!
//! Leg positions are 1-based here, matching what `trip list` shows, and
//! 0-based in the core. The conversions do the shift.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, Subcommand};
use roteiro_core::params::{
    AddPlace, ClearTrips, EditTrip, Index, ItineraryFile, RemovePlace, SubmitTrip, Suggest,
};

const CATEGORY_HELP: &str =
    "Activity type: Cultural, Desportiva, Gastronómica or Outro (English names also work)";

fn to_index(position: NonZeroUsize) -> usize {
    position.get() - 1
}

/// Add a leg to the itinerary
///
/// The leg is placed by date and time. When a Google Maps API key is
/// configured the driving distance and duration are looked up and stored
/// with the leg.
#[derive(Args)]
pub struct AddTripArgs {
    /// Where the leg starts
    pub origin: String,
    /// Where the leg ends
    pub destination: String,
    #[arg(short, long, help = CATEGORY_HELP)]
    pub category: String,
    #[arg(short, long, help = "Departure date as DD/MM/YYYY")]
    pub date: String,
    #[arg(short, long, help = "Departure time as HH:MM (24 hour clock)")]
    pub time: String,
    #[arg(short, long, help = "Free-form notes shown under the leg")]
    pub notes: Option<String>,
}

impl From<AddTripArgs> for SubmitTrip {
    fn from(val: AddTripArgs) -> Self {
        SubmitTrip {
            origin: val.origin,
            destination: val.destination,
            category: val.category,
            date: val.date,
            time: val.time,
            notes: val.notes,
        }
    }
}

/// Change a leg
///
/// Fields not given keep their current value. The route is looked up again
/// and the leg moves if its date or time changed.
#[derive(Args)]
pub struct EditTripArgs {
    #[arg(help = "Position of the leg as shown by `trip list`")]
    pub position: NonZeroUsize,
    #[arg(long, help = "New origin")]
    pub origin: Option<String>,
    #[arg(long, help = "New destination")]
    pub destination: Option<String>,
    #[arg(short, long, help = CATEGORY_HELP)]
    pub category: Option<String>,
    #[arg(short, long, help = "New date as DD/MM/YYYY")]
    pub date: Option<String>,
    #[arg(short, long, help = "New time as HH:MM")]
    pub time: Option<String>,
    #[arg(short, long, help = "New notes")]
    pub notes: Option<String>,
}

impl From<EditTripArgs> for EditTrip {
    fn from(val: EditTripArgs) -> Self {
        EditTrip {
            index: to_index(val.position),
            origin: val.origin,
            destination: val.destination,
            category: val.category,
            date: val.date,
            time: val.time,
            notes: val.notes,
        }
    }
}

/// Show a single leg
#[derive(Args)]
pub struct ShowTripArgs {
    #[arg(help = "Position of the leg as shown by `trip list`")]
    pub position: NonZeroUsize,
}

impl From<ShowTripArgs> for Index {
    fn from(val: ShowTripArgs) -> Self {
        Index {
            index: to_index(val.position),
        }
    }
}

/// Remove a single leg
#[derive(Args)]
pub struct RemoveTripArgs {
    #[arg(help = "Position of the leg to remove")]
    pub position: NonZeroUsize,
}

impl From<RemoveTripArgs> for Index {
    fn from(val: RemoveTripArgs) -> Self {
        Index {
            index: to_index(val.position),
        }
    }
}

/// Find the leg a line of `trip list` output belongs to
#[derive(Args)]
pub struct AtLineArgs {
    #[arg(help = "Line number from the left margin of `trip list`")]
    pub line: NonZeroUsize,
}

/// Remove every leg
#[derive(Args)]
pub struct ClearTripsArgs {
    /// Confirm the removal (required to prevent accidental loss)
    #[arg(long)]
    pub confirm: bool,
}

impl From<ClearTripsArgs> for ClearTrips {
    fn from(val: ClearTripsArgs) -> Self {
        ClearTrips {
            confirmed: val.confirm,
        }
    }
}

/// Read or write an itinerary text file
#[derive(Args)]
pub struct ItineraryFileArgs {
    #[arg(help = "Path of the itinerary text file")]
    pub path: PathBuf,
}

impl From<ItineraryFileArgs> for ItineraryFile {
    fn from(val: ItineraryFileArgs) -> Self {
        ItineraryFile { path: val.path }
    }
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Add a leg to the itinerary
    #[command(alias = "a")]
    Add(AddTripArgs),
    /// Change a leg, keeping fields that are not given
    #[command(alias = "e")]
    Edit(EditTripArgs),
    /// List every leg with line numbers
    #[command(alias = "ls")]
    List,
    /// Show a single leg
    #[command(alias = "s")]
    Show(ShowTripArgs),
    /// Find the leg a listed line belongs to
    AtLine(AtLineArgs),
    /// Remove a single leg
    #[command(alias = "rm")]
    Remove(RemoveTripArgs),
    /// Remove every leg
    Clear(ClearTripsArgs),
    /// Write the itinerary to a text file
    Export(ItineraryFileArgs),
    /// Replace the itinerary with the legs in a text file
    Import(ItineraryFileArgs),
}

impl TripCommands {
    /// Whether the command changes legs read from the itinerary file.
    ///
    /// `import` replaces them wholesale and is not counted.
    pub fn rewrites_itinerary(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Edit(_) | Self::Remove(_) | Self::Clear(_)
        )
    }
}

/// Add a place to the catalog
#[derive(Args)]
pub struct AddPlaceArgs {
    /// Name offered as a suggestion
    pub name: String,
    #[arg(long, help = "Street address")]
    pub address: Option<String>,
    #[arg(long, help = "City the place is in")]
    pub city: Option<String>,
    #[arg(long, default_value = "Outro", help = CATEGORY_HELP)]
    pub kind: String,
}

impl From<AddPlaceArgs> for AddPlace {
    fn from(val: AddPlaceArgs) -> Self {
        AddPlace {
            name: val.name,
            address: val.address,
            city: val.city,
            kind: val.kind,
        }
    }
}

/// Remove a place from the catalog permanently
#[derive(Args)]
pub struct RemovePlaceArgs {
    #[arg(help = "ID of the place, as shown by `place list`")]
    pub id: u64,
    /// Confirm the removal (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<RemovePlaceArgs> for RemovePlace {
    fn from(val: RemovePlaceArgs) -> Self {
        RemovePlace {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Suggest place names
///
/// Matches anywhere in the name, ignoring case. Without a query every name
/// is listed.
#[derive(Args)]
pub struct SuggestArgs {
    #[arg(help = "Text typed so far")]
    pub query: Option<String>,
}

impl From<SuggestArgs> for Suggest {
    fn from(val: SuggestArgs) -> Self {
        Suggest {
            query: val.query.unwrap_or_default(),
        }
    }
}

#[derive(Subcommand)]
pub enum PlaceCommands {
    /// List every place in the catalog
    #[command(alias = "ls")]
    List,
    /// Add a place to the catalog
    #[command(alias = "a")]
    Add(AddPlaceArgs),
    /// Remove a place from the catalog
    #[command(alias = "rm")]
    Remove(RemovePlaceArgs),
    /// Add the built-in sample attractions
    Seed,
    /// Suggest place names for an origin or destination
    Suggest(SuggestArgs),
}
