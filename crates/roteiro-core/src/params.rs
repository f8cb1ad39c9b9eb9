//! Parameter structures for itinerary operations
//!
//! These structures carry raw user input between interfaces and the core
//! without framework-specific derives. Interface layers (the CLI) define their
//! own argument types and convert into these with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  TripPlanner    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Field values are kept as typed text: validation happens when a record is
//! built, so every interface reports the same errors.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{error::ValidationError, models::ItineraryRecord};

/// Raw form input for one trip leg.
///
/// Used both to create a new leg and, combined with a selection, to replace
/// an existing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitTrip {
    /// Where the leg starts (required)
    pub origin: String,
    /// Where the leg ends (required)
    pub destination: String,
    /// Activity type label, e.g. `Cultural` or `Desportiva` (required)
    pub category: String,
    /// Date as `DD/MM/YYYY` (required)
    pub date: String,
    /// Time as `HH:MM`, 24 hour clock (required)
    pub time: String,
    /// Free-form notes
    pub notes: Option<String>,
}

impl SubmitTrip {
    /// Validates this input into a record carrying `route_info`.
    pub fn build_record(
        &self,
        route_info: impl Into<String>,
    ) -> Result<ItineraryRecord, ValidationError> {
        ItineraryRecord::build(self, route_info)
    }
}

/// Parameters for editing the leg at a given position.
///
/// Unset fields keep the value of the selected record, the way the trip form
/// is prefilled when a leg is clicked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditTrip {
    /// 0-based position of the leg in chronological order
    pub index: usize,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    /// New notes; an empty string clears them
    pub notes: Option<String>,
}

impl EditTrip {
    /// Overlays the provided fields on the selected record's form values.
    pub fn merge_onto(&self, selected: &ItineraryRecord) -> SubmitTrip {
        let base = selected.to_submit();
        SubmitTrip {
            origin: self.origin.clone().unwrap_or(base.origin),
            destination: self.destination.clone().unwrap_or(base.destination),
            category: self.category.clone().unwrap_or(base.category),
            date: self.date.clone().unwrap_or(base.date),
            time: self.time.clone().unwrap_or(base.time),
            notes: self.notes.clone().or(base.notes),
        }
    }
}

/// Generic parameters for operations requiring just a position.
///
/// Used for operations like show_trip and remove_trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Index {
    /// 0-based position of the leg in chronological order
    pub index: usize,
}

/// Parameters for clearing the whole itinerary.
///
/// Requires explicit confirmation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearTrips {
    /// Must be true to proceed with clearing
    pub confirmed: bool,
}

/// Parameters for importing or exporting an itinerary file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItineraryFile {
    /// Path of the text file
    pub path: PathBuf,
}

/// Parameters for querying location suggestions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suggest {
    /// Text typed so far; empty lists every known location
    pub query: String,
}

/// Parameters for adding a place to the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPlace {
    /// Name of the place (required)
    pub name: String,
    /// Street address
    pub address: Option<String>,
    /// City the place is in
    pub city: Option<String>,
    /// Activity type label (required)
    pub kind: String,
}

/// Parameters for removing a place from the catalog.
///
/// Requires explicit confirmation to prevent accidental deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemovePlace {
    /// The ID of the place to remove
    pub id: u64,
    /// Must be true to proceed with removal
    pub confirmed: bool,
}
