//! High-level session API for building an itinerary.
//!
//! A [`TripPlanner`] is one editing session. It owns the chronological
//! [`ItineraryStore`] with its edit selection, the [`SuggestionIndex`] built
//! from the place catalog when the session starts, and an optional
//! [`RouteAnnotator`] consulted once per submitted leg.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   trip_ops      │    │  ItineraryStore │    │     format      │
//! │   file_ops      │───▶│ SuggestionIndex │───▶│ (blocks, files) │
//! │   place_ops     │    │  Catalog (db)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    Session actions        Session state         Text rendering
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`TripPlanner`] instances
//! - [`trip_ops`]: Submit, edit, select, remove and clear trip legs
//! - [`file_ops`]: Import and export itinerary files
//! - [`place_ops`]: Place catalog operations
//!
//! Itineraries are never written to the catalog database; they survive a
//! session only through [`TripPlanner::export_file`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use roteiro_core::{params::SubmitTrip, TripPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = TripPlannerBuilder::new()
//!     .with_catalog_path(Some("catalog.db"))
//!     .build()
//!     .await?;
//!
//! planner
//!     .submit(&SubmitTrip {
//!         origin: "Lisboa".to_string(),
//!         destination: "Porto".to_string(),
//!         category: "Cultural".to_string(),
//!         date: "15/08/2025".to_string(),
//!         time: "09:30".to_string(),
//!         notes: None,
//!     })
//!     .await?;
//! println!("{}", planner.listing());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::{
    models::ItineraryRecord,
    route::{GoogleDirections, RouteAnnotator},
    store::ItineraryStore,
    suggest::SuggestionIndex,
};

pub mod builder;
pub mod file_ops;
pub mod place_ops;
pub mod trip_ops;


pub use builder::TripPlannerBuilder;

/// Main session interface for managing an itinerary.
pub struct TripPlanner<R = GoogleDirections> {
    pub(crate) catalog_path: PathBuf,
    pub(crate) store: ItineraryStore,
    pub(crate) suggestions: SuggestionIndex,
    pub(crate) router: Option<R>,
}

impl<R: RouteAnnotator> TripPlanner<R> {
    /// Creates a session over an already opened catalog.
    pub(crate) fn new(catalog_path: PathBuf, suggestions: SuggestionIndex, router: Option<R>) -> Self {
        Self {
            catalog_path,
            store: ItineraryStore::new(),
            suggestions,
            router,
        }
    }

    /// Records in chronological order.
    pub fn records(&self) -> &[ItineraryRecord] {
        self.store.all()
    }

    /// Whether submitted legs get a route lookup.
    pub fn has_router(&self) -> bool {
        self.router.is_some()
    }
}

/// Result of submitting a trip leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// The record as stored
    pub record: ItineraryRecord,
    /// The record it overwrote, when the submission was an edit
    pub replaced: Option<ItineraryRecord>,
}

/// What a session found in its itinerary file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadedItinerary {
    /// Legs read into the session
    pub loaded: usize,
    /// Blocks left out because they had no valid date and time
    pub skipped: usize,
}
