//! Core library for the Roteiro trip itinerary planner.
//!
//! This crate validates trip legs typed into a form, keeps them in
//! chronological order, renders each one as a text block, and reads those
//! blocks back from itinerary files. Location suggestions come from a small
//! SQLite catalog of places, and each submitted leg can be annotated with
//! distance and duration by a [`RouteAnnotator`].
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): A leg renders to its block once, when it
//!   is built; places implement [`std::fmt::Display`] directly
//! - **Text Format** ([`format`]): The block layout shared by display and
//!   itinerary files
//! - **Display Wrappers** ([`display`]): Listings with line lookup and
//!   operation results
//!
//! # Quick Start
//!
//! ```rust
//! use roteiro_core::{params::SubmitTrip, TripPlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = TripPlannerBuilder::new()
//!     .with_catalog_path(Some("catalog.db"))
//!     .build()
//!     .await?;
//!
//! let outcome = planner
//!     .submit(&SubmitTrip {
//!         origin: "Lisboa".to_string(),
//!         destination: "Porto".to_string(),
//!         category: "Gastronómica".to_string(),
//!         date: "15/08/2025".to_string(),
//!         time: "09:30".to_string(),
//!         notes: Some("francesinha".to_string()),
//!     })
//!     .await?;
//! println!("{}", outcome.record);
//!
//! let listing = planner.listing();
//! assert_eq!(listing.record_at_line(1), Some(0));
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod format;
pub mod models;
pub mod params;
pub mod planner;
pub mod route;
pub mod store;
pub mod suggest;

// Re-export commonly used types
pub use catalog::Catalog;
pub use display::{CreateResult, DeleteResult, Listing, OperationStatus, Places, UpdateResult};
pub use error::{Result, RoteiroError, ValidationError};
pub use models::{Category, ItineraryRecord, Place};
pub use params::{
    AddPlace, ClearTrips, EditTrip, Index, ItineraryFile, RemovePlace, SubmitTrip, Suggest,
};
pub use planner::{
    builder::{default_catalog_path, default_itinerary_path},
    LoadedItinerary, SubmitOutcome, TripPlanner, TripPlannerBuilder,
};
pub use route::{DirectionsConfig, GoogleDirections, RouteAnnotator, RouteError, RouteSummary};
pub use store::{ItineraryStore, UpsertOutcome};
pub use suggest::SuggestionIndex;
