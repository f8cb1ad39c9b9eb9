//! Display formatting for itinerary legs, places and operation results.
//!
//! Itinerary legs already carry their rendered block, so displaying a leg is
//! printing that block. The types here add what an interface needs around
//! it: a [`Listing`] of every leg that remembers which displayed line belongs
//! to which leg, collection wrappers, and wrappers for operation results.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Listing, Places │    │   Formatted     │
//! │ (Record, Place) │───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`listing`]: The full itinerary with its line-to-leg map ([`Listing`])
//! - [`collections`]: Collection wrapper types ([`Places`])
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use roteiro_core::{display::OperationStatus, display::Places};
//!
//! let empty = Places(vec![]);
//! assert_eq!(format!("{empty}"), "No places in the catalog.\n");
//!
//! let status = OperationStatus::success("Cleared 3 trips".to_string());
//! assert_eq!(format!("{status}"), "Success: Cleared 3 trips\n");
//! ```

pub mod collections;
pub mod listing;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Places;
pub use listing::Listing;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
