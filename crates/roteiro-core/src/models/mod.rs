//! Data models for itinerary records and catalog places.
//!
//! Records are typed values; the text block shown to the user and written to
//! export files is derived from them by [`crate::format`]. Display
//! implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use roteiro_core::{models::ItineraryRecord, params::SubmitTrip};
//!
//! let input = SubmitTrip {
//!     origin: "Lisboa".to_string(),
//!     destination: "Porto".to_string(),
//!     category: "Cultural".to_string(),
//!     date: "15/08/2025".to_string(),
//!     time: "09:30".to_string(),
//!     notes: None,
//! };
//! let record = ItineraryRecord::build(&input, "").unwrap();
//! assert!(record.rendered_text().starts_with("📍 De Lisboa até Porto"));
//! ```

pub mod category;
pub mod place;
pub mod record;

#[cfg(test)]
mod tests;

pub use category::Category;
pub use place::Place;
pub use record::ItineraryRecord;
