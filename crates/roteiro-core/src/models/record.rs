//! Itinerary record model and its validated constructor.

use std::sync::OnceLock;

use jiff::civil::{Date, DateTime, Time};
use regex::Regex;
use serde::Serialize;

use super::Category;
use crate::{error::ValidationError, format, params::SubmitTrip};

/// Format every record's date and time are combined with.
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Format of the date as typed and rendered.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Format of the time as typed and rendered.
pub const TIME_FORMAT: &str = "%H:%M";

fn date_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/([0-9]{4})$")
            .expect("date pattern is valid")
    })
}

fn time_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern is valid"))
}

/// Parses `DD/MM/YYYY` and `HH:MM` into the combined sort key.
///
/// Only the calendar check happens here; the shape checks live in
/// [`ItineraryRecord::build`] so both stages stay observable. Years run from
/// 0001 to 9999; year 0000 fits the shape but names no calendar year.
pub fn parse_sort_key(date: &str, time: &str) -> Option<DateTime> {
    DateTime::strptime(DATE_TIME_FORMAT, format!("{date} {time}"))
        .ok()
        .filter(|dt| dt.year() >= 1)
}

/// One planned trip leg.
///
/// Fields are read-only: the sort key and the rendered block are derived
/// when the record is built, and editing a leg means building a new record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItineraryRecord {
    origin: String,
    destination: String,
    category: Category,
    date: Date,
    time: Time,
    notes: String,
    route_info: String,
    sort_key: DateTime,
    rendered_text: String,
}

impl ItineraryRecord {
    /// Validates raw form input and builds a record.
    ///
    /// `route_info` is taken as given; it is normally produced by a
    /// [`crate::route::RouteAnnotator`] before this call.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in order: missing field, unknown
    /// category, malformed date, malformed time, impossible date/time.
    pub fn build(
        input: &SubmitTrip,
        route_info: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let origin = input.origin.trim();
        let destination = input.destination.trim();
        let category = input.category.trim();
        let date_text = input.date.trim();
        let time_text = input.time.trim();
        let notes = input.notes.as_deref().unwrap_or_default().trim();

        for (field, value) in [
            ("origin", origin),
            ("destination", destination),
            ("category", category),
            ("date", date_text),
            ("time", time_text),
        ] {
            if value.is_empty() {
                return Err(ValidationError::MissingField { field });
            }
        }

        let category = category
            .parse::<Category>()
            .map_err(|_| ValidationError::InvalidCategory {
                value: category.to_string(),
            })?;

        if !date_shape().is_match(date_text) {
            return Err(ValidationError::InvalidDate {
                value: date_text.to_string(),
            });
        }
        if !time_shape().is_match(time_text) {
            return Err(ValidationError::InvalidTime {
                value: time_text.to_string(),
            });
        }

        let sort_key =
            parse_sort_key(date_text, time_text).ok_or_else(|| ValidationError::InvalidDateTime {
                value: format!("{date_text} {time_text}"),
            })?;

        let mut record = Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            category,
            date: sort_key.date(),
            time: sort_key.time(),
            notes: notes.to_string(),
            route_info: route_info.into(),
            sort_key,
            rendered_text: String::new(),
        };
        record.rendered_text = format::render(&record);
        Ok(record)
    }

    /// Replaces the route text and re-renders the block.
    pub(crate) fn with_route_info(mut self, route_info: impl Into<String>) -> Self {
        self.route_info = route_info.into();
        self.rendered_text = format::render(&self);
        self
    }

    /// Rebuilds a record from an imported block, keeping its text verbatim.
    pub(crate) fn from_block(fields: ImportedFields, sort_key: DateTime, block: &str) -> Self {
        Self {
            origin: fields.origin,
            destination: fields.destination,
            category: fields.category,
            date: sort_key.date(),
            time: sort_key.time(),
            notes: fields.notes,
            route_info: fields.route_info,
            sort_key,
            rendered_text: block.to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Distance and duration text, a failure placeholder, or empty when no
    /// lookup was made.
    pub fn route_info(&self) -> &str {
        &self.route_info
    }

    /// Combined date and time the store orders by.
    pub fn sort_key(&self) -> DateTime {
        self.sort_key
    }

    /// Canonical multi-line block used for display and export.
    pub fn rendered_text(&self) -> &str {
        &self.rendered_text
    }

    /// Date as typed in the form (`DD/MM/YYYY`).
    pub fn date_text(&self) -> String {
        self.date.strftime(DATE_FORMAT).to_string()
    }

    /// Time as typed in the form (`HH:MM`).
    pub fn time_text(&self) -> String {
        self.time.strftime(TIME_FORMAT).to_string()
    }

    /// Form input that reproduces this record, used to prefill an edit.
    pub fn to_submit(&self) -> SubmitTrip {
        SubmitTrip {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            category: self.category.label().to_string(),
            date: self.date_text(),
            time: self.time_text(),
            notes: (!self.notes.is_empty()).then(|| self.notes.clone()),
        }
    }
}

/// Typed fields recovered from an imported block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ImportedFields {
    pub origin: String,
    pub destination: String,
    pub category: Category,
    pub notes: String,
    pub route_info: String,
}
