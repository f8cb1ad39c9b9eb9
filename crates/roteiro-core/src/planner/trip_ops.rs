//! Trip leg operations for the TripPlanner.

use log::{debug, info};

use super::{SubmitOutcome, TripPlanner};
use crate::{
    display::Listing,
    error::{Result, RoteiroError},
    format,
    models::ItineraryRecord,
    params::{ClearTrips, EditTrip, Index, SubmitTrip, Suggest},
    route::{annotate, RouteAnnotator},
    store::UpsertOutcome,
    suggest::SuggestionIndex,
};

impl<R: RouteAnnotator> TripPlanner<R> {
    /// Validates form input and stores it.
    ///
    /// With a leg selected the selected leg is replaced, otherwise a new leg
    /// is added. The route is looked up after validation succeeds; a failed
    /// lookup is stored as text and never rejects the submission. The
    /// selection is cleared either way once the record is stored.
    ///
    /// # Errors
    ///
    /// Returns `RoteiroError::Validation` and stores nothing if the input is
    /// rejected.
    pub async fn submit(&mut self, params: &SubmitTrip) -> Result<SubmitOutcome> {
        let record = params.build_record("")?;

        let record = match &self.router {
            Some(router) => {
                let route_info = annotate(router, record.origin(), record.destination()).await;
                record.with_route_info(route_info)
            }
            None => record,
        };

        let outcome = self.store.upsert(record.clone());
        let replaced = match outcome {
            UpsertOutcome::Created => {
                info!("Added trip from {} to {}", record.origin(), record.destination());
                None
            }
            UpsertOutcome::Updated { replaced } => {
                info!("Updated trip from {} to {}", record.origin(), record.destination());
                Some(*replaced)
            }
        };
        Ok(SubmitOutcome { record, replaced })
    }

    /// Replaces the leg at `params.index`, keeping any field not given.
    ///
    /// # Errors
    ///
    /// Returns `RoteiroError::IndexOutOfRange` for a bad position and
    /// `RoteiroError::Validation` for rejected input; in both cases the
    /// store is unchanged and nothing stays selected.
    pub async fn edit(&mut self, params: &EditTrip) -> Result<SubmitOutcome> {
        let input = params.merge_onto(self.store.select(params.index)?);
        let result = self.submit(&input).await;
        if result.is_err() {
            self.store.deselect();
        }
        result
    }

    /// Selects a leg so the next submission replaces it.
    pub fn select(&mut self, params: &Index) -> Result<&ItineraryRecord> {
        self.store.select(params.index)
    }

    /// Drops the selection so the next submission adds a new leg.
    pub fn deselect(&mut self) {
        self.store.deselect();
    }

    /// Position of the selected leg, if any.
    pub fn selected(&self) -> Option<usize> {
        self.store.selected()
    }

    /// Returns the leg at a position.
    pub fn get(&self, params: &Index) -> Result<&ItineraryRecord> {
        self.store.get(params.index).ok_or(RoteiroError::IndexOutOfRange {
            index: params.index,
            len: self.store.len(),
        })
    }

    /// Removes a single leg.
    pub fn remove(&mut self, params: &Index) -> Result<ItineraryRecord> {
        let removed = self.store.remove(params.index)?;
        info!("Removed trip from {} to {}", removed.origin(), removed.destination());
        Ok(removed)
    }

    /// Removes every leg. Requires explicit confirmation.
    ///
    /// Returns the number of legs removed.
    pub fn clear(&mut self, params: &ClearTrips) -> Result<usize> {
        if !params.confirmed {
            return Err(RoteiroError::ConfirmationRequired {
                action: "clear the itinerary".to_string(),
            });
        }
        let count = self.store.len();
        self.store.delete_all();
        info!("Cleared {count} trips");
        Ok(count)
    }

    /// Location names matching the typed text.
    pub fn suggest(&self, params: &Suggest) -> Vec<&str> {
        let matches = self.suggestions.query(&params.query);
        debug!("{} suggestions for {:?}", matches.len(), params.query);
        matches
    }

    /// The suggestion index built when the session started.
    pub fn suggestions(&self) -> &SuggestionIndex {
        &self.suggestions
    }

    /// Finds the leg a displayed line of text belongs to.
    pub fn locate(&self, clicked_line: &str) -> Option<usize> {
        format::locate_record(clicked_line, self.store.all())
    }

    /// Renders all legs for display, with a line-to-leg map.
    pub fn listing(&self) -> Listing<'_> {
        Listing::new(self.store.all())
    }
}
