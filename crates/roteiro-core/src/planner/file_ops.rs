//! Itinerary file import and export for the TripPlanner.

use std::{fs, path::Path};

use log::info;

use super::{LoadedItinerary, TripPlanner};
use crate::{
    error::{Result, RoteiroError},
    format,
    params::ItineraryFile,
    route::RouteAnnotator,
};

impl<R: RouteAnnotator> TripPlanner<R> {
    /// Replaces every leg with the ones read from an itinerary file.
    ///
    /// Blocks without a valid date and time are skipped. Returns the number
    /// of legs imported.
    ///
    /// # Errors
    ///
    /// Returns `RoteiroError::FileSystem` if the file cannot be read; the
    /// current legs are kept.
    pub fn import_file(&mut self, params: &ItineraryFile) -> Result<usize> {
        Ok(self.read_itinerary(&params.path)?.loaded)
    }

    fn read_itinerary(&mut self, path: &Path) -> Result<LoadedItinerary> {
        let text = fs::read_to_string(path).map_err(|e| RoteiroError::file_system(path, e))?;
        let parsed = format::parse_itinerary(&text);
        let loaded = LoadedItinerary {
            loaded: parsed.records.len(),
            skipped: parsed.skipped,
        };
        self.store.replace_all(parsed.records);
        info!(
            "Imported {} trips from {} ({} blocks skipped)",
            loaded.loaded,
            path.display(),
            loaded.skipped
        );
        Ok(loaded)
    }

    /// Writes every leg to an itinerary file, creating parent directories as
    /// needed. Returns the number of legs written.
    ///
    /// # Errors
    ///
    /// Returns `RoteiroError::FileSystem` if the file cannot be written.
    pub fn export_file(&self, params: &ItineraryFile) -> Result<usize> {
        if let Some(parent) = params.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RoteiroError::file_system(parent, e))?;
        }
        fs::write(&params.path, format::serialize_all(self.store.all()))
            .map_err(|e| RoteiroError::file_system(&params.path, e))?;
        info!(
            "Exported {} trips to {}",
            self.store.len(),
            params.path.display()
        );
        Ok(self.store.len())
    }

    /// Imports `path` if it exists; a missing file starts an empty session.
    ///
    /// The result reports how many blocks could not be read, so callers can
    /// avoid writing the session back over them.
    pub fn load_or_start(&mut self, path: &Path) -> Result<LoadedItinerary> {
        if !path.exists() {
            return Ok(LoadedItinerary::default());
        }
        self.read_itinerary(path)
    }
}
