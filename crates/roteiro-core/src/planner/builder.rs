//! Builder for creating and configuring TripPlanner instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::TripPlanner;
use crate::{
    catalog::Catalog,
    error::{Result, RoteiroError},
    route::{GoogleDirections, RouteAnnotator},
    suggest::SuggestionIndex,
};

const APP_PREFIX: &str = "roteiro";

/// Builder for creating and configuring TripPlanner instances.
#[derive(Debug, Clone)]
pub struct TripPlannerBuilder<R = GoogleDirections> {
    catalog_path: Option<PathBuf>,
    router: Option<R>,
}

impl TripPlannerBuilder<GoogleDirections> {
    /// Creates a new builder with default settings and no route lookups.
    pub fn new() -> Self {
        Self {
            catalog_path: None,
            router: None,
        }
    }
}

impl<R: RouteAnnotator> TripPlannerBuilder<R> {
    /// Sets a custom catalog database path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/roteiro/catalog.db` or
    /// `~/.local/share/roteiro/catalog.db`
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Looks up distance and duration with `router` for every submitted leg.
    pub fn with_route_annotator<A: RouteAnnotator>(self, router: A) -> TripPlannerBuilder<A> {
        TripPlannerBuilder {
            catalog_path: self.catalog_path,
            router: Some(router),
        }
    }

    /// Builds the configured planner and its suggestion index.
    ///
    /// # Errors
    ///
    /// Returns `RoteiroError::FileSystem` if the catalog directory cannot be
    /// created, `RoteiroError::XdgDirectory` if no default path can be
    /// resolved and `RoteiroError::Database` if the catalog cannot be opened.
    pub async fn build(self) -> Result<TripPlanner<R>> {
        let catalog_path = match self.catalog_path {
            Some(path) => path,
            None => default_catalog_path()?,
        };

        if let Some(parent) = catalog_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| RoteiroError::file_system(parent, e))?;
        }

        let path = catalog_path.clone();
        let names = task::spawn_blocking(move || Catalog::new(&path)?.place_names())
            .await
            .map_err(|e| RoteiroError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        let suggestions = SuggestionIndex::build(names);
        debug!(
            "Loaded {} location suggestions from {}",
            suggestions.len(),
            catalog_path.display()
        );

        Ok(TripPlanner::new(catalog_path, suggestions, self.router))
    }
}

impl Default for TripPlannerBuilder<GoogleDirections> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the default catalog path following the XDG Base Directory
/// specification.
pub fn default_catalog_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(APP_PREFIX)
        .place_data_file("catalog.db")
        .map_err(|e| RoteiroError::XdgDirectory(e.to_string()))
}

/// Returns the default working itinerary file following the XDG Base
/// Directory specification.
pub fn default_itinerary_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(APP_PREFIX)
        .place_data_file("itinerary.txt")
        .map_err(|e| RoteiroError::XdgDirectory(e.to_string()))
}
