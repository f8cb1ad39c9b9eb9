//! Place catalog operations for the TripPlanner.
//!
//! The catalog is only read when a session starts; places added here show up
//! in suggestions from the next session on.

use tokio::task;

use super::TripPlanner;
use crate::{
    catalog::Catalog,
    error::{Result, RoteiroError},
    models::{Category, Place},
    params::{AddPlace, RemovePlace},
    route::RouteAnnotator,
};

impl<R: RouteAnnotator> TripPlanner<R> {
    /// Runs `op` against a fresh catalog connection on the blocking pool.
    async fn with_catalog<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Catalog) -> Result<T> + Send + 'static,
    {
        let catalog_path = self.catalog_path.clone();
        task::spawn_blocking(move || {
            let mut catalog = Catalog::new(&catalog_path)?;
            op(&mut catalog)
        })
        .await
        .map_err(|e| RoteiroError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Adds a place to the catalog.
    pub async fn add_place(&self, params: &AddPlace) -> Result<Place> {
        let kind = params.kind.parse::<Category>().map_err(|reason| {
            RoteiroError::invalid_input("kind").with_reason(reason)
        })?;
        let AddPlace {
            name,
            address,
            city,
            ..
        } = params.clone();

        self.with_catalog(move |catalog| {
            catalog.add_place(&name, address.as_deref(), city.as_deref(), kind)
        })
        .await
    }

    /// Lists every place in the catalog.
    pub async fn list_places(&self) -> Result<Vec<Place>> {
        self.with_catalog(|catalog| catalog.list_places()).await
    }

    /// Permanently removes a place. Requires explicit confirmation.
    ///
    /// Returns the removed place.
    pub async fn remove_place(&self, params: &RemovePlace) -> Result<Place> {
        if !params.confirmed {
            return Err(RoteiroError::ConfirmationRequired {
                action: format!("remove place {}", params.id),
            });
        }
        let id = params.id;
        self.with_catalog(move |catalog| {
            let place = catalog
                .get_place(id)?
                .ok_or(RoteiroError::PlaceNotFound { id })?;
            catalog.remove_place(id)?;
            Ok(place)
        })
        .await
    }

    /// Adds the sample attractions. Returns the catalog size afterwards.
    pub async fn seed_places(&self) -> Result<usize> {
        self.with_catalog(|catalog| catalog.seed_sample_places()).await
    }
}
