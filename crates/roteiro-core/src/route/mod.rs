//! Distance and duration lookups for trip legs.
//!
//! A [`RouteAnnotator`] answers "how far, and how long" for an origin and
//! destination. The core calls it once per submitted leg and never lets it
//! fail a submission: [`annotate`] turns every outcome into the text stored
//! in the record.

mod client;
mod error;

use std::fmt;

use log::warn;

pub use client::{DirectionsConfig, GoogleDirections};
pub use error::RouteError;

/// Route text stored when the service finds no route.
pub const ROUTE_NOT_FOUND: &str = "Rota não encontrada.";

/// Prefix of the route text stored when the lookup fails.
pub const ROUTE_ERROR_PREFIX: &str = "Erro ao calcular rota: ";

/// Human-readable distance and duration of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub distance: String,
    pub duration: String,
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distância - {}", self.distance)?;
        write!(f, "Duração - {}", self.duration)
    }
}

/// Source of route summaries.
#[allow(async_fn_in_trait)]
pub trait RouteAnnotator {
    /// Looks up the route between two places.
    ///
    /// `Ok(None)` means the service answered but knows no route.
    async fn route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Option<RouteSummary>, RouteError>;
}

/// Looks up a route and renders the outcome as record route text.
pub async fn annotate<R: RouteAnnotator>(annotator: &R, origin: &str, destination: &str) -> String {
    match annotator.route(origin, destination).await {
        Ok(Some(summary)) => summary.to_string(),
        Ok(None) => ROUTE_NOT_FOUND.to_string(),
        Err(e) => {
            warn!("Route lookup from {origin:?} to {destination:?} failed: {e}");
            format!("{ROUTE_ERROR_PREFIX}{e}")
        }
    }
}
