//! Catalog place model.

use serde::{Deserialize, Serialize};

use super::Category;

/// A known attraction whose name feeds the location suggestions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Place {
    /// Unique identifier for the place
    pub id: u64,

    /// Display name, offered as an origin or destination suggestion
    pub name: String,

    /// Street address
    pub address: Option<String>,

    /// City the place is in
    pub city: Option<String>,

    /// Kind of activity the place is known for
    pub kind: Category,
}
