//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::Place;

/// Newtype wrapper for displaying the place catalog.
///
/// # Examples
///
/// ```rust
/// use roteiro_core::{
///     display::Places,
///     models::{Category, Place},
/// };
///
/// let places = Places(vec![Place {
///     id: 1,
///     name: "Torre de Belém".to_string(),
///     address: None,
///     city: Some("Lisboa".to_string()),
///     kind: Category::Cultural,
/// }]);
/// assert!(places.to_string().contains("Torre de Belém"));
/// ```
pub struct Places(pub Vec<Place>);

impl Places {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of places in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the places.
    pub fn iter(&self) -> std::slice::Iter<'_, Place> {
        self.0.iter()
    }
}

impl Index<usize> for Places {
    type Output = Place;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Places {
    type Item = Place;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Places {
    type Item = &'a Place;
    type IntoIter = std::slice::Iter<'a, Place>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Places {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No places in the catalog.")
        } else {
            for place in &self.0 {
                write!(f, "{place}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn place(id: u64, name: &str) -> Place {
        Place {
            id,
            name: name.to_string(),
            address: None,
            city: Some("Faro".to_string()),
            kind: Category::Other,
        }
    }

    #[test]
    fn test_places_display() {
        let places = Places(vec![place(1, "Ria Formosa"), place(2, "Ilha Deserta")]);
        let output = places.to_string();

        assert!(output.contains("### 1. Ria Formosa (Outro)"));
        assert!(output.contains("### 2. Ilha Deserta (Outro)"));
        assert_eq!(places.len(), 2);
        assert_eq!(places[1].name, "Ilha Deserta");
    }

    #[test]
    fn test_places_display_empty() {
        let places = Places(vec![]);
        assert!(places.is_empty());
        assert_eq!(places.to_string(), "No places in the catalog.\n");
    }
}
