//! Result wrapper types for displaying operation outcomes.
//!
//! Legs have no IDs; the wrappers for legs name the 1-based position shown
//! in listings.

use std::fmt;

use crate::models::{ItineraryRecord, Place};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use roteiro_core::{display::CreateResult, models::ItineraryRecord, params::SubmitTrip};
///
/// let record = ItineraryRecord::build(
///     &SubmitTrip {
///         origin: "Lisboa".to_string(),
///         destination: "Sintra".to_string(),
///         category: "Cultural".to_string(),
///         date: "01/09/2025".to_string(),
///         time: "10:00".to_string(),
///         notes: None,
///     },
///     "",
/// )
/// .unwrap();
///
/// let result = CreateResult::new(record);
/// assert!(result.to_string().starts_with("Added trip from Lisboa to Sintra"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<ItineraryRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added trip from {} to {}",
            self.resource.origin(),
            self.resource.destination()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Place> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added place with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can list the fields that changed, providing users with clear
/// feedback about what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl UpdateResult<ItineraryRecord> {
    /// Lists the fields that differ between a leg and its replacement.
    pub fn between(before: &ItineraryRecord, after: ItineraryRecord) -> Self {
        let mut changes = Vec::new();
        let fields = [
            ("origin", before.origin().to_string(), after.origin().to_string()),
            (
                "destination",
                before.destination().to_string(),
                after.destination().to_string(),
            ),
            (
                "category",
                before.category().to_string(),
                after.category().to_string(),
            ),
            ("date", before.date_text(), after.date_text()),
            ("time", before.time_text(), after.time_text()),
            ("notes", before.notes().to_string(), after.notes().to_string()),
        ];
        for (field, old, new) in fields {
            if old != new {
                changes.push(format!("{field}: {old:?} → {new:?}"));
            }
        }
        Self::with_changes(after, changes)
    }
}

impl fmt::Display for UpdateResult<ItineraryRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Updated trip from {} to {}",
            self.resource.origin(),
            self.resource.destination()
        )?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<ItineraryRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed trip from {} to {} on {} at {}",
            self.resource.origin(),
            self.resource.destination(),
            self.resource.date_text(),
            self.resource.time_text()
        )
    }
}

impl fmt::Display for DeleteResult<Place> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Removed place '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Category, params::SubmitTrip};

    fn record(destination: &str, time: &str) -> ItineraryRecord {
        ItineraryRecord::build(
            &SubmitTrip {
                origin: "Lisboa".to_string(),
                destination: destination.to_string(),
                category: "Cultural".to_string(),
                date: "15/08/2025".to_string(),
                time: time.to_string(),
                notes: None,
            },
            "",
        )
        .expect("valid record")
    }

    #[test]
    fn test_create_result_display() {
        let output = CreateResult::new(record("Porto", "09:30")).to_string();
        assert!(output.starts_with("Added trip from Lisboa to Porto\n\n📍 De Lisboa até Porto"));

        let place = Place {
            id: 7,
            name: "Castelo de São Jorge".to_string(),
            address: None,
            city: None,
            kind: Category::Cultural,
        };
        assert!(CreateResult::new(place)
            .to_string()
            .starts_with("Added place with ID: 7"));
    }

    #[test]
    fn test_update_result_lists_changes() {
        let before = record("Porto", "09:30");
        let result = UpdateResult::between(&before, record("Coimbra", "09:30"));

        assert_eq!(result.changes, vec![r#"destination: "Porto" → "Coimbra""#]);
        let output = result.to_string();
        assert!(output.contains("Changes made:"));
        assert!(output.contains("📍 De Lisboa até Coimbra"));

        let unchanged = UpdateResult::between(&before, before.clone());
        assert!(unchanged.changes.is_empty());
        assert!(!unchanged.to_string().contains("Changes made:"));
    }

    #[test]
    fn test_delete_result_display() {
        assert_eq!(
            DeleteResult::new(record("Porto", "09:30")).to_string(),
            "Removed trip from Lisboa to Porto on 15/08/2025 at 09:30\n"
        );
    }
}
