//! Display implementations for domain models.
//!
//! A leg displays as its rendered block, exactly as it is exported. Places
//! display as markdown for the terminal renderer.

use std::fmt;

use crate::models::{ItineraryRecord, Place};

impl fmt::Display for ItineraryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rendered_text())
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", self.id, self.name, self.kind)?;

        match (&self.address, &self.city) {
            (Some(address), _) => writeln!(f, "- {address}")?,
            (None, Some(city)) => writeln!(f, "- {city}")?,
            (None, None) => {}
        }

        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Category, params::SubmitTrip};

    #[test]
    fn test_record_displays_its_block() {
        let record = ItineraryRecord::build(
            &SubmitTrip {
                origin: "Lisboa".to_string(),
                destination: "Porto".to_string(),
                category: "Desportiva".to_string(),
                date: "15/08/2025".to_string(),
                time: "09:30".to_string(),
                notes: None,
            },
            "",
        )
        .expect("valid record");

        assert_eq!(record.to_string(), record.rendered_text());
    }

    #[test]
    fn test_place_display() {
        let mut place = Place {
            id: 3,
            name: "Mercado do Bolhão".to_string(),
            address: Some("Rua Formosa 214, 4000-214 Porto, Portugal".to_string()),
            city: Some("Porto".to_string()),
            kind: Category::Gastronomic,
        };
        assert_eq!(
            place.to_string(),
            "### 3. Mercado do Bolhão (Gastronómica)\n- Rua Formosa 214, 4000-214 Porto, Portugal\n\n"
        );

        place.address = None;
        assert!(place.to_string().contains("- Porto\n"));

        place.city = None;
        assert_eq!(place.to_string(), "### 3. Mercado do Bolhão (Gastronómica)\n\n");
    }
}
