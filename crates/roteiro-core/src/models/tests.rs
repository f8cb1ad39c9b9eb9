//! Tests for record construction and categories.

use jiff::civil::date;

use super::*;
use crate::{error::ValidationError, params::SubmitTrip};

fn lisboa_porto() -> SubmitTrip {
    SubmitTrip {
        origin: "Lisboa".to_string(),
        destination: "Porto".to_string(),
        category: "Cultural".to_string(),
        date: "15/08/2025".to_string(),
        time: "09:30".to_string(),
        notes: None,
    }
}

#[test]
fn test_build_record_renders_block() {
    let record = ItineraryRecord::build(
        &lisboa_porto(),
        "Distância - 314 km\n     Duração - 3 h 10 min",
    )
    .expect("valid record");

    assert_eq!(
        record.rendered_text(),
        "📍 De Lisboa até Porto\n\
         \x20    Tipo de Atividade - Viagem Cultural\n\
         \x20    Data - 15/08/2025\n\
         \x20    Hora - 09:30\n\
         \x20    Distância - 314 km\n\
         \x20    Duração - 3 h 10 min"
    );
    assert_eq!(record.sort_key(), date(2025, 8, 15).at(9, 30, 0, 0));
}

#[test]
fn test_build_record_trims_fields() {
    let mut input = lisboa_porto();
    input.origin = "  Lisboa ".to_string();
    input.notes = Some("  levar casaco  ".to_string());

    let record = ItineraryRecord::build(&input, "").expect("valid record");
    assert_eq!(record.origin(), "Lisboa");
    assert_eq!(record.notes(), "levar casaco");
    assert!(record.rendered_text().ends_with("     Notas - levar casaco"));
}

#[test]
fn test_missing_field_is_checked_first() {
    let mut input = lisboa_porto();
    input.destination = "   ".to_string();
    input.date = "not a date".to_string();

    let err = ItineraryRecord::build(&input, "").unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingField {
            field: "destination"
        }
    );
}

#[test]
fn test_notes_are_optional() {
    let mut input = lisboa_porto();
    input.notes = Some(String::new());
    let record = ItineraryRecord::build(&input, "").expect("valid record");
    assert!(!record.rendered_text().contains("Notas"));
}

#[test]
fn test_invalid_date_shape() {
    for bad in ["2025-08-15", "32/01/2025", "15/13/2025", "1/8/2025", "15/08/25"] {
        let mut input = lisboa_porto();
        input.date = bad.to_string();
        let err = ItineraryRecord::build(&input, "").unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidDate { .. }),
            "{bad} should be rejected as a malformed date, got {err:?}"
        );
    }
}

#[test]
fn test_invalid_time_shape() {
    for bad in ["24:00", "9:30", "09:60", "0930"] {
        let mut input = lisboa_porto();
        input.time = bad.to_string();
        let err = ItineraryRecord::build(&input, "").unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidTime { .. }),
            "{bad} should be rejected as a malformed time, got {err:?}"
        );
    }
}

#[test]
fn test_impossible_calendar_date_passes_shape_but_fails_combination() {
    let mut input = lisboa_porto();
    input.date = "31/02/2025".to_string();
    let err = ItineraryRecord::build(&input, "").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidDateTime {
            value: "31/02/2025 09:30".to_string()
        }
    );
}

#[test]
fn test_year_zero_is_not_a_calendar_date() {
    let mut input = lisboa_porto();
    input.date = "01/01/0000".to_string();
    let err = ItineraryRecord::build(&input, "").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidDateTime {
            value: "01/01/0000 09:30".to_string()
        }
    );

    input.date = "01/01/0001".to_string();
    let record = ItineraryRecord::build(&input, "").expect("year one is valid");
    assert_eq!(record.date(), date(1, 1, 1));
}

#[test]
fn test_leap_day_is_accepted() {
    let mut input = lisboa_porto();
    input.date = "29/02/2024".to_string();
    let record = ItineraryRecord::build(&input, "").expect("leap day is valid");
    assert_eq!(record.date(), date(2024, 2, 29));
}

#[test]
fn test_unknown_category() {
    let mut input = lisboa_porto();
    input.category = "Aquática".to_string();
    let err = ItineraryRecord::build(&input, "").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidCategory { .. }));
}

#[test]
fn test_to_submit_round_trips() {
    let mut input = lisboa_porto();
    input.notes = Some("comboio".to_string());
    input.category = "gastronomic".to_string();
    let record = ItineraryRecord::build(&input, "Rota não encontrada.").expect("valid record");

    let prefill = record.to_submit();
    assert_eq!(prefill.category, "Gastronómica");
    let rebuilt = ItineraryRecord::build(&prefill, record.route_info()).expect("valid record");
    assert_eq!(rebuilt, record);
}

#[test]
fn test_category_parsing() {
    assert_eq!("Desportiva".parse::<Category>(), Ok(Category::Sporting));
    assert_eq!("desportivo".parse::<Category>(), Ok(Category::Sporting));
    assert_eq!("GASTRONÓMICO".parse::<Category>(), Ok(Category::Gastronomic));
    assert_eq!("Gastronomica".parse::<Category>(), Ok(Category::Gastronomic));
    assert_eq!("outro".parse::<Category>(), Ok(Category::Other));
    assert_eq!("Other".parse::<Category>(), Ok(Category::Other));
    assert!("museum".parse::<Category>().is_err());
}

#[test]
fn test_category_labels_parse_back() {
    for category in [
        Category::Cultural,
        Category::Sporting,
        Category::Gastronomic,
        Category::Other,
    ] {
        assert_eq!(category.label().parse::<Category>(), Ok(category));
        assert_eq!(category.as_str().parse::<Category>(), Ok(category));
    }
}
