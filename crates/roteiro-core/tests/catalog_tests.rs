use roteiro_core::{catalog::SAMPLE_PLACES, Catalog, Category, RoteiroError};
use tempfile::TempDir;

fn open_catalog() -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let catalog = Catalog::new(temp_dir.path().join("catalog.db")).expect("Failed to open catalog");
    (temp_dir, catalog)
}

#[test]
fn test_new_catalog_is_empty() {
    let (_temp_dir, catalog) = open_catalog();
    assert!(catalog.list_places().expect("Failed to list").is_empty());
    assert!(catalog.place_names().expect("Failed to list names").is_empty());
}

#[test]
fn test_add_and_get_place() {
    let (_temp_dir, mut catalog) = open_catalog();
    let place = catalog
        .add_place(
            "  Torre dos Clérigos ",
            Some("Rua de São Filipe de Nery, Porto"),
            Some("Porto"),
            Category::Cultural,
        )
        .expect("Failed to add place");

    assert_eq!(place.name, "Torre dos Clérigos");
    let fetched = catalog
        .get_place(place.id)
        .expect("Failed to query place")
        .expect("Place should exist");
    assert_eq!(fetched, place);
    assert!(catalog.get_place(place.id + 1).expect("Failed to query").is_none());
}

#[test]
fn test_add_place_rejects_empty_name() {
    let (_temp_dir, mut catalog) = open_catalog();
    let err = catalog
        .add_place("   ", None, None, Category::Other)
        .expect_err("Empty name should be rejected");
    assert!(matches!(err, RoteiroError::InvalidInput { ref field, .. } if field == "name"));
}

#[test]
fn test_add_place_is_deduplicated() {
    let (_temp_dir, mut catalog) = open_catalog();
    let first = catalog
        .add_place("Praia da Rocha", Some("Portimão"), None, Category::Other)
        .expect("Failed to add place");
    let again = catalog
        .add_place("Praia da Rocha", Some("Portimão"), None, Category::Sporting)
        .expect("Failed to add place");
    assert_eq!(first.id, again.id);

    // Same name, different address is a different place.
    let elsewhere = catalog
        .add_place("Praia da Rocha", None, None, Category::Other)
        .expect("Failed to add place");
    assert_ne!(first.id, elsewhere.id);

    assert_eq!(catalog.list_places().expect("Failed to list").len(), 2);
}

#[test]
fn test_seed_is_repeatable() {
    let (_temp_dir, mut catalog) = open_catalog();
    assert_eq!(catalog.seed_sample_places().expect("Failed to seed"), SAMPLE_PLACES.len());
    assert_eq!(catalog.seed_sample_places().expect("Failed to seed"), SAMPLE_PLACES.len());

    let places = catalog.list_places().expect("Failed to list");
    assert_eq!(places[0].name, "Torre de Belém");
    assert_eq!(places[1].kind, Category::Sporting);
    assert_eq!(places[3].city.as_deref(), Some("Algarve"));
}

#[test]
fn test_remove_place() {
    let (_temp_dir, mut catalog) = open_catalog();
    let place = catalog
        .add_place("Mercado de Loulé", None, Some("Loulé"), Category::Gastronomic)
        .expect("Failed to add place");

    catalog.remove_place(place.id).expect("Failed to remove place");
    assert!(catalog.list_places().expect("Failed to list").is_empty());

    let err = catalog
        .remove_place(place.id)
        .expect_err("Removing twice should fail");
    assert!(matches!(err, RoteiroError::PlaceNotFound { id } if id == place.id));
}

#[test]
fn test_catalog_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("catalog.db");
    {
        let mut catalog = Catalog::new(&path).expect("Failed to open catalog");
        catalog
            .add_place("Sé de Braga", None, Some("Braga"), Category::Cultural)
            .expect("Failed to add place");
    }
    let catalog = Catalog::new(&path).expect("Failed to reopen catalog");
    assert_eq!(
        catalog.place_names().expect("Failed to list names"),
        vec!["Sé de Braga".to_string()]
    );
}
