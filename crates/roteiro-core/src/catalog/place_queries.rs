//! Place CRUD operations and queries.

use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, RoteiroError},
    models::{Category, Place},
};

const INSERT_PLACE_SQL: &str = "INSERT INTO places (name, address, city, kind) VALUES (?1, ?2, ?3, ?4)";
const SELECT_PLACE_SQL: &str = "SELECT id, name, address, city, kind FROM places WHERE id = ?1";
const FIND_DUPLICATE_SQL: &str =
    "SELECT id, name, address, city, kind FROM places WHERE name = ?1 AND address IS ?2";
const LIST_PLACES_SQL: &str = "SELECT id, name, address, city, kind FROM places ORDER BY id";
const LIST_NAMES_SQL: &str = "SELECT name FROM places";
const DELETE_PLACE_SQL: &str = "DELETE FROM places WHERE id = ?1";

/// Attractions the catalog can be seeded with: name, address, city, kind.
pub const SAMPLE_PLACES: [(&str, &str, &str, Category); 10] = [
    ("Torre de Belém", "Avenida Brasília, 1400-038 Lisboa, Portugal", "Lisboa", Category::Cultural),
    ("Estádio do Dragão", "Via Futebol Clube do Porto, 4350-415 Porto, Portugal", "Porto", Category::Sporting),
    ("Mercado do Bolhão", "Rua Formosa 214, 4000-214 Porto, Portugal", "Porto", Category::Gastronomic),
    ("Praia da Marinha", "Praia da Marinha, 8400-450 Lagoa, Portugal", "Algarve", Category::Other),
    ("Mosteiro dos Jerónimos", "Praça do Império 1400-206 Lisboa, Portugal", "Lisboa", Category::Cultural),
    ("Pavilhão Multiusos de Guimarães", "Avenida Conde Margaride 239, 4810-161 Guimarães, Portugal", "Guimarães", Category::Sporting),
    ("Mercado Municipal de Faro", "Largo da Feira Nova, 8000-133 Faro, Portugal", "Faro", Category::Gastronomic),
    ("Castelo de São Jorge", "Rua de Santa Cruz do Castelo, 1100-129 Lisboa, Portugal", "Lisboa", Category::Cultural),
    ("Parque Natural da Serra da Estrela", "Serra da Estrela, 6230-618 Seia, Portugal", "Guarda", Category::Other),
    ("Festival do Marisco", "Avenida do Mar, 8700-329 Olhão, Portugal", "Olhão", Category::Gastronomic),
];

fn place_from_row(row: &Row<'_>) -> rusqlite::Result<Place> {
    let kind_str: String = row.get(4)?;
    let kind = kind_str.parse::<Category>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid place kind: {kind_str}"),
            )),
        )
    })?;

    Ok(Place {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        address: row.get(2)?,
        city: row.get(3)?,
        kind,
    })
}

impl super::Catalog {
    /// Adds a place. A place with the same name and address is not added
    /// twice; the existing row is returned instead.
    pub fn add_place(
        &mut self,
        name: &str,
        address: Option<&str>,
        city: Option<&str>,
        kind: Category,
    ) -> Result<Place> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RoteiroError::invalid_input("name").with_reason("must not be empty"));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let existing = tx
            .query_row(FIND_DUPLICATE_SQL, params![name, address], place_from_row)
            .optional()
            .db_context("Failed to look up place")?;
        if let Some(place) = existing {
            log::debug!("Place {name:?} already in catalog as #{}", place.id);
            return Ok(place);
        }

        tx.execute(INSERT_PLACE_SQL, params![name, address, city, kind.as_str()])
            .db_context("Failed to insert place")?;
        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Place {
            id,
            name: name.to_string(),
            address: address.map(String::from),
            city: city.map(String::from),
            kind,
        })
    }

    /// Retrieves a place by its ID.
    pub fn get_place(&self, id: u64) -> Result<Option<Place>> {
        self.connection
            .query_row(SELECT_PLACE_SQL, params![id as i64], place_from_row)
            .optional()
            .db_context("Failed to query place")
    }

    /// Lists all places in insertion order.
    pub fn list_places(&self) -> Result<Vec<Place>> {
        let mut stmt = self
            .connection
            .prepare(LIST_PLACES_SQL)
            .db_context("Failed to prepare query")?;
        let places = stmt
            .query_map([], place_from_row)
            .db_context("Failed to query places")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read place")?;
        Ok(places)
    }

    /// Names of all places, unsorted and possibly repeated.
    pub fn place_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(LIST_NAMES_SQL)
            .db_context("Failed to prepare query")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .db_context("Failed to query place names")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read place name")?;
        Ok(names)
    }

    /// Permanently removes a place.
    pub fn remove_place(&mut self, id: u64) -> Result<()> {
        let removed = self
            .connection
            .execute(DELETE_PLACE_SQL, params![id as i64])
            .db_context("Failed to delete place")?;
        if removed == 0 {
            return Err(RoteiroError::PlaceNotFound { id });
        }
        Ok(())
    }

    /// Adds the sample attractions, skipping any already present. Returns the
    /// number of places in the catalog afterwards.
    pub fn seed_sample_places(&mut self) -> Result<usize> {
        for (name, address, city, kind) in SAMPLE_PLACES {
            self.add_place(name, Some(address), Some(city), kind)?;
        }
        Ok(self.list_places()?.len())
    }
}
