//! Text blocks for display and for itinerary files.
//!
//! Every record renders to one block:
//!
//! ```text
//! 📍 De Lisboa até Porto
//!      Tipo de Atividade - Viagem Cultural
//!      Data - 15/08/2025
//!      Hora - 09:30
//!      Distância - 314 km
//!      Duração - 3 h 10 min
//!      Notas - levar casaco
//! ```
//!
//! Route lines are omitted when no route was looked up and the notes line is
//! omitted when there are no notes. Files hold blocks separated by one blank
//! line, with no header or version marker.

use std::{fmt::Write as _, sync::OnceLock};

use log::{debug, warn};
use regex::Regex;

use crate::models::{
    record::{parse_sort_key, ImportedFields},
    Category, ItineraryRecord,
};

/// Marker opening the first line of every block.
pub const MARKER: &str = "📍";

/// Indentation of every line after the first.
pub const INDENT: &str = "     ";

const NOTES_LABEL: &str = "Notas - ";

fn date_time_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"Data\s*-\s*(\d{2}/\d{2}/\d{4})\n\s*Hora\s*-\s*(\d{2}:\d{2})")
            .expect("date/time pattern is valid")
    })
}

fn header_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"De (.*?) até (.*)$").expect("header pattern is valid"))
}

fn category_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)Tipo de Atividade\s*-\s*Viagem (.*)$").expect("category pattern is valid")
    })
}

/// Renders the canonical block for a record.
pub fn render(record: &ItineraryRecord) -> String {
    let mut block = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        block,
        "{MARKER} De {} até {}\n{INDENT}Tipo de Atividade - Viagem {}\n{INDENT}Data - {}\n{INDENT}Hora - {}",
        record.origin(),
        record.destination(),
        record.category().label(),
        record.date_text(),
        record.time_text(),
    );
    for line in record.route_info().lines().map(str::trim).filter(|l| !l.is_empty()) {
        let _ = write!(block, "\n{INDENT}{line}");
    }
    if !record.notes().is_empty() {
        let _ = write!(block, "\n{INDENT}{NOTES_LABEL}{}", record.notes());
    }
    block
}

/// Serializes records for export, one block per record followed by a blank
/// line, in the order given.
pub fn serialize_all(records: &[ItineraryRecord]) -> String {
    records.iter().fold(String::new(), |mut text, record| {
        text.push_str(record.rendered_text());
        text.push_str("\n\n");
        text
    })
}

/// Records read from an itinerary file, with the number of blocks that
/// could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedItinerary {
    pub records: Vec<ItineraryRecord>,
    pub skipped: usize,
}

/// Parses an exported file back into records, sorted by date and time.
///
/// Blocks whose date or time cannot be found, or which name an impossible
/// date, are skipped; the rest of the file still imports.
pub fn parse_all(text: &str) -> Vec<ItineraryRecord> {
    parse_itinerary(text).records
}

/// Like [`parse_all`], but also counts the skipped blocks.
pub fn parse_itinerary(text: &str) -> ParsedItinerary {
    let mut parsed = ParsedItinerary::default();
    for block in split_blocks(text) {
        match parse_block(&block) {
            Some(record) => parsed.records.push(record),
            None => {
                warn!(
                    "Skipping itinerary block without a valid date and time: {:?}",
                    block.lines().next().unwrap_or_default()
                );
                parsed.skipped += 1;
            }
        }
    }
    parsed.records.sort_by_key(ItineraryRecord::sort_key);
    debug!(
        "Parsed {} itinerary blocks, skipped {}",
        parsed.records.len(),
        parsed.skipped
    );
    parsed
}

/// Parses a single block. The record keeps the trimmed block as its rendered
/// text instead of re-rendering it.
pub fn parse_block(block: &str) -> Option<ItineraryRecord> {
    let block = block.trim();
    let captures = date_time_line().captures(block)?;
    let sort_key = parse_sort_key(&captures[1], &captures[2])?;

    let mut fields = ImportedFields::default();

    if let Some(header) = block.lines().next().and_then(|l| header_line().captures(l)) {
        fields.origin = header[1].trim().to_string();
        fields.destination = header[2].trim().to_string();
    }

    fields.category = category_line()
        .captures(block)
        .and_then(|c| c[1].parse::<Category>().ok())
        .unwrap_or(Category::Other);

    // Everything after the time line is route info, up to the notes.
    let end_of_time = captures.get(0).map_or(block.len(), |m| m.end());
    let mut tail = block[end_of_time..].lines().skip(1);
    let mut route_lines = Vec::new();
    while let Some(line) = tail.next() {
        let line = line.trim();
        if let Some(first_note_line) = line.strip_prefix(NOTES_LABEL) {
            let rest: Vec<&str> = tail.by_ref().collect();
            fields.notes = std::iter::once(first_note_line)
                .chain(rest)
                .collect::<Vec<_>>()
                .join("\n");
            break;
        }
        route_lines.push(line);
    }
    fields.route_info = route_lines.join("\n");

    Some(ItineraryRecord::from_block(fields, sort_key, block))
}

/// Splits text on blank (whitespace-only) lines.
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

/// Finds the record a displayed line belongs to by matching text.
///
/// A record whose first line equals the clicked line wins; otherwise the
/// first record containing the line is returned. Prefer
/// [`crate::display::Listing::record_at_line`], which maps line numbers to
/// positions without comparing text.
pub fn locate_record(clicked_line: &str, records: &[ItineraryRecord]) -> Option<usize> {
    let needle = clicked_line.trim();
    if needle.is_empty() {
        return None;
    }
    records
        .iter()
        .position(|r| r.rendered_text().lines().next().map(str::trim) == Some(needle))
        .or_else(|| {
            records
                .iter()
                .position(|r| r.rendered_text().lines().any(|l| l.trim() == needle))
        })
}
