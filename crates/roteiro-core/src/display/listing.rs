//! The displayed itinerary.

use std::fmt;

use crate::models::ItineraryRecord;

/// Every leg in display order, one block per leg with a blank line between
/// blocks.
///
/// The listing knows which leg each displayed line came from, so an
/// interface can turn a clicked or typed line number into a position in the
/// store without comparing text.
///
/// ```text
/// 1  📍 De Lisboa até Porto        ─┐
/// 2       Tipo de Atividade - ...    │ leg 0
/// 3       Data - 15/08/2025          │
/// 4       Hora - 09:30             ─┘
/// 5                                  (none)
/// 6  📍 De Porto até Braga         ─┐ leg 1
/// ```
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    records: &'a [ItineraryRecord],
    /// Leg position for each displayed line; `None` for separators
    lines: Vec<Option<usize>>,
}

impl<'a> Listing<'a> {
    pub fn new(records: &'a [ItineraryRecord]) -> Self {
        let mut lines = Vec::new();
        for (position, record) in records.iter().enumerate() {
            if position > 0 {
                lines.push(None);
            }
            let count = record.rendered_text().lines().count().max(1);
            lines.resize(lines.len() + count, Some(position));
        }
        Self { records, lines }
    }

    /// Position of the leg shown on a 1-based display line.
    ///
    /// Separator lines and lines past the end belong to no leg.
    pub fn record_at_line(&self, line: usize) -> Option<usize> {
        line.checked_sub(1)
            .and_then(|i| self.lines.get(i).copied().flatten())
    }

    /// First display line (1-based) of the leg at `position`.
    pub fn line_of(&self, position: usize) -> Option<usize> {
        self.lines
            .iter()
            .position(|p| *p == Some(position))
            .map(|i| i + 1)
    }

    pub fn records(&self) -> &'a [ItineraryRecord] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "No trips planned.");
        }
        for (position, record) in self.records.iter().enumerate() {
            if position > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", record.rendered_text())?;
        }
        Ok(())
    }
}
