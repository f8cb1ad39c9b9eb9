//! Location suggestions for the origin and destination fields.

use std::collections::HashSet;

/// Sorted, case-insensitively deduplicated set of known location names.
///
/// Built once per session from the place catalog and read-only afterwards.
///
/// ```rust
/// use roteiro_core::SuggestionIndex;
///
/// let index = SuggestionIndex::build(["Porto", "Faro", "Mercado do Porto"]);
/// assert_eq!(index.query("porto"), ["Mercado do Porto", "Porto"]);
/// assert_eq!(index.query("").len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionIndex {
    /// (lowercase, original) pairs ordered by the lowercase form
    names: Vec<(String, String)>,
}

impl SuggestionIndex {
    /// Builds the index. The first spelling of a name wins over later
    /// entries that differ only in case.
    pub fn build<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries: Vec<(String, String)> = names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                let folded = name.to_lowercase();
                seen.insert(folded.clone())
                    .then(|| (folded, name.to_string()))
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { names: entries }
    }

    /// Names matching the typed text, in alphabetical order.
    ///
    /// Empty input returns every name (shown when the field gains focus);
    /// otherwise the match is a case-insensitive substring test, not a prefix
    /// test. No matches means no suggestion panel.
    pub fn query(&self, text: &str) -> Vec<&str> {
        if text.is_empty() {
            return self.names().collect();
        }
        let needle = text.to_lowercase();
        self.names
            .iter()
            .filter(|(folded, _)| folded.contains(&needle))
            .map(|(_, name)| name.as_str())
            .collect()
    }

    /// All names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|(_, name)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SuggestionIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_matches_substrings_case_insensitively() {
        let index = SuggestionIndex::build(["Porto", "Faro", "Mercado do Porto"]);
        assert_eq!(index.query("porto"), vec!["Mercado do Porto", "Porto"]);
        assert_eq!(index.query("ARO"), vec!["Faro"]);
    }

    #[test]
    fn test_empty_query_returns_everything_sorted() {
        let index: SuggestionIndex = ["torre de Belém", "Castelo de São Jorge", "Estádio do Dragão"]
            .into_iter()
            .collect();
        assert_eq!(
            index.query(""),
            vec!["Castelo de São Jorge", "Estádio do Dragão", "torre de Belém"]
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        let index = SuggestionIndex::build(["Porto"]);
        assert!(index.query("Lisboa").is_empty());
    }

    #[test]
    fn test_deduplicates_ignoring_case() {
        let index = SuggestionIndex::build(["Faro", "FARO", "faro", "Olhão"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["Faro", "Olhão"]);
    }

    #[test]
    fn test_query_is_idempotent() {
        let index = SuggestionIndex::build(["Mercado do Bolhão", "Mercado Municipal de Faro"]);
        assert_eq!(index.query("mercado"), index.query("mercado"));
        assert_eq!(index.query("mercado").len(), 2);
    }

    #[test]
    fn test_empty_index() {
        let index = SuggestionIndex::default();
        assert!(index.is_empty());
        assert!(index.query("").is_empty());
    }
}
