//! The currency catalog: code to display-name mapping loaded once from the
//! rate feed, read-only afterwards.

use std::collections::BTreeMap;

use crate::aliases::AliasTable;
use crate::domain::CurrencyCode;

/// Code → display-name mapping. An empty catalog is valid but degenerate:
/// no conversions are possible until a load succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<CurrencyCode, String>,
}

impl Catalog {
    pub fn new(entries: BTreeMap<CurrencyCode, String>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Display name for a code, if the catalog knows it.
    pub fn name(&self, code: &CurrencyCode) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Picker label for a code; falls back to the code itself when the
    /// catalog has no name for it.
    pub fn label<'a>(&'a self, code: &'a CurrencyCode) -> &'a str {
        self.name(code).unwrap_or_else(|| code.as_str())
    }

    /// All codes in lexicographic order.
    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.entries.keys()
    }

    /// Filter codes by a normalized substring match over the composed text
    /// `"{code} {display name} {aliases}"`. An empty query returns every
    /// code. Result order is always lexicographic by code.
    pub fn search(&self, aliases: &AliasTable, query: &str) -> Vec<CurrencyCode> {
        let needle = normalize(query);
        self.entries
            .iter()
            .filter(|(code, name)| {
                if needle.is_empty() {
                    return true;
                }
                let mut haystack = format!("{} {name}", code.as_str());
                for term in aliases.aliases(code) {
                    haystack.push(' ');
                    haystack.push_str(term);
                }
                normalize(&haystack).contains(needle.as_str())
            })
            .map(|(code, _)| code.clone())
            .collect()
    }
}

/// Lowercase, fold the Nordic diaereses, trim.
fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .replace('ä', "a")
        .replace('ö', "o")
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: &str) -> CurrencyCode {
        CurrencyCode::parse(value).expect("valid code")
    }

    fn sample_catalog() -> Catalog {
        let entries = [
            (code("EUR"), String::from("Euro")),
            (code("USD"), String::from("US Dollar")),
            (code("SEK"), String::from("Swedish Krona")),
            (code("GBP"), String::from("British Pound")),
        ]
        .into_iter()
        .collect();
        Catalog::new(entries)
    }

    #[test]
    fn empty_query_returns_all_codes_in_code_order() {
        let catalog = sample_catalog();
        let results = catalog.search(&AliasTable::default(), "");
        assert_eq!(results, [code("EUR"), code("GBP"), code("SEK"), code("USD")]);
    }

    #[test]
    fn whitespace_only_query_behaves_like_empty() {
        let catalog = sample_catalog();
        let results = catalog.search(&AliasTable::default(), "   ");
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn matches_code_name_and_alias_case_insensitively() {
        let catalog = sample_catalog();
        let aliases = AliasTable::default();

        assert_eq!(catalog.search(&aliases, "usd"), [code("USD")]);
        assert_eq!(catalog.search(&aliases, "krona"), [code("SEK")]);
        // Alias-only term: "punta" appears in no code or display name.
        assert_eq!(catalog.search(&aliases, "PuNtA"), [code("GBP")]);
    }

    #[test]
    fn folds_diaereses_in_the_query() {
        let catalog = sample_catalog();
        let results = catalog.search(&AliasTable::default(), "ruötsin");
        assert_eq!(results, [code("SEK")]);
    }

    #[test]
    fn non_matching_query_excludes_everything() {
        let catalog = sample_catalog();
        assert!(catalog.search(&AliasTable::default(), "zzz").is_empty());
    }

    #[test]
    fn shared_alias_matches_every_carrying_code() {
        let entries = [
            (code("SEK"), String::from("Swedish Krona")),
            (code("NOK"), String::from("Norwegian Krone")),
            (code("USD"), String::from("US Dollar")),
        ]
        .into_iter()
        .collect();
        let catalog = Catalog::new(entries);

        let results = catalog.search(&AliasTable::default(), "kruunu");
        assert_eq!(results, [code("NOK"), code("SEK")]);
    }

    #[test]
    fn label_falls_back_to_the_code() {
        let catalog = sample_catalog();
        assert_eq!(catalog.label(&code("EUR")), "Euro");
        assert_eq!(catalog.label(&code("XXX")), "XXX");
    }
}
