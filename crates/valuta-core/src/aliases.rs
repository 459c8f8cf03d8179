//! Alternate search terms per currency code.
//!
//! Independent of the catalog lifecycle; the table is static and never
//! changes at runtime.

use crate::domain::CurrencyCode;
use crate::i18n::Lang;

/// Finnish synonyms and colloquial names. The first entry per code doubles
/// as the localized display hint in pickers.
const FI_ALIASES: &[(&str, &[&str])] = &[
    ("SEK", &["ruotsin kruunu", "ruotsi kruunu", "ruotsin raha", "kruunu"]),
    ("NOK", &["norjan kruunu", "norja kruunu", "kruunu"]),
    ("DKK", &["tanskan kruunu", "tanska kruunu", "kruunu"]),
    ("ISK", &["islannin kruunu", "islanti kruunu", "kruunu"]),
    ("USD", &["yhdysvaltain dollari", "us dollari", "usa dollari", "dollari"]),
    ("EUR", &["euro", "eurot"]),
    ("GBP", &["englannin punta", "britti punta", "punta"]),
    ("CHF", &["sveitsin frangi", "frangi"]),
    ("JPY", &["japanin jeni", "jeni"]),
    ("CNY", &["kiinan juan", "juan", "yuan"]),
    ("AUD", &["australian dollari"]),
    ("CAD", &["kanadan dollari"]),
];

/// Static table of alternate search terms for catalog search.
#[derive(Debug, Clone, Copy)]
pub struct AliasTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

impl AliasTable {
    /// Table for the given language. The Finnish synonym list serves as
    /// search extras under every language, so all locales currently share
    /// one table; the parameter stays so per-locale tables can be added
    /// without touching call sites.
    pub const fn for_lang(_lang: Lang) -> Self {
        Self {
            entries: FI_ALIASES,
        }
    }

    /// Ordered alias terms for a code; empty when none are known.
    pub fn aliases(&self, code: &CurrencyCode) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(key, _)| *key == code.as_str())
            .map(|(_, terms)| *terms)
            .unwrap_or(&[])
    }

    /// First alias for a code, used as the localized display hint.
    pub fn primary(&self, code: &CurrencyCode) -> Option<&'static str> {
        self.aliases(code).first().copied()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::for_lang(Lang::Fi)
    }
}
