//! User-facing strings per supported language.
//!
//! Pure lookup tables; the presentation adapter passes the active locale tag
//! in once and renders whatever strings the session hands back.

use crate::domain::CurrencyCode;
use crate::error::ConvertError;

/// Supported interface languages. Finnish is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Fi,
    En,
    Sv,
}

impl Lang {
    /// Resolve a BCP 47 tag (`"sv-SE"`, `"en_US"`, ...) by its primary
    /// subtag. Unknown tags fall back to Finnish.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Self::En,
            "sv" => Self::Sv,
            _ => Self::Fi,
        }
    }
}

/// String table for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub loading_currencies: &'static str,
    pub load_error: &'static str,
    pub invalid_amount: &'static str,
    pub select_both: &'static str,
    pub same_currency: &'static str,
    pub fetching_rate: &'static str,
    pub rate_error: &'static str,
    date_word: &'static str,
}

const FI: Messages = Messages {
    loading_currencies: "Ladataan valuuttoja...",
    load_error: "Valuuttojen lataus epäonnistui.",
    invalid_amount: "Anna kelvollinen positiivinen summa.",
    select_both: "Valitse molemmat valuutat.",
    same_currency: "Sama valuutta molemmissa.",
    fetching_rate: "Haetaan kurssia...",
    rate_error: "Kurssin haku epäonnistui.",
    date_word: "Päivä",
};

const EN: Messages = Messages {
    loading_currencies: "Loading currencies...",
    load_error: "Failed to load currencies.",
    invalid_amount: "Please enter a valid positive amount.",
    select_both: "Please select both currencies.",
    same_currency: "Same currency selected.",
    fetching_rate: "Fetching rate...",
    rate_error: "Failed to fetch exchange rate.",
    date_word: "Date",
};

const SV: Messages = Messages {
    loading_currencies: "Laddar valutor...",
    load_error: "Det gick inte att ladda valutor.",
    invalid_amount: "Ange ett giltigt positivt belopp.",
    select_both: "Välj båda valutorna.",
    same_currency: "Samma valuta vald.",
    fetching_rate: "Hämtar växelkurs...",
    rate_error: "Det gick inte att hämta växelkursen.",
    date_word: "Datum",
};

impl Messages {
    pub const fn for_lang(lang: Lang) -> &'static Self {
        match lang {
            Lang::Fi => &FI,
            Lang::En => &EN,
            Lang::Sv => &SV,
        }
    }

    /// Unit-rate line with six fraction digits on the rate, e.g.
    /// `1 EUR = 1.100000 USD • Date: 2024-01-01`.
    pub fn rate_line(&self, from: &CurrencyCode, to: &CurrencyCode, rate: f64, date: &str) -> String {
        format!("1 {from} = {rate:.6} {to} • {}: {date}", self.date_word)
    }

    /// User-facing text for a failed conversion.
    pub fn for_error(&self, error: &ConvertError) -> &'static str {
        match error {
            ConvertError::InvalidAmount { .. } => self.invalid_amount,
            ConvertError::MissingSelection => self.select_both,
            ConvertError::RateNotFound { .. } | ConvertError::Fetch(_) => self.rate_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_resolution_uses_primary_subtag() {
        assert_eq!(Lang::from_tag("fi-FI"), Lang::Fi);
        assert_eq!(Lang::from_tag("EN-us"), Lang::En);
        assert_eq!(Lang::from_tag("sv_SE"), Lang::Sv);
    }

    #[test]
    fn unknown_tag_falls_back_to_finnish() {
        assert_eq!(Lang::from_tag("de"), Lang::Fi);
        assert_eq!(Lang::from_tag(""), Lang::Fi);
    }

    #[test]
    fn rate_line_uses_six_fraction_digits_and_locale_date_word() {
        let eur = CurrencyCode::parse("EUR").expect("valid code");
        let usd = CurrencyCode::parse("USD").expect("valid code");

        let en = Messages::for_lang(Lang::En).rate_line(&eur, &usd, 1.1, "2024-01-01");
        assert_eq!(en, "1 EUR = 1.100000 USD • Date: 2024-01-01");

        let fi = Messages::for_lang(Lang::Fi).rate_line(&eur, &usd, 1.1, "2024-01-01");
        assert_eq!(fi, "1 EUR = 1.100000 USD • Päivä: 2024-01-01");

        let sv = Messages::for_lang(Lang::Sv).rate_line(&eur, &usd, 0.25, "2024-06-30");
        assert_eq!(sv, "1 EUR = 0.250000 USD • Datum: 2024-06-30");
    }

    #[test]
    fn every_error_kind_maps_to_a_message() {
        let messages = Messages::for_lang(Lang::En);
        let target = CurrencyCode::parse("USD").expect("valid code");

        assert_eq!(
            messages.for_error(&ConvertError::InvalidAmount {
                input: String::from("abc"),
            }),
            messages.invalid_amount
        );
        assert_eq!(
            messages.for_error(&ConvertError::MissingSelection),
            messages.select_both
        );
        assert_eq!(
            messages.for_error(&ConvertError::RateNotFound { target }),
            messages.rate_error
        );
    }
}
