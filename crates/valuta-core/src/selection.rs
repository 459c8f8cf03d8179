//! The selected source/target currency pair.

use crate::domain::CurrencyCode;

/// Picker slot being assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Source,
    Target,
}

/// The currently selected pair. Codes are not checked against the catalog;
/// an unknown code simply fails later at the rate lookup. Source and target
/// may legally be equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    source: Option<CurrencyCode>,
    target: Option<CurrencyCode>,
}

impl Default for SelectionState {
    /// EUR → USD, the pair shown before the user touches anything.
    fn default() -> Self {
        Self {
            source: CurrencyCode::parse("EUR").ok(),
            target: CurrencyCode::parse("USD").ok(),
        }
    }
}

impl SelectionState {
    /// A state with nothing selected. Defaults cover normal startup; this
    /// exists for adapters that defer the initial selection.
    pub const fn empty() -> Self {
        Self {
            source: None,
            target: None,
        }
    }

    pub fn source(&self) -> Option<&CurrencyCode> {
        self.source.as_ref()
    }

    pub fn target(&self) -> Option<&CurrencyCode> {
        self.target.as_ref()
    }

    /// Both slots, as (source, target), when both are populated.
    pub fn pair(&self) -> Option<(&CurrencyCode, &CurrencyCode)> {
        Some((self.source.as_ref()?, self.target.as_ref()?))
    }

    pub fn set(&mut self, slot: Slot, code: CurrencyCode) {
        match slot {
            Slot::Source => self.source = Some(code),
            Slot::Target => self.target = Some(code),
        }
    }

    /// Exchange source and target.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }
}
