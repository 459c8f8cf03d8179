//! Session controller: owns the catalog, the selected pair, and the
//! conversion workflow for one user session, and renders every outcome into
//! plain strings for the presentation adapter.

use std::sync::Arc;

use crate::aliases::AliasTable;
use crate::catalog::Catalog;
use crate::domain::CurrencyCode;
use crate::engine::{Conversion, ConversionEngine};
use crate::error::ConvertError;
use crate::i18n::{Lang, Messages};
use crate::rate_source::{FeedError, RateSource};
use crate::selection::{SelectionState, Slot};

/// Strings handed to the presentation adapter verbatim. Empty string means
/// "render nothing" for that line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub status: String,
    pub error: String,
    pub result_main: String,
    pub result_rate: String,
}

/// Identifies one conversion attempt. Tickets are handed out in increasing
/// order and the newest applied one wins, so a slow response cannot
/// overwrite a fresher result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// One user session. The locale is fixed at construction and the rate feed
/// is injected, so the session itself is deterministic under test doubles.
pub struct Session {
    messages: &'static Messages,
    aliases: AliasTable,
    catalog: Catalog,
    selection: SelectionState,
    engine: ConversionEngine,
    feed: Arc<dyn RateSource>,
    view: ViewState,
    next_ticket: u64,
    last_applied: Option<u64>,
}

impl Session {
    pub fn new(lang: Lang, feed: Arc<dyn RateSource>) -> Self {
        Self {
            messages: Messages::for_lang(lang),
            aliases: AliasTable::for_lang(lang),
            catalog: Catalog::default(),
            selection: SelectionState::default(),
            engine: ConversionEngine::new(Arc::clone(&feed)),
            feed,
            view: ViewState::default(),
            next_ticket: 0,
            last_applied: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Startup catalog load. On failure the catalog stays empty, the
    /// load-error text is shown, and the session remains usable so the user
    /// can retry.
    pub async fn load_catalog(&mut self) -> Result<(), FeedError> {
        self.view.status = self.messages.loading_currencies.to_owned();
        self.view.error.clear();

        match self.feed.currencies().await {
            Ok(entries) => {
                self.catalog = Catalog::new(entries);
                self.view.status.clear();
                Ok(())
            }
            Err(error) => {
                self.view.status.clear();
                self.view.error = self.messages.load_error.to_owned();
                Err(error)
            }
        }
    }

    /// Filter the catalog for the picker list.
    pub fn search(&self, query: &str) -> Vec<CurrencyCode> {
        self.catalog.search(&self.aliases, query)
    }

    pub fn pick(&mut self, slot: Slot, code: CurrencyCode) {
        self.selection.set(slot, code);
    }

    pub fn swap(&mut self) {
        self.selection.swap();
    }

    /// Start a conversion attempt: shows the fetching status and hands out
    /// the ticket that [`Session::apply`] later checks for staleness.
    pub fn begin_convert(&mut self) -> Ticket {
        self.view.status = self.messages.fetching_rate.to_owned();
        self.view.error.clear();
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    /// Apply a completed conversion outcome. An outcome whose ticket is
    /// older than the newest applied one is dropped. Returns whether the
    /// view changed.
    pub fn apply(&mut self, ticket: Ticket, outcome: Result<Conversion, ConvertError>) -> bool {
        if self.last_applied.is_some_and(|applied| ticket.0 < applied) {
            return false;
        }
        self.last_applied = Some(ticket.0);
        self.view.status.clear();

        match outcome {
            Ok(conversion) => {
                self.view.error.clear();
                self.view.result_main = conversion.main_line();
                self.view.result_rate = match &conversion {
                    Conversion::Identity { .. } => self.messages.same_currency.to_owned(),
                    Conversion::Converted {
                        rate,
                        source,
                        target,
                        as_of,
                        ..
                    } => self.messages.rate_line(source, target, *rate, as_of),
                };
            }
            Err(error) => {
                self.view.error = self.messages.for_error(&error).to_owned();
                // A rejected amount blanks the result lines; other failures
                // leave the last result visible.
                if matches!(error, ConvertError::InvalidAmount { .. }) {
                    self.view.result_main = String::from("–");
                    self.view.result_rate.clear();
                }
            }
        }
        true
    }

    /// One-call conversion path: begin, run the engine, apply.
    pub async fn convert(&mut self, amount_text: &str) -> &ViewState {
        let ticket = self.begin_convert();
        let outcome = self.engine.convert(amount_text, &self.selection).await;
        self.apply(ticket, outcome);
        &self.view
    }
}
