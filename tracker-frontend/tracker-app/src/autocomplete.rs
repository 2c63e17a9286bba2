//! The search box state machine.
//!
//! Nothing in here touches the DOM or the network. The `SearchBox` component
//! feeds it events and performs the [`InputAction`]s and [`SearchRequest`]s it
//! hands back, which keeps the timing rules testable without a browser.

use std::time::Duration;

use tracker_api_types::{SuggestionKind, SuggestionResult};

use crate::api::search_url;
use crate::config::AutocompleteConfig;
use crate::error::AppResult;
use crate::location_text::format_location;
use crate::navigation::target_url;

/// Identifies one scheduled debounce timer. Only the newest one may fire a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Identifies one issued search. Only the response to the newest one is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum InputAction {
    /// The query is too short, the panel has been hidden.
    Hide,
    /// Wait `delay`, then hand `ticket` back to [`Autocomplete::debounce_elapsed`].
    Schedule {
        ticket: DebounceTicket,
        delay: Duration,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub ticket: RequestTicket,
    pub url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseOutcome {
    Rendered,
    /// A newer search was issued (or the query was cleared) since this one went out.
    Stale,
    Failed,
}

/// One line of the suggestions panel, ready to display.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuggestionRow {
    pub kind: String,
    pub context: Option<String>,
    pub text: String,
    pub target: Option<String>,
}

impl SuggestionRow {
    pub fn new(result: &SuggestionResult, config: &AutocompleteConfig) -> Self {
        let is_location = result.kind == SuggestionKind::Location;
        let display = |value: &str| {
            if is_location {
                format_location(value)
            } else {
                value.to_string()
            }
        };
        Self {
            kind: result.kind.label().to_string(),
            context: result.context().map(display),
            text: display(&result.text),
            target: target_url(result, config.target_policy),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Autocomplete {
    config: AutocompleteConfig,
    query: String,
    next_ticket: u64,
    pending: Option<DebounceTicket>,
    latest_request: Option<RequestTicket>,
    rows: Vec<SuggestionRow>,
    visible: bool,
}

impl Autocomplete {
    pub fn new(config: AutocompleteConfig) -> Self {
        Self {
            config,
            query: String::new(),
            next_ticket: 0,
            pending: None,
            latest_request: None,
            rows: Vec::new(),
            visible: false,
        }
    }

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn rows(&self) -> &[SuggestionRow] {
        &self.rows
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_pending(&self, ticket: DebounceTicket) -> bool {
        self.pending == Some(ticket)
    }

    fn next_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    /// Reopens whatever was rendered last, without searching again.
    pub fn on_focus(&mut self, value: &str) {
        if self.config.qualifies(value.trim()) && !self.rows.is_empty() {
            self.visible = true;
        }
    }

    pub fn on_outside_click(&mut self) {
        self.visible = false;
    }

    pub fn on_input(&mut self, value: &str) -> InputAction {
        self.pending = None;
        self.query = value.trim().to_string();
        if !self.config.qualifies(&self.query) {
            self.visible = false;
            // neither the old rows nor a search already on the wire may reopen the panel
            self.rows.clear();
            self.latest_request = None;
            return InputAction::Hide;
        }
        let ticket = DebounceTicket(self.next_ticket());
        self.pending = Some(ticket);
        InputAction::Schedule {
            ticket,
            delay: self.config.debounce(),
        }
    }

    /// Called when the timer for `ticket` fires. Returns the search to issue,
    /// or `None` if a later keystroke superseded this timer.
    pub fn debounce_elapsed(&mut self, ticket: DebounceTicket) -> Option<SearchRequest> {
        if !self.is_pending(ticket) {
            return None;
        }
        self.pending = None;
        let ticket = RequestTicket(self.next_ticket());
        self.latest_request = Some(ticket);
        log::debug!("searching for {:?}", self.query);
        Some(SearchRequest {
            ticket,
            url: search_url(
                self.config.origin.as_deref(),
                &self.config.endpoint,
                &self.query,
            ),
        })
    }

    /// Applies the outcome of a search. Failures of any kind are logged and
    /// leave the panel exactly as it was.
    pub fn on_response(
        &mut self,
        ticket: RequestTicket,
        response: AppResult<Vec<SuggestionResult>>,
    ) -> ResponseOutcome {
        if self.latest_request != Some(ticket) {
            log::debug!("dropping stale search response {ticket:?}");
            return ResponseOutcome::Stale;
        }
        match response {
            Ok(results) => {
                self.render(&results);
                ResponseOutcome::Rendered
            }
            Err(e) => {
                log::error!("Error fetching suggestions: {e}");
                ResponseOutcome::Failed
            }
        }
    }

    pub fn render(&mut self, results: &[SuggestionResult]) {
        if results.is_empty() {
            self.rows.clear();
            self.visible = false;
            return;
        }
        self.rows = results
            .iter()
            .map(|result| SuggestionRow::new(result, &self.config))
            .collect();
        self.visible = true;
    }
}
