//! The search panel component
//!
//! Owns the [`SearchState`], the time source and the queue of mock searches.
//! User input is turned into reducer actions here.

use crate::clock::{Clock, SystemClock};
use crate::mode::Mode;
use crate::search::{MockEngine, SearchResult};
use crate::state::{reduce, Action, SearchState};
use log::{debug, trace};
use std::time::Duration;

/// Search box, mode selector and results panel state
pub struct SearchPanel {
    state: SearchState,
    engine: MockEngine,
    clock: Box<dyn Clock>,
}

impl SearchPanel {
    /// Create a panel reading time from `clock`
    pub fn new(mode: Mode, delay: Duration, clock: impl Clock + 'static) -> Self {
        Self {
            state: SearchState::with_mode(mode),
            engine: MockEngine::new(delay),
            clock: Box::new(clock),
        }
    }

    /// Create a panel on the wall clock
    pub fn with_system_clock(mode: Mode, delay: Duration) -> Self {
        Self::new(mode, delay, SystemClock)
    }

    fn dispatch(&mut self, action: Action) {
        self.state = reduce(std::mem::take(&mut self.state), action);
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn active_mode(&self) -> Mode {
        self.state.active_mode
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn result(&self) -> Option<&SearchResult> {
        self.state.result.as_ref()
    }

    /// Replace the query text. Any text is accepted.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        trace!("Query set to {:?}", text);
        self.dispatch(Action::SetQuery(text));
    }

    /// Append a character to the query
    pub fn push_char(&mut self, c: char) {
        let mut query = self.state.query.clone();
        query.push(c);
        self.set_query(query);
    }

    /// Remove the last character of the query
    pub fn pop_char(&mut self) {
        let mut query = self.state.query.clone();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    /// Switch the active mode. Does not touch the result or pending searches.
    pub fn select_mode(&mut self, mode: Mode) {
        if mode != self.state.active_mode {
            debug!("Mode changed {} -> {}", self.state.active_mode, mode);
        }
        self.dispatch(Action::SelectMode(mode));
    }

    /// Whether the submit control accepts input
    pub fn submit_enabled(&self) -> bool {
        !self.state.is_loading
    }

    /// Start a mock search for the current mode and query.
    ///
    /// The panel does not refuse overlapping submissions; callers that model
    /// the submit control check [`SearchPanel::submit_enabled`] first.
    pub fn submit_search(&mut self) {
        let now = self.clock.now();
        let mode = self.state.active_mode;
        let query = self.state.query.clone();
        self.engine.schedule(mode, &query, now);
        self.dispatch(Action::SearchStarted);
    }

    /// Complete every search whose deadline has passed.
    ///
    /// Each completion overwrites the result, so the last one to fire wins.
    /// Returns how many completed.
    pub fn tick(&mut self) -> usize {
        let due = self.engine.take_due(self.clock.now());
        let fired = due.len();
        for search in due {
            debug!("Search completed for {} mode", search.mode);
            self.dispatch(Action::SearchCompleted(search.into_result()));
        }
        fired
    }

    /// Number of submitted searches that have not completed
    pub fn pending_searches(&self) -> usize {
        self.engine.pending_len()
    }
}
