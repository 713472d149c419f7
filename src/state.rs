//! Search panel state and its reducer
//!
//! Every change to [`SearchState`] goes through [`reduce`], which maps the
//! current state and an [`Action`] to the next state without side effects.

use crate::mode::Mode;
use crate::search::SearchResult;

/// Everything the search panel shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    /// Text in the search box
    pub query: String,
    /// Mode highlighted in the selector
    pub active_mode: Mode,
    /// Whether a submitted search has not completed yet
    pub is_loading: bool,
    /// Last completed result, possibly for a mode other than `active_mode`
    pub result: Option<SearchResult>,
}

impl SearchState {
    /// Initial state with a given mode selected
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            active_mode: mode,
            ..Self::default()
        }
    }
}

/// State transitions of the search panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetQuery(String),
    SelectMode(Mode),
    SearchStarted,
    SearchCompleted(SearchResult),
}

/// Apply an action to a state, producing the next state
pub fn reduce(state: SearchState, action: Action) -> SearchState {
    match action {
        Action::SetQuery(query) => SearchState { query, ..state },
        // the previous result and any in-flight search are left alone
        Action::SelectMode(active_mode) => SearchState {
            active_mode,
            ..state
        },
        Action::SearchStarted => SearchState {
            is_loading: true,
            ..state
        },
        Action::SearchCompleted(result) => SearchState {
            is_loading: false,
            result: Some(result),
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::generate_results;

    #[test]
    fn test_default_state() {
        let state = SearchState::default();
        assert_eq!(state.query, "");
        assert_eq!(state.active_mode, Mode::Smart);
        assert!(!state.is_loading);
        assert!(state.result.is_none());
    }

    #[test]
    fn test_set_query_replaces_text() {
        let state = reduce(SearchState::default(), Action::SetQuery("rust".into()));
        let state = reduce(state, Action::SetQuery("".into()));
        assert_eq!(state.query, "");

        let long = "x".repeat(10_000);
        let state = reduce(state, Action::SetQuery(long.clone()));
        assert_eq!(state.query, long);
    }

    #[test]
    fn test_select_mode_keeps_result_and_loading() {
        let state = SearchState {
            is_loading: true,
            result: Some(generate_results(Mode::Smart, "")),
            ..SearchState::default()
        };

        let next = reduce(state.clone(), Action::SelectMode(Mode::Code));
        assert_eq!(next.active_mode, Mode::Code);
        assert!(next.is_loading);
        assert_eq!(next.result, state.result);
    }

    #[test]
    fn test_select_same_mode_is_idempotent() {
        let state = SearchState::with_mode(Mode::Video);
        let once = reduce(state.clone(), Action::SelectMode(Mode::Video));
        let twice = reduce(once.clone(), Action::SelectMode(Mode::Video));
        assert_eq!(once, state);
        assert_eq!(twice, state);
    }

    #[test]
    fn test_search_lifecycle() {
        let state = reduce(SearchState::default(), Action::SearchStarted);
        assert!(state.is_loading);
        assert!(state.result.is_none());

        let state = reduce(
            state,
            Action::SearchCompleted(generate_results(Mode::Image, "")),
        );
        assert!(!state.is_loading);
        assert_eq!(state.result.as_ref().map(|r| r.mode()), Some(Mode::Image));
    }

    #[test]
    fn test_completion_overwrites_previous_result() {
        let state = reduce(
            SearchState::default(),
            Action::SearchCompleted(generate_results(Mode::Smart, "")),
        );
        let state = reduce(
            state,
            Action::SearchCompleted(generate_results(Mode::Chat, "again")),
        );
        assert_eq!(state.result.map(|r| r.mode()), Some(Mode::Chat));
    }
}
