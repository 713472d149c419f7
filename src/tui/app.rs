//! TUI application state and event handling

use crate::mode::Mode;
use crate::panel::SearchPanel;
use crate::tui::events::KeyAction;
use crate::tui::highlighter::SyntaxHighlighter;
use crate::tui::ui::ModeAreaInfo;
use log::debug;
use throbber_widgets_tui::ThrobberState;

/// Input focus state for the search interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    /// Search box is focused
    Search,
    /// Mode selector is focused
    Modes,
}

/// Main TUI application state
pub struct App {
    /// The search panel component
    pub panel: SearchPanel,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input focus state
    pub input_focus: InputFocus,

    /// Spinner shown in the submit control while loading
    pub throbber_state: ThrobberState,

    /// Highlighter for code results
    pub highlighter: SyntaxHighlighter,

    /// Screen areas of the mode cards from the last draw, for mouse clicks
    pub mode_areas: Vec<ModeAreaInfo>,

    /// First visible row of the results panel
    pub results_scroll: u16,

    /// Largest useful scroll offset, from the last draw
    results_max_scroll: u16,

    /// Visible rows of the results panel, from the last draw
    results_page: u16,
}

impl App {
    /// Create new application instance
    pub fn new(panel: SearchPanel) -> Self {
        Self {
            panel,
            should_quit: false,
            input_focus: InputFocus::Search,
            throbber_state: ThrobberState::default(),
            highlighter: SyntaxHighlighter::new(),
            mode_areas: Vec::new(),
            results_scroll: 0,
            results_max_scroll: 0,
            results_page: 0,
        }
    }

    /// Advance time-driven state: fire due searches and spin the spinner
    pub fn on_tick(&mut self) {
        if self.panel.tick() > 0 {
            // a fresh result starts at the top
            self.results_scroll = 0;
        }
        if self.panel.is_loading() {
            self.throbber_state.calc_next();
        }
    }

    /// Toggle input focus
    pub fn toggle_focus(&mut self) {
        self.input_focus = match self.input_focus {
            InputFocus::Search => InputFocus::Modes,
            InputFocus::Modes => InputFocus::Search,
        };
    }

    /// Set quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Press the submit control. Ignored while the control is disabled.
    pub fn submit(&mut self) {
        if self.panel.submit_enabled() {
            self.panel.submit_search();
        } else {
            debug!("Submit ignored while a search is loading");
        }
    }

    /// Record the size of the results panel and clamp the scroll offset to it
    pub fn set_results_viewport(&mut self, total_rows: u16, visible_rows: u16) {
        self.results_max_scroll = total_rows.saturating_sub(visible_rows);
        self.results_page = visible_rows;
        self.results_scroll = self.results_scroll.min(self.results_max_scroll);
    }

    /// Scroll the results panel down by `rows`, stopping at the last row
    pub fn scroll_down(&mut self, rows: u16) {
        self.results_scroll = self
            .results_scroll
            .saturating_add(rows)
            .min(self.results_max_scroll);
    }

    /// Scroll the results panel up by `rows`
    pub fn scroll_up(&mut self, rows: u16) {
        self.results_scroll = self.results_scroll.saturating_sub(rows);
    }

    /// Apply a key action
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::Submit => self.submit(),
            KeyAction::CycleFocus => self.toggle_focus(),
            KeyAction::MovePrevious if self.input_focus == InputFocus::Modes => {
                let mode = self.panel.active_mode().previous();
                self.panel.select_mode(mode);
            }
            KeyAction::MoveNext if self.input_focus == InputFocus::Modes => {
                let mode = self.panel.active_mode().next();
                self.panel.select_mode(mode);
            }
            KeyAction::SelectMode(mode) => self.panel.select_mode(mode),
            KeyAction::ScrollUp => self.scroll_up(1),
            KeyAction::ScrollDown => self.scroll_down(1),
            KeyAction::PageUp => self.scroll_up(self.results_page.max(1)),
            KeyAction::PageDown => self.scroll_down(self.results_page.max(1)),
            KeyAction::InputChar(c) if self.input_focus == InputFocus::Search => {
                self.panel.push_char(c)
            }
            KeyAction::DeleteChar if self.input_focus == InputFocus::Search => {
                self.panel.pop_char()
            }
            _ => {}
        }
    }

    /// Handle a left click. Returns true if a mode card was hit.
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        let hit = self
            .mode_areas
            .iter()
            .find(|area| area.contains(column, row))
            .map(|area| area.mode);

        match hit {
            Some(mode) => {
                self.panel.select_mode(mode);
                self.input_focus = InputFocus::Modes;
                true
            }
            None => false,
        }
    }

    /// Status line text
    pub fn get_status_message(&self) -> String {
        if self.panel.is_loading() {
            format!(
                "Waiting for {} result(s)...",
                self.panel.pending_searches()
            )
        } else if let Some(result) = self.panel.result() {
            format!("Showing {} results", result.mode().name())
        } else {
            "Ready to search".to_string()
        }
    }

    pub fn active_mode(&self) -> Mode {
        self.panel.active_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::time::Duration;

    fn test_app() -> (App, ManualClock) {
        let clock = ManualClock::new();
        let panel = SearchPanel::new(Mode::Smart, Duration::from_secs(1), clock.clone());
        (App::new(panel), clock)
    }

    #[test]
    fn test_typing_edits_query_only_when_search_focused() {
        let (mut app, _clock) = test_app();
        for c in "hi".chars() {
            app.handle_key_action(KeyAction::InputChar(c));
        }
        app.handle_key_action(KeyAction::DeleteChar);
        assert_eq!(app.panel.query(), "h");

        app.handle_key_action(KeyAction::CycleFocus);
        app.handle_key_action(KeyAction::InputChar('x'));
        app.handle_key_action(KeyAction::DeleteChar);
        assert_eq!(app.panel.query(), "h");
    }

    #[test]
    fn test_arrows_move_mode_only_when_selector_focused() {
        let (mut app, _clock) = test_app();
        app.handle_key_action(KeyAction::MoveNext);
        assert_eq!(app.active_mode(), Mode::Smart);

        app.handle_key_action(KeyAction::CycleFocus);
        assert_eq!(app.input_focus, InputFocus::Modes);
        app.handle_key_action(KeyAction::MoveNext);
        assert_eq!(app.active_mode(), Mode::Image);
        app.handle_key_action(KeyAction::MovePrevious);
        app.handle_key_action(KeyAction::MovePrevious);
        assert_eq!(app.active_mode(), Mode::Chat);
    }

    #[test]
    fn test_function_keys_select_mode_from_any_focus() {
        let (mut app, _clock) = test_app();
        app.handle_key_action(KeyAction::SelectMode(Mode::Code));
        assert_eq!(app.active_mode(), Mode::Code);
        assert!(app.panel.result().is_none());
    }

    #[test]
    fn test_submit_disabled_while_loading() {
        let (mut app, clock) = test_app();
        app.handle_key_action(KeyAction::Submit);
        app.handle_key_action(KeyAction::Submit);
        assert_eq!(app.panel.pending_searches(), 1);

        clock.advance(Duration::from_secs(1));
        app.on_tick();
        assert!(!app.panel.is_loading());

        app.handle_key_action(KeyAction::Submit);
        assert_eq!(app.panel.pending_searches(), 1);
    }

    #[test]
    fn test_status_message() {
        let (mut app, clock) = test_app();
        assert_eq!(app.get_status_message(), "Ready to search");

        app.submit();
        assert_eq!(app.get_status_message(), "Waiting for 1 result(s)...");

        clock.advance(Duration::from_secs(1));
        app.on_tick();
        assert_eq!(app.get_status_message(), "Showing Smart Search results");
    }

    #[test]
    fn test_click_on_mode_card() {
        let (mut app, _clock) = test_app();
        app.mode_areas = vec![
            ModeAreaInfo {
                mode: Mode::Smart,
                left: 0,
                top: 5,
                width: 10,
                height: 4,
            },
            ModeAreaInfo {
                mode: Mode::Chat,
                left: 10,
                top: 5,
                width: 10,
                height: 4,
            },
        ];

        assert!(app.handle_click(12, 6));
        assert_eq!(app.active_mode(), Mode::Chat);
        assert_eq!(app.input_focus, InputFocus::Modes);

        assert!(!app.handle_click(12, 9));
        assert!(!app.handle_click(30, 6));
        assert_eq!(app.active_mode(), Mode::Chat);
    }

    #[test]
    fn test_scroll_is_clamped_to_viewport() {
        let (mut app, _clock) = test_app();
        app.set_results_viewport(11, 8);

        app.handle_key_action(KeyAction::ScrollDown);
        assert_eq!(app.results_scroll, 1);
        app.handle_key_action(KeyAction::PageDown);
        assert_eq!(app.results_scroll, 3);
        app.handle_key_action(KeyAction::ScrollDown);
        assert_eq!(app.results_scroll, 3);

        app.handle_key_action(KeyAction::ScrollUp);
        assert_eq!(app.results_scroll, 2);
        app.handle_key_action(KeyAction::PageUp);
        assert_eq!(app.results_scroll, 0);

        // shrinking content pulls the offset back
        app.scroll_down(3);
        app.set_results_viewport(9, 8);
        assert_eq!(app.results_scroll, 1);
    }

    #[test]
    fn test_new_result_resets_scroll() {
        let (mut app, clock) = test_app();
        app.set_results_viewport(20, 5);
        app.scroll_down(4);
        app.submit();
        app.on_tick();
        assert_eq!(app.results_scroll, 4);

        clock.advance(Duration::from_secs(1));
        app.on_tick();
        assert_eq!(app.results_scroll, 0);
    }

    #[test]
    fn test_quit() {
        let (mut app, _clock) = test_app();
        assert!(!app.should_quit);
        app.handle_key_action(KeyAction::Quit);
        assert!(app.should_quit);
    }
}
