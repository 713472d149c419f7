//! Event handling for keyboard and mouse input

use crate::mode::Mode;
use crate::{Result, SearchError};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Event handler for TUI input
pub struct EventHandler;

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    /// Poll for the next event with timeout
    pub fn next_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)
            .map_err(|e| SearchError::TuiError(format!("Event polling failed: {}", e)))?
        {
            let event = event::read()
                .map_err(|e| SearchError::TuiError(format!("Event reading failed: {}", e)))?;
            Ok(Some(event))
        } else {
            Ok(None)
        }
    }

    /// Handle a mouse event and return the action to take
    pub fn handle_mouse_event(&self, event: MouseEvent) -> MouseAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                MouseAction::ClickAt(event.column, event.row)
            }
            _ => MouseAction::None,
        }
    }

    /// Handle a key event and return the action to take
    pub fn handle_key_event(&self, event: KeyEvent) -> KeyAction {
        match event {
            KeyEvent {
                code: KeyCode::Esc, ..
            } => KeyAction::Quit,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => KeyAction::Quit,
            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => KeyAction::Submit,
            KeyEvent {
                code: KeyCode::Tab, ..
            } => KeyAction::CycleFocus,
            KeyEvent {
                code: KeyCode::Left,
                ..
            } => KeyAction::MovePrevious,
            KeyEvent {
                code: KeyCode::Right,
                ..
            } => KeyAction::MoveNext,
            KeyEvent {
                code: KeyCode::Up, ..
            } => KeyAction::ScrollUp,
            KeyEvent {
                code: KeyCode::Down,
                ..
            } => KeyAction::ScrollDown,
            KeyEvent {
                code: KeyCode::PageUp,
                ..
            } => KeyAction::PageUp,
            KeyEvent {
                code: KeyCode::PageDown,
                ..
            } => KeyAction::PageDown,
            KeyEvent {
                code: KeyCode::F(n),
                ..
            } => match Mode::from_index(usize::from(n).wrapping_sub(1)) {
                Some(mode) => KeyAction::SelectMode(mode),
                None => KeyAction::None,
            },
            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
                ..
            } => KeyAction::InputChar(c),
            KeyEvent {
                code: KeyCode::Backspace,
                modifiers: KeyModifiers::NONE,
                ..
            } => KeyAction::DeleteChar,
            _ => KeyAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum KeyAction {
    Quit,
    Submit,
    CycleFocus,
    MovePrevious,
    MoveNext,
    SelectMode(Mode),
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    InputChar(char),
    DeleteChar,
    None,
}

#[derive(Debug, PartialEq)]
pub enum MouseAction {
    None,
    ClickAt(u16, u16),
}
