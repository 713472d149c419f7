//! Terminal setup and the main event loop

use crate::constants::TICK_RATE_MS;
use crate::tui::events::{EventHandler, MouseAction};
use crate::tui::{ui, App};
use crate::{Result, SearchError};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{debug, info};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Undo raw mode, the alternate screen and mouse capture on stdout.
///
/// Best effort: used on paths that are already failing.
fn reset_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Run `rollback` when a setup step failed, passing the result through
fn rollback_on_error<T>(result: Result<T>, rollback: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        rollback();
    }
    result
}

/// Restore the terminal before the default panic message is printed
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        reset_terminal();
        previous(info);
    }));
}

fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode()
        .map_err(|e| SearchError::terminal_error(&format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        SearchError::terminal_error(&format!("Failed to enter alternate screen: {}", e))
    });
    rollback_on_error(entered, reset_terminal)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(|e| SearchError::TuiError(format!("Failed to create terminal: {}", e)));
    let terminal = rollback_on_error(terminal, reset_terminal)?;

    install_panic_hook();
    Ok(terminal)
}

fn restore_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()
        .map_err(|e| SearchError::terminal_error(&format!("Failed to disable raw mode: {}", e)))?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the application until the user quits, restoring the terminal afterwards
pub fn run(app: &mut App) -> Result<()> {
    let mut terminal = setup_terminal()?;
    info!("Terminal initialized");

    let result = event_loop(&mut terminal, app);
    let restored = restore_terminal(&mut terminal);

    info!("Terminal restored");
    result.and(restored)
}

/// Poll input, fire due searches and redraw until quit
pub fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let events = EventHandler::new()?;
    let tick_rate = Duration::from_millis(TICK_RATE_MS);

    while !app.should_quit {
        app.on_tick();
        terminal
            .draw(|frame| ui::draw(frame, app))
            .map_err(|e| SearchError::TuiError(format!("Failed to draw frame: {}", e)))?;

        match events.next_event(tick_rate)? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let action = events.handle_key_event(key);
                debug!("Key action: {:?}", action);
                app.handle_key_action(action);
            }
            Some(Event::Mouse(mouse)) => {
                if let MouseAction::ClickAt(column, row) = events.handle_mouse_event(mouse) {
                    app.handle_click(column, row);
                }
            }
            _ => {}
        }
    }

    Ok(())
}
