//! AI Search Hub - a terminal mock of a multi-mode AI search interface
//!
//! A search box, a mode selector and a results panel whose shape depends on
//! the mode. Results are canned placeholder data delivered after a fixed delay.

pub mod cli;
pub mod clock;
pub mod constants;
pub mod error;
pub mod logging;
pub mod mode;
pub mod panel;
pub mod search;
pub mod state;
pub mod tui;

// Re-export `Cli` for use from `main`
pub use cli::Cli;
pub use error::{Result, SearchError};
pub use mode::Mode;
pub use panel::SearchPanel;
