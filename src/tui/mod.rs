//! Terminal User Interface module
//!
//! Renders the search panel and drives it from keyboard, mouse and timer events

pub mod app;
pub mod events;
pub mod highlighter;
pub mod runner;
pub mod ui;
pub mod wrap;

pub use app::App;
pub use ui::ModeAreaInfo;
