//! Command Line Interface module
//!
//! Handles command-line argument parsing using clap

use crate::constants::{MAX_MOCK_DELAY_MS, MOCK_DELAY_MS};
use crate::mode::Mode;
use crate::{Result, SearchError};
use clap::Parser;
use std::time::Duration;

/// AI Search Hub - a terminal mock of a multi-mode AI search interface
#[derive(Parser, Debug)]
#[command(
    name = "search-hub",
    about = "AI Search Hub - a terminal mock of a multi-mode AI search interface",
    long_about = "AI Search Hub - terminal search panel with smart search, image analysis,
video generation, code assistant and chat modes. All results are placeholder data.

    EXAMPLES:
        search-hub
        search-hub \"what is rust\" --submit
        search-hub -m chat \"hello\" # Start in chat mode
        search-hub --delay-ms 250 # Faster mock results

    USAGE TIP:
        Type a query and press Enter, Tab switches focus to the mode selector
    "
)]
#[command(version)]
pub struct Cli {
    /// Initial query text
    #[arg(help = "Initial text of the search box")]
    pub query: Option<String>,

    /// Initial mode
    #[arg(
        short,
        long,
        default_value = "smart",
        value_parser = parse_mode,
        help = "Initial mode: smart, image, video, code or chat"
    )]
    pub mode: Mode,

    /// Mock completion delay
    #[arg(
        long,
        default_value_t = MOCK_DELAY_MS,
        help = "Milliseconds before a mock search completes"
    )]
    pub delay_ms: u64,

    /// Submit the initial query on start
    #[arg(long, help = "Submit the initial query immediately")]
    pub submit: bool,

    /// debug mode
    #[arg(
        short,
        long,
        help = "Debug mode (logging to temp file with timestamps)"
    )]
    pub debug: bool,
}

fn parse_mode(value: &str) -> std::result::Result<Mode, String> {
    Mode::from_id(value).ok_or_else(|| {
        let known: Vec<&str> = Mode::ALL.iter().map(|mode| mode.id()).collect();
        format!("unknown mode '{}', expected one of: {}", value, known.join(", "))
    })
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if self.delay_ms > MAX_MOCK_DELAY_MS {
            return Err(SearchError::InvalidArguments(format!(
                "--delay-ms must be at most {}",
                MAX_MOCK_DELAY_MS
            )));
        }
        Ok(())
    }

    /// Mock completion delay
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Initial query, empty when none was given
    pub fn initial_query(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }
}
