//! Constants used throughout the application.
//!
//! This module provides constants used throughout the application.

/// Delay before a mock search completes
pub const MOCK_DELAY_MS: u64 = 1000;
pub const MAX_MOCK_DELAY_MS: u64 = 60_000;
pub const TICK_RATE_MS: u64 = 50;

pub const APP_TITLE: &str = "AI Search Hub";
pub const APP_SUBTITLE: &str = "Powered by Multiple AI Tools";
pub const QUERY_PLACEHOLDER: &str = "Ask anything...";

pub const PLACEHOLDER_PREFIX: &str = "/api/placeholder/";
pub const LOG_FILE_NAME: &str = "search-hub-debug.log";
