//! Mock search results
//!
//! Defines the mode-tagged result payloads and the fixed-delay mock engine
//! that produces them

pub mod engine;

pub use engine::{generate_results, MockEngine, PendingSearch};

use crate::constants::PLACEHOLDER_PREFIX;
use crate::mode::Mode;

/// A source cited by a smart search answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub relevance: String,
}

/// Technical details of a generated video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
    pub duration: String,
    pub style: String,
    pub resolution: String,
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Assistant,
    User,
}

impl Role {
    /// Speaker label shown in front of a chat message
    pub fn label(&self) -> &'static str {
        match self {
            Role::Assistant => "AI",
            Role::User => "You",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Payload rendered in the results panel, tagged by the mode it was produced for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Smart {
        answer: String,
        sources: Vec<Source>,
    },
    Image {
        analysis: String,
        similar_images: Vec<String>,
    },
    Video {
        status: String,
        preview: String,
        details: VideoDetails,
        generation_steps: Vec<String>,
    },
    Code {
        snippet: String,
        explanation: String,
        suggestions: Vec<String>,
    },
    Chat {
        messages: Vec<ChatMessage>,
    },
}

impl SearchResult {
    /// The mode this result was produced for
    pub fn mode(&self) -> Mode {
        match self {
            SearchResult::Smart { .. } => Mode::Smart,
            SearchResult::Image { .. } => Mode::Image,
            SearchResult::Video { .. } => Mode::Video,
            SearchResult::Code { .. } => Mode::Code,
            SearchResult::Chat { .. } => Mode::Chat,
        }
    }
}

/// Parse `(width, height)` out of a `/api/placeholder/<w>/<h>` image path
pub fn placeholder_dimensions(path: &str) -> Option<(u32, u32)> {
    let rest = path.strip_prefix(PLACEHOLDER_PREFIX)?;
    let (width, height) = rest.split_once('/')?;
    Some((width.parse().ok()?, height.parse().ok()?))
}
