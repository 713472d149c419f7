//! Search modes offered by the mode selector.

use std::fmt;

/// One of the five supported search styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Smart,
    Image,
    Video,
    Code,
    Chat,
}

impl Mode {
    /// All modes in selector order
    pub const ALL: [Mode; 5] = [Mode::Smart, Mode::Image, Mode::Video, Mode::Code, Mode::Chat];

    /// Stable identifier, also used on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Mode::Smart => "smart",
            Mode::Image => "image",
            Mode::Video => "video",
            Mode::Code => "code",
            Mode::Chat => "chat",
        }
    }

    /// Display name shown on the selector card
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Smart => "Smart Search",
            Mode::Image => "Image Analysis",
            Mode::Video => "Video Generation",
            Mode::Code => "Code Assistant",
            Mode::Chat => "AI Chat",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mode::Smart => "AI-enhanced search with natural language understanding",
            Mode::Image => "Search and analyze images with AI",
            Mode::Video => "Generate videos from text descriptions",
            Mode::Code => "Search and generate code snippets",
            Mode::Chat => "Have a conversation about your search",
        }
    }

    /// Glyph drawn at the top of the selector card
    pub fn icon(&self) -> &'static str {
        match self {
            Mode::Smart => "✦",
            Mode::Image => "▣",
            Mode::Video => "▶",
            Mode::Code => "</>",
            Mode::Chat => "✉",
        }
    }

    /// Parse a mode from its identifier
    pub fn from_id(id: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|mode| mode.id() == id)
    }

    /// Position in selector order
    pub fn index(&self) -> usize {
        Mode::ALL
            .iter()
            .position(|mode| mode == self)
            .unwrap_or_default()
    }

    /// Mode at a selector position, if any
    pub fn from_index(index: usize) -> Option<Mode> {
        Mode::ALL.get(index).copied()
    }

    /// Next mode to the right, wrapping around
    pub fn next(&self) -> Mode {
        Mode::ALL[(self.index() + 1) % Mode::ALL.len()]
    }

    /// Previous mode to the left, wrapping around
    pub fn previous(&self) -> Mode {
        Mode::ALL[(self.index() + Mode::ALL.len() - 1) % Mode::ALL.len()]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
