use crate::model::Album;

pub mod clear;
pub mod export;
pub mod help;
pub mod load;
pub mod search;
pub mod stats;

pub use stats::LibraryStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. Commands never print; the UI decides how
/// each populated field is shown.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Set by `search` when a query ran, even if nothing matched
    pub search_results: Option<Vec<String>>,
    pub stats: Option<LibraryStats>,
    pub listed_albums: Vec<Album>,
    pub help_text: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_search_results(mut self, titles: Vec<String>) -> Self {
        self.search_results = Some(titles);
        self
    }

    pub fn with_stats(mut self, stats: LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_listed_albums(mut self, albums: Vec<Album>) -> Self {
        self.listed_albums = albums;
        self
    }

    pub fn with_help_text(mut self, text: String) -> Self {
        self.help_text = Some(text);
        self
    }
}
