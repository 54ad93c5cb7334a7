/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Clear,
    Export(String),
    Load(String),
    Stats { detailed: bool },
    Search(String),
    Exit,
    /// Anything else, including an empty line. Ignored by the session.
    Unknown(String),
}

impl ReplCommand {
    /// Split off the first word as the command (case-insensitive) and hand the
    /// trimmed remainder to it verbatim.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "help" => ReplCommand::Help,
            "clear" => ReplCommand::Clear,
            "export" => ReplCommand::Export(rest.to_string()),
            "load" => ReplCommand::Load(rest.to_string()),
            "stats" => ReplCommand::Stats {
                detailed: rest == "-d",
            },
            "search" => ReplCommand::Search(rest.to_string()),
            "exit" => ReplCommand::Exit,
            other => ReplCommand::Unknown(other.to_string()),
        }
    }
}
