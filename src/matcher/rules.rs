use regex::{Captures, Regex};

/// Canonical command names, one per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    StopMusic,
    StartMusic,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    PlaySong,
}

impl CommandName {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::StopMusic => "stop_music",
            CommandName::StartMusic => "start_music",
            CommandName::NextTrack => "next_track",
            CommandName::PreviousTrack => "previous_track",
            CommandName::VolumeUp => "volume_up",
            CommandName::VolumeDown => "volume_down",
            CommandName::PlaySong => "play_song",
        }
    }
}

/// A resolved command carrying its extracted arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StopMusic,
    StartMusic,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    PlaySong { title: String, artist: Option<String> },
}

impl Command {
    pub fn name(&self) -> CommandName {
        match self {
            Command::StopMusic => CommandName::StopMusic,
            Command::StartMusic => CommandName::StartMusic,
            Command::NextTrack => CommandName::NextTrack,
            Command::PreviousTrack => CommandName::PreviousTrack,
            Command::VolumeUp => CommandName::VolumeUp,
            Command::VolumeDown => CommandName::VolumeDown,
            Command::PlaySong { .. } => CommandName::PlaySong,
        }
    }
}

struct Rule {
    pattern: Regex,
    name: CommandName,
}

fn rule(pattern: &str, name: CommandName) -> Rule {
    Rule {
        pattern: Regex::new(pattern).expect("built-in pattern is valid"),
        name,
    }
}

/// The ordered rule list. Position is priority: the first matching pattern
/// wins even when a later one would also match the same text.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// The built-in command patterns, in priority order.
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                rule(r"(?i)\bstop music\b", CommandName::StopMusic),
                rule(r"(?i)\bstart music\b", CommandName::StartMusic),
                rule(r"(?i)\bnext song\b", CommandName::NextTrack),
                rule(r"(?i)\bgo back\b", CommandName::PreviousTrack),
                rule(r"(?i)\bvolume up\b", CommandName::VolumeUp),
                rule(r"(?i)\bvolume down\b", CommandName::VolumeDown),
                rule(r"(?i)\bplay (.+?) by (.+)", CommandName::PlaySong),
            ],
        }
    }

    /// Resolve text to the first matching command. Patterns use search
    /// semantics: a match anywhere in the text counts.
    pub fn resolve(&self, text: &str) -> Option<Command> {
        self.rules
            .iter()
            .find_map(|r| r.pattern.captures(text).map(|c| build(r.name, &c)))
    }
}

/// Build the command payload from the rule's captures. Arguments are
/// whitespace-trimmed; trailing punctuation spoken as part of the name is
/// kept as-is.
fn build(name: CommandName, caps: &Captures) -> Command {
    match name {
        CommandName::StopMusic => Command::StopMusic,
        CommandName::StartMusic => Command::StartMusic,
        CommandName::NextTrack => Command::NextTrack,
        CommandName::PreviousTrack => Command::PreviousTrack,
        CommandName::VolumeUp => Command::VolumeUp,
        CommandName::VolumeDown => Command::VolumeDown,
        CommandName::PlaySong => {
            let title = caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            let artist = caps.get(2).map(|m| m.as_str().trim().to_string());
            Command::PlaySong { title, artist }
        }
    }
}
