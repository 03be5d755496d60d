use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::matcher::Outcome;

/// Outcome counts for one pass over a transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassRecord {
    pub input: String,
    pub timestamp: String,
    pub activated: usize,
    pub matched: usize,
    pub no_match: usize,
    pub ignored: usize,
}

impl PassRecord {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            ..Self::default()
        }
    }

    /// Count one segment's outcome.
    pub fn note(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Activated => self.activated += 1,
            Outcome::Matched(_) => self.matched += 1,
            Outcome::NoMatch { .. } => self.no_match += 1,
            Outcome::Ignored => self.ignored += 1,
        }
    }

    pub fn segments(&self) -> usize {
        self.activated + self.matched + self.no_match + self.ignored
    }
}

/// Persistent usage statistics across passes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stats {
    pub total_segments: usize,
    pub total_matched: usize,
    #[serde(default)]
    pub history: Vec<PassRecord>,
}

impl Stats {
    /// Directory: ~/.local/share/rex-commands/
    fn dir() -> PathBuf {
        let mut p = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("rex-commands");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("stats.json")
    }

    /// Load from disk, returning defaults if missing.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = Self::dir();
        fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }

    /// Record a completed pass.
    pub fn record_pass(&mut self, record: PassRecord) {
        self.total_segments += record.segments();
        self.total_matched += record.matched;
        self.history.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::CommandName;

    #[test]
    fn pass_record_tallies_outcomes() {
        let mut record = PassRecord::new("transcript.csv");
        record.note(&Outcome::Activated);
        record.note(&Outcome::Matched(CommandName::StartMusic));
        record.note(&Outcome::NoMatch {
            cleaned: "next song".into(),
        });
        record.note(&Outcome::Ignored);
        record.note(&Outcome::Ignored);

        assert_eq!(record.activated, 1);
        assert_eq!(record.matched, 1);
        assert_eq!(record.no_match, 1);
        assert_eq!(record.ignored, 2);
        assert_eq!(record.segments(), 5);
    }

    #[test]
    fn record_pass_updates_totals_and_history() {
        let mut stats = Stats::default();
        let mut record = PassRecord::new("a.csv");
        record.note(&Outcome::Matched(CommandName::StopMusic));
        record.note(&Outcome::Ignored);
        stats.record_pass(record);

        assert_eq!(stats.total_segments, 2);
        assert_eq!(stats.total_matched, 1);
        assert_eq!(stats.history.len(), 1);
    }
}
