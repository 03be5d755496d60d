use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_ACTIVATION_PHRASE: &str = "hey rex";

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Spoken phrase that arms the matcher for the next utterance.
    #[serde(default = "default_activation_phrase")]
    pub activation_phrase: String,
}

fn default_activation_phrase() -> String {
    DEFAULT_ACTIVATION_PHRASE.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            activation_phrase: default_activation_phrase(),
        }
    }
}

impl Config {
    /// Directory: ~/.config/rex-commands/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("rex-commands");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from disk. A missing file is written out with defaults so there
    /// is something to edit; invalid contents fall back to defaults.
    pub fn load_or_init() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => {
                let config = Self::default();
                if let Err(e) = config.save() {
                    log::warn!("Failed to write default config: {e}");
                }
                config
            }
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
}
