use crate::*;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;

/// Match section of the configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub rounds: usize,
    pub retries: usize,
    pub on_belief_failure: Tolerance,
    pub pace_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            retries: 0,
            on_belief_failure: Tolerance::default(),
            pace_ms: DEFAULT_PACE_MS,
        }
    }
}

impl From<&MatchConfig> for Settings {
    fn from(config: &MatchConfig) -> Self {
        Self {
            retries: config.retries,
            on_belief_failure: config.on_belief_failure,
            pace: std::time::Duration::from_millis(config.pace_ms),
        }
    }
}

/// Everything the binary needs to seat players and run a match.
///
/// ```toml
/// templates = "prompt_templates"
///
/// [llm]
/// url     = "https://example.openai.azure.com"
/// model   = "gpt4_large"
/// flavor  = "azure"
/// api_key = "..."
///
/// [match]
/// rounds            = 10
/// retries           = 1
/// on_belief_failure = "continue"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub llm: Endpoint,
    /// Directory of `<game_kind>.txt` rules files layered over the built-ins.
    #[serde(default)]
    pub templates: Option<PathBuf>,
    #[serde(default, rename = "match")]
    pub game: MatchConfig,
}

impl Config {
    /// Reads the file at `path`, then lets `DILEMMA_API_KEY` override the key.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(format!("{}: {}", path.display(), e)))?;
        Self::parse(&text).map(|config| config.with_key(std::env::var(API_KEY_VAR).ok()))
    }
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Self>(text)
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        if config.game.rounds == 0 {
            return Err(ConfigError::Malformed(String::from("rounds must be positive")));
        }
        Ok(config)
    }
    /// Replaces the configured key when `key` holds a non-blank value.
    pub fn with_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
        self
    }
    pub fn settings(&self) -> Settings {
        Settings::from(&self.game)
    }
    /// Built-in rules plus any overrides from the templates directory.
    pub fn rulebook(&self) -> Result<Rulebook, ConfigError> {
        match self.templates {
            Some(ref dir) => Rulebook::default().load(dir),
            None => Ok(Rulebook::default()),
        }
    }
}
