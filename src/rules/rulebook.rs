use crate::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Static rules text for each playable game kind.
///
/// Keys are game kinds such as `PrisonersDilemma`; on disk the same game is
/// stored as `prisoners_dilemma.txt`.
#[derive(Debug, Clone)]
pub struct Rulebook(BTreeMap<String, String>);

impl Default for Rulebook {
    fn default() -> Self {
        Self::empty().with(
            PRISONERS_DILEMMA,
            include_str!("../../prompts/prisoners_dilemma.txt"),
        )
    }
}

impl Rulebook {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }
    pub fn with(mut self, kind: &str, rules: &str) -> Self {
        self.0.insert(kind.to_string(), rules.trim().to_string());
        self
    }
    /// Layers every `*.txt` file in `dir` over the current entries.
    pub fn load(self, dir: &Path) -> Result<Self, ConfigError> {
        let unreadable = |e: std::io::Error| ConfigError::Unreadable(format!("{}: {}", dir.display(), e));
        let mut book = self;
        for entry in std::fs::read_dir(dir).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let text = std::fs::read_to_string(&path).map_err(unreadable)?;
            log::debug!("[rules] loaded {} from {}", Self::kind(stem), path.display());
            book = book.with(&Self::kind(stem), &text);
        }
        Ok(book)
    }
    /// Rules for `kind`, or a configuration error naming it.
    pub fn rules(&self, kind: &str) -> Result<&str, ConfigError> {
        self.0
            .get(kind)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingTemplate(kind.to_string()))
    }
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
    /// `prisoners_dilemma` -> `PrisonersDilemma`
    fn kind(stem: &str) -> String {
        stem.split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                chars
                    .next()
                    .map(|c| c.to_uppercase().chain(chars).collect::<String>())
                    .unwrap_or_default()
            })
            .collect()
    }
}
