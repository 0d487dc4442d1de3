//! Iterated Prisoner's Dilemma between language-model agents.
//!
//! Each model-driven agent carries a free-text belief about itself and about
//! its opponent. Every round the belief (or the raw history) is turned into a
//! prompt, the completion is parsed into a [`Move`], and after scoring the
//! belief is revised from the newest outcome.
pub mod belief;
pub mod config;
pub mod decision;
pub mod game;
pub mod llm;
pub mod players;
pub mod rules;
pub mod stats;

pub use belief::*;
pub use config::*;
pub use decision::*;
pub use game::*;
pub use llm::*;
pub use players::*;
pub use rules::*;
pub use stats::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Utility earned by one player in one round.
pub type Payoff = i32;
/// Averages and rates derived from payoffs.
pub type Utility = f32;
/// Zero-based seat index at the table (0 = first player).
pub type Seat = usize;

// ============================================================================
// PAYOFF MATRIX
// Indexed by (own move, opponent move); entries are (own, opponent) utility.
// ============================================================================
/// Both cooperate.
pub const REWARD: Payoff = 3;
/// Defect against a cooperator.
pub const TEMPTATION: Payoff = 5;
/// Cooperate against a defector.
pub const SUCKER: Payoff = 0;
/// Both defect.
pub const PUNISHMENT: Payoff = 1;

// ============================================================================
// SAMPLING CONFIGURATION
// Fixed for every decision and belief revision request.
// ============================================================================
/// Sampling temperature.
pub const TEMPERATURE: f32 = 0.7;
/// Nucleus sampling mass.
pub const TOP_P: f32 = 0.95;
/// Completion length cap in tokens.
pub const MAX_TOKENS: u32 = 150;
/// Frequency penalty.
pub const FREQUENCY_PENALTY: f32 = 0.0;
/// Presence penalty.
pub const PRESENCE_PENALTY: f32 = 0.0;

// ============================================================================
// MATCH DEFAULTS
// ============================================================================
/// Rounds played when nothing else is configured.
pub const DEFAULT_ROUNDS: usize = 10;
/// Seconds before an outbound generation request is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Delay between rounds used by the binary to stay under provider rate limits.
pub const DEFAULT_PACE_MS: u64 = 1000;
/// Environment variable that overrides the configured API key.
pub const API_KEY_VAR: &str = "DILEMMA_API_KEY";
/// Game kind key of the only game shipped with a built-in rulebook entry.
pub const PRISONERS_DILEMMA: &str = "PrisonersDilemma";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Match log for a run started `secs` after the epoch.
pub fn log_path(secs: u64) -> std::path::PathBuf {
    std::path::Path::new("logs").join(format!("dilemma-{}.log", secs))
}

/// Terminal gets INFO round summaries; `logs/dilemma-<secs>.log` gets DEBUG,
/// which includes every prompt and completion.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<std::path::PathBuf> {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let path = log_path(secs);
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .add_filter_allow_str("tomdilemma")
        .add_filter_allow_str("dilemma")
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path)?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(path)
}
