use serde::Deserialize;

/// What the game does when a player's belief revision fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tolerance {
    /// Log the failure and keep playing on the prior belief.
    #[default]
    Continue,
    /// Stop the match.
    Abort,
}

/// Per-match policies.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Extra `decide` attempts after a failed decision before aborting.
    pub retries: usize,
    pub on_belief_failure: Tolerance,
    /// Pause after every round.
    pub pace: std::time::Duration,
}
