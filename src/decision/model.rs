use super::*;
use crate::*;
use std::sync::Arc;

/// Turns a player's belief and memory into a move via the text generator.
///
/// The game kind is fixed at construction so a missing rules template is a
/// configuration error up front rather than a failure mid-match.
#[derive(Clone)]
pub struct DecisionModel {
    generator: Arc<dyn Generator>,
    kind: String,
    rules: String,
    mode: Mode,
}

impl DecisionModel {
    pub fn new(
        generator: Arc<dyn Generator>,
        rulebook: &Rulebook,
        kind: &str,
        mode: Mode,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            generator,
            kind: kind.to_string(),
            rules: rulebook.rules(kind)?.to_string(),
            mode,
        })
    }

    /// Asks the model for the next move.
    pub async fn decide(&self, belief: &Belief, memory: &Memory) -> Result<Move, DecisionError> {
        let prompt = self.prompt(belief, memory);
        log::debug!("[decision] prompt:\n{}", prompt);
        let text = self
            .generator
            .complete(&Request::from(prompt))
            .await
            .map_err(DecisionError::Generation)?;
        log::debug!("[decision] completion:\n{}", text);
        extract(&text)
    }

    /// Deterministic prompt for the current state.
    pub fn prompt(&self, belief: &Belief, memory: &Memory) -> String {
        format!(
            "You are playing the following game: {kind}.\n\
             {rules}\n\
             You have the choice of either '{c}' ({cl}) or '{d}' ({dl}).\n\n\
             {context}\n\n\
             Based on your understanding of your opponent and yourself, \
             what is the best possible next move to maximise your utility?\n\
             Think step-by-step to predict what you would do, what your opponent would do, \
             and what the outcome would be.\n\
             Then, with a blank line in between, return the best possible next move \
             e.g. {c} or {d}, and only {c} or {d}, nothing else.",
            kind = self.kind,
            rules = self.rules,
            c = Move::Cooperate,
            d = Move::Defect,
            cl = Move::Cooperate.label(),
            dl = Move::Defect.label(),
            context = self.context(belief, memory),
        )
    }

    fn context(&self, belief: &Belief, memory: &Memory) -> String {
        match self.mode {
            Mode::History if memory.is_empty() => String::from("No rounds have been played yet."),
            Mode::History => format!(
                "The history of the game is as follows \
                 (tuples of (decision, opponent decision, payoff)):\n{}",
                memory.to_json()
            ),
            Mode::Beliefs => format!(
                "Rounds played so far: {}.\n\
                 Your understanding of yourself: {}\n\
                 Your understanding of your opponent: {}",
                memory.len(),
                belief.own(),
                belief.opponent()
            ),
        }
    }
}
