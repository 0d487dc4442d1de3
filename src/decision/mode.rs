/// What a model-driven player shows the model when asking for a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// The full (decision, opponent decision, payoff) history.
    History,
    /// The current self and opponent beliefs.
    #[default]
    Beliefs,
}
