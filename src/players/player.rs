use crate::*;

/// Anything that can take a seat and choose moves.
///
/// Every player owns its memory. `decide` receives the opponent's memory as
/// of the previous round; players that reason from their own state ignore it.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Display name used in logs and summaries.
    fn name(&self) -> &str;
    /// Own rounds so far, oldest first.
    fn memory(&self) -> &Memory;
    /// Choose this round's move.
    async fn decide(&mut self, opponent: &Memory) -> Result<Move, DecisionError>;
    /// Append a completed round to memory.
    fn record(&mut self, outcome: Outcome);
    /// Revise beliefs from the game history after a round.
    /// Players without beliefs have nothing to do.
    async fn reflect(&mut self, _history: &[Record], _seat: Seat) -> Result<(), BeliefError> {
        Ok(())
    }
    /// Current belief, for players that hold one.
    fn belief(&self) -> Option<&Belief> {
        None
    }
}
