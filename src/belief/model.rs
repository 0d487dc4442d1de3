use super::*;
use crate::*;
use std::sync::Arc;

/// Revises beliefs from the newest round via the text generator.
///
/// Each half of the belief is revised by its own call from its own prior,
/// so the two requests are independent of each other.
#[derive(Clone)]
pub struct BeliefModel {
    generator: Arc<dyn Generator>,
}

impl BeliefModel {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Revised view of oneself after `latest`.
    pub async fn revise_own(&self, prior: &Belief, latest: &Outcome) -> Result<String, BeliefError> {
        self.revise_aspect(Aspect::Own, prior, latest).await
    }

    /// Revised view of the opponent after `latest`.
    pub async fn revise_opponent(
        &self,
        prior: &Belief,
        latest: &Outcome,
    ) -> Result<String, BeliefError> {
        self.revise_aspect(Aspect::Opponent, prior, latest).await
    }

    /// Both halves revised; any failure leaves the caller holding `prior`.
    pub async fn revise(&self, prior: &Belief, latest: &Outcome) -> Result<Belief, BeliefError> {
        let own = self.revise_own(prior, latest).await?;
        let opponent = self.revise_opponent(prior, latest).await?;
        Ok(Belief::new(own, opponent))
    }

    async fn revise_aspect(
        &self,
        aspect: Aspect,
        prior: &Belief,
        latest: &Outcome,
    ) -> Result<String, BeliefError> {
        let prompt = Self::prompt(aspect, prior, latest);
        log::debug!("[belief] {} prompt:\n{}", aspect, prompt);
        let text = self
            .generator
            .complete(&Request::from(prompt))
            .await
            .map_err(|e| BeliefError::Generation(aspect, e))?;
        log::debug!("[belief] {} completion:\n{}", aspect, text);
        match text.trim() {
            "" => Err(BeliefError::Blank(aspect)),
            revised => Ok(revised.to_string()),
        }
    }

    /// Prior view of one party plus that party's latest (decision, payoff).
    pub fn prompt(aspect: Aspect, prior: &Belief, latest: &Outcome) -> String {
        let (subject, decision, payoff) = match aspect {
            Aspect::Own => ("yourself", latest.mine(), latest.payoff()),
            Aspect::Opponent => ("your opponent", latest.theirs(), latest.their_payoff()),
        };
        format!(
            "This is your current understanding of {subject}:\n\
             {prior}\n\n\
             In the most recent round {subject} chose '{decision}' ({label}) and received a payoff of {payoff}.\n\n\
             Write a revised, detailed description of {subject}: intentions, strategy and likely next moves. \
             State explicitly whether this new round confirms or contradicts your current understanding, \
             and revise it where it does not hold.",
            subject = subject,
            prior = prior.aspect(aspect),
            decision = decision,
            label = decision.label(),
            payoff = payoff,
        )
    }
}
