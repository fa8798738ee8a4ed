//! Interface to an external service that explains strategy mistakes.
//!
//! The trainer never depends on an explanation for its own state. A request is
//! built only when the player's action differed from the recommendation, and
//! any failure is replaced by a fixed fallback message.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ExplainError;
use crate::game::PlayerAction;
use crate::hand::hand_value;
use crate::strategy::Action;

/// Snapshot of a decision handed to an [`Explainer`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisRequest {
    /// The player's cards at the time of the decision.
    pub player_hand: Vec<Card>,
    /// The dealer's up-card.
    pub dealer_up_card: Card,
    /// True count at the time of the decision.
    pub true_count: f64,
    /// What the player did.
    pub player_action: PlayerAction,
    /// What the strategy engine recommended.
    pub recommended_action: Action,
}

impl AnalysisRequest {
    /// Instructor prompt describing the mistake.
    #[must_use]
    pub fn prompt(&self) -> String {
        let mut hand = String::new();
        for (i, card) in self.player_hand.iter().enumerate() {
            if i > 0 {
                hand.push_str(", ");
            }
            hand.push(card.rank.symbol());
        }

        format!(
            "You are an expert Blackjack strategy instructor for students learning card counting.\n\
             A student made a mistake and needs a clear, encouraging, and educational explanation.\n\
             \n\
             Game context:\n\
             - Player's hand: {hand} (Total: {total})\n\
             - Dealer's up-card: {up}\n\
             - True count: {tc:.2}\n\
             - Student's action: {player}\n\
             - Correct action: {correct}\n\
             \n\
             Explain concisely, in 3-4 encouraging sentences, why the student's action was less \
             optimal and why the correct action is better, mentioning the true count when it \
             drives the decision.",
            total = hand_value(&self.player_hand),
            up = self.dealer_up_card.rank,
            tc = self.true_count,
            player = self.player_action,
            correct = self.recommended_action,
        )
    }
}

/// A service that turns an [`AnalysisRequest`] into prose.
pub trait Explainer {
    /// Produces an explanation for `request`.
    ///
    /// # Errors
    ///
    /// Returns an error when the service is unconfigured or fails.
    fn explain(&self, request: &AnalysisRequest) -> Result<String, ExplainError>;
}

impl<F> Explainer for F
where
    F: Fn(&AnalysisRequest) -> Result<String, ExplainError>,
{
    fn explain(&self, request: &AnalysisRequest) -> Result<String, ExplainError> {
        self(request)
    }
}

/// Asks `explainer` about `request`, substituting fallback text on failure.
pub fn explain_or_fallback<E: Explainer + ?Sized>(explainer: &E, request: &AnalysisRequest) -> String {
    match explainer.explain(request) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            log::warn!("explanation service returned no text");
            String::from(ExplainError::EmptyResponse.fallback_message())
        }
        Err(err) => {
            log::warn!("explanation unavailable: {err}");
            String::from(err.fallback_message())
        }
    }
}
