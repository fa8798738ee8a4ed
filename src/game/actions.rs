use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::result::HandOutcome;
use crate::strategy::{StrategyDecision, optimal_action};

use super::{GameState, GradedAction, PlayerAction, Trainer};

/// What happened when the player acted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    /// Card dealt to the player, for hit and double.
    pub card: Option<Card>,
    /// The decision recommended before acting.
    pub recommended: StrategyDecision,
    /// Whether the action matched the recommendation.
    pub correct: bool,
    /// Set when the action ended the round.
    pub outcome: Option<HandOutcome>,
}

impl Trainer {
    fn validate_action(&self, action: PlayerAction) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        match action {
            PlayerAction::Double if self.player.len() != 2 => Err(ActionError::CannotDouble),
            PlayerAction::Hit | PlayerAction::Double if self.shoe.is_empty() => {
                Err(ActionError::NoCards)
            }
            PlayerAction::Hit | PlayerAction::Double | PlayerAction::Stand | PlayerAction::Split => {
                Ok(())
            }
        }
    }

    /// Plays one player action.
    ///
    /// The action is graded against the recommendation for the current hand
    /// before it is carried out. Hitting settles the round on a bust. Standing
    /// reveals the hole card and lets the dealer play. Doubling takes exactly
    /// one card and settles without dealer draws.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not to act, a double is attempted on
    /// more than two cards, or the shoe is empty. These are not graded. A split
    /// is graded and then rejected with [`ActionError::SplitUnsupported`],
    /// leaving the hand in play.
    pub fn act(&mut self, action: PlayerAction) -> Result<ActionReport, ActionError> {
        self.validate_action(action)?;

        let up_card = self.dealer.up_card().ok_or(ActionError::InvalidState)?;
        let true_count = self.true_count();
        let recommended = optimal_action(
            self.player.cards(),
            up_card,
            true_count,
            self.settings.decks,
        );
        let correct = action.matches(recommended.action);
        self.stats.record_decision(correct);
        self.last_action = Some(GradedAction {
            action,
            recommended: recommended.clone(),
            hand: self.player.cards().to_vec(),
            true_count,
        });

        let (card, outcome) = match action {
            PlayerAction::Hit => {
                let card = self.draw()?;
                self.player.add_card(card);
                self.count(card);
                let outcome = if self.player.status() == HandStatus::Bust {
                    Some(self.settle())
                } else {
                    None
                };
                (Some(card), outcome)
            }
            PlayerAction::Stand => {
                self.reveal_hole();
                self.state = GameState::DealerTurn;
                self.play_dealer();
                (None, Some(self.settle()))
            }
            PlayerAction::Double => {
                let card = self.draw()?;
                self.player.add_card(card);
                self.count(card);
                (Some(card), Some(self.settle()))
            }
            PlayerAction::Split => return Err(ActionError::SplitUnsupported),
        };

        Ok(ActionReport {
            card,
            recommended,
            correct,
            outcome,
        })
    }

    /// Takes another card.
    ///
    /// # Errors
    ///
    /// See [`Trainer::act`].
    pub fn hit(&mut self) -> Result<ActionReport, ActionError> {
        self.act(PlayerAction::Hit)
    }

    /// Keeps the current hand and lets the dealer play.
    ///
    /// # Errors
    ///
    /// See [`Trainer::act`].
    pub fn stand(&mut self) -> Result<ActionReport, ActionError> {
        self.act(PlayerAction::Stand)
    }

    /// Takes exactly one card and settles.
    ///
    /// # Errors
    ///
    /// See [`Trainer::act`].
    pub fn double_down(&mut self) -> Result<ActionReport, ActionError> {
        self.act(PlayerAction::Double)
    }
}
