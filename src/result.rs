//! Round results and session statistics.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::game::PlayerAction;
use crate::hand::{Hand, HandStatus, hand_status, hand_value};
use crate::strategy::StrategyDecision;

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWin,
    /// Push (tie).
    Push,
    /// Player natural against a dealer without one.
    PlayerBlackjack,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWin => "player wins",
            Self::DealerWin => "dealer wins",
            Self::Push => "push",
            Self::PlayerBlackjack => "player blackjack",
        })
    }
}

/// Compares final hands.
///
/// A player blackjack beats everything except a dealer blackjack, which
/// pushes. Otherwise both hands busting or equal totals push, a single bust
/// loses, and the higher total wins.
#[must_use]
pub fn determine_outcome(player: &[Card], dealer: &[Card]) -> HandOutcome {
    let dealer_blackjack = hand_status(dealer) == HandStatus::Blackjack;
    if hand_status(player) == HandStatus::Blackjack {
        return if dealer_blackjack {
            HandOutcome::Push
        } else {
            HandOutcome::PlayerBlackjack
        };
    }

    let player_total = hand_value(player).total;
    let dealer_total = hand_value(dealer).total;
    match (player_total > 21, dealer_total > 21) {
        (true, true) => HandOutcome::Push,
        (true, false) => HandOutcome::DealerWin,
        (false, true) => HandOutcome::PlayerWin,
        (false, false) if player_total > dealer_total => HandOutcome::PlayerWin,
        (false, false) if player_total < dealer_total => HandOutcome::DealerWin,
        (false, false) => HandOutcome::Push,
    }
}

/// Record of one completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// The player's final cards.
    pub player_hand: Vec<Card>,
    /// The dealer's final cards.
    pub dealer_hand: Vec<Card>,
    /// How the round ended.
    pub outcome: HandOutcome,
    /// The last action the player took, if any.
    pub player_action: Option<PlayerAction>,
    /// The decision recommended when that action was taken.
    pub recommended: Option<StrategyDecision>,
}

impl HandResult {
    pub(crate) fn new(
        player: &Hand,
        dealer: &Hand,
        outcome: HandOutcome,
        last: Option<(PlayerAction, &StrategyDecision)>,
    ) -> Self {
        Self {
            player_hand: player.cards().to_vec(),
            dealer_hand: dealer.cards().to_vec(),
            outcome,
            player_action: last.map(|(action, _)| action),
            recommended: last.map(|(_, decision)| decision.clone()),
        }
    }

    /// Whether the player's last action differed from the recommendation.
    #[must_use]
    pub fn was_mistake(&self) -> bool {
        match (self.player_action, &self.recommended) {
            (Some(action), Some(decision)) => !action.matches(decision.action),
            _ => false,
        }
    }
}

/// Decision accuracy over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStats {
    /// Rounds settled.
    pub hands_played: u32,
    /// Actions matching the recommendation.
    pub correct_decisions: u32,
    /// Actions differing from the recommendation.
    pub incorrect_decisions: u32,
}

impl SessionStats {
    /// Percentage of correct decisions; 100 before any decision is made.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let total = self.correct_decisions + self.incorrect_decisions;
        if total == 0 {
            return 100.0;
        }
        f64::from(self.correct_decisions) / f64::from(total) * 100.0
    }

    pub(crate) const fn record_decision(&mut self, correct: bool) {
        if correct {
            self.correct_decisions += 1;
        } else {
            self.incorrect_decisions += 1;
        }
    }
}
