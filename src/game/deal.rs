use crate::error::DealError;
use crate::hand::HandStatus;
use crate::result::HandOutcome;

use super::{GameState, Trainer};

/// Cards needed for the opening deal.
const OPENING_CARDS: usize = 4;

/// What happened when a round was dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealReport {
    /// The shoe was replaced before dealing.
    pub reshuffled: bool,
    /// Set when a player natural settled the round immediately.
    pub outcome: Option<HandOutcome>,
}

impl Trainer {
    /// Deals a new round: player, dealer, player, dealer.
    ///
    /// Reshuffles first when the shoe has reached the configured penetration,
    /// which resets the running count. Both player cards and the dealer's
    /// up-card are counted; the hole card is counted when it is revealed. A
    /// player natural reveals the hole card and settles at once.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the shoe cannot cover
    /// the opening deal.
    pub fn deal(&mut self) -> Result<DealReport, DealError> {
        self.ensure_between_rounds()?;

        let reshuffled = self.needs_reshuffle();
        if reshuffled {
            self.reshuffle_shoe();
        }

        if self.shoe.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        self.player.clear();
        self.dealer.clear();
        self.last_action = None;

        for round in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            self.count(card);

            let card = self.draw()?;
            self.dealer.add_card(card);
            // Only the up-card is visible until the hole card is revealed.
            if round == 0 {
                self.count(card);
            }
        }

        self.state = GameState::PlayerTurn;

        let outcome = if self.player.status() == HandStatus::Blackjack {
            Some(self.settle())
        } else {
            None
        };

        Ok(DealReport {
            reshuffled,
            outcome,
        })
    }
}
