//! Hand valuation and player/dealer hand representations.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};

/// Total of a hand together with its softness.
///
/// Always derived from the cards; never stored alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    /// Best total not exceeding 21 where possible.
    pub total: u8,
    /// Whether at least one Ace is still counted as 11.
    pub soft: bool,
}

impl fmt::Display for HandValue {
    /// Soft totals render as both readings, e.g. `7/17`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.soft {
            write!(f, "{}/{}", self.total - 10, self.total)
        } else {
            write!(f, "{}", self.total)
        }
    }
}

/// Values a sequence of cards.
///
/// Every Ace starts at 11 and is downgraded to 1, one at a time, while the
/// total exceeds 21.
#[must_use]
pub fn hand_value(cards: &[Card]) -> HandValue {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        total = total.saturating_add(card.value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    HandValue {
        total,
        soft: aces > 0,
    }
}

/// Status of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand can still act.
    Active,
    /// Hand has busted (over 21).
    Bust,
    /// Two-card 21.
    Blackjack,
}

/// Classifies a sequence of cards.
#[must_use]
pub fn hand_status(cards: &[Card]) -> HandStatus {
    let value = hand_value(cards);
    if value.total > 21 {
        HandStatus::Bust
    } else if value.total == 21 && cards.len() == 2 {
        HandStatus::Blackjack
    } else {
        HandStatus::Active
    }
}

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Current value of the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        hand_value(&self.cards)
    }

    /// Current status of the hand.
    #[must_use]
    pub fn status(&self) -> HandStatus {
        hand_status(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// The full hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    /// Returns the hole card (second card).
    #[must_use]
    pub fn hole_card(&self) -> Option<Card> {
        self.hand.cards().get(1).copied()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Value of the cards a player can see.
    #[must_use]
    pub fn visible_value(&self) -> HandValue {
        if self.hole_revealed {
            self.value()
        } else {
            hand_value(&self.hand.cards()[..self.hand.len().min(1)])
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        self.hand.value()
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.hand.status() == HandStatus::Blackjack
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}
