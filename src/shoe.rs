//! The shoe: pooled decks dealt from during a session.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyShoeError;

/// Number of cards of each rank left in a shoe, indexed by [`Rank::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankCounts([u16; 13]);

impl RankCounts {
    /// Counts the ranks of the given cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u16; 13];
        for card in cards {
            counts[card.rank.index()] += 1;
        }
        Self(counts)
    }

    /// Number of cards of `rank`.
    #[must_use]
    pub const fn get(&self, rank: Rank) -> u16 {
        self.0[rank.index()]
    }

    /// Total number of cards counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| usize::from(n)).sum()
    }

    /// Iterates over ranks that are still present, with their counts.
    pub fn present(&self) -> impl Iterator<Item = (Rank, u16)> + '_ {
        Rank::ALL
            .into_iter()
            .map(|rank| (rank, self.get(rank)))
            .filter(|&(_, n)| n > 0)
    }
}

/// An ordered stack of cards built from one or more decks.
///
/// Cards are dealt from the end of the underlying vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
}

impl Shoe {
    /// Builds `decks` standard decks and shuffles them.
    ///
    /// The shuffle is [`SliceRandom::shuffle`], a Fisher-Yates pass from the
    /// last index down, swapping each slot with a uniform index at or below it.
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(usize::from(decks) * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards, decks }
    }

    /// Builds a stacked shoe that deals `draws` in the given order.
    ///
    /// `decks` is the nominal size the shoe is measured against for
    /// penetration.
    #[must_use]
    pub fn from_draws(decks: u8, draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards, decks }
    }

    /// Deals the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, EmptyShoeError> {
        self.cards.pop().ok_or(EmptyShoeError)
    }

    /// Cards left in the shoe, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of decks the shoe was built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Size of the shoe when full.
    #[must_use]
    pub const fn full_size(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Rank census of the remaining cards.
    #[must_use]
    pub fn rank_counts(&self) -> RankCounts {
        RankCounts::from_cards(&self.cards)
    }

    /// Whether the dealt fraction has reached `penetration`.
    ///
    /// A penetration of 0 disables reshuffling.
    #[must_use]
    pub fn needs_reshuffle(&self, penetration: f64) -> bool {
        if penetration <= 0.0 {
            return false;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let threshold = self.full_size() as f64 * (1.0 - penetration);
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let remaining = self.len() as f64;

        remaining < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn new_shoe_holds_every_card_per_deck() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shoe = Shoe::new(2, &mut rng);
        assert_eq!(shoe.len(), 2 * DECK_SIZE);
        assert_eq!(shoe.full_size(), 104);

        let counts = shoe.rank_counts();
        assert!(Rank::ALL.iter().all(|&r| counts.get(r) == 8));
        for suit in Suit::ALL {
            let ace = Card::new(suit, Rank::Ace);
            assert_eq!(shoe.cards().iter().filter(|&&c| c == ace).count(), 2);
        }
    }

    #[test]
    fn same_seed_same_order() {
        let a = Shoe::new(6, &mut ChaCha8Rng::seed_from_u64(9));
        let b = Shoe::new(6, &mut ChaCha8Rng::seed_from_u64(9));
        let c = Shoe::new(6, &mut ChaCha8Rng::seed_from_u64(10));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn deal_removes_top_and_keeps_remainder_order() {
        let mut shoe = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(1));
        let before = shoe.cards().to_vec();

        let card = shoe.deal().unwrap();
        assert_eq!(card, before[before.len() - 1]);
        assert_eq!(shoe.cards(), &before[..before.len() - 1]);
    }

    #[test]
    fn deal_from_empty_shoe_fails() {
        let mut shoe = Shoe::from_draws(1, &[]);
        assert_eq!(shoe.deal(), Err(EmptyShoeError));
    }

    #[test]
    fn stacked_shoe_deals_in_order() {
        let draws = [
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Clubs, Rank::King),
        ];
        let mut shoe = Shoe::from_draws(1, &draws);
        assert_eq!(shoe.deal(), Ok(draws[0]));
        assert_eq!(shoe.deal(), Ok(draws[1]));
        assert!(shoe.is_empty());
    }

    #[test]
    fn reshuffle_below_quarter_of_shoe() {
        let card = Card::new(Suit::Hearts, Rank::Two);
        let shoe = Shoe::from_draws(1, &[card; 13]);
        assert!(!shoe.needs_reshuffle(0.75));

        let shoe = Shoe::from_draws(1, &[card; 12]);
        assert!(shoe.needs_reshuffle(0.75));
        assert!(!shoe.needs_reshuffle(0.0));
    }
}
