//! Bust probability and a heuristic expected-value estimate.
//!
//! The EV model is an approximation for teaching, not a solver. Standing is
//! scored against a fixed table of dealer final-total probabilities per
//! up-card; hitting draws one card from the actual remaining shoe and then
//! stands.

use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::hand::hand_value;
use crate::shoe::RankCounts;
use crate::strategy::{Action, UpCard};

/// Card draws explored by the hit estimate before standing.
pub const LOOKAHEAD_DEPTH: u8 = 1;

/// Approximate distribution of a dealer's final hand for one up-card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealerOutcomes {
    /// Probability the dealer busts.
    pub bust: f64,
    /// Probability of finishing on 17, 18, 19, 20 and 21.
    pub totals: [f64; 5],
}

impl DealerOutcomes {
    /// Sum of all listed probabilities.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.bust + self.totals.iter().sum::<f64>()
    }
}

const fn outcomes(bust: f64, totals: [f64; 5]) -> DealerOutcomes {
    DealerOutcomes { bust, totals }
}

/// Hand-tuned dealer outcome rows, indexed by [`UpCard::index`].
///
/// Rows are approximations of real dealer draw statistics and are used as
/// tuned, without renormalization.
#[rustfmt::skip]
pub const DEALER_OUTCOMES: [DealerOutcomes; 10] = [
    /* 2 */ outcomes(0.35, [0.14, 0.13, 0.13, 0.12, 0.13]),
    /* 3 */ outcomes(0.37, [0.13, 0.13, 0.12, 0.12, 0.13]),
    /* 4 */ outcomes(0.40, [0.12, 0.12, 0.12, 0.12, 0.12]),
    /* 5 */ outcomes(0.42, [0.12, 0.12, 0.12, 0.11, 0.11]),
    /* 6 */ outcomes(0.42, [0.11, 0.11, 0.11, 0.11, 0.14]),
    /* 7 */ outcomes(0.26, [0.37, 0.13, 0.00, 0.00, 0.24]),
    /* 8 */ outcomes(0.24, [0.00, 0.36, 0.13, 0.00, 0.27]),
    /* 9 */ outcomes(0.23, [0.00, 0.00, 0.34, 0.12, 0.31]),
    /* T */ outcomes(0.21, [0.00, 0.00, 0.00, 0.37, 0.42]),
    /* A */ outcomes(0.17, [0.15, 0.15, 0.15, 0.15, 0.23]),
];

/// Dealer outcome row for an up-card.
#[must_use]
pub const fn dealer_outcomes(up_card: Card) -> &'static DealerOutcomes {
    &DEALER_OUTCOMES[UpCard::from_rank(up_card.rank).index()]
}

/// Probability that the next card from `remaining` busts `cards`.
#[must_use]
pub fn bust_probability(cards: &[Card], remaining: &[Card]) -> f64 {
    let total = hand_value(cards).total;
    if total > 21 {
        return 1.0;
    }

    let to_bust = 21 - total;
    // Every card is worth at least 2.
    if to_bust < 2 {
        return 1.0;
    }
    if remaining.is_empty() {
        return 0.0;
    }

    let busting = remaining.iter().filter(|c| c.value() > to_bust).count();
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let probability = busting as f64 / remaining.len() as f64;
    probability
}

/// Estimated expected value, in units of the wager, of `action`.
///
/// Only [`Action::Hit`] and [`Action::Stand`] are modeled; every other action
/// scores 0.
#[must_use]
pub fn expected_value(action: Action, cards: &[Card], up_card: Card, remaining: &[Card]) -> f64 {
    match action {
        Action::Stand => stand_ev(cards, up_card),
        Action::Hit => hit_ev(cards, up_card, &RankCounts::from_cards(remaining), LOOKAHEAD_DEPTH),
        Action::Double | Action::Split | Action::Surrender => 0.0,
    }
}

/// EV of standing: dealer busts win, higher dealer totals lose, ties push.
#[must_use]
pub fn stand_ev(cards: &[Card], up_card: Card) -> f64 {
    let total = hand_value(cards).total;
    if total > 21 {
        return -1.0;
    }

    let dealer = dealer_outcomes(up_card);
    let mut ev = dealer.bust;
    for (score, p) in (17u8..).zip(dealer.totals) {
        if total > score {
            ev += p;
        } else if total < score {
            ev -= p;
        }
    }
    ev
}

/// EV of hitting with `depth` draws of lookahead.
///
/// Each remaining rank is drawn with its frequency in `shoe`. Busting scores
/// -1. Otherwise the branch stands, or at depth above 1 takes the better of
/// standing and hitting again. The shoe is not depleted between draws. An
/// empty shoe scores -1.
#[must_use]
pub fn hit_ev(cards: &[Card], up_card: Card, shoe: &RankCounts, depth: u8) -> f64 {
    let size = shoe.total();
    if size == 0 {
        return -1.0;
    }

    let mut next: Vec<Card> = Vec::with_capacity(cards.len() + 1);
    let mut ev = 0.0;
    for (rank, count) in shoe.present() {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let p = f64::from(count) / size as f64;

        next.clear();
        next.extend_from_slice(cards);
        next.push(Card::new(Suit::Spades, rank));

        if hand_value(&next).total > 21 {
            ev -= p;
        } else if depth > 1 {
            ev += p * stand_ev(&next, up_card).max(hit_ev(&next, up_card, shoe, depth - 1));
        } else {
            ev += p * stand_ev(&next, up_card);
        }
    }
    ev
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "exact results are expected")]

    use super::*;
    use crate::card::Rank;

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Hearts, r)).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b) < 1e-9 && (b - a) < 1e-9
    }

    #[test]
    fn busted_hand_always_busts() {
        let hand = cards(&[Rank::King, Rank::Five, Rank::Eight]);
        assert_eq!(bust_probability(&hand, &cards(&[Rank::Two])), 1.0);
    }

    #[test]
    fn twenty_busts_on_anything() {
        let hand = cards(&[Rank::King, Rank::Queen]);
        assert_eq!(bust_probability(&hand, &cards(&[Rank::Two, Rank::Ace])), 1.0);
        assert_eq!(bust_probability(&hand, &[]), 1.0);
    }

    #[test]
    fn counts_cards_above_the_margin() {
        let hand = cards(&[Rank::Ten, Rank::Six]);
        let shoe = cards(&[Rank::Two, Rank::Five, Rank::Six, Rank::King]);
        assert_eq!(bust_probability(&hand, &shoe), 0.5);
        assert_eq!(bust_probability(&hand, &[]), 0.0);
    }

    #[test]
    fn stand_ev_against_ten() {
        let up = Card::new(Suit::Clubs, Rank::King);
        let twenty = cards(&[Rank::Ten, Rank::Queen]);
        assert!(close(stand_ev(&twenty, up), 0.21 - 0.42));

        let sixteen = cards(&[Rank::Ten, Rank::Six]);
        assert!(close(stand_ev(&sixteen, up), 0.21 - 0.37 - 0.42));

        let bust = cards(&[Rank::Ten, Rank::Six, Rank::Nine]);
        assert_eq!(stand_ev(&bust, up), -1.0);
    }

    #[test]
    fn hit_ev_weights_each_rank() {
        let up = Card::new(Suit::Clubs, Rank::Ten);
        let hand = cards(&[Rank::Ten, Rank::Two]);
        let shoe = cards(&[Rank::Ten, Rank::Nine]);

        let expected = 0.5 * -1.0 + 0.5 * stand_ev(&cards(&[Rank::Ten, Rank::Two, Rank::Nine]), up);
        let ev = expected_value(Action::Hit, &hand, up, &shoe);
        assert!(close(ev, expected));
    }

    #[test]
    fn hit_from_empty_shoe_is_a_loss() {
        let up = Card::new(Suit::Clubs, Rank::Six);
        assert_eq!(expected_value(Action::Hit, &cards(&[Rank::Two, Rank::Three]), up, &[]), -1.0);
    }

    #[test]
    fn other_actions_score_zero() {
        let up = Card::new(Suit::Clubs, Rank::Six);
        let hand = cards(&[Rank::Five, Rank::Six]);
        let shoe = cards(&[Rank::Ten]);
        assert_eq!(expected_value(Action::Double, &hand, up, &shoe), 0.0);
        assert_eq!(expected_value(Action::Split, &hand, up, &shoe), 0.0);
        assert_eq!(expected_value(Action::Surrender, &hand, up, &shoe), 0.0);
    }

    #[test]
    fn deeper_lookahead_never_scores_below_one_draw() {
        let up = Card::new(Suit::Clubs, Rank::Seven);
        let hand = cards(&[Rank::Two, Rank::Three]);
        let shoe = RankCounts::from_cards(&cards(&[Rank::Two, Rank::Four, Rank::Ten, Rank::Ace]));
        assert!(hit_ev(&hand, up, &shoe, 2) >= hit_ev(&hand, up, &shoe, 1));
    }

    #[test]
    fn dealer_rows_cover_all_outcomes() {
        for row in &DEALER_OUTCOMES {
            assert!(close(row.mass(), 1.0));
        }
        let jack = Card::new(Suit::Spades, Rank::Jack);
        assert_eq!(dealer_outcomes(jack), &DEALER_OUTCOMES[8]);
    }
}
