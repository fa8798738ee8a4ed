//! Basic strategy with true-count deviations.
//!
//! [`optimal_action`] evaluates rules in a fixed order and the first match
//! wins:
//!
//! 1. a tabled true-count deviation whose threshold is met,
//! 2. a pair that the split table splits,
//! 3. the soft-total table,
//! 4. the hard-total table (stand on 17+, hit on 8 or less),
//! 5. stand.
//!
//! Doubling is only legal on the first two cards; a tabled double on a larger
//! hand is played as a hit.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::card::{Card, Rank};
use crate::hand::hand_value;

pub mod tables;

/// A strategy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the wager and take exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Forfeit half the wager.
    Surrender,
}

impl Action {
    /// Lowercase name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
            Self::Surrender => "surrender",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dealer up-card column in the strategy tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpCard {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// T, J, Q or K.
    Ten,
    /// Ace.
    Ace,
}

impl UpCard {
    /// Column of a dealer card of `rank`.
    #[must_use]
    pub const fn from_rank(rank: Rank) -> Self {
        match rank {
            Rank::Two => Self::Two,
            Rank::Three => Self::Three,
            Rank::Four => Self::Four,
            Rank::Five => Self::Five,
            Rank::Six => Self::Six,
            Rank::Seven => Self::Seven,
            Rank::Eight => Self::Eight,
            Rank::Nine => Self::Nine,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => Self::Ten,
            Rank::Ace => Self::Ace,
        }
    }

    /// Column index, 0 through 9.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Shape of a player hand, selecting which table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandShape {
    /// No Ace counted as 11.
    Hard,
    /// At least one Ace counted as 11.
    Soft,
    /// Two cards of one rank that the split table splits against this up-card.
    Pair,
}

impl HandShape {
    /// Classifies `cards` against a dealer column.
    ///
    /// Pairs the split table does not split are played by their total and
    /// classify as hard or soft.
    #[must_use]
    pub fn classify(cards: &[Card], up: UpCard) -> Self {
        if let [a, b] = cards {
            if a.rank == b.rank && tables::pair_row(a.rank)[up.index()] == Action::Split {
                return Self::Pair;
            }
        }

        if hand_value(cards).soft {
            Self::Soft
        } else {
            Self::Hard
        }
    }
}

/// A recommended action with its justification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyDecision {
    /// Recommended action.
    pub action: Action,
    /// Which rule produced the action.
    pub reason: String,
}

impl StrategyDecision {
    fn new(action: Action, reason: String) -> Self {
        Self { action, reason }
    }
}

/// Plays a tabled double as a hit once the hand has more than two cards.
fn table_decision(action: Action, cards: &[Card], kind: &str, total: u8, up_card: Card) -> StrategyDecision {
    if action == Action::Double && cards.len() > 2 {
        return StrategyDecision::new(
            Action::Hit,
            format!("Basic strategy ({kind} hand): you can no longer double, so hit."),
        );
    }

    StrategyDecision::new(
        action,
        format!(
            "Basic strategy: with a {kind} {total} against a {}, the best action is to {action}.",
            up_card.rank
        ),
    )
}

/// Recommends the play for `cards` against `up_card` at `true_count`.
///
/// The tables are multi-deck tables, so the deck count does not change the
/// lookup. Calling this twice with the same arguments returns the same
/// decision.
#[must_use]
pub fn optimal_action(cards: &[Card], up_card: Card, true_count: f64, _decks: u8) -> StrategyDecision {
    let value = hand_value(cards);
    let up = UpCard::from_rank(up_card.rank);

    // Deviations override every table, whatever the hand's shape.
    if let Some(dev) = tables::deviation(value.total, up) {
        if true_count >= f64::from(dev.threshold) {
            if dev.action == Action::Double && cards.len() > 2 {
                return StrategyDecision::new(
                    Action::Hit,
                    format!("High true count deviation: {} You can no longer double, so hit.", dev.note),
                );
            }
            return StrategyDecision::new(
                dev.action,
                format!("High true count deviation: {}", dev.note),
            );
        }
    }

    if HandShape::classify(cards, up) == HandShape::Pair {
        let rank = cards[0].rank;
        return StrategyDecision::new(
            Action::Split,
            format!(
                "Basic strategy: splitting {rank}s against a dealer {} is the highest EV play.",
                up_card.rank
            ),
        );
    }

    if value.soft {
        if let Some(action) = tables::soft_action(value.total, up) {
            return table_decision(action, cards, "soft", value.total, up_card);
        }
    }

    let action = if value.total >= 17 {
        Some(Action::Stand)
    } else if value.total <= 8 {
        Some(Action::Hit)
    } else {
        tables::hard_action(value.total, up)
    };

    if let Some(action) = action {
        return table_decision(action, cards, "hard", value.total, up_card);
    }

    StrategyDecision::new(
        Action::Stand,
        String::from("No strategy rule matched; defaulting to stand."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use alloc::vec::Vec;

    fn hand(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Diamonds, r)).collect()
    }

    fn up(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank)
    }

    #[test]
    fn sixteen_vs_ten_stands_at_positive_count() {
        let decision = optimal_action(&hand(&[Rank::Ten, Rank::Six]), up(Rank::Ten), 1.0, 6);
        assert_eq!(decision.action, Action::Stand);
        assert!(decision.reason.starts_with("High true count deviation"));
    }

    #[test]
    fn sixteen_vs_ten_hits_at_negative_count() {
        let decision = optimal_action(&hand(&[Rank::Ten, Rank::Six]), up(Rank::Ten), -1.0, 6);
        assert_eq!(decision.action, Action::Hit);
        assert!(decision.reason.starts_with("Basic strategy"));
    }

    #[test]
    fn deviation_threshold_is_inclusive() {
        let cards = hand(&[Rank::Ten, Rank::Six]);
        assert_eq!(optimal_action(&cards, up(Rank::Ten), 0.0, 6).action, Action::Stand);
        assert_eq!(optimal_action(&cards, up(Rank::Ten), -0.01, 6).action, Action::Hit);
    }

    #[test]
    fn face_card_up_uses_ten_column() {
        let cards = hand(&[Rank::Nine, Rank::Seven]);
        assert_eq!(optimal_action(&cards, up(Rank::King), 2.0, 6).action, Action::Stand);
        assert_eq!(optimal_action(&cards, up(Rank::Queen), -2.0, 6).action, Action::Hit);
    }

    #[test]
    fn nines_split_against_five() {
        let decision = optimal_action(&hand(&[Rank::Nine, Rank::Nine]), up(Rank::Five), 0.0, 6);
        assert_eq!(decision.action, Action::Split);
    }

    #[test]
    fn nines_stand_against_seven() {
        let decision = optimal_action(&hand(&[Rank::Nine, Rank::Nine]), up(Rank::Seven), 0.0, 6);
        assert_eq!(decision.action, Action::Stand);
    }

    #[test]
    fn eights_against_ten_take_the_sixteen_deviation() {
        let eights = hand(&[Rank::Eight, Rank::Eight]);
        let decision = optimal_action(&eights, up(Rank::Ten), 1.0, 6);
        assert_eq!(decision.action, Action::Stand);
        assert!(decision.reason.starts_with("High true count deviation"));

        assert_eq!(optimal_action(&eights, up(Rank::Ten), -1.0, 6).action, Action::Split);
    }

    #[test]
    fn pairs_take_deviations_for_their_total() {
        let sixes = hand(&[Rank::Six, Rank::Six]);
        assert_eq!(optimal_action(&sixes, up(Rank::Four), 0.0, 6).action, Action::Stand);
        assert_eq!(optimal_action(&sixes, up(Rank::Four), -0.5, 6).action, Action::Split);
    }

    #[test]
    fn fives_play_as_hard_ten() {
        let cards = hand(&[Rank::Five, Rank::Five]);
        assert_eq!(optimal_action(&cards, up(Rank::Six), 0.0, 6).action, Action::Double);
        assert_eq!(optimal_action(&cards, up(Rank::Ten), 0.0, 6).action, Action::Hit);
        assert_eq!(optimal_action(&cards, up(Rank::Ten), 4.0, 6).action, Action::Double);
    }

    #[test]
    fn ten_valued_mixed_pair_stands() {
        let decision = optimal_action(&hand(&[Rank::Jack, Rank::Queen]), up(Rank::Six), 0.0, 6);
        assert_eq!(decision.action, Action::Stand);
    }

    #[test]
    fn double_downgrades_to_hit_after_two_cards() {
        let hard = hand(&[Rank::Two, Rank::Three, Rank::Six]);
        assert_eq!(optimal_action(&hard[..2], up(Rank::Six), 0.0, 6).action, Action::Hit);
        let decision = optimal_action(&hard, up(Rank::Six), 0.0, 6);
        assert_eq!(decision.action, Action::Hit);
        assert!(decision.reason.contains("no longer double"));

        let soft = hand(&[Rank::Ace, Rank::Three, Rank::Three]);
        let decision = optimal_action(&soft, up(Rank::Four), 0.0, 6);
        assert_eq!(decision.action, Action::Hit);
        assert!(decision.reason.contains("soft"));

        assert_eq!(
            optimal_action(&soft[..2], up(Rank::Five), 0.0, 6).action,
            Action::Double
        );
    }

    #[test]
    fn eleven_vs_ace_doubles_from_plus_one() {
        let cards = hand(&[Rank::Six, Rank::Five]);
        assert_eq!(optimal_action(&cards, up(Rank::Ace), 1.0, 6).action, Action::Double);
        assert_eq!(optimal_action(&cards, up(Rank::Ace), 0.0, 6).action, Action::Hit);

        let three_cards = hand(&[Rank::Two, Rank::Four, Rank::Five]);
        let decision = optimal_action(&three_cards, up(Rank::Ace), 2.0, 6);
        assert_eq!(decision.action, Action::Hit);
        assert!(decision.reason.starts_with("High true count deviation"));
    }

    #[test]
    fn soft_hands_take_deviations_for_their_total() {
        let soft_sixteen = hand(&[Rank::Ace, Rank::Five]);
        assert_eq!(optimal_action(&soft_sixteen, up(Rank::Ten), 1.0, 6).action, Action::Stand);
        assert_eq!(optimal_action(&soft_sixteen, up(Rank::Ten), -1.0, 6).action, Action::Hit);

        let soft_thirteen = hand(&[Rank::Ace, Rank::Two]);
        assert_eq!(optimal_action(&soft_thirteen, up(Rank::Two), 0.0, 6).action, Action::Stand);
        assert_eq!(optimal_action(&soft_thirteen, up(Rank::Two), -2.0, 6).action, Action::Hit);
    }

    #[test]
    fn extremes_of_hard_totals() {
        assert_eq!(
            optimal_action(&hand(&[Rank::Three, Rank::Four]), up(Rank::Six), 0.0, 6).action,
            Action::Hit
        );
        assert_eq!(
            optimal_action(&hand(&[Rank::Ten, Rank::Seven]), up(Rank::Ace), 0.0, 6).action,
            Action::Stand
        );
        assert_eq!(
            optimal_action(&hand(&[Rank::Ten, Rank::Six, Rank::Five]), up(Rank::Ace), 0.0, 6).action,
            Action::Stand
        );
    }

    #[test]
    fn soft_totals_above_table_stand() {
        let decision = optimal_action(&hand(&[Rank::Ace, Rank::Five, Rank::Five]), up(Rank::Ten), 0.0, 6);
        assert_eq!(decision.action, Action::Stand);
    }

    #[test]
    fn decision_is_idempotent() {
        let cards = hand(&[Rank::Ace, Rank::Seven]);
        let first = optimal_action(&cards, up(Rank::Nine), 1.5, 6);
        let second = optimal_action(&cards, up(Rank::Nine), 1.5, 6);
        assert_eq!(first, second);
    }
}
