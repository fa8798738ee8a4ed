//! Basic strategy and true-count deviation tables.
//!
//! Columns are dealer up-cards in [`UpCard`] order: 2 through 9, ten-valued,
//! Ace.

use crate::card::Rank;

use super::{Action, UpCard};

use super::Action::{Double as D, Hit as H, Split as P, Stand as S};

/// One row of a strategy table.
pub type Row = [Action; 10];

/// Lowest tabled hard total.
pub const HARD_MIN: u8 = 8;

/// Lowest tabled soft total.
pub const SOFT_MIN: u8 = 13;

/// Hard totals 8 through 17, indexed by `total - HARD_MIN`.
#[rustfmt::skip]
pub const HARD: [Row; 10] = [
    /*  8 */ [H, H, H, H, H, H, H, H, H, H],
    /*  9 */ [H, D, D, D, D, H, H, H, H, H],
    /* 10 */ [D, D, D, D, D, D, D, D, H, H],
    /* 11 */ [D, D, D, D, D, D, D, D, D, H],
    /* 12 */ [H, H, S, S, S, H, H, H, H, H],
    /* 13 */ [S, S, S, S, S, H, H, H, H, H],
    /* 14 */ [S, S, S, S, S, H, H, H, H, H],
    /* 15 */ [S, S, S, S, S, H, H, H, H, H],
    /* 16 */ [S, S, S, S, S, H, H, H, H, H],
    /* 17 */ [S, S, S, S, S, S, S, S, S, S],
];

/// Soft totals 13 through 20, indexed by `total - SOFT_MIN`.
#[rustfmt::skip]
pub const SOFT: [Row; 8] = [
    /* A,2 */ [H, H, H, D, D, H, H, H, H, H],
    /* A,3 */ [H, H, H, D, D, H, H, H, H, H],
    /* A,4 */ [H, H, D, D, D, H, H, H, H, H],
    /* A,5 */ [H, H, D, D, D, H, H, H, H, H],
    /* A,6 */ [H, D, D, D, D, H, H, H, H, H],
    /* A,7 */ [S, D, D, D, D, S, S, H, H, S],
    /* A,8 */ [S, S, S, S, S, S, S, S, S, S],
    /* A,9 */ [S, S, S, S, S, S, S, S, S, S],
];

#[rustfmt::skip]
const PAIR_ACES:   Row = [P, P, P, P, P, P, P, P, P, P];
#[rustfmt::skip]
const PAIR_TENS:   Row = [S, S, S, S, S, S, S, S, S, S];
#[rustfmt::skip]
const PAIR_NINES:  Row = [P, P, P, P, P, S, P, P, S, S];
#[rustfmt::skip]
const PAIR_EIGHTS: Row = [P, P, P, P, P, P, P, P, P, P];
#[rustfmt::skip]
const PAIR_SEVENS: Row = [P, P, P, P, P, P, H, H, H, H];
#[rustfmt::skip]
const PAIR_SIXES:  Row = [P, P, P, P, P, H, H, H, H, H];
#[rustfmt::skip]
const PAIR_FIVES:  Row = [D, D, D, D, D, D, D, D, H, H];
#[rustfmt::skip]
const PAIR_FOURS:  Row = [H, H, H, P, P, H, H, H, H, H];
#[rustfmt::skip]
const PAIR_LOW:    Row = [P, P, P, P, P, P, H, H, H, H];

/// Pair table row for a pair of `rank`. Ten-valued ranks share one row.
#[must_use]
pub const fn pair_row(rank: Rank) -> &'static Row {
    match rank {
        Rank::Ace => &PAIR_ACES,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => &PAIR_TENS,
        Rank::Nine => &PAIR_NINES,
        Rank::Eight => &PAIR_EIGHTS,
        Rank::Seven => &PAIR_SEVENS,
        Rank::Six => &PAIR_SIXES,
        Rank::Five => &PAIR_FIVES,
        Rank::Four => &PAIR_FOURS,
        Rank::Three | Rank::Two => &PAIR_LOW,
    }
}

/// Action of the highest row at or below `total`, searching down to `min`.
fn lookup_at_or_below(table: &[Row], min: u8, total: u8, up: UpCard) -> Option<Action> {
    (min..=total)
        .rev()
        .find_map(|t| table.get(usize::from(t - min)))
        .map(|row| row[up.index()])
}

/// Hard-total lookup.
#[must_use]
pub fn hard_action(total: u8, up: UpCard) -> Option<Action> {
    lookup_at_or_below(&HARD, HARD_MIN, total, up)
}

/// Soft-total lookup.
#[must_use]
pub fn soft_action(total: u8, up: UpCard) -> Option<Action> {
    lookup_at_or_below(&SOFT, SOFT_MIN, total, up)
}

/// A true-count departure from basic strategy.
///
/// Keyed on the player's total alone, so it applies to hard, soft and pair
/// hands alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation {
    /// Player total.
    pub total: u8,
    /// Dealer up-card column.
    pub up_card: UpCard,
    /// Fires when the true count is at or above this index.
    pub threshold: i8,
    /// Action taken instead of basic strategy.
    pub action: Action,
    /// Short description of the play.
    pub note: &'static str,
}

const fn dev(total: u8, up_card: UpCard, threshold: i8, action: Action, note: &'static str) -> Deviation {
    Deviation {
        total,
        up_card,
        threshold,
        action,
        note,
    }
}

/// Count-driven deviations (a subset of the Illustrious 18).
pub const DEVIATIONS: [Deviation; 15] = [
    dev(16, UpCard::Ten, 0, S, "Stand on 16 vs 10 at true count 0 or higher."),
    dev(15, UpCard::Ten, 4, S, "Stand on 15 vs 10 at true count +4 or higher."),
    dev(10, UpCard::Ten, 4, D, "Double 10 vs 10 at true count +4 or higher."),
    dev(12, UpCard::Three, 2, S, "Stand on 12 vs 3 at true count +2 or higher."),
    dev(12, UpCard::Two, 3, S, "Stand on 12 vs 2 at true count +3 or higher."),
    dev(11, UpCard::Ace, 1, D, "Double 11 vs Ace at true count +1 or higher."),
    dev(9, UpCard::Two, 1, D, "Double 9 vs 2 at true count +1 or higher."),
    dev(10, UpCard::Ace, 4, D, "Double 10 vs Ace at true count +4 or higher."),
    dev(9, UpCard::Seven, 3, D, "Double 9 vs 7 at true count +3 or higher."),
    dev(16, UpCard::Nine, 5, S, "Stand on 16 vs 9 at true count +5 or higher."),
    dev(13, UpCard::Two, -1, S, "Stand on 13 vs 2 at true count -1 or higher."),
    dev(12, UpCard::Four, 0, S, "Stand on 12 vs 4 at true count 0 or higher."),
    dev(12, UpCard::Five, -2, S, "Stand on 12 vs 5 at true count -2 or higher."),
    dev(12, UpCard::Six, -1, S, "Stand on 12 vs 6 at true count -1 or higher."),
    dev(13, UpCard::Three, -2, S, "Stand on 13 vs 3 at true count -2 or higher."),
];

/// Deviation tabled for this total and up-card, if any.
#[must_use]
pub fn deviation(total: u8, up_card: UpCard) -> Option<&'static Deviation> {
    DEVIATIONS
        .iter()
        .find(|d| d.total == total && d.up_card == up_card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_searches_downward() {
        assert_eq!(hard_action(16, UpCard::Ten), Some(H));
        assert_eq!(hard_action(21, UpCard::Ten), Some(S));
        assert_eq!(soft_action(21, UpCard::Six), Some(S));
        assert_eq!(soft_action(18, UpCard::Three), Some(D));
        assert_eq!(soft_action(12, UpCard::Three), None);
        assert_eq!(hard_action(5, UpCard::Three), None);
    }

    #[test]
    fn deviation_keys_are_unique() {
        for (i, a) in DEVIATIONS.iter().enumerate() {
            for b in &DEVIATIONS[i + 1..] {
                assert!(
                    !(a.total == b.total && a.up_card == b.up_card),
                    "{} duplicates {}",
                    a.note,
                    b.note
                );
            }
        }
    }

    #[test]
    fn ten_valued_pairs_share_row() {
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(pair_row(rank), &PAIR_TENS);
        }
        assert_eq!(pair_row(Rank::Nine)[UpCard::Five.index()], P);
    }
}
