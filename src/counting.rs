//! Card-counting systems and count arithmetic.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::card::{Card, DECK_SIZE, Rank};
use crate::error::SettingsError;

/// Decks remaining below which the true count is reported as 0.
pub const MIN_DECKS_FOR_TRUE_COUNT: f64 = 0.2;

/// Name of a configured counting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CountingSystemName {
    /// Hi-Lo.
    #[default]
    HiLo,
    /// Knock-Out.
    Ko,
    /// Omega II.
    OmegaII,
}

impl CountingSystemName {
    /// All configured systems.
    pub const ALL: [Self; 3] = [Self::HiLo, Self::Ko, Self::OmegaII];

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HiLo => "Hi-Lo",
            Self::Ko => "KO",
            Self::OmegaII => "Omega II",
        }
    }

    /// The tag table for this system.
    #[must_use]
    pub const fn system(self) -> &'static CountingSystem {
        match self {
            Self::HiLo => &HI_LO,
            Self::Ko => &KO,
            Self::OmegaII => &OMEGA_II,
        }
    }
}

impl fmt::Display for CountingSystemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountingSystemName {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SettingsError::UnknownCountingSystem(s.to_string()))
    }
}

/// A counting system: one tag per rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingSystem {
    /// System name.
    pub name: CountingSystemName,
    /// Tags indexed by [`Rank::index`].
    pub tags: [i8; 13],
    /// Whether a full shoe sums to zero. Informational only.
    pub balanced: bool,
}

impl CountingSystem {
    /// Tag value of `card`.
    #[must_use]
    pub const fn tag(&self, card: Card) -> i8 {
        self.rank_tag(card.rank)
    }

    /// Tag value of `rank`.
    #[must_use]
    pub const fn rank_tag(&self, rank: Rank) -> i8 {
        self.tags[rank.index()]
    }
}

//                          2  3  4  5  6  7  8  9   T   J   Q   K   A
/// Hi-Lo.
pub const HI_LO: CountingSystem = CountingSystem {
    name: CountingSystemName::HiLo,
    tags: [1, 1, 1, 1, 1, 0, 0, 0, -1, -1, -1, -1, -1],
    balanced: true,
};

/// Knock-Out.
pub const KO: CountingSystem = CountingSystem {
    name: CountingSystemName::Ko,
    tags: [1, 1, 1, 1, 1, 1, 0, 0, -1, -1, -1, -1, -1],
    balanced: false,
};

/// Omega II.
pub const OMEGA_II: CountingSystem = CountingSystem {
    name: CountingSystemName::OmegaII,
    tags: [1, 1, 2, 2, 2, 1, 0, -1, -2, -2, -2, -2, 0],
    balanced: true,
};

/// Normalizes a running count by the decks left in the shoe.
///
/// Returns 0 when the shoe is empty or fewer than
/// [`MIN_DECKS_FOR_TRUE_COUNT`] decks remain. `cards_left` is capped at the
/// size of a full `total_decks` shoe.
#[must_use]
pub fn true_count(running_count: i32, cards_left: usize, total_decks: u8) -> f64 {
    let cards_left = cards_left.min(usize::from(total_decks) * DECK_SIZE);
    if cards_left == 0 {
        return 0.0;
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    let decks_remaining = cards_left as f64 / DECK_SIZE as f64;
    if decks_remaining < MIN_DECKS_FOR_TRUE_COUNT {
        return 0.0;
    }

    f64::from(running_count) / decks_remaining
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "exact results are expected")]

    use super::*;
    use crate::card::Suit;

    #[test]
    fn balanced_systems_sum_to_zero_per_deck() {
        for name in CountingSystemName::ALL {
            let system = name.system();
            let per_deck: i32 = Rank::ALL
                .iter()
                .map(|&r| i32::from(system.rank_tag(r)) * 4)
                .sum();
            assert_eq!(per_deck == 0, system.balanced, "{name}");
        }
    }

    #[test]
    fn hi_lo_tags() {
        let system = CountingSystemName::HiLo.system();
        assert_eq!(system.tag(Card::new(Suit::Hearts, Rank::Five)), 1);
        assert_eq!(system.tag(Card::new(Suit::Hearts, Rank::Eight)), 0);
        assert_eq!(system.tag(Card::new(Suit::Hearts, Rank::Queen)), -1);
        assert_eq!(system.tag(Card::new(Suit::Hearts, Rank::Ace)), -1);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for name in CountingSystemName::ALL {
            assert_eq!(name.as_str().parse::<CountingSystemName>(), Ok(name));
        }
        assert_eq!("ko".parse::<CountingSystemName>(), Ok(CountingSystemName::Ko));
        assert_eq!(
            "Zen".parse::<CountingSystemName>(),
            Err(SettingsError::UnknownCountingSystem("Zen".to_string()))
        );
    }

    #[test]
    fn fresh_shoe_zero_count_is_zero() {
        for decks in [1, 2, 4, 6, 8] {
            assert_eq!(true_count(0, usize::from(decks) * DECK_SIZE, decks), 0.0);
        }
    }

    #[test]
    fn divides_by_decks_remaining() {
        assert_eq!(true_count(6, 156, 6), 2.0);
        assert_eq!(true_count(-3, 26, 1), -6.0);
    }

    #[test]
    fn near_empty_shoe_reports_zero() {
        assert_eq!(true_count(5, 0, 6), 0.0);
        assert_eq!(true_count(5, 10, 6), 0.0);
        assert_eq!(true_count(-5, 10, 6), 0.0);
        assert!(true_count(5, 11, 6) > 0.0);
    }
}
