//! Session state types.

use core::fmt;

use crate::strategy::Action;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// No round has been dealt since the session started or settings changed.
    #[default]
    Betting,
    /// Waiting for the player's action.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled and recorded.
    EndOfHand,
}

/// An action the player can choose.
///
/// Only hit, stand and double are played out. Split is accepted as a choice so
/// it can be graded, then rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlayerAction {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Take exactly one more card and finish.
    Double,
    /// Split a pair.
    Split,
}

impl PlayerAction {
    /// Lowercase name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
        }
    }

    /// Whether this choice is the recommended `action`, compared by name
    /// without regard to case.
    #[must_use]
    pub fn matches(self, action: Action) -> bool {
        self.as_str().eq_ignore_ascii_case(action.as_str())
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PlayerAction> for Action {
    fn from(action: PlayerAction) -> Self {
        match action {
            PlayerAction::Hit => Self::Hit,
            PlayerAction::Stand => Self::Stand,
            PlayerAction::Double => Self::Double,
            PlayerAction::Split => Self::Split,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_by_name() {
        assert!(PlayerAction::Hit.matches(Action::Hit));
        assert!(PlayerAction::Double.matches(Action::Double));
        assert!(!PlayerAction::Stand.matches(Action::Hit));
        assert!(!PlayerAction::Split.matches(Action::Surrender));
    }

    #[test]
    fn converts_into_strategy_action() {
        for action in [
            PlayerAction::Hit,
            PlayerAction::Stand,
            PlayerAction::Double,
            PlayerAction::Split,
        ] {
            assert!(action.matches(Action::from(action)));
        }
    }
}
