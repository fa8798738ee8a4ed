//! Error types for trainer operations.

use alloc::string::String;

use thiserror::Error;

/// A card was requested from a shoe with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the shoe is empty")]
pub struct EmptyShoeError;

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is still in progress.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the shoe for the opening deal.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

impl From<EmptyShoeError> for DealError {
    fn from(_: EmptyShoeError) -> Self {
        Self::NotEnoughCards
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Double down is only allowed on the first two cards.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Split hands are not played out by the trainer.
    #[error("splitting is advisory only and cannot be played")]
    SplitUnsupported,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

impl From<EmptyShoeError> for ActionError {
    fn from(_: EmptyShoeError) -> Self {
        Self::NoCards
    }
}

/// Errors raised when settings are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Deck count outside the supported set.
    #[error("unsupported number of decks: {0} (expected 1, 2, 4, 6 or 8)")]
    InvalidDeckCount(u8),
    /// Counting system name is not configured.
    #[error("unknown counting system: {0}")]
    UnknownCountingSystem(String),
    /// Penetration must be in `[0, 1)`.
    #[error("penetration must be at least 0 and below 1")]
    InvalidPenetration,
}

/// Errors returned by an explanation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplainError {
    /// The collaborator has no credential configured.
    #[error("explanation service credential is not configured")]
    MissingCredential,
    /// The collaborator failed to produce a response.
    #[error("explanation service error: {0}")]
    Service(String),
    /// The collaborator answered without any text.
    #[error("explanation service returned no text")]
    EmptyResponse,
}

impl ExplainError {
    /// Fixed user-visible text shown in place of an explanation.
    #[must_use]
    pub const fn fallback_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => {
                "The explanation service is not configured. Set its API key to enable this feature."
            }
            Self::Service(_) => {
                "An error occurred while trying to get an explanation. Please try again."
            }
            Self::EmptyResponse => "Could not get an explanation for this hand.",
        }
    }
}
