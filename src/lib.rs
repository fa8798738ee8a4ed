//! A Blackjack strategy and card-counting trainer with optional `no_std`
//! support.
//!
//! The crate provides a [`Trainer`] session that deals rounds from a shoe,
//! keeps a running count under a selectable counting system, grades every
//! player decision against basic strategy with true-count deviations, and
//! records a bounded history of settled hands.
//!
//! The strategy, counting and probability functions are also usable on their
//! own.
//!
//! # Example
//!
//! ```
//! use bjtrainer::{CountingSystemName, PlayerAction, Settings, Trainer};
//!
//! let settings = Settings::default()
//!     .with_decks(2)
//!     .with_counting_system(CountingSystemName::Ko);
//! let mut trainer = Trainer::new(settings, 42).unwrap();
//!
//! if trainer.deal().unwrap().outcome.is_none() {
//!     let advice = trainer.recommendation().unwrap();
//!     println!("{}", advice.decision.reason);
//!     trainer.act(PlayerAction::Stand).unwrap();
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod counting;
pub mod error;
pub mod explain;
pub mod game;
pub mod hand;
pub mod probability;
pub mod result;
pub mod settings;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use counting::{CountingSystem, CountingSystemName, true_count};
pub use error::{ActionError, DealError, EmptyShoeError, ExplainError, SettingsError};
pub use explain::{AnalysisRequest, Explainer, explain_or_fallback};
pub use game::{
    ActionReport, DealReport, GameState, HISTORY_LIMIT, PlayerAction, Recommendation, Trainer,
};
pub use hand::{DealerHand, Hand, HandStatus, HandValue, hand_status, hand_value};
pub use probability::{bust_probability, expected_value};
pub use result::{HandOutcome, HandResult, SessionStats, determine_outcome};
pub use settings::{DECK_COUNTS, Settings};
pub use shoe::{RankCounts, Shoe};
pub use strategy::{Action, StrategyDecision, optimal_action};
