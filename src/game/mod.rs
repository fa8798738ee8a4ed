//! Training session and round flow.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::counting::{self, CountingSystem};
use crate::error::{DealError, EmptyShoeError, SettingsError};
use crate::explain::{AnalysisRequest, Explainer, explain_or_fallback};
use crate::hand::{DealerHand, Hand};
use crate::probability::{bust_probability, expected_value};
use crate::result::{HandOutcome, HandResult, SessionStats, determine_outcome};
use crate::settings::Settings;
use crate::shoe::Shoe;
use crate::strategy::{Action, StrategyDecision, optimal_action};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use actions::ActionReport;
pub use deal::DealReport;
pub use state::{GameState, PlayerAction};

/// Number of settled rounds kept in the history.
pub const HISTORY_LIMIT: usize = 10;

/// Advice for the player's current decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// The strategy engine's play.
    pub decision: StrategyDecision,
    /// Chance that one more card busts the hand.
    pub bust_probability: f64,
    /// Estimated value of hitting.
    pub ev_hit: f64,
    /// Estimated value of standing.
    pub ev_stand: f64,
}

/// The player's most recent graded choice in a round.
#[derive(Debug, Clone)]
struct GradedAction {
    action: PlayerAction,
    recommended: StrategyDecision,
    hand: Vec<Card>,
    true_count: f64,
}

/// A single-player training session.
///
/// The session owns the shoe, both hands, the running count, the bounded
/// hand history and the decision statistics. Every transition goes through
/// `&mut self`, so each call is applied completely before the next.
///
/// # Example
///
/// ```
/// use bjtrainer::{GameState, PlayerAction, Settings, Trainer};
///
/// let mut trainer = Trainer::new(Settings::default(), 42).unwrap();
/// let report = trainer.deal().unwrap();
/// if report.outcome.is_none() {
///     assert_eq!(trainer.state(), GameState::PlayerTurn);
///     trainer.act(PlayerAction::Stand).unwrap();
/// }
/// assert_eq!(trainer.state(), GameState::EndOfHand);
/// assert_eq!(trainer.stats().hands_played, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Trainer {
    shoe: Shoe,
    settings: Settings,
    state: GameState,
    player: Hand,
    dealer: DealerHand,
    running_count: i32,
    history: VecDeque<HandResult>,
    stats: SessionStats,
    last_action: Option<GradedAction>,
    rng: ChaCha8Rng,
}

impl Trainer {
    /// Starts a session with a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if `settings` fail validation.
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::new(settings.decks, &mut rng);

        Ok(Self {
            shoe,
            settings,
            state: GameState::Betting,
            player: Hand::new(),
            dealer: DealerHand::new(),
            running_count: 0,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            stats: SessionStats::default(),
            last_action: None,
            rng,
        })
    }

    /// Replaces the settings and resets the whole session.
    ///
    /// The shoe is rebuilt, the count, history and statistics are cleared and
    /// the session returns to [`GameState::Betting`].
    ///
    /// # Errors
    ///
    /// Returns an error if `settings` fail validation. The session is left
    /// untouched in that case.
    pub fn apply_settings(&mut self, settings: Settings) -> Result<(), SettingsError> {
        settings.validate()?;

        log::debug!(
            "applying settings: {} decks, {}, penetration {}",
            settings.decks,
            settings.counting_system,
            settings.penetration
        );

        self.settings = settings;
        self.shoe = Shoe::new(settings.decks, &mut self.rng);
        self.running_count = 0;
        self.player.clear();
        self.dealer.clear();
        self.history.clear();
        self.stats = SessionStats::default();
        self.last_action = None;
        self.state = GameState::Betting;
        Ok(())
    }

    /// Replaces the shoe with a fresh shuffle and resets the running count.
    ///
    /// # Errors
    ///
    /// Returns an error while a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), DealError> {
        self.ensure_between_rounds()?;
        self.reshuffle_shoe();
        Ok(())
    }

    /// Installs `shoe` as the current shoe and resets the running count.
    ///
    /// Useful for drills that need a known card order; see
    /// [`Shoe::from_draws`].
    ///
    /// # Errors
    ///
    /// Returns an error while a round is in progress.
    pub fn set_shoe(&mut self, shoe: Shoe) -> Result<(), DealError> {
        self.ensure_between_rounds()?;
        self.shoe = shoe;
        self.running_count = 0;
        Ok(())
    }

    /// Whether the dealt fraction of the shoe has reached the configured
    /// penetration.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.shoe.needs_reshuffle(self.settings.penetration)
    }

    fn ensure_between_rounds(&self) -> Result<(), DealError> {
        match self.state {
            GameState::Betting | GameState::EndOfHand => Ok(()),
            GameState::PlayerTurn | GameState::DealerTurn => Err(DealError::InvalidState),
        }
    }

    fn reshuffle_shoe(&mut self) {
        log::debug!(
            "reshuffling {} decks with {} cards left, running count was {}",
            self.settings.decks,
            self.shoe.len(),
            self.running_count
        );
        self.shoe = Shoe::new(self.settings.decks, &mut self.rng);
        self.running_count = 0;
    }

    /// Draws a card without counting it.
    fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        self.shoe.deal()
    }

    /// Adds a visible card to the running count.
    fn count(&mut self, card: Card) {
        let tag = self.settings.system().tag(card);
        self.running_count += i32::from(tag);
        log::trace!("counted {card} ({tag:+}), running count {}", self.running_count);
    }

    /// Reveals the dealer's hole card, counting it the first time only.
    fn reveal_hole(&mut self) {
        if self.dealer.is_hole_revealed() {
            return;
        }
        self.dealer.reveal_hole();
        if let Some(card) = self.dealer.hole_card() {
            self.count(card);
        }
    }

    /// Compares the hands, records the result and ends the round.
    fn settle(&mut self) -> HandOutcome {
        self.reveal_hole();

        let outcome = determine_outcome(self.player.cards(), self.dealer.cards());
        let result = HandResult::new(
            &self.player,
            self.dealer.hand(),
            outcome,
            self.last_action
                .as_ref()
                .map(|graded| (graded.action, &graded.recommended)),
        );

        self.history.push_front(result);
        self.history.truncate(HISTORY_LIMIT);
        self.stats.hands_played += 1;
        self.state = GameState::EndOfHand;

        log::debug!(
            "settled: player {} vs dealer {}: {outcome}",
            self.player.value(),
            self.dealer.value()
        );
        outcome
    }

    /// Current phase of the round.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// The dealer's hand, including a hole card that may not be revealed yet.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// The dealer's visible card.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer.up_card()
    }

    /// Running count of every card seen since the last reshuffle.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Running count normalized by the decks left in the shoe.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        counting::true_count(self.running_count, self.shoe.len(), self.shoe.decks())
    }

    /// Number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// The shoe being dealt from.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Settled rounds, most recent first.
    #[must_use]
    pub const fn history(&self) -> &VecDeque<HandResult> {
        &self.history
    }

    /// Decision statistics for the session.
    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Active settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Tag table of the active counting system.
    #[must_use]
    pub const fn counting_system(&self) -> &'static CountingSystem {
        self.settings.system()
    }

    /// The player's last action this round and what was recommended then.
    #[must_use]
    pub fn last_action(&self) -> Option<(PlayerAction, &StrategyDecision)> {
        self.last_action
            .as_ref()
            .map(|graded| (graded.action, &graded.recommended))
    }

    /// Strategy advice for the current decision.
    ///
    /// Returns `None` unless the player is to act.
    #[must_use]
    pub fn recommendation(&self) -> Option<Recommendation> {
        if self.state != GameState::PlayerTurn {
            return None;
        }

        let up_card = self.dealer.up_card()?;
        let cards = self.player.cards();
        let remaining = self.shoe.cards();

        Some(Recommendation {
            decision: optimal_action(cards, up_card, self.true_count(), self.settings.decks),
            bust_probability: bust_probability(cards, remaining),
            ev_hit: expected_value(Action::Hit, cards, up_card, remaining),
            ev_stand: expected_value(Action::Stand, cards, up_card, remaining),
        })
    }

    /// Describes the last decision of a finished round if it was a mistake.
    ///
    /// The request carries the hand and true count as they were when the
    /// player acted.
    #[must_use]
    pub fn analysis_request(&self) -> Option<AnalysisRequest> {
        if self.state != GameState::EndOfHand {
            return None;
        }

        let graded = self.last_action.as_ref()?;
        if graded.action.matches(graded.recommended.action) {
            return None;
        }

        Some(AnalysisRequest {
            player_hand: graded.hand.clone(),
            dealer_up_card: self.dealer.up_card()?,
            true_count: graded.true_count,
            player_action: graded.action,
            recommended_action: graded.recommended.action,
        })
    }

    /// Asks `explainer` why the last decision was a mistake.
    ///
    /// Returns `None` when there is nothing to explain. Explainer failures are
    /// replaced with fixed fallback text.
    pub fn explain_last_mistake<E: Explainer + ?Sized>(&self, explainer: &E) -> Option<String> {
        self.analysis_request()
            .map(|request| explain_or_fallback(explainer, &request))
    }
}
