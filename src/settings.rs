//! Trainer settings.

use crate::counting::{CountingSystem, CountingSystemName};
use crate::error::SettingsError;

/// Deck counts a shoe can be built from.
pub const DECK_COUNTS: [u8; 5] = [1, 2, 4, 6, 8];

/// Configuration for a training session.
///
/// Use the builder pattern to customize settings:
///
/// ```
/// use bjtrainer::{CountingSystemName, Settings};
///
/// let settings = Settings::default()
///     .with_decks(2)
///     .with_counting_system(CountingSystemName::OmegaII);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Counting system used for the running count.
    pub counting_system: CountingSystemName,
    /// Fraction of the shoe dealt before reshuffling. 0 disables reshuffling.
    pub penetration: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decks: 6,
            counting_system: CountingSystemName::HiLo,
            penetration: 0.75,
        }
    }
}

impl Settings {
    /// Builds settings from a deck count and a counting-system name.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count is unsupported or the name is not a
    /// configured counting system.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::{CountingSystemName, Settings};
    ///
    /// let settings = Settings::from_names(4, "KO").unwrap();
    /// assert_eq!(settings.counting_system, CountingSystemName::Ko);
    /// assert!(Settings::from_names(3, "KO").is_err());
    /// ```
    pub fn from_names(decks: u8, counting_system: &str) -> Result<Self, SettingsError> {
        let settings = Self::default()
            .with_decks(decks)
            .with_counting_system(counting_system.parse()?);
        settings.validate()?;
        Ok(settings)
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::Settings;
    ///
    /// let settings = Settings::default().with_decks(8);
    /// assert_eq!(settings.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the counting system.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::{CountingSystemName, Settings};
    ///
    /// let settings = Settings::default().with_counting_system(CountingSystemName::Ko);
    /// assert_eq!(settings.counting_system, CountingSystemName::Ko);
    /// ```
    #[must_use]
    pub const fn with_counting_system(mut self, counting_system: CountingSystemName) -> Self {
        self.counting_system = counting_system;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtrainer::Settings;
    ///
    /// let settings = Settings::default().with_penetration(0.8);
    /// assert_eq!(settings.penetration, 0.8);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// The tag table of the selected counting system.
    #[must_use]
    pub const fn system(&self) -> &'static CountingSystem {
        self.counting_system.system()
    }

    /// Checks the settings before they reach a session.
    ///
    /// # Errors
    ///
    /// Returns an error for a deck count outside [`DECK_COUNTS`] or a
    /// penetration outside `[0, 1)`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !DECK_COUNTS.contains(&self.decks) {
            return Err(SettingsError::InvalidDeckCount(self.decks));
        }
        if !(0.0..1.0).contains(&self.penetration) {
            return Err(SettingsError::InvalidPenetration);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn default_is_six_deck_hi_lo() {
        let settings = Settings::default();
        assert_eq!(settings.decks, 6);
        assert_eq!(settings.counting_system, CountingSystemName::HiLo);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_unsupported_deck_counts() {
        for decks in [0, 3, 5, 7, 9] {
            assert_eq!(
                Settings::default().with_decks(decks).validate(),
                Err(SettingsError::InvalidDeckCount(decks))
            );
        }
        for decks in DECK_COUNTS {
            assert!(Settings::default().with_decks(decks).validate().is_ok());
        }
    }

    #[test]
    fn rejects_out_of_range_penetration() {
        for p in [-0.1, 1.0, 1.5, f64::NAN] {
            assert_eq!(
                Settings::default().with_penetration(p).validate(),
                Err(SettingsError::InvalidPenetration)
            );
        }
        assert!(Settings::default().with_penetration(0.0).validate().is_ok());
    }

    #[test]
    fn from_names_rejects_unknown_system() {
        assert_eq!(
            Settings::from_names(6, "Red Seven"),
            Err(SettingsError::UnknownCountingSystem("Red Seven".to_string()))
        );
        assert_eq!(
            Settings::from_names(6, "Omega II").map(|s| s.system().balanced),
            Ok(true)
        );
    }
}
