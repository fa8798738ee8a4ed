use super::Trainer;

impl Trainer {
    /// Dealer draws while below 17 or on soft 17, counting every card.
    ///
    /// An exhausted shoe is replaced mid-round so the dealer can finish.
    pub(super) fn play_dealer(&mut self) {
        loop {
            let value = self.dealer.value();
            if value.total > 17 || (value.total == 17 && !value.soft) {
                break;
            }

            let card = match self.draw() {
                Ok(card) => card,
                Err(_) => {
                    log::debug!("shoe exhausted during dealer play");
                    self.reshuffle_shoe();
                    continue;
                }
            };
            self.dealer.add_card(card);
            self.count(card);
        }
    }
}
