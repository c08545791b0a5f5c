//! The dealer's deterministic draw policy.

use rand_chacha::ChaCha8Rng;

use crate::error::ShoeError;
use crate::hand::Hand;
use crate::shoe::Shoe;

/// The dealer. No oracle is involved: the dealer draws to a fixed rule.
#[derive(Debug, Clone, Copy)]
pub struct Dealer {
    hit_soft_17: bool,
}

impl Dealer {
    /// Creates a dealer. `hit_soft_17` selects the H17 rule variant, where
    /// the dealer draws again on a soft 17 instead of standing.
    #[must_use]
    pub const fn new(hit_soft_17: bool) -> Self {
        Self { hit_soft_17 }
    }

    /// Plays out the dealer's hand: draw until the best value reaches 17,
    /// drawing once more on a soft 17 under the H17 rule.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe was configured with zero
    /// decks.
    pub fn play(
        &self,
        hand: &mut Hand,
        shoe: &mut Shoe,
        rng: &mut ChaCha8Rng,
    ) -> Result<(), ShoeError> {
        loop {
            let value = hand.best_value();
            if value < 17 || (value == 17 && hand.is_soft() && self.hit_soft_17) {
                hand.add_card(shoe.draw(rng)?);
            } else {
                return Ok(());
            }
        }
    }
}
