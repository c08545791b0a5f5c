//! The multi-deck shoe: live pile, discard pile, and penetration tracking.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// A shuffled multi-deck shoe.
///
/// The shoe partitions its `num_decks * 52` cards between a live pile and a
/// discard pile; every drawn card moves from one to the other, so the two
/// always sum to the full multiset. A per-rank tally counts cards drawn
/// since the last shuffle.
///
/// All randomness comes from the `ChaCha8Rng` passed into [`Shoe::new`],
/// [`Shoe::shuffle`], and [`Shoe::draw`]. The caller owns the generator, so
/// a run seeded once replays the identical card sequence.
#[derive(Debug, Clone)]
pub struct Shoe {
    num_decks: u8,
    penetration: f64,
    live: Vec<Card>,
    discard: Vec<Card>,
    drawn: [u64; 13],
}

impl Shoe {
    /// Creates a shoe with the given number of decks and penetration
    /// fraction, freshly shuffled.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::Shoe;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let shoe = Shoe::new(6, 0.75, &mut rng);
    /// assert_eq!(shoe.cards_remaining(), 6 * 52);
    /// ```
    #[must_use]
    pub fn new(num_decks: u8, penetration: f64, rng: &mut ChaCha8Rng) -> Self {
        let mut shoe = Self {
            num_decks,
            penetration,
            live: Vec::new(),
            discard: Vec::new(),
            drawn: [0; 13],
        };
        shoe.shuffle(rng);
        shoe
    }

    /// Resets the live pile to a full shuffled multiset of `num_decks`
    /// decks, clears the discard pile, and zeroes the per-rank drawn tally.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        self.live.clear();
        self.live.reserve(self.total_cards());
        for _ in 0..self.num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    self.live.push(Card::new(rank, suit));
                }
            }
        }
        self.live.shuffle(rng);
        self.discard.clear();
        self.drawn = [0; 13];
    }

    /// Draws one card from the end of the live pile, moving it to the
    /// discard pile and bumping the drawn tally for its rank.
    ///
    /// An empty live pile triggers one implicit reshuffle first. That is a
    /// safety net, not the primary reshuffle mechanism (see
    /// [`Shoe::penetration_reached`]), and it resets the drawn tally.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards exist even after the
    /// reshuffle, i.e. the shoe was configured with zero decks.
    pub fn draw(&mut self, rng: &mut ChaCha8Rng) -> Result<Card, ShoeError> {
        if self.live.is_empty() {
            self.shuffle(rng);
        }
        let card = self.live.pop().ok_or(ShoeError::Empty)?;
        self.discard.push(card);
        self.drawn[card.rank.index()] += 1;
        Ok(card)
    }

    /// Returns whether the discarded fraction of the shoe has reached the
    /// penetration threshold.
    ///
    /// Advisory only: the shoe does not reshuffle itself on this threshold.
    /// The trial loop checks it before each round's deal and calls
    /// [`Shoe::shuffle`] explicitly.
    #[must_use]
    pub fn penetration_reached(&self) -> bool {
        let total = self.total_cards();
        if total == 0 {
            return false;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = self.discard.len() as f64 / total as f64;
        used_ratio >= self.penetration
    }

    /// Returns the number of cards in the live pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.live.len()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn cards_discarded(&self) -> usize {
        self.discard.len()
    }

    /// Returns the total number of cards the shoe was built with.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.num_decks as usize * DECK_SIZE
    }

    /// Returns the per-rank drawn-card tally since the last shuffle,
    /// indexed by [`Rank::index`].
    #[must_use]
    pub const fn drawn_counts(&self) -> &[u64; 13] {
        &self.drawn
    }

    /// Replaces the live pile with a fixed sequence of cards; the next
    /// draws return them in the given order. Intended for scripted deals in
    /// tests — it bypasses the full-multiset invariant.
    pub fn load(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.live = cards.into_iter().collect();
        self.live.reverse();
    }
}
