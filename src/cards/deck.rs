use super::card::Card;
use rand::Rng;

/// A mutable 52-card deck supporting random draws without replacement.
///
/// Remaining cards are a bitmask over the `u8` card encoding. The caller
/// owns the randomness so that a seeded generator reproduces every deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(u64);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    const fn mask() -> u64 {
        (1 << 52) - 1
    }
    pub fn new() -> Self {
        Self(Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.size() > 0);
        let i = rng.random_range(0..self.size());
        let mut deck = self.0;
        for _ in 0..i {
            deck = deck & (deck - 1);
        }
        let card = Card(deck.trailing_zeros() as u8);
        self.0 &= !u64::from(card);
        card
    }
}
