use crate::ACE_BONUS;
use crate::BLACKJACK;
use crate::cards::Card;

/// Running count of one side of the table.
///
/// Only the hard total and whether any ace was dealt matter in Blackjack,
/// so the cards themselves are not kept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    hard: u8,
    aces: bool,
}

impl Hand {
    pub fn add(self, card: Card) -> Self {
        Self {
            hard: self.hard + card.pips(),
            aces: self.aces || card.rank().is_ace(),
        }
    }
    /// Total with every ace counted as 1.
    pub fn hard(&self) -> u8 {
        self.hard
    }
    /// An ace that can count as 11 without busting.
    pub fn usable(&self) -> bool {
        self.aces && self.hard + ACE_BONUS <= BLACKJACK
    }
    pub fn best(&self) -> u8 {
        self.hard + self.usable() as u8 * ACE_BONUS
    }
    pub fn bust(&self) -> bool {
        self.hard > BLACKJACK
    }
}

impl From<(Card, Card)> for Hand {
    fn from((a, b): (Card, Card)) -> Self {
        Self::default().add(a).add(b)
    }
}
