use super::rank::Rank;
use anyhow::ensure;

/// A playing card encoded as a single byte.
///
/// The 52 cards map to `0..52` as `rank * 4 + copy`. Suits never matter
/// in Blackjack, so the four copies of a rank differ only in their index,
/// and a deck fits in the low 52 bits of a `u64`.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(pub(super) u8);

impl Card {
    pub const COUNT: u8 = 52;

    pub const fn rank(&self) -> Rank {
        Rank::ALL[(self.0 / 4) as usize]
    }
    /// Blackjack value with the ace counted low.
    pub const fn pips(&self) -> u8 {
        self.rank().pips()
    }
}

/// u8 isomorphism, checked on the way in
impl TryFrom<u8> for Card {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        ensure!(n < Self::COUNT, "card index {} out of range", n);
        Ok(Self(n))
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}
