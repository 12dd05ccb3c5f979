/// Card ranks, ordered deuce to ace as they are encoded in a [`super::Card`].
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    /// Ranks in encoding order, so `ALL[r as usize] == r`.
    pub const ALL: [Self; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Blackjack pip value with the ace counted low.
    /// Faces are worth ten; the high ace is the caller's business.
    pub const fn pips(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            r => *r as u8 + 2,
        }
    }
    pub const fn is_ace(&self) -> bool {
        matches!(self, Rank::Ace)
    }
}
