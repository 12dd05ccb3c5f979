use crate::ACE_BONUS;
use anyhow::Context;
use anyhow::ensure;

/// A decision point (or finished hand) as seen by the player.
///
/// Four small integers:
/// - `total`: player's hard total, every ace counted as 1
/// - `ace`: whether one ace can still count as 11 without busting
/// - `upcard`: dealer's visible card, ace as 1 and faces as 10
/// - `over`: whether the hand has finished (stood or busted)
///
/// Finished hands get their own states so that a terminal value never
/// shares a table slot with the decision it was reached from.
///
/// The state space is the full cross product of the field ranges, and a
/// `State` cannot be built outside of it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct State {
    total: u8,
    ace: bool,
    upcard: u8,
    over: bool,
}

impl State {
    pub const TOTALS: std::ops::RangeInclusive<u8> = 2..=31;
    pub const UPCARDS: std::ops::RangeInclusive<u8> = 1..=10;

    pub fn new(total: u8, ace: bool, upcard: u8, over: bool) -> anyhow::Result<Self> {
        ensure!(Self::TOTALS.contains(&total), "player total {} out of range", total);
        ensure!(Self::UPCARDS.contains(&upcard), "dealer upcard {} out of range", upcard);
        Ok(Self {
            total,
            ace,
            upcard,
            over,
        })
    }

    /// Every state in the fixed state space, in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::TOTALS.flat_map(|total| {
            [false, true].into_iter().flat_map(move |ace| {
                Self::UPCARDS.flat_map(move |upcard| {
                    [false, true].into_iter().map(move |over| Self {
                        total,
                        ace,
                        upcard,
                        over,
                    })
                })
            })
        })
    }
    pub fn size() -> usize {
        Self::TOTALS.len() * 2 * Self::UPCARDS.len() * 2
    }

    pub fn total(&self) -> u8 {
        self.total
    }
    pub fn ace(&self) -> bool {
        self.ace
    }
    pub fn upcard(&self) -> u8 {
        self.upcard
    }
    pub fn over(&self) -> bool {
        self.over
    }
    /// Player's total with a usable ace counted high.
    pub fn best(&self) -> u8 {
        self.total + self.ace as u8 * ACE_BONUS
    }
}

/// tuple isomorphism, as persisted
impl From<State> for [i64; 4] {
    fn from(s: State) -> Self {
        [
            s.total as i64,
            s.ace as i64,
            s.upcard as i64,
            s.over as i64,
        ]
    }
}
impl TryFrom<&[i64]> for State {
    type Error = anyhow::Error;
    fn try_from(fields: &[i64]) -> Result<Self, Self::Error> {
        let &[total, ace, upcard, over] = fields else {
            anyhow::bail!("expected 4 state fields, got {}", fields.len());
        };
        let flag = |n: i64| match n {
            0 => Ok(false),
            1 => Ok(true),
            n => Err(anyhow::anyhow!("flag {} is neither 0 nor 1", n)),
        };
        Self::new(
            u8::try_from(total).context("player total")?,
            flag(ace)?,
            u8::try_from(upcard).context("dealer upcard")?,
            flag(over)?,
        )
    }
}

/// renders as a parenthesized tuple with no spaces, e.g. `(20,0,10,1)`
impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [t, a, u, o] = <[i64; 4]>::from(*self);
        write!(f, "({},{},{},{})", t, a, u, o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_complete_and_distinct() {
        let states = State::all().collect::<std::collections::BTreeSet<_>>();
        assert_eq!(states.len(), State::size());
        assert_eq!(states.len(), 1200);
    }

    #[test]
    fn rejects_out_of_space() {
        assert!(State::new(1, false, 5, false).is_err());
        assert!(State::new(32, false, 5, false).is_err());
        assert!(State::new(12, false, 0, false).is_err());
        assert!(State::new(12, false, 11, false).is_err());
        assert!(State::try_from(&[12, 2, 5, 0][..]).is_err());
        assert!(State::try_from(&[12, 0, 5][..]).is_err());
        assert!(State::try_from(&[-3, 0, 5, 0][..]).is_err());
    }

    #[test]
    fn display_has_no_spaces() {
        let state = State::new(20, false, 10, true).unwrap();
        assert_eq!(state.to_string(), "(20,0,10,1)");
    }

    #[test]
    fn bijective_fields() {
        for state in State::all() {
            let fields = <[i64; 4]>::from(state);
            assert_eq!(state, State::try_from(&fields[..]).unwrap());
        }
    }

    #[test]
    fn best_counts_usable_ace() {
        assert_eq!(State::new(8, true, 3, false).unwrap().best(), 18);
        assert_eq!(State::new(8, false, 3, false).unwrap().best(), 8);
    }
}
