use rand::Rng;

/// The two decisions available to the player.
///
/// The discriminants double as indices into action-value pairs,
/// so `Hit` is always slot 0 and `Stand` is always slot 1.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Hit = 0,
    Stand = 1,
}

impl Action {
    pub const ALL: [Self; 2] = [Action::Hit, Action::Stand];

    /// Uniformly random action.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// usize isomorphism
impl From<Action> for usize {
    fn from(a: Action) -> usize {
        a as usize
    }
}
