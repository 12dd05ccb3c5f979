use crate::Probability;
use crate::Utility;
use crate::blackjack::Action;
use rand::Rng;

/// The action with strictly higher value, HIT on ties.
///
/// Ties are common before learning has separated the two estimates,
/// and always resolving them the same way keeps seeded runs reproducible.
pub fn greedy(q: &[Utility; 2]) -> Action {
    let hit = q[usize::from(Action::Hit)];
    let stand = q[usize::from(Action::Stand)];
    if stand > hit {
        Action::Stand
    } else {
        Action::Hit
    }
}

/// Uniformly random action with probability `epsilon`, greedy otherwise.
pub fn epsilon_greedy<R: Rng>(q: &[Utility; 2], epsilon: Probability, rng: &mut R) -> Action {
    if rng.random::<Probability>() < epsilon {
        Action::random(rng)
    } else {
        greedy(q)
    }
}
