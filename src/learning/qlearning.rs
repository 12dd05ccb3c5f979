use super::Environment;
use super::Simulator;
use super::Table;
use super::alpha;
use super::epsilon_greedy;
use super::greedy;
use crate::DISCOUNT;
use crate::Probability;
use crate::Utility;
use crate::blackjack::Action;
use crate::blackjack::State;
use rand::Rng;

/// Off-policy TD control over action values.
///
/// Behaves epsilon-greedily with respect to its own table while learning
/// toward the greedy target `γ · max_a Q(s', a)`. Step sizes decay per
/// (state, action) pair.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QLearning {
    pub(crate) values: Table<[Utility; 2]>,
    pub(crate) counts: Table<[u32; 2]>,
}

impl QLearning {
    pub fn values(&self) -> &Table<[Utility; 2]> {
        &self.values
    }
    pub fn counts(&self) -> &Table<[u32; 2]> {
        &self.counts
    }

    /// Greedy decision from the current estimates, HIT on ties.
    pub fn decide(&self, state: &State) -> Action {
        greedy(&self.values[state])
    }
    /// Behavior policy: explore with probability `epsilon`.
    pub fn pick<R: Rng>(&self, state: &State, epsilon: Probability, rng: &mut R) -> Action {
        epsilon_greedy(&self.values[state], epsilon, rng)
    }

    pub fn episode<S, R>(&mut self, env: &mut Environment<S>, epsilon: Probability, rng: &mut R)
    where
        S: Simulator,
        R: Rng,
    {
        env.reset();
        loop {
            let ref s1 = env.current();
            let a1 = self.pick(s1, epsilon, rng);
            env.step(a1);
            let ref s2 = env.current();
            let a1 = usize::from(a1);
            self.counts[s1][a1] += 1;
            let step = alpha(self.counts[s1][a1]);
            let [hit, stand] = self.values[s2];
            self.values[s1][a1] += step * (DISCOUNT * hit.max(stand) - self.values[s1][a1]);
            if let Some(reward) = env.terminal_reward() {
                self.terminal(s2, reward);
                break;
            }
        }
    }

    /// A finished hand has no decision left, so both slots are counted
    /// as visited and pulled together toward the realized reward.
    fn terminal(&mut self, state: &State, reward: Utility) {
        let hit = usize::from(Action::Hit);
        let stand = usize::from(Action::Stand);
        self.counts[state][hit] += 1;
        self.counts[state][stand] += 1;
        let step = alpha(self.counts[state][hit]);
        let q = self.values[state][hit];
        let q = q + step * (reward - q);
        self.values[state] = [q, q];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::script;
    use crate::learning::script::Script;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn greedy_run_hits_on_ties_and_updates_hit_slot() {
        let path = script::path();
        let ref mut env = Environment::from(Script::new(path.clone(), 1.0));
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut q = QLearning::default();
        q.episode(env, 0.0, rng);
        assert_eq!(env.simulator().taken, vec![Action::Hit; 3]);
        for s in &path[..3] {
            assert_eq!(q.counts()[s], [1, 0]);
            assert_eq!(q.values()[s], [0.0, 0.0]);
        }
        assert_eq!(q.counts()[&path[3]], [1, 1]);
        assert_eq!(q.values()[&path[3]], [1.0, 1.0]);

        q.episode(env, 0.0, rng);
        assert_eq!(q.values()[&path[2]][0], alpha(2) * (DISCOUNT * 1.0));
        assert_eq!(q.values()[&path[3]], [1.0, 1.0]);
        assert_eq!(q.decide(&path[2]), Action::Hit);
    }

    #[test]
    fn terminal_slots_always_agree() {
        let ref mut env = Environment::from(crate::blackjack::Blackjack::seeded(3));
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut q = QLearning::default();
        for _ in 0..2000 {
            q.episode(env, 0.4, rng);
        }
        let terminals = State::all().filter(State::over).collect::<Vec<_>>();
        assert!(terminals.iter().any(|s| q.counts()[s][0] > 0));
        for s in terminals {
            let [hit, stand] = q.values()[&s];
            assert_eq!(hit.to_bits(), stand.to_bits());
            assert_eq!(q.counts()[&s][0], q.counts()[&s][1]);
        }
    }

    #[test]
    fn decides_on_strictly_higher_value() {
        let live = State::new(20, false, 10, false).unwrap();
        let mut q = QLearning::default();
        q.values[&live] = [-0.9, 0.4];
        assert_eq!(q.decide(&live), Action::Stand);
        let ref mut rng = SmallRng::seed_from_u64(9);
        assert_eq!(q.pick(&live, 0.0, rng), Action::Stand);
    }
}
