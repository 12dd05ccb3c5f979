use super::Environment;
use super::Policy;
use super::Simulator;
use super::Table;
use crate::DISCOUNT;
use crate::Utility;
use crate::blackjack::State;

/// Every-visit Monte Carlo evaluation of a fixed policy.
///
/// Each visit is credited with the terminal reward discounted by the number
/// of transitions between it and the end of the episode. Values are kept as
/// exact running means: `values[s] == sums[s] / counts[s]` for every visited
/// state, and 0 for the rest.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MonteCarlo {
    pub(crate) values: Table<Utility>,
    pub(crate) sums: Table<Utility>,
    pub(crate) counts: Table<u32>,
}

impl MonteCarlo {
    pub fn values(&self) -> &Table<Utility> {
        &self.values
    }
    pub fn sums(&self) -> &Table<Utility> {
        &self.sums
    }
    pub fn counts(&self) -> &Table<u32> {
        &self.counts
    }

    /// Plays one full episode under `policy`, then credits the trajectory.
    pub fn episode<S, P>(&mut self, env: &mut Environment<S>, policy: &P)
    where
        S: Simulator,
        P: Policy,
    {
        env.reset();
        let mut trajectory = Vec::new();
        let reward = loop {
            let state = env.current();
            trajectory.push(state);
            env.step(policy.decide(&state));
            if let Some(reward) = env.terminal_reward() {
                trajectory.push(env.current());
                break reward;
            }
        };
        self.backward(&trajectory, reward);
    }

    /// Walks the trajectory from the terminal state back to the first,
    /// discounting the running return once per step.
    pub fn backward(&mut self, trajectory: &[State], reward: Utility) {
        trajectory.iter().rev().fold(reward, |g, state| {
            self.sums[state] += g;
            self.counts[state] += 1;
            self.values[state] = self.sums[state] / self.counts[state] as Utility;
            g * DISCOUNT
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blackjack::Action;
    use crate::learning::script;
    use crate::learning::script::Script;

    #[test]
    fn discounts_by_distance_from_reward() {
        let path = script::path();
        let ref mut env = Environment::from(Script::new(path.clone(), 1.0));
        let mut mc = MonteCarlo::default();
        mc.episode(env, &|_: &State| Action::Hit);
        assert_eq!(mc.values()[&path[3]], 1.0);
        assert_eq!(mc.values()[&path[2]], DISCOUNT);
        assert_eq!(mc.values()[&path[1]], DISCOUNT * DISCOUNT);
        assert_eq!(mc.values()[&path[0]], DISCOUNT * DISCOUNT * DISCOUNT);
        assert!(path.iter().all(|s| mc.counts()[s] == 1));
    }

    #[test]
    fn running_mean_over_episodes() {
        let path = script::path();
        let mut mc = MonteCarlo::default();
        let ref mut win = Environment::from(Script::new(path.clone(), 1.0));
        let ref mut loss = Environment::from(Script::new(path.clone(), -1.0));
        mc.episode(win, &|_: &State| Action::Hit);
        mc.episode(loss, &|_: &State| Action::Stand);
        mc.episode(loss, &|_: &State| Action::Stand);
        let terminal = path[3];
        assert_eq!(mc.counts()[&terminal], 3);
        assert_eq!(mc.sums()[&terminal], -1.0);
        assert_eq!(mc.values()[&terminal], -1.0 / 3.0);
    }

    #[test]
    fn every_visit_counts_repeats() {
        let state = State::new(12, false, 2, false).unwrap();
        let terminal = State::new(12, false, 2, true).unwrap();
        let mut mc = MonteCarlo::default();
        mc.backward(&[state, state, terminal], 1.0);
        assert_eq!(mc.counts()[&state], 2);
        assert_eq!(mc.sums()[&state], DISCOUNT + DISCOUNT * DISCOUNT);
        assert_eq!(mc.values()[&state], (DISCOUNT + DISCOUNT * DISCOUNT) / 2.0);
    }

    #[test]
    fn untouched_states_stay_zero() {
        let path = script::path();
        let ref mut env = Environment::from(Script::new(path.clone(), 1.0));
        let mut mc = MonteCarlo::default();
        mc.episode(env, &|_: &State| Action::Hit);
        for state in State::all().filter(|s| !path.contains(s)) {
            assert_eq!(mc.counts()[&state], 0);
            assert_eq!(mc.values()[&state], 0.0);
        }
    }
}
