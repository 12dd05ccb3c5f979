use super::Environment;
use super::Policy;
use super::Simulator;
use super::Table;
use super::alpha;
use crate::DISCOUNT;
use crate::Utility;

/// TD(0) evaluation of a fixed policy.
///
/// Updates online, one transition at a time, toward the discounted value
/// of the successor. The terminal state itself is pulled toward the
/// realized reward since it has no successor to bootstrap from.
/// Visit counts only set the step size α(n).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Temporal {
    pub(crate) values: Table<Utility>,
    pub(crate) counts: Table<u32>,
}

impl Temporal {
    pub fn values(&self) -> &Table<Utility> {
        &self.values
    }
    pub fn counts(&self) -> &Table<u32> {
        &self.counts
    }

    pub fn episode<S, P>(&mut self, env: &mut Environment<S>, policy: &P)
    where
        S: Simulator,
        P: Policy,
    {
        env.reset();
        loop {
            let ref s1 = env.current();
            env.step(policy.decide(s1));
            let ref s2 = env.current();
            self.counts[s1] += 1;
            let step = alpha(self.counts[s1]);
            self.values[s1] += step * (DISCOUNT * self.values[s2] - self.values[s1]);
            if let Some(reward) = env.terminal_reward() {
                self.counts[s2] += 1;
                let step = alpha(self.counts[s2]);
                self.values[s2] += step * (reward - self.values[s2]);
                break;
            }
        }
    }
}
