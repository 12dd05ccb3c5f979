use super::*;
use crate::Probability;
use crate::blackjack::Action;
use crate::blackjack::Blackjack;
use crate::blackjack::State;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A learner bound to one game, one fixed evaluation policy,
/// and one source of exploration noise.
///
/// Owns an independent set of tables for each algorithm:
/// - [`MonteCarlo`]: every-visit MC evaluation of `policy`
/// - [`Temporal`]: TD(0) evaluation of `policy`
/// - [`QLearning`]: epsilon-greedy Q-learning control
///
/// Runs are strictly sequential; each episode finishes before the next
/// one resets the environment.
pub struct Agent<S = Blackjack, P = Threshold>
where
    S: Simulator,
    P: Policy,
{
    pub(crate) env: Environment<S>,
    pub(crate) policy: P,
    pub(crate) rng: SmallRng,
    pub(crate) mc: MonteCarlo,
    pub(crate) td: Temporal,
    pub(crate) q: QLearning,
}

impl Agent {
    /// Entropy-seeded agent over a fresh Blackjack table.
    pub fn new() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
    /// Fully reproducible agent: the dealer's shuffles and the
    /// exploration coin both derive from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SmallRng> for Agent {
    fn from(mut rng: SmallRng) -> Self {
        let game = Blackjack::from(SmallRng::from_rng(&mut rng));
        Self::with(game, Threshold, rng)
    }
}

impl<S, P> Agent<S, P>
where
    S: Simulator,
    P: Policy,
{
    pub fn with(simulator: S, policy: P, rng: SmallRng) -> Self {
        Self {
            env: Environment::from(simulator),
            policy,
            rng,
            mc: MonteCarlo::default(),
            td: Temporal::default(),
            q: QLearning::default(),
        }
    }

    /// Monte Carlo evaluation of the fixed policy over `n` episodes.
    pub fn mc_run(&mut self, n: usize) {
        let mut progress = Progress::new("MC", n);
        for _ in 0..n {
            self.mc.episode(&mut self.env, &self.policy);
            progress.tick();
        }
    }
    /// TD(0) evaluation of the fixed policy over `n` episodes.
    pub fn td_run(&mut self, n: usize) {
        let mut progress = Progress::new("TD", n);
        for _ in 0..n {
            self.td.episode(&mut self.env, &self.policy);
            progress.tick();
        }
    }
    /// Q-learning over `n` episodes, exploring with probability `epsilon`.
    pub fn q_run(&mut self, n: usize, epsilon: Probability) {
        let mut progress = Progress::new("Q", n);
        for _ in 0..n {
            self.q.episode(&mut self.env, epsilon, &mut self.rng);
            progress.tick();
        }
    }

    /// Epsilon-greedy choice from the current Q-table.
    pub fn pick_action(&mut self, state: &State, epsilon: Probability) -> Action {
        self.q.pick(state, epsilon, &mut self.rng)
    }
    /// Greedy choice from the current Q-table, HIT before anything is learned.
    pub fn autoplay_decision(&self, state: &State) -> Action {
        self.q.decide(state)
    }
    /// The fixed policy being evaluated.
    pub fn default_policy(&self, state: &State) -> Action {
        self.policy.decide(state)
    }
    pub fn alpha(n: u32) -> Probability {
        alpha(n)
    }

    /// Plays `n` hands greedily from the Q-table without learning.
    pub fn autoplay(&mut self, n: usize) -> Record {
        (0..n)
            .map(|_| {
                self.env.reset();
                while !self.env.is_terminal() {
                    let ref state = self.env.current();
                    self.env.step(self.q.decide(state));
                }
                self.env.terminal_reward().unwrap_or_default()
            })
            .fold(Record::default(), Record::witness)
    }

    pub fn mc(&self) -> &MonteCarlo {
        &self.mc
    }
    pub fn td(&self) -> &Temporal {
        &self.td
    }
    pub fn q(&self) -> &QLearning {
        &self.q
    }
    pub fn env(&self) -> &Environment<S> {
        &self.env
    }
}
