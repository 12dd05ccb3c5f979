use crate::Utility;
use crate::blackjack::Action;
use crate::blackjack::State;

/// The episodic game being learned, as seen from outside its rules.
///
/// Implementations own their randomness and mutate in place. The learners
/// never call this directly; they go through [`Environment`].
///
/// # Required Methods
///
/// - `reset()`: Start a new episode from the initial-state distribution
/// - `state()`: Current state
/// - `hit()` / `stand()`: Apply a player decision
/// - `over()`: Whether the episode has reached a terminal state
/// - `reward()`: Terminal payoff, only meaningful once `over()`
pub trait Simulator {
    fn reset(&mut self);
    fn state(&self) -> State;
    fn hit(&mut self);
    fn stand(&mut self);
    fn over(&self) -> bool;
    fn reward(&self) -> Utility;
}

/// Adapter composing the simulator primitives into transitions.
#[derive(Debug, Clone)]
pub struct Environment<S>
where
    S: Simulator,
{
    simulator: S,
}

impl<S> Environment<S>
where
    S: Simulator,
{
    pub fn current(&self) -> State {
        self.simulator.state()
    }
    pub fn reset(&mut self) {
        self.simulator.reset()
    }
    pub fn is_terminal(&self) -> bool {
        self.simulator.over()
    }
    pub fn terminal_reward(&self) -> Option<Utility> {
        self.is_terminal().then(|| self.simulator.reward())
    }
    /// Applies the action and returns the resulting state.
    /// A terminal state has no successor, so this is a no-op returning `None`.
    pub fn step(&mut self, action: Action) -> Option<State> {
        if self.is_terminal() {
            return None;
        }
        match action {
            Action::Hit => self.simulator.hit(),
            Action::Stand => self.simulator.stand(),
        }
        Some(self.current())
    }
    pub fn simulator(&self) -> &S {
        &self.simulator
    }
}

impl<S> From<S> for Environment<S>
where
    S: Simulator,
{
    fn from(simulator: S) -> Self {
        Self { simulator }
    }
}
