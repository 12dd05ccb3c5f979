use crate::STAND_THRESHOLD;
use crate::blackjack::Action;
use crate::blackjack::State;

/// A fixed, deterministic decision rule under evaluation.
///
/// Evaluators only ever read a policy; they never change it.
pub trait Policy {
    fn decide(&self, state: &State) -> Action;
}

/// Hit below a best total of 14, stand otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct Threshold;

impl Policy for Threshold {
    fn decide(&self, state: &State) -> Action {
        if state.best() < STAND_THRESHOLD {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

impl<F> Policy for F
where
    F: Fn(&State) -> Action,
{
    fn decide(&self, state: &State) -> Action {
        self(state)
    }
}
