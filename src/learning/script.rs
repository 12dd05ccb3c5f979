//! Deterministic simulator for checking update arithmetic.
use super::Simulator;
use crate::Utility;
use crate::blackjack::Action;
use crate::blackjack::State;

/// Walks the same path of states every episode regardless of the action,
/// then pays a fixed reward at the last state.
#[derive(Debug, Clone)]
pub struct Script {
    path: Vec<State>,
    payoff: Utility,
    cursor: usize,
    pub taken: Vec<Action>,
}

impl Script {
    pub fn new(path: Vec<State>, payoff: Utility) -> Self {
        assert!(!path.is_empty());
        Self {
            path,
            payoff,
            cursor: 0,
            taken: Vec::new(),
        }
    }
    fn advance(&mut self, action: Action) {
        if !self.over() {
            self.cursor += 1;
            self.taken.push(action);
        }
    }
}

impl Simulator for Script {
    fn reset(&mut self) {
        self.cursor = 0;
    }
    fn state(&self) -> State {
        self.path[self.cursor]
    }
    fn hit(&mut self) {
        self.advance(Action::Hit)
    }
    fn stand(&mut self) {
        self.advance(Action::Stand)
    }
    fn over(&self) -> bool {
        self.cursor + 1 == self.path.len()
    }
    fn reward(&self) -> Utility {
        if self.over() { self.payoff } else { 0. }
    }
}

/// Three live states and a finished one: (10,0,5) → (15,0,5) → (19,0,5) → over.
pub fn path() -> Vec<State> {
    vec![
        State::new(10, false, 5, false).unwrap(),
        State::new(15, false, 5, false).unwrap(),
        State::new(19, false, 5, false).unwrap(),
        State::new(19, false, 5, true).unwrap(),
    ]
}
