//! Tabular policy evaluation and control.
//!
//! # Module Structure
//!
//! - `environment`: Simulator collaborator and the transition adapter
//! - `table`: Fixed-key tables over the state space
//! - `policy`: Fixed evaluation policies
//! - `schedule`: Decaying learning rate
//! - `greedy`: Greedy and epsilon-greedy selection
//! - `montecarlo`: Every-visit Monte Carlo evaluation
//! - `temporal`: TD(0) evaluation
//! - `qlearning`: Q-learning control
//! - `progress`: Rate-limited training logs
//! - `record`: Win/draw/loss tallies from greedy play
//! - `agent`: Owns one environment and all three learners
pub mod agent;
pub mod environment;
pub mod greedy;
pub mod montecarlo;
pub mod policy;
pub mod progress;
pub mod qlearning;
pub mod record;
pub mod schedule;
pub mod table;
pub mod temporal;

#[cfg(test)]
pub(crate) mod script;

pub use agent::*;
pub use environment::*;
pub use greedy::*;
pub use montecarlo::*;
pub use policy::*;
pub use progress::*;
pub use qlearning::*;
pub use record::*;
pub use schedule::*;
pub use table::*;
pub use temporal::*;
