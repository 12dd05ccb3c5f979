use crate::blackjack::State;
use std::collections::BTreeMap;

/// A mapping from every state in the state space to a `V`.
///
/// Keys are fixed at construction: every table starts out covering the
/// full state space with `V::default()`, and entries are only ever
/// overwritten. Indexing by state is therefore total.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<V>(BTreeMap<State, V>);

impl<V> Default for Table<V>
where
    V: Default,
{
    fn default() -> Self {
        Self(State::all().map(|s| (s, V::default())).collect())
    }
}

impl<V> Table<V> {
    pub fn keys(&self) -> impl Iterator<Item = &State> {
        self.0.keys()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&State, &V)> {
        self.0.iter()
    }
}

impl<V> std::ops::Index<&State> for Table<V> {
    type Output = V;
    fn index(&self, state: &State) -> &V {
        &self.0[state]
    }
}
impl<V> std::ops::IndexMut<&State> for Table<V> {
    fn index_mut(&mut self, state: &State) -> &mut V {
        self.0
            .get_mut(state)
            .expect("tables cover the full state space")
    }
}
