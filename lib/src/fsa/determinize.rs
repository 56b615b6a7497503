use std::collections::{BTreeMap, BTreeSet, VecDeque};

use rustc_hash::FxHashMap;

use super::{Fsa, Label, StateId};
use crate::Error;

impl Fsa {
    /// Converts the automaton into an equivalent deterministic one using the
    /// subset construction.
    ///
    /// Each state in the result (a *superstate*) corresponds to a set of
    /// states in the original automaton. The start state of the result is
    /// always state 0, the epsilon closure of the original start state. For
    /// every superstate and every symbol leaving any of its members, the
    /// epsilon closures of all the destinations are merged into the
    /// successor superstate. Two superstates are the same only if their sets
    /// are equal. A superstate is an accept state if any of its members is.
    ///
    /// The transition table, start state and accept states are replaced
    /// entirely. The recognized language doesn't change.
    pub fn determinize(&mut self) {
        if let Some(dfa) = self.subset_construction(usize::MAX) {
            *self = dfa;
        }
    }

    /// Like [`Fsa::determinize`], but fails with [`Error::TooLarge`] if the
    /// result would have more than `max_states` states. The automaton is left
    /// unchanged in that case.
    pub fn try_determinize(&mut self, max_states: usize) -> Result<(), Error> {
        match self.subset_construction(max_states) {
            Some(dfa) => {
                *self = dfa;
                Ok(())
            }
            None => Err(Error::TooLarge { limit: max_states }),
        }
    }

    fn subset_construction(&self, max_states: usize) -> Option<Fsa> {
        if self.is_void() {
            let mut dfa = self.clone();
            dfa.deterministic = true;
            return Some(dfa);
        }

        let mut dfa = Fsa::new();
        let mut superstates: Vec<BTreeSet<StateId>> = Vec::new();
        let mut index: FxHashMap<BTreeSet<StateId>, StateId> =
            FxHashMap::default();
        let mut pending = VecDeque::new();

        let first = self.epsilon_closure(self.start);

        dfa.add_states(1);
        index.insert(first.clone(), 0);
        superstates.push(first);
        pending.push_back(0);

        while let Some(current) = pending.pop_front() {
            // Group destinations by symbol. A BTreeMap keeps the transitions
            // of each superstate sorted by symbol, which makes the output
            // independent of the order in which transitions were added.
            let mut moves: BTreeMap<u32, BTreeSet<StateId>> = BTreeMap::new();

            for &member in &superstates[current] {
                for transition in &self.transitions[member] {
                    if let Label::Symbol(symbol) = transition.label {
                        self.extend_epsilon_closure(
                            transition.to,
                            moves.entry(symbol).or_default(),
                        );
                    }
                }
            }

            for (symbol, target) in moves {
                let target_id = match index.get(&target) {
                    Some(id) => *id,
                    None => {
                        if superstates.len() >= max_states {
                            return None;
                        }
                        let id = dfa.add_states(1);
                        index.insert(target.clone(), id);
                        superstates.push(target);
                        pending.push_back(id);
                        id
                    }
                };
                dfa.add_transition(current, target_id, Label::Symbol(symbol));
            }
        }

        for (id, members) in superstates.iter().enumerate() {
            if members.iter().any(|member| self.is_accepting(*member)) {
                dfa.accept_state(id);
            }
        }

        dfa.deterministic = true;

        Some(dfa)
    }
}
