use std::collections::VecDeque;

use bitvec::vec::BitVec;
use rustc_hash::FxHashMap;

use super::{Fsa, Label, StateId};

/// Marks states that don't belong to any block.
const NO_BLOCK: usize = usize::MAX;

/// A state's block, followed by the block reached on each label.
type Signature = (usize, Vec<(Label, usize)>);

impl Fsa {
    /// Reduces a deterministic automaton to the minimum number of states
    /// that recognize the same language.
    ///
    /// States from which no accept state is reachable are removed first,
    /// together with the transitions going into them. The remaining states
    /// are then merged with Moore's partition refinement: starting with the
    /// partition {accepting, non-accepting}, blocks are split until all the
    /// states in a block go to the same blocks for the same symbols.
    ///
    /// Non-deterministic automata are left untouched, call
    /// [`Fsa::determinize`] first. The number of states never grows.
    pub fn minimize(&mut self) {
        if !self.deterministic || self.is_void() {
            return;
        }

        let live = self.live_states();

        // The language is empty, a single non-accepting state is enough.
        if !live[self.start] {
            let mut dfa = Fsa::new();
            dfa.add_states(1);
            dfa.deterministic = true;
            *self = dfa;
            return;
        }

        let blocks = self.refine_partition(&live);

        // Build the result with one state per block reachable from the
        // start block, numbered in breadth-first order.
        let num_blocks = blocks.iter().filter(|b| **b != NO_BLOCK).max();
        let num_blocks = num_blocks.map_or(0, |max| max + 1);

        let mut representative = vec![None; num_blocks];
        for (state, block) in blocks.iter().enumerate() {
            if *block != NO_BLOCK && representative[*block].is_none() {
                representative[*block] = Some(state);
            }
        }

        let mut new_id: Vec<Option<StateId>> = vec![None; num_blocks];
        let mut order = Vec::new();
        let mut pending = VecDeque::new();

        new_id[blocks[self.start]] = Some(0);
        order.push(blocks[self.start]);
        pending.push_back(blocks[self.start]);

        while let Some(block) = pending.pop_front() {
            let Some(state) = representative[block] else { continue };
            for transition in &self.transitions[state] {
                let target = blocks[transition.to];
                if target != NO_BLOCK && new_id[target].is_none() {
                    new_id[target] = Some(order.len());
                    order.push(target);
                    pending.push_back(target);
                }
            }
        }

        let mut dfa = Fsa::new();
        dfa.add_states(order.len());

        for (id, block) in order.iter().enumerate() {
            let Some(state) = representative[*block] else { continue };
            for transition in &self.transitions[state] {
                if let Some(to) = blocks
                    .get(transition.to)
                    .and_then(|target| new_id.get(*target).copied().flatten())
                {
                    dfa.add_transition(id, to, transition.label);
                }
            }
            if self.is_accepting(state) {
                dfa.accept_state(id);
            }
        }

        dfa.deterministic = true;
        *self = dfa;
    }

    /// Returns one bit per state, set for the states from which some accept
    /// state is reachable.
    fn live_states(&self) -> BitVec {
        let mut reverse: Vec<Vec<StateId>> =
            vec![Vec::new(); self.num_states()];

        for (from, transitions) in self.transitions.iter().enumerate() {
            for transition in transitions {
                reverse[transition.to].push(from);
            }
        }

        let mut live = BitVec::repeat(false, self.num_states());
        let mut stack: Vec<StateId> = self.accept_states().collect();

        for state in &stack {
            live.set(*state, true);
        }

        while let Some(state) = stack.pop() {
            for &from in &reverse[state] {
                if !live[from] {
                    live.set(from, true);
                    stack.push(from);
                }
            }
        }

        live
    }

    /// Computes the coarsest stable partition of the live states. Returns
    /// the block of each state, or [`NO_BLOCK`] for states that are not
    /// live. Block numbers are dense.
    fn refine_partition(&self, live: &BitVec) -> Vec<usize> {
        let mut blocks: Vec<usize> = (0..self.num_states())
            .map(|state| {
                if !live[state] {
                    NO_BLOCK
                } else if self.is_accepting(state) {
                    1
                } else {
                    0
                }
            })
            .collect();

        let mut num_blocks = {
            let accepting = blocks.iter().any(|b| *b == 1);
            let rejecting = blocks.iter().any(|b| *b == 0);
            accepting as usize + rejecting as usize
        };

        loop {
            let mut signatures: FxHashMap<Signature, usize> =
                FxHashMap::default();

            let refined: Vec<usize> = (0..self.num_states())
                .map(|state| {
                    if blocks[state] == NO_BLOCK {
                        return NO_BLOCK;
                    }
                    let mut moves: Vec<(Label, usize)> = self
                        .transitions(state)
                        .iter()
                        .filter(|t| blocks[t.to] != NO_BLOCK)
                        .map(|t| (t.label, blocks[t.to]))
                        .collect();
                    moves.sort();
                    let next = signatures.len();
                    *signatures.entry((blocks[state], moves)).or_insert(next)
                })
                .collect();

            let stable = signatures.len() == num_blocks;

            num_blocks = signatures.len();
            blocks = refined;

            if stable {
                return blocks;
            }
        }
    }
}
