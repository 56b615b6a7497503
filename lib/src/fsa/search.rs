use rustc_hash::FxHashSet;

use super::{Fsa, Label, StateId};

impl Fsa {
    /// Returns true if the automaton accepts the given sequence of symbols.
    ///
    /// Deterministic automata are walked one transition per symbol. For
    /// non-deterministic ones the search explores every path, following both
    /// symbol and epsilon transitions, until one of them reaches an accept
    /// state exactly when the input is exhausted.
    ///
    /// A void automaton accepts nothing.
    pub fn consume_string(&self, symbols: &[u32]) -> bool {
        if self.is_void() {
            return false;
        }
        if self.deterministic {
            self.walk(symbols)
        } else {
            self.search(symbols)
        }
    }

    fn walk(&self, symbols: &[u32]) -> bool {
        let mut state = self.start;

        for symbol in symbols {
            let label = Label::Symbol(*symbol);
            match self.transitions[state].iter().find(|t| t.label == label) {
                Some(transition) => state = transition.to,
                None => return false,
            }
        }

        self.is_accepting(state)
    }

    /// Depth-first search over (state, position) pairs. Each pair is
    /// explored once at most, so the work is bounded by the number of states
    /// times the length of the input, and epsilon cycles don't loop forever.
    /// The stack lives on the heap, long inputs can't overflow the call
    /// stack.
    fn search(&self, symbols: &[u32]) -> bool {
        let mut visited: FxHashSet<(StateId, usize)> = FxHashSet::default();
        let mut stack = vec![(self.start, 0)];

        visited.insert((self.start, 0));

        while let Some((state, pos)) = stack.pop() {
            if pos == symbols.len() && self.is_accepting(state) {
                return true;
            }

            for transition in &self.transitions[state] {
                let next = match transition.label {
                    Label::Epsilon => (transition.to, pos),
                    Label::Symbol(symbol)
                        if symbols.get(pos) == Some(&symbol) =>
                    {
                        (transition.to, pos + 1)
                    }
                    Label::Symbol(_) => continue,
                };
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        false
    }
}
