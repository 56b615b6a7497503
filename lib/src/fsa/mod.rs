/*! Finite-state automata over Unicode symbols.

An [`Fsa`] has the state set `{0, ..., n - 1}`. States carry nothing but
their outgoing transitions, they are identified by their index and are never
removed, only appended. Each transition is labelled either with a symbol code
(the `u32` value of a `char`) or with [`Label::Epsilon`], which consumes no
input. Several transitions may leave the same state with the same label, so
in general the automaton is non-deterministic.

Automata are built bottom-up with the operators in [Thompson's
construction][1] ([`Fsa::concatenate`], [`Fsa::union`] and [`Fsa::closure`]),
converted into a DFA with [`Fsa::determinize`], and optionally shrunk with
[`Fsa::minimize`]. [`Fsa::consume_string`] tells whether a sequence of
symbols belongs to the language recognized by the automaton, and works for
both deterministic and non-deterministic automata.

[1]: https://en.wikipedia.org/wiki/Thompson%27s_construction
*/

use std::collections::{BTreeSet, VecDeque};
use std::fmt::{Display, Formatter};

use bitvec::vec::BitVec;
use itertools::Itertools;

mod determinize;
mod minimize;
mod ops;
mod search;


/// Index of a state within an [`Fsa`].
pub type StateId = usize;

/// Label of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// Consumes the input symbol with this code.
    Symbol(u32),
    /// Consumes nothing.
    Epsilon,
}

impl Label {
    /// Returns the symbol code, or `None` for [`Label::Epsilon`].
    #[inline]
    pub fn symbol(&self) -> Option<u32> {
        match self {
            Label::Symbol(symbol) => Some(*symbol),
            Label::Epsilon => None,
        }
    }

    /// Returns true if this is [`Label::Epsilon`].
    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl From<char> for Label {
    #[inline]
    fn from(c: char) -> Self {
        Label::Symbol(c.into())
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Symbol(symbol) => write!(f, "{:#04x}", symbol),
            Label::Epsilon => write!(f, "EPS"),
        }
    }
}

/// A transition to state `to`, taken when the input matches `label`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The symbol consumed, or epsilon.
    pub label: Label,
    /// Destination state.
    pub to: StateId,
}

/// A finite-state automaton.
///
/// A newly created automaton has zero states. Such an automaton is *void*
/// (see [`Fsa::is_void`]) and it's used for representing the absence of an
/// automaton, for instance the result of compiling an empty pattern. A void
/// automaton doesn't accept any input, not even the empty one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fsa {
    start: StateId,
    /// Outgoing transitions, indexed by source state. Transition lists are
    /// expected to be very sparse, that's why this is preferred over an
    /// adjacency matrix.
    transitions: Vec<Vec<Transition>>,
    /// One bit per state, set for accept states.
    accept: BitVec,
    /// True if the automaton was produced by [`Fsa::determinize`] or
    /// [`Fsa::minimize`] and no transition has been added since then.
    deterministic: bool,
}

impl Fsa {
    /// Creates a new automaton with zero states.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `how_many` new states and returns the index of the first one.
    pub fn add_states(&mut self, how_many: usize) -> StateId {
        let first = self.transitions.len();
        self.transitions.resize_with(first + how_many, Vec::new);
        self.accept.resize(first + how_many, false);
        first
    }

    /// Adds a transition from state `from` to state `to`.
    ///
    /// # Panics
    ///
    /// If any of the states doesn't exist.
    pub fn add_transition(
        &mut self,
        from: StateId,
        to: StateId,
        label: Label,
    ) {
        assert!(
            from < self.num_states() && to < self.num_states(),
            "transition {} -> {} out of bounds (states: {})",
            from,
            to,
            self.num_states()
        );
        self.transitions[from].push(Transition { label, to });
        self.deterministic = false;
    }

    /// Marks `state` as an accept state.
    ///
    /// # Panics
    ///
    /// If the state doesn't exist.
    pub fn accept_state(&mut self, state: StateId) {
        assert!(
            state < self.num_states(),
            "accept state {} out of bounds",
            state
        );
        self.accept.set(state, true);
    }

    /// Sets the start state.
    ///
    /// # Panics
    ///
    /// If the state doesn't exist.
    pub fn start_state(&mut self, state: StateId) {
        assert!(
            state < self.num_states(),
            "start state {} out of bounds",
            state
        );
        self.start = state;
    }

    /// Returns the start state.
    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Returns the number of states.
    #[inline]
    pub fn num_states(&self) -> usize {
        self.transitions.len()
    }

    /// Returns the total number of transitions.
    pub fn num_transitions(&self) -> usize {
        self.transitions.iter().map(Vec::len).sum()
    }

    /// Returns the transitions going out of `state`.
    #[inline]
    pub fn transitions(&self, state: StateId) -> &[Transition] {
        self.transitions[state].as_slice()
    }

    /// Returns true if `state` is an accept state.
    #[inline]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accept.get(state).is_some_and(|bit| *bit)
    }

    /// Returns the accept states in increasing order.
    pub fn accept_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accept.iter_ones()
    }

    /// Returns true if the automaton has zero states.
    #[inline]
    pub fn is_void(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Returns true if at least one state has an outgoing transition.
    pub fn has_transitions(&self) -> bool {
        self.transitions.iter().any(|t| !t.is_empty())
    }

    /// Returns true if no state has outgoing transitions.
    ///
    /// This holds both for void automata and for automata whose states are
    /// all isolated. Use [`Fsa::is_void`] for telling both cases apart.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.has_transitions()
    }

    /// Returns true if the automaton is known to be deterministic.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    /// Returns the set of states reachable from `state` by following only
    /// epsilon transitions, `state` included.
    pub fn epsilon_closure(&self, state: StateId) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::new();
        self.extend_epsilon_closure(state, &mut closure);
        closure
    }

    /// Adds to `closure` the states in the epsilon closure of `state`.
    /// States already in `closure` are not explored again.
    pub(crate) fn extend_epsilon_closure(
        &self,
        state: StateId,
        closure: &mut BTreeSet<StateId>,
    ) {
        assert!(state < self.num_states());

        if !closure.insert(state) {
            return;
        }

        let mut work = VecDeque::from([state]);

        while let Some(current) = work.pop_front() {
            for transition in &self.transitions[current] {
                if transition.label.is_epsilon()
                    && closure.insert(transition.to)
                {
                    work.push_back(transition.to);
                }
            }
        }
    }

    fn clear_accept_states(&mut self) {
        self.accept.fill(false);
    }
}

/// Dumps the automaton in the form:
///
/// ```text
/// start: 00000
/// accept: [00002]
/// 00000: 0x61 -> 00001
/// 00001: EPS -> 00002
/// ```
impl Display for Fsa {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "start: {:05}", self.start)?;
        writeln!(
            f,
            "accept: [{}]",
            self.accept_states().map(|s| format!("{:05}", s)).join(", ")
        )?;
        for (from, transitions) in self.transitions.iter().enumerate() {
            for transition in transitions {
                writeln!(
                    f,
                    "{:05}: {} -> {:05}",
                    from, transition.label, transition.to
                )?;
            }
        }
        Ok(())
    }
}
