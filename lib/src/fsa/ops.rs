/*! Operators of Thompson's construction.

Each operator takes its operands by reference and returns a brand-new
automaton, operands are never modified. The states of the left operand keep
their indexes in the result, while the states of the right operand are
shifted by the number of states in the left one.

Void automata (those with zero states) stand for "no automaton at all". They
are the identity for [`Fsa::concatenate`] and [`Fsa::union`], and
[`Fsa::closure`] leaves them untouched.
*/

use super::{Fsa, Label, StateId};

impl Fsa {
    /// Returns an automaton that accepts `xy` for every `x` accepted by
    /// `left` and every `y` accepted by `right`.
    ///
    /// An epsilon transition goes from each accept state in `left` to the
    /// start state of `right`. The accept states of the result are the ones
    /// in `right`.
    pub fn concatenate(left: &Fsa, right: &Fsa) -> Fsa {
        if right.is_void() {
            return left.clone();
        }
        if left.is_void() {
            return right.clone();
        }

        let mut result = left.clone();
        let offset = result.append(right);

        result.clear_accept_states();

        for accept in left.accept_states() {
            result.add_transition(
                accept,
                offset + right.start,
                Label::Epsilon,
            );
        }

        for accept in right.accept_states() {
            result.accept_state(offset + accept);
        }

        result
    }

    /// Returns an automaton that accepts everything accepted by `left` or
    /// by `right`.
    ///
    /// A new start state has epsilon transitions to the start states of both
    /// operands, and every accept state in both operands has an epsilon
    /// transition to a new, single, accept state.
    pub fn union(left: &Fsa, right: &Fsa) -> Fsa {
        if right.is_void() {
            return left.clone();
        }
        if left.is_void() {
            return right.clone();
        }

        let mut result = left.clone();
        let offset = result.append(right);

        let new_start = result.add_states(2);
        let new_accept = new_start + 1;

        result.add_transition(new_start, left.start, Label::Epsilon);
        result.add_transition(new_start, offset + right.start, Label::Epsilon);

        for accept in left.accept_states() {
            result.add_transition(accept, new_accept, Label::Epsilon);
        }

        for accept in right.accept_states() {
            result.add_transition(offset + accept, new_accept, Label::Epsilon);
        }

        result.clear_accept_states();
        result.accept_state(new_accept);
        result.start_state(new_start);
        result
    }

    /// Returns the Kleene closure of `operand`, an automaton that accepts
    /// zero or more repetitions of what `operand` accepts.
    ///
    /// A new start state goes to the old start state (one or more
    /// repetitions) and to a new accept state (zero repetitions). Every old
    /// accept state goes to the new accept state, and back to the old start
    /// state for repeating once more.
    pub fn closure(operand: &Fsa) -> Fsa {
        if operand.is_void() {
            return operand.clone();
        }

        let mut result = operand.clone();

        let new_start = result.add_states(2);
        let new_accept = new_start + 1;
        let old_start = operand.start;

        result.add_transition(new_start, old_start, Label::Epsilon);
        result.add_transition(new_start, new_accept, Label::Epsilon);

        for accept in operand.accept_states() {
            result.add_transition(accept, new_accept, Label::Epsilon);
            result.add_transition(accept, old_start, Label::Epsilon);
        }

        result.clear_accept_states();
        result.accept_state(new_accept);
        result.start_state(new_start);
        result
    }

    /// Appends the states and transitions of `other` to this automaton,
    /// shifting their indexes. Returns the index that state 0 of `other`
    /// has in this automaton. Accept states and start state of `other` are
    /// not copied.
    fn append(&mut self, other: &Fsa) -> StateId {
        let offset = self.add_states(other.num_states());

        for (from, transitions) in other.transitions.iter().enumerate() {
            for transition in transitions {
                self.add_transition(
                    offset + from,
                    offset + transition.to,
                    transition.label,
                );
            }
        }

        offset
    }
}
