/*! This module parses regular expressions and compiles them into automata.

The pattern language is deliberately small: literal characters, concatenation
by juxtaposition, alternation with `|`, grouping with `(` and `)`, and the
Kleene star `*`. There's no escape mechanism, every character other than
`(`, `)`, `[`, `]`, `-`, `+`, `*` and `|` is a literal. `[`, `]`, `-` and `+`
are recognized by the [`Tokenizer`] but reserved, the [`Parser`] rejects
them.

Compiling a pattern goes through three stages:

1. The [`Tokenizer`] splits the pattern into a flat sequence of [`Token`]s.
2. The [`Parser`] walks the tokens with a recursive-descent grammar. There's
   no syntax tree, each grammar rule hands its operands to a [`Combinator`]
   as soon as they are parsed. With [`FsaCombinator`] the result is a
   non-deterministic automaton built with [Thompson's construction][1].
3. The [`Matcher`] determinizes (and optionally minimizes) that automaton
   and uses it for testing strings.

[1]: https://en.wikipedia.org/wiki/Thompson%27s_construction
*/

use std::fmt::{Display, Formatter};
use std::ops::Range;

pub use matcher::Matcher;
pub use parser::{Combinator, FsaCombinator, Parser};
pub use tokenizer::{Token, TokenKind, Tokenizer};

mod matcher;
mod parser;
mod tokenizer;


/// Span of a token within a pattern, as a range of byte offsets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span(pub Range<usize>);

impl From<logos::Span> for Span {
    fn from(value: logos::Span) -> Self {
        Self(value)
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}..{}]", self.start(), self.end())
    }
}

impl Span {
    /// Offset within the pattern (in bytes) where the span starts.
    #[inline]
    pub fn start(&self) -> usize {
        self.0.start
    }

    /// Offset within the pattern (in bytes) where the span ends.
    #[inline]
    pub fn end(&self) -> usize {
        self.0.end
    }

    /// Returns the span as a range of byte offsets.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.0.clone()
    }
}
