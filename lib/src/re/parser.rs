use log::trace;

use crate::config::Config;
use crate::fsa::{Fsa, Label};
use crate::re::tokenizer::{Token, TokenKind};
use crate::Error;

/// Builds the result of each grammar rule from the results of its operands.
///
/// The [`Parser`] doesn't produce a syntax tree. Instead, it calls these
/// functions bottom-up as soon as the operands of each rule are parsed.
/// [`FsaCombinator`] produces automata, but other implementations can
/// produce anything else, like a syntax tree or code for a VM.
pub trait Combinator {
    /// The value produced for each parsed expression.
    type Output;

    /// Returns the value for a single literal character.
    fn literal(&mut self, c: char) -> Self::Output;

    /// Returns the value for `left` followed by `right`.
    fn concat(
        &mut self,
        left: Self::Output,
        right: Self::Output,
    ) -> Self::Output;

    /// Returns the value for `left | right`.
    fn alternate(
        &mut self,
        left: Self::Output,
        right: Self::Output,
    ) -> Self::Output;

    /// Returns the value for `operand*`.
    fn star(&mut self, operand: Self::Output) -> Self::Output;
}

/// A [`Combinator`] that builds automata with Thompson's construction.
#[derive(Debug, Default)]
pub struct FsaCombinator;

impl Combinator for FsaCombinator {
    type Output = Fsa;

    fn literal(&mut self, c: char) -> Fsa {
        let mut fsa = Fsa::new();
        fsa.add_states(2);
        fsa.add_transition(0, 1, Label::from(c));
        fsa.accept_state(1);
        fsa
    }

    fn concat(&mut self, left: Fsa, right: Fsa) -> Fsa {
        trace!(
            "concatenate: {} + {} states",
            left.num_states(),
            right.num_states()
        );
        Fsa::concatenate(&left, &right)
    }

    fn alternate(&mut self, left: Fsa, right: Fsa) -> Fsa {
        trace!("union: {} + {} states", left.num_states(), right.num_states());
        Fsa::union(&left, &right)
    }

    fn star(&mut self, operand: Fsa) -> Fsa {
        trace!("closure: {} states", operand.num_states());
        Fsa::closure(&operand)
    }
}

/// Result of parsing a grammar rule.
enum Fragment<T> {
    /// The rule didn't consume any token.
    Absent,
    /// The rule consumed tokens, but they produced nothing, as in `()`.
    Empty,
    /// The rule produced a value.
    Value(T),
}

impl<T> Fragment<T> {
    /// Combines two fragments with `f` if both have a value. Otherwise the
    /// one with a value wins, and an empty fragment wins over an absent one.
    fn merge(self, other: Self, f: impl FnOnce(T, T) -> T) -> Self {
        match (self, other) {
            (Fragment::Value(left), Fragment::Value(right)) => {
                Fragment::Value(f(left, right))
            }
            (Fragment::Value(value), _) | (_, Fragment::Value(value)) => {
                Fragment::Value(value)
            }
            (Fragment::Absent, Fragment::Absent) => Fragment::Absent,
            _ => Fragment::Empty,
        }
    }
}

/// A recursive-descent parser for patterns.
///
/// The grammar, in order of increasing precedence:
///
/// ```text
/// Expression    -> Alternation
/// Alternation   -> Concatenation ("|" Concatenation)*
/// Concatenation -> Closure Closure*
/// Closure       -> Primary "*"?
/// Primary       -> LITERAL | "(" Expression ")"
/// ```
///
/// Operands that produce nothing, like `()` or the missing right-hand side
/// in `a|`, are dropped. All tokens must be consumed, tokens that don't fit
/// the grammar produce [`Error::UnexpectedToken`]. Groups nested deeper than
/// [`Parser::max_depth`] produce [`Error::TooDeep`].
pub struct Parser<'a, 'src, C: Combinator> {
    tokens: &'a [Token<'src>],
    pos: usize,
    combinator: C,
    /// Number of groups currently open.
    depth: usize,
    max_depth: usize,
}

impl<'a, 'src, C: Combinator> Parser<'a, 'src, C> {
    /// Creates a parser for `tokens` that builds its output with
    /// `combinator`.
    pub fn new(tokens: &'a [Token<'src>], combinator: C) -> Self {
        Self {
            tokens,
            pos: 0,
            combinator,
            depth: 0,
            max_depth: Config::DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth of groups. The default is
    /// [`Config::DEFAULT_MAX_DEPTH`].
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the whole token sequence.
    ///
    /// Returns `None` if the pattern is well-formed but produces nothing,
    /// like the empty pattern or `()`.
    pub fn parse(mut self) -> Result<Option<C::Output>, Error> {
        let expr = self.expression()?;

        if let Some(token) = self.peek() {
            return Err(Error::UnexpectedToken {
                token: token.lexeme.to_string(),
                span: token.span.clone(),
            });
        }

        Ok(match expr {
            Fragment::Value(value) => Some(value),
            Fragment::Absent | Fragment::Empty => None,
        })
    }

    fn expression(&mut self) -> Result<Fragment<C::Output>, Error> {
        self.alternation()
    }

    fn alternation(&mut self) -> Result<Fragment<C::Output>, Error> {
        let mut expr = self.concatenation()?;

        while self.eat(TokenKind::Pipe).is_some() {
            let right = self.concatenation()?;
            // The pipe itself was consumed, so at least the result is empty.
            let right = match right {
                Fragment::Absent => Fragment::Empty,
                right => right,
            };
            let combinator = &mut self.combinator;
            expr = expr.merge(right, |l, r| combinator.alternate(l, r));
        }

        Ok(expr)
    }

    fn concatenation(&mut self) -> Result<Fragment<C::Output>, Error> {
        let mut expr = self.closure()?;

        loop {
            let right = self.closure()?;
            if let Fragment::Absent = right {
                break;
            }
            let combinator = &mut self.combinator;
            expr = expr.merge(right, |l, r| combinator.concat(l, r));
        }

        Ok(expr)
    }

    fn closure(&mut self) -> Result<Fragment<C::Output>, Error> {
        let operand = self.primary()?;

        let star = match self.eat(TokenKind::Star) {
            Some(star) => star,
            None => return Ok(operand),
        };

        match operand {
            Fragment::Value(value) => {
                Ok(Fragment::Value(self.combinator.star(value)))
            }
            Fragment::Absent | Fragment::Empty => {
                Err(Error::ClosureOverNothing { span: star.span.clone() })
            }
        }
    }

    fn primary(&mut self) -> Result<Fragment<C::Output>, Error> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Ok(Fragment::Absent),
        };

        match token.kind {
            TokenKind::Literal => {
                self.pos += 1;
                Ok(Fragment::Value(self.combinator.literal(token.char())))
            }
            TokenKind::OpenParen => {
                if self.depth >= self.max_depth {
                    return Err(Error::TooDeep { limit: self.max_depth });
                }
                self.pos += 1;
                self.depth += 1;
                let inner = self.expression()?;
                self.depth -= 1;
                if self.eat(TokenKind::CloseParen).is_none() {
                    return Err(Error::UnterminatedGroup {
                        span: token.span.clone(),
                    });
                }
                Ok(match inner {
                    Fragment::Value(value) => Fragment::Value(value),
                    Fragment::Absent | Fragment::Empty => Fragment::Empty,
                })
            }
            _ => Ok(Fragment::Absent),
        }
    }

    #[inline]
    fn peek(&self) -> Option<&'a Token<'src>> {
        self.tokens.get(self.pos)
    }

    /// Consumes the next token if it's of the given kind.
    fn eat(&mut self, kind: TokenKind) -> Option<&'a Token<'src>> {
        let token = self.peek().filter(|token| token.kind == kind)?;
        self.pos += 1;
        Some(token)
    }
}
