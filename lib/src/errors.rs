use thiserror::Error;

use crate::re::Span;

/// Errors returned while building a [`crate::Matcher`].
///
/// All variants except [`Error::TooLarge`] and [`Error::TooDeep`] indicate a
/// malformed pattern.
/// Matching itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An opening parenthesis without its closing counterpart.
    #[error("malformed pattern: unterminated parentheses at {span}")]
    UnterminatedGroup {
        /// Span of the opening parenthesis.
        span: Span,
    },

    /// A `*` that doesn't follow a literal or a non-empty group.
    #[error("malformed pattern: closure over nothing at {span}")]
    ClosureOverNothing {
        /// Span of the `*`.
        span: Span,
    },

    /// A token that can't appear at this point of the pattern, like a
    /// stray `)` or one of the reserved tokens `[`, `]`, `-` and `+`.
    #[error("malformed pattern: unexpected `{token}` at {span}")]
    UnexpectedToken {
        /// The token as it appears in the pattern.
        token: String,
        /// Span of the token.
        span: Span,
    },

    /// The deterministic automaton would exceed the configured number of
    /// states.
    #[error("automaton too large (max: {limit} states)")]
    TooLarge {
        /// Maximum number of states allowed.
        limit: usize,
    },

    /// Groups are nested deeper than the configured limit.
    #[error("pattern too deeply nested (max: {limit} levels)")]
    TooDeep {
        /// Maximum nesting depth allowed.
        limit: usize,
    },
}

impl Error {
    /// Returns true if the error is due to a malformed pattern.
    pub fn is_malformed_pattern(&self) -> bool {
        !matches!(self, Error::TooLarge { .. } | Error::TooDeep { .. })
    }

    /// Returns the span within the pattern where the error was found.
    pub fn span(&self) -> Option<&Span> {
        match self {
            Error::UnterminatedGroup { span }
            | Error::ClosureOverNothing { span }
            | Error::UnexpectedToken { span, .. } => Some(span),
            Error::TooLarge { .. } | Error::TooDeep { .. } => None,
        }
    }
}
