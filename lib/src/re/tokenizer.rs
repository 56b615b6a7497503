/*! Implements the pattern tokenizer.

Tokenization never fails. Each character in the pattern produces exactly one
token, either one of the symbols with a special meaning or a
[`TokenKind::Literal`].
*/

use logos::Logos;

use crate::re::Span;

/// Kinds of tokens found in a pattern.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `[`, reserved.
    #[token("[")]
    OpenBracket,
    /// `]`, reserved.
    #[token("]")]
    CloseBracket,
    /// `-`, reserved.
    #[token("-")]
    Dash,
    /// `+`, reserved.
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `|`
    #[token("|")]
    Pipe,
    /// Any other character, newlines included.
    #[regex(r"[^()\[\]\-+*|]")]
    Literal,
}

/// A token produced by the [`Tokenizer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The text of the token. Always a single character.
    pub lexeme: &'src str,
    /// Where the token is located within the pattern.
    pub span: Span,
}

impl Token<'_> {
    /// Returns the character in the token.
    pub fn char(&self) -> char {
        self.lexeme.chars().next().unwrap_or_default()
    }
}

/// Takes a pattern and produces a sequence of tokens.
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, TokenKind>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a new [`Tokenizer`] for `pattern`.
    pub fn new(pattern: &'src str) -> Self {
        Self { lexer: TokenKind::lexer(pattern) }
    }

    /// Returns the next token, or `None` at the end of the pattern.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        // Every character can be a literal, so logos never reports an
        // error here. If it did, the offending character is a literal too.
        let kind = self.lexer.next()?.unwrap_or(TokenKind::Literal);
        Some(Token {
            kind,
            lexeme: self.lexer.slice(),
            span: Span::from(self.lexer.span()),
        })
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
