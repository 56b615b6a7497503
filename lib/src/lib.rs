/*! A regular expression compiler based on finite-state automata.

Patterns are compiled into a non-deterministic automaton with [Thompson's
construction][1], which is then converted into a deterministic one with the
[subset construction][2] and minimized. The pattern language supports literal
characters, concatenation, alternation (`|`), grouping (`(` and `)`), and the
Kleene star (`*`).

There are two layers in this crate. [`Matcher`] compiles a pattern and tests
whole strings against it. [`Fsa`] is the automaton itself, with the
operators needed for building automata by hand, determinizing and minimizing
them.

# Example

```rust
# use fsa_regex::Matcher;
let matcher = Matcher::new("a*b(c|d)").unwrap();

assert!(matcher.is_match("aabc"));
assert!(matcher.is_match("bd"));
assert!(!matcher.is_match("ad"));

// Malformed patterns are rejected.
assert!(Matcher::new("a(b").is_err());
```

[1]: https://en.wikipedia.org/wiki/Thompson%27s_construction
[2]: https://en.wikipedia.org/wiki/Powerset_construction
*/

#![deny(missing_docs)]

pub use config::load_config_from_file;
pub use config::Config;
pub use errors::Error;

pub use fsa::Fsa;
pub use fsa::Label;
pub use fsa::StateId;
pub use fsa::Transition;

pub use re::Combinator;
pub use re::FsaCombinator;
pub use re::Matcher;
pub use re::Parser;
pub use re::Span;
pub use re::Token;
pub use re::TokenKind;
pub use re::Tokenizer;

mod config;
mod errors;
mod fsa;
mod re;

#[cfg(test)]
mod tests;
