use std::time::Instant;

use log::debug;

use crate::config::Config;
use crate::fsa::Fsa;
use crate::re::parser::{FsaCombinator, Parser};
use crate::re::tokenizer::{Token, Tokenizer};
use crate::Error;

/// A compiled pattern.
///
/// Building a matcher tokenizes and parses the pattern into an NFA, converts
/// it into a DFA, and minimizes the DFA unless disabled in [`Config`]. No
/// matcher is produced for a malformed pattern.
///
/// ```
/// # use fsa_regex::Matcher;
/// let matcher = Matcher::new("d(a|b)*").unwrap();
///
/// assert!(matcher.is_match("dabba"));
/// assert!(!matcher.is_match("ddbaa"));
/// ```
#[derive(Clone, Debug)]
pub struct Matcher {
    fsa: Fsa,
}

impl Matcher {
    /// Compiles `pattern` with the default [`Config`].
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Self::with_config(pattern, &Config::default())
    }

    /// Compiles `pattern` with the given [`Config`].
    pub fn with_config(pattern: &str, config: &Config) -> Result<Self, Error> {
        let start = Instant::now();

        let tokens: Vec<Token> = Tokenizer::new(pattern).collect();

        let mut fsa = Parser::new(tokens.as_slice(), FsaCombinator)
            .max_depth(config.max_depth)
            .parse()?
            .unwrap_or_default();

        debug!(
            "pattern `{}`: {} tokens, NFA with {} states",
            pattern,
            tokens.len(),
            fsa.num_states()
        );

        fsa.try_determinize(config.max_states)?;

        debug!(
            "DFA with {} states and {} transitions",
            fsa.num_states(),
            fsa.num_transitions()
        );

        if config.minimize {
            fsa.minimize();
            debug!("minimized DFA with {} states", fsa.num_states());
        }

        debug!("matcher build time: {:?}", Instant::elapsed(&start));

        Ok(Self { fsa })
    }

    /// Returns true if the whole `input` belongs to the language described
    /// by the pattern.
    pub fn is_match(&self, input: &str) -> bool {
        let symbols: Vec<u32> = input.chars().map(u32::from).collect();
        self.fsa.consume_string(symbols.as_slice())
    }

    /// Returns the automaton used for matching.
    #[inline]
    pub fn fsa(&self) -> &Fsa {
        &self.fsa
    }
}
