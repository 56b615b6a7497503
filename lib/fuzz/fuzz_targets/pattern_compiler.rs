#![no_main]
use libfuzzer_sys::fuzz_target;

use fsa_regex::{
    Config, FsaCombinator, Matcher, Parser, Token, TokenKind, Tokenizer,
};

fuzz_target!(|data: &[u8]| {
    let Ok(pattern) = std::str::from_utf8(data) else {
        return;
    };

    let config = Config::new().max_states(1000);

    let Ok(matcher) = Matcher::with_config(pattern, &config) else {
        return;
    };

    let tokens: Vec<Token> = Tokenizer::new(pattern).collect();
    let nfa = Parser::new(tokens.as_slice(), FsaCombinator)
        .parse()
        .unwrap()
        .unwrap_or_default();

    // The pattern's own literals are a good source of inputs.
    let literals: String = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Literal)
        .map(|token| token.char())
        .collect();

    for len in 0..=literals.chars().count().min(8) {
        let input: String = literals.chars().take(len).collect();
        let symbols: Vec<u32> = input.chars().map(u32::from).collect();
        assert_eq!(matcher.is_match(&input), nfa.consume_string(&symbols));
    }
});
