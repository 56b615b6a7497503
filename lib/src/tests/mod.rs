/*! End-to-end tests. */
use pretty_assertions::assert_eq;

use crate::{
    Config, Error, Fsa, FsaCombinator, Matcher, Parser, Span, Token, Tokenizer,
};

macro_rules! test_pattern {
    ($pattern:expr, $input:expr, $expected_result:expr) => {{
        let matcher = Matcher::new($pattern).unwrap();
        assert_eq!(
            matcher.is_match($input),
            $expected_result,
            "\n\n`{}` should {}match `{}`",
            $pattern,
            if $expected_result { "" } else { "not " },
            $input
        );

        // The result must be the same without minimization.
        let matcher =
            Matcher::with_config($pattern, &Config::new().minimize(false))
                .unwrap();
        assert_eq!(matcher.is_match($input), $expected_result);
    }};
}

macro_rules! pattern_match {
    ($pattern:expr, $input:expr) => {{
        test_pattern!($pattern, $input, true);
    }};
}

macro_rules! pattern_no_match {
    ($pattern:expr, $input:expr) => {{
        test_pattern!($pattern, $input, false);
    }};
}

macro_rules! pattern_error {
    ($pattern:expr, $err:expr) => {{
        assert_eq!(Matcher::new($pattern).unwrap_err(), $err);
    }};
}

/// Builds the NFA for `pattern`, without determinizing it.
fn nfa(pattern: &str) -> Fsa {
    let tokens: Vec<Token> = Tokenizer::new(pattern).collect();
    Parser::new(tokens.as_slice(), FsaCombinator)
        .parse()
        .unwrap()
        .unwrap_or_default()
}

#[test]
fn simple_expr() {
    pattern_match!("a*b(c|d)", "abd");
    pattern_match!("a*b(c|d)", "aabc");
    pattern_match!("a*b(c|d)", "bd");
    pattern_no_match!("a*b(c|d)", "ad");
    pattern_no_match!("a*b(c|d)", "aaabdsod");
}

#[test]
fn closure() {
    // Zero times is fine.
    pattern_match!("d(a|b)*", "d");

    pattern_match!("d(a|b)*", "daaaaaa");
    pattern_match!("d(a|b)*", "dbbbbbb");
    pattern_match!("d(a|b)*", "dabababba");

    // One and only one `d` at the left.
    pattern_no_match!("d(a|b)*", "aad");
    pattern_no_match!("d(a|b)*", "abbaaa");
    pattern_no_match!("d(a|b)*", "ddbaa");

    // Not `(d(a|b))*`.
    pattern_no_match!("d(a|b)*", "dadbdbdada");
}

#[test]
fn closure_beats_alternation() {
    pattern_match!("cat|(dog)*", "cat");
    pattern_match!("cat|(dog)*", "");
    pattern_match!("cat|(dog)*", "dog");
    pattern_match!("cat|(dog)*", "dogdogdogdog");

    // Not `(cat|dog)*`.
    pattern_no_match!("cat|(dog)*", "dogcat");
    pattern_no_match!("cat|(dog)*", "catcat");

    pattern_match!("(cat|dog)*", "dogcat");
    pattern_match!("(cat|dog)*", "catcat");
}

#[test]
fn closure_binds_to_previous_primary() {
    pattern_match!("ab*", "abbb");
    pattern_no_match!("ab*", "abab");
    pattern_match!("(ab)*", "abab");
    pattern_match!("ab*", "a");
    pattern_no_match!("ab*", "");
}

#[test]
fn greedy_should_give_back() {
    pattern_match!("a*a", "aaa");
    pattern_match!("a*a", "a");
    pattern_no_match!("a*a", "");
}

#[test]
fn empty_matches_nothing() {
    pattern_no_match!("", "dj");
    pattern_no_match!("", "");
    pattern_no_match!("()", "");
    pattern_no_match!("(()|())", "");
}

#[test]
fn empty_operands() {
    pattern_match!("a|", "a");
    pattern_no_match!("a|", "");
    pattern_match!("|a", "a");
    pattern_match!("a()b", "ab");
    pattern_match!("(a|)b", "ab");
    pattern_no_match!("(a|)b", "b");
}

#[test]
fn whole_input_must_match() {
    pattern_no_match!("abc", "abcd");
    pattern_no_match!("abc", "xabc");
    pattern_no_match!("abc", "ab");
    pattern_match!("abc", "abc");
}

#[test]
fn any_character_is_a_literal() {
    pattern_match!("a.b", "a.b");
    pattern_no_match!("a.b", "axb");
    pattern_match!("x y", "x y");
    pattern_match!("?", "?");
    pattern_match!("\\", "\\");
    pattern_match!("ñ(ü|é)*", "ñüéü");
    pattern_no_match!("ñ(ü|é)*", "nue");
    pattern_match!("a\nb", "a\nb");
}

#[test]
fn nested_groups() {
    pattern_match!("((a|b)(c|d))*", "acbdad");
    pattern_no_match!("((a|b)(c|d))*", "acb");
    pattern_match!("(a(b(c)*)*)*", "abccbabc");
    pattern_match!("(a*)*", "");
    pattern_match!("(a*)*", "aaaa");
    pattern_match!("(a*|b*)*", "abba");
}

#[test]
fn malformed_patterns() {
    pattern_error!(
        "ds(fd*(c)d",
        Error::UnterminatedGroup { span: Span(2..3) }
    );
    pattern_error!("*", Error::ClosureOverNothing { span: Span(0..1) });
    pattern_error!("((()))*", Error::ClosureOverNothing { span: Span(6..7) });
    pattern_error!("abcd()*", Error::ClosureOverNothing { span: Span(6..7) });
    pattern_error!(
        "a[bc]",
        Error::UnexpectedToken { token: "[".to_string(), span: Span(1..2) }
    );
    pattern_error!(
        "a)",
        Error::UnexpectedToken { token: ")".to_string(), span: Span(1..2) }
    );
}

#[test]
fn too_large() {
    let config = Config::new().max_states(2);

    assert_eq!(
        Matcher::with_config("a|b|c", &config).unwrap_err(),
        Error::TooLarge { limit: 2 }
    );

    // The limit applies to the DFA, not to the NFA.
    let config = Config::new().max_states(5);
    assert!(Matcher::with_config("aaaa*", &config).is_ok());
}

#[test]
fn too_deep() {
    let pattern = format!("{}a{}", "(".repeat(50_000), ")".repeat(50_000));

    assert_eq!(
        Matcher::new(&pattern).unwrap_err(),
        Error::TooDeep { limit: Config::DEFAULT_MAX_DEPTH }
    );

    let config = Config::new().max_depth(3);

    assert!(Matcher::with_config("(((a)))", &config).unwrap().is_match("a"));
    assert_eq!(
        Matcher::with_config("((((a))))", &config).unwrap_err(),
        Error::TooDeep { limit: 3 }
    );
}

#[test]
fn repeated_matches_are_stable() {
    let matcher = Matcher::new("d(a|b)*").unwrap();

    for _ in 0..3 {
        assert!(matcher.is_match("dab"));
        assert!(!matcher.is_match("bad"));
    }
}

#[test]
fn matcher_is_minimal() {
    assert_eq!(Matcher::new("a*b(c|d)").unwrap().fsa().num_states(), 3);
    assert_eq!(Matcher::new("(a|b)*").unwrap().fsa().num_states(), 1);
    assert_eq!(Matcher::new("cat|(dog)*").unwrap().fsa().num_states(), 7);
    assert_eq!(Matcher::new("").unwrap().fsa().num_states(), 0);
}

#[test]
fn matcher_agrees_with_nfa() {
    let patterns = [
        "a*b(c|d)",
        "d(a|b)*",
        "cat|(dog)*",
        "(a|b)*abb",
        "((a|b)(c|d))*",
        "a*a*a*",
        "(ab|a)(bc|c)",
    ];

    let inputs = [
        "", "a", "b", "abd", "aabc", "bd", "dab", "cat", "dogdog", "abb",
        "aabb", "babb", "acbd", "aaa", "abc", "ac", "abbc",
    ];

    for pattern in patterns {
        let nfa = nfa(pattern);
        let matcher = Matcher::new(pattern).unwrap();

        assert!(!nfa.is_deterministic());
        assert!(matcher.fsa().is_deterministic());

        for input in inputs {
            let symbols: Vec<u32> = input.chars().map(u32::from).collect();
            assert_eq!(
                matcher.is_match(input),
                nfa.consume_string(&symbols),
                "`{}` on `{}`",
                pattern,
                input
            );
        }
    }
}
