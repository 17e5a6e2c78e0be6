//! Property-based tests for `StrGraphQLTokenSource`.

use proptest::prelude::*;

use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

proptest! {
    #[test]
    fn lexing_arbitrary_input_terminates(source in any::<String>()) {
        let results: Vec<_> = StrGraphQLTokenSource::new(&source)
            .with_retained_comments(true)
            .collect();
        let last = results.last().expect("the lexer always yields something");
        prop_assert!(last.as_ref().map_or(true, |token| token.is_eof()));
        // One result per byte at most, plus the trailing `Eof`.
        prop_assert!(results.len() <= source.len() + 1);
    }

    #[test]
    fn token_spans_are_ordered_and_slice_the_source(source in any::<String>()) {
        let mut previous_end = 0;
        for result in StrGraphQLTokenSource::new(&source).with_retained_comments(true) {
            let Ok(token) = result else { break };
            prop_assert!(token.start() >= previous_end);
            prop_assert!(token.end() >= token.start());
            prop_assert!(token.span.slice(&source).is_some());
            previous_end = token.end();
        }
    }

    #[test]
    fn names_lex_as_single_tokens(name in "[_A-Za-z][_0-9A-Za-z]{0,20}") {
        let kinds: Vec<_> = StrGraphQLTokenSource::new(&name)
            .map(|token| token.unwrap().kind)
            .collect();
        prop_assert_eq!(kinds, vec![GraphQLTokenKind::name_borrowed(&name), GraphQLTokenKind::Eof]);
    }

    #[test]
    fn ints_keep_their_raw_text(n in any::<i64>()) {
        let raw = n.to_string();
        let token = StrGraphQLTokenSource::new(&raw).next().unwrap().unwrap();
        prop_assert_eq!(token.kind, GraphQLTokenKind::int_value_borrowed(&raw));
    }

    #[test]
    fn ignored_separators_do_not_change_tokens(
        separator in "[ \t\n\r,\u{FEFF}]{1,4}",
    ) {
        let source = ["query", "Q", "{", "a", "}"].join(&separator);
        let kinds: Vec<_> = StrGraphQLTokenSource::new(&source)
            .map(|token| token.unwrap().kind)
            .collect();
        let expected: Vec<_> = StrGraphQLTokenSource::new("query Q { a }")
            .map(|token| token.unwrap().kind)
            .collect();
        prop_assert_eq!(kinds, expected);
    }
}
