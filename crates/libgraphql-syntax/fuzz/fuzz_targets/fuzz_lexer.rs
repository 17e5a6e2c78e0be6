#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_syntax::token_source::StrGraphQLTokenSource;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut previous_end = 0;
    for result in StrGraphQLTokenSource::new(s).with_retained_comments(true) {
        let Ok(token) = result else {
            break;
        };
        assert!(token.start() >= previous_end);
        assert!(token.span.slice(s).is_some());
        previous_end = token.end();
    }
});
