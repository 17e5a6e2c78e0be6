#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_syntax::GraphQLParser;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    match GraphQLParser::new(s).parse_document() {
        Ok(doc) => {
            assert!(doc.span.slice(s).is_some());
            let _ = doc.into_static();
        },
        Err(error) => {
            assert!(error.offset() <= s.len());
            let _ = error.format_detailed(Some(s));
        },
    }
});
