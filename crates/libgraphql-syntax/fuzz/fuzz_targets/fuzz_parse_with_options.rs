#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_syntax::GraphQLParser;
use libgraphql_syntax::ParserOptions;

// The first byte picks the options; the rest is the document.
fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let Ok(s) = std::str::from_utf8(rest) else {
        return;
    };
    let options = ParserOptions::default()
        .with_ignore_comments(flags & 1 == 0)
        .with_allow_extensions(flags & 2 == 0)
        .with_max_depth(usize::from(flags >> 2));
    let parser = GraphQLParser::with_options(s, options);
    let _ = match flags % 3 {
        0 => parser.parse_document(),
        1 => parser.parse_schema_document(),
        _ => parser.parse_executable_document(),
    };
});
