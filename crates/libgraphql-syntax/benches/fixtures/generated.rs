//! Synthetic documents whose size or nesting is chosen by the caller.

use std::fmt::Write;

/// A schema with `type_count` object types, each carrying a description,
/// a handful of fields with arguments, and a directive.
pub fn wide_schema(type_count: usize) -> String {
    let mut out = String::with_capacity(type_count * 240);
    out.push_str("schema { query: Type0 }\n\n");
    for i in 0..type_count {
        let next = (i + 1) % type_count;
        writeln!(out, "\"\"\"\n  Generated type number {i}.\n\"\"\"").unwrap();
        writeln!(out, "type Type{i} implements Node @generated(index: {i}) {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        writeln!(out, "  \"The next type.\" next: Type{next}").unwrap();
        writeln!(out, "  items(first: Int = 20, after: String): [Type{next}!]!").unwrap();
        writeln!(out, "  score(weights: [Float!] = [1.0, 0.5]): Float").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out.push_str("directive @generated(index: Int!) on OBJECT\n");
    out
}

/// A query whose selection sets nest `depth` levels deep.
pub fn nested_selections(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 16 + 16);
    out.push_str("query Nested ");
    for _ in 0..depth {
        out.push_str("{ node ");
    }
    out.push_str("{ id }");
    for _ in 0..depth {
        out.push_str(" }");
    }
    out
}

/// A query passing an argument whose list value nests `depth` levels deep.
pub fn nested_list_argument(depth: usize) -> String {
    format!("{{ f(a: {}1{}) }}", "[".repeat(depth), "]".repeat(depth))
}

/// `count` named operations sharing one fragment, with comments between
/// them.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 120);
    for i in 0..count {
        writeln!(out, "# operation {i}").unwrap();
        writeln!(out, "query Op{i}($id: ID!, $limit: Int = {i}) {{").unwrap();
        writeln!(out, "  node(id: $id) {{ ...NodeFields alias{i}: name }}").unwrap();
        writeln!(out, "  list(limit: $limit, tags: [\"a\", \"b\"]) {{ id }}").unwrap();
        writeln!(out, "}}").unwrap();
    }
    out.push_str("fragment NodeFields on Node { id __typename }\n");
    out
}
