//! Decoding of string literal contents into their semantic values.
//!
//! Both functions take the text *between* the quotes. The lexer has already
//! found the closing delimiter, so neither needs to know about quoting.

use crate::GraphQLStringParsingError;
use std::borrow::Cow;

/// Processes the escape sequences of a single-line string literal's contents.
///
/// Supported escapes: `\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t`, fixed
/// width `\uXXXX` and variable width `\u{X...}`. A high/low surrogate pair
/// written as two fixed-width escapes (`\uD83D\uDE00`) decodes to a single
/// scalar value; a lone surrogate is an error.
///
/// Contents with no `\` are returned borrowed.
pub(crate) fn decode_string(content: &str) -> Result<Cow<'_, str>, GraphQLStringParsingError> {
    let Some(first_escape) = memchr::memchr(b'\\', content.as_bytes()) else {
        return Ok(Cow::Borrowed(content));
    };

    let mut result = String::with_capacity(content.len());
    result.push_str(&content[..first_escape]);
    let mut rest = &content[first_escape..];

    while let Some(escape_at) = memchr::memchr(b'\\', rest.as_bytes()) {
        result.push_str(&rest[..escape_at]);
        rest = &rest[escape_at..];
        let (ch, consumed) = decode_escape(rest)?;
        result.push(ch);
        rest = &rest[consumed..];
    }
    result.push_str(rest);

    Ok(Cow::Owned(result))
}

/// Decodes the escape sequence at the start of `escape` (which begins with
/// `\`). Returns the decoded character and the number of bytes consumed.
fn decode_escape(escape: &str) -> Result<(char, usize), GraphQLStringParsingError> {
    let mut chars = escape.chars();
    chars.next(); // `\`
    let ch = match chars.next() {
        Some('"') => '"',
        Some('\\') => '\\',
        Some('/') => '/',
        Some('b') => '\u{0008}',
        Some('f') => '\u{000C}',
        Some('n') => '\n',
        Some('r') => '\r',
        Some('t') => '\t',
        Some('u') => return decode_unicode_escape(escape),
        Some(other) => {
            return Err(GraphQLStringParsingError::InvalidEscapeSequence(format!(
                "\\{other}"
            )));
        },
        None => {
            return Err(GraphQLStringParsingError::InvalidEscapeSequence(
                "\\".to_string(),
            ));
        },
    };
    Ok((ch, 2))
}

/// Decodes a `\u` escape. `escape` begins with `\u`.
fn decode_unicode_escape(escape: &str) -> Result<(char, usize), GraphQLStringParsingError> {
    let bytes = escape.as_bytes();

    if bytes.get(2) == Some(&b'{') {
        let digits_end = 3 + count_hex_digits(&escape[3..]);
        if digits_end == 3 || bytes.get(digits_end) != Some(&b'}') {
            return Err(invalid_unicode(escape, digits_end + 1));
        }
        let consumed = digits_end + 1;
        let ch = u32::from_str_radix(&escape[3..digits_end], 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| invalid_unicode(escape, consumed))?;
        return Ok((ch, consumed));
    }

    let code_unit = fixed_width_code_unit(escape)?;
    match code_unit {
        0xD800..=0xDBFF => {
            let trailing = &escape[6..];
            let low = if trailing.starts_with("\\u") {
                fixed_width_code_unit(trailing).ok()
            } else {
                None
            };
            match low {
                Some(low @ 0xDC00..=0xDFFF) => {
                    let scalar = 0x10000 + ((code_unit - 0xD800) << 10) + (low - 0xDC00);
                    let ch = char::from_u32(scalar)
                        .ok_or_else(|| invalid_unicode(escape, 12))?;
                    Ok((ch, 12))
                },
                _ => Err(invalid_unicode(escape, 6)),
            }
        },
        0xDC00..=0xDFFF => Err(invalid_unicode(escape, 6)),
        _ => {
            let ch = char::from_u32(code_unit).ok_or_else(|| invalid_unicode(escape, 6))?;
            Ok((ch, 6))
        },
    }
}

/// Reads the 4 hex digits of a `\uXXXX` escape.
fn fixed_width_code_unit(escape: &str) -> Result<u32, GraphQLStringParsingError> {
    let digits = count_hex_digits(&escape[2..]).min(4);
    if digits < 4 {
        return Err(invalid_unicode(escape, 2 + digits + 1));
    }
    u32::from_str_radix(&escape[2..6], 16).map_err(|_| invalid_unicode(escape, 6))
}

fn count_hex_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_hexdigit).count()
}

/// Builds an error showing the first `len` bytes of `escape`, widened to the
/// next character boundary.
fn invalid_unicode(escape: &str, len: usize) -> GraphQLStringParsingError {
    let mut end = len.min(escape.len());
    while !escape.is_char_boundary(end) {
        end += 1;
    }
    GraphQLStringParsingError::InvalidUnicodeEscape(escape[..end].to_string())
}

/// Computes the value of a block string from its raw contents.
///
/// 1. `\"""` becomes `"""`.
/// 2. Lines are split on LF, CR, or CRLF.
/// 3. The common indentation (spaces and tabs) of every line after the first
///    that has non-whitespace content is removed from each line after the
///    first.
/// 4. Leading and trailing whitespace-only lines are dropped.
/// 5. The remaining lines are joined with LF.
///
/// Single-line contents come back borrowed.
pub(crate) fn decode_block_string(content: &str) -> Cow<'_, str> {
    let has_escaped_quotes = memchr::memmem::find(content.as_bytes(), b"\\\"\"\"").is_some();
    let has_line_break = memchr::memchr2(b'\n', b'\r', content.as_bytes()).is_some();

    if !has_escaped_quotes && !has_line_break {
        return if is_blank(content) {
            Cow::Borrowed("")
        } else {
            Cow::Borrowed(content)
        };
    }

    let unescaped: Cow<'_, str> = if has_escaped_quotes {
        Cow::Owned(content.replace("\\\"\"\"", "\"\"\""))
    } else {
        Cow::Borrowed(content)
    };

    let lines = split_lines(&unescaped);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace_len(line);
            (indent < line.len()).then_some(indent)
        })
        .min()
        .unwrap_or(0);

    let mut dedented: Vec<&str> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 || common_indent == 0 {
            dedented.push(*line);
        } else {
            dedented.push(line.get(common_indent..).unwrap_or(""));
        }
    }

    let first_content = dedented.iter().position(|line| !is_blank(line));
    let Some(first_content) = first_content else {
        return Cow::Owned(String::new());
    };
    let last_content = dedented
        .iter()
        .rposition(|line| !is_blank(line))
        .unwrap_or(first_content);

    Cow::Owned(dedented[first_content..=last_content].join("\n"))
}

/// Splits on LF, CR, and CRLF (each counting as one line break).
fn split_lines(s: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = s.as_bytes();
    let mut line_start = 0;
    let mut pos = 0;
    while let Some(offset) = memchr::memchr2(b'\n', b'\r', &bytes[pos..]) {
        let brk = pos + offset;
        lines.push(&s[line_start..brk]);
        pos = if bytes[brk] == b'\r' && bytes.get(brk + 1) == Some(&b'\n') {
            brk + 2
        } else {
            brk + 1
        };
        line_start = pos;
    }
    lines.push(&s[line_start..]);
    lines
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace_len(line) == line.len()
}
