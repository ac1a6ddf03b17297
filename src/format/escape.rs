//! Escaping rules
//!
//! Character-level helpers shared by the reader and the writer. The two
//! directions must agree exactly, so they live side by side here.

/// Space, tab and form feed. Other Unicode whitespace is ordinary text.
pub(crate) fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

pub(crate) fn trim_blanks_start(s: &str) -> &str {
    s.trim_start_matches(is_blank)
}

/// Expects a line with leading blanks already removed
pub(crate) fn is_comment(line: &str) -> bool {
    matches!(line.chars().next(), Some('#' | '!'))
}

/// Comment text without the marker and the one space after it
pub(crate) fn comment_text(line: &str) -> String {
    let rest = &line[1..];
    rest.strip_prefix(' ').unwrap_or(rest).to_string()
}

/// An odd number of trailing backslashes means the line continues
pub(crate) fn has_continuation(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Split a logical line into raw (still escaped) key and value
///
/// The key ends at the first unescaped `=`, `:` or blank. Blanks around the
/// separator are skipped; a line without a separator is a bare key.
pub(crate) fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], trim_blanks_start(&line[i + 1..])),
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let rest = trim_blanks_start(&line[key_end..]);
    let rest = rest.strip_prefix(|c: char| c == '=' || c == ':').unwrap_or(rest);
    (&line[..key_end], trim_blanks_start(rest))
}

/// Resolve backslash escapes in a raw key or value
pub(crate) fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => match decode_unicode(chars.as_str()) {
                Some(decoded) => {
                    out.push(decoded);
                    for _ in 0..4 {
                        chars.next();
                    }
                }
                None => out.push('u'),
            },
            Some(other) => out.push(other),
            // A dangling backslash at the very end carries no character.
            None => {}
        }
    }

    out
}

/// `XXXX` after `\u`; anything that isn't four hex digits naming a char stays literal
fn decode_unicode(s: &str) -> Option<char> {
    let hex = s.get(..4)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}

/// Escape a key so the reader sees it as one token
pub(crate) fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);

    for (i, c) in key.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '=' => out.push_str("\\="),
            ':' => out.push_str("\\:"),
            ' ' => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '#' | '!' if i == 0 => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

/// Escape one physical-line segment of a value
///
/// Only a leading blank needs escaping: the reader strips blanks up to the
/// first non-blank, and a backslash is not blank.
pub(crate) fn escape_value_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 2);

    for (i, c) in segment.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            ' ' if i == 0 => out.push_str("\\ "),
            '\t' if i == 0 => out.push_str("\\t"),
            '\x0c' if i == 0 => out.push_str("\\f"),
            _ => out.push(c),
        }
    }

    out
}
