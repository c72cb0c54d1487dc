//! Line tokenizer for bulleted documents.
//!
//! Whitespace and line boundaries follow the Unicode-aware rules markdown
//! authors get from their editors: a no-break space counts as whitespace,
//! and a lone `\r` or a form feed ends a line.

use regex_lite::Regex;
use std::sync::OnceLock;

/// Every whitespace character, as a regex class.
const SPACE_CLASS: &str = r"[\t\n\x{0b}\x{0c}\r \x{1c}-\x{1f}\x{85}\x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}]";

fn bullet_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(&format!("^{SPACE_CLASS}*-{SPACE_CLASS}+")).expect("bullet pattern is valid")
    })
}

/// Whether `c` is whitespace, the same set the bullet marker accepts.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trim leading and trailing whitespace.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split a document into lines, without terminators.
///
/// `\r\n` is one break. A trailing break does not start an empty last line.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(is_line_break) else {
            return Some(std::mem::take(&mut rest));
        };
        let (line, tail) = rest.split_at(pos);
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
        Some(line)
    })
}

/// Strip the bullet marker from a line.
///
/// A bullet is leading whitespace, a dash, and at least one whitespace
/// character. Returns the trimmed remainder, or `None` for non-bullet lines
/// and for bullets with nothing after the marker.
pub fn bullet(line: &str) -> Option<&str> {
    let marker = bullet_marker().find(line)?;
    let token = trim(&line[marker.end()..]);
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Iterate over the bullets of a document with their 1-based line numbers.
pub fn bullets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    lines(text)
        .enumerate()
        .filter_map(|(idx, line)| bullet(line).map(|token| (idx + 1, token)))
}
