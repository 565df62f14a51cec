//! GitHub Actions workflow matcher
//!
//! Finds `uses:` values by pattern matching over the raw text instead of
//! parsing YAML, so everything around the value (indentation, list dashes,
//! comments, line endings) can be left byte-for-byte intact.
//!
//! Format examples:
//! - `      - uses: actions/checkout@v4`
//! - `        uses: "actions/setup-node@v4"  # pinned`
//! - `    uses: 'checkout@v2'`

use regex::Regex;
use tracing::debug;

use crate::parser::traits::UsesMatcher;
use crate::parser::types::UsesMatch;

/// `uses:` key at the start of a line (optionally a sequence item) followed by
/// a double-quoted, single-quoted or bare value. CRLF mode keeps `\r` out of
/// the match.
const USES_PATTERN: &str =
    r#"(?mR)^[ \t]*(?:-[ \t]+)?uses:[ \t]+(?P<uses>"(?:[^"\\\r\n]|\\.)*"|'(?:[^'\r\n]|'')*'|[^\s#]\S*)"#;

/// Matcher for workflow files (.github/workflows/*.yml) and action metadata files
pub struct RegexUsesMatcher {
    uses_re: Regex,
}

impl RegexUsesMatcher {
    pub fn new() -> Self {
        Self {
            uses_re: Regex::new(USES_PATTERN).expect("uses pattern is valid"),
        }
    }
}

impl Default for RegexUsesMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl UsesMatcher for RegexUsesMatcher {
    fn find_uses(&self, content: &str) -> Vec<UsesMatch> {
        let mut line = 0;
        let mut line_counted_to = 0;

        self.uses_re
            .captures_iter(content)
            .filter_map(|caps| caps.name("uses"))
            .map(|m| {
                line += content[line_counted_to..m.start()].matches('\n').count();
                line_counted_to = m.start();

                let raw = m.as_str();
                let (value, quote) = match unquote(raw) {
                    Some((value, quote)) => (value, Some(quote)),
                    None => (raw.to_string(), None),
                };

                UsesMatch {
                    value,
                    quote,
                    start_offset: m.start(),
                    end_offset: m.end(),
                    line,
                }
            })
            .collect()
    }
}

/// Remove YAML quoting from a scalar.
///
/// Returns the unquoted value and the quote character, or `None` when the text
/// is not a well-formed quoted string. Callers fall back to the raw text.
pub fn unquote(raw: &str) -> Option<(String, char)> {
    let quote = raw.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    if raw.len() < 2 || !raw.ends_with(quote) {
        return None;
    }
    let inner = &raw[1..raw.len() - 1];

    let unquoted = if quote == '\'' {
        unquote_single(inner)
    } else {
        unquote_double(inner)
    };

    if unquoted.is_none() {
        debug!("Leaving malformed quoted value as-is: {}", raw);
    }
    unquoted.map(|value| (value, quote))
}

/// Single-quoted scalars only escape the quote itself, by doubling it.
fn unquote_single(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            // A lone quote would have terminated the scalar.
            if chars.next_if_eq(&'\'').is_none() {
                return None;
            }
        }
        out.push(c);
    }
    Some(out)
}

fn unquote_double(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return None,
            '\\' => {
                let escaped = match chars.next()? {
                    '\\' => '\\',
                    '"' => '"',
                    '/' => '/',
                    ' ' => ' ',
                    '0' => '\0',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'x' => hex_char(&mut chars, 2)?,
                    'u' => hex_char(&mut chars, 4)?,
                    'U' => hex_char(&mut chars, 8)?,
                    _ => return None,
                };
                out.push(escaped);
            }
            _ => out.push(c),
        }
    }
    Some(out)
}

fn hex_char(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<char> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.len() != digits {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
}
