//! Bracket substitution.
//!
//! Before a fragment is split, every parenthesised group in it is moved to
//! the [`BracketHeap`] and replaced by a placeholder `&N;`, where `N` is the
//! heap index. Placeholders contain no operator characters, so the
//! operator splits treat a group as one opaque operand. A placeholder is
//! expanded only when the fragment holding it reaches placeholder
//! recognition.

use std::borrow::Cow;

use tracing::trace;

use crate::error::{ParseError, ParseResult};

/// Opening marker of a placeholder.
pub const PLACEHOLDER_OPEN: char = '&';
/// Closing marker of a placeholder.
pub const PLACEHOLDER_CLOSE: char = ';';

/// Render the placeholder token for heap slot `index`.
pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}")
}

/// Inner texts of the groups substituted during one parse.
///
/// Append-only while parsing; one heap per top-level parse.
#[derive(Debug, Default)]
pub struct BracketHeap {
    entries: Vec<String>,
}

impl BracketHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every top-level group in `text` with a placeholder.
    ///
    /// Groups are taken left to right; a group's own inner brackets travel
    /// with it into the heap and are substituted when it is expanded.
    pub fn substitute<'t>(&mut self, text: &'t str) -> ParseResult<Cow<'t, str>> {
        let Some(mut open) = text.find('(') else {
            return Ok(Cow::Borrowed(text));
        };
        let mut text = text.to_owned();
        loop {
            let Some(close) = matching_close(&text, open) else {
                return Err(ParseError::UnmatchedBracket {
                    fragment: text,
                    position: open,
                });
            };
            let index = self.push(&text[open + 1..close]);
            trace!(index, group = &text[open + 1..close], "substituted bracket group");
            text.replace_range(open..=close, &placeholder(index));
            match text.find('(') {
                Some(next) => open = next,
                None => return Ok(Cow::Owned(text)),
            }
        }
    }

    fn push(&mut self, inner: &str) -> usize {
        self.entries.push(inner.to_owned());
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Resolve the interior of a placeholder (the text between `&` and `;`).
    pub fn resolve(&self, interior: &str) -> ParseResult<&str> {
        interior
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|index| self.get(index))
            .ok_or_else(|| ParseError::InvalidPlaceholderIndex {
                token: format!("{PLACEHOLDER_OPEN}{interior}{PLACEHOLDER_CLOSE}"),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Byte offset of the `)` closing the `(` at `open`, by depth counting.
fn matching_close(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes()[open..].iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `text` at its first placeholder, returning the interior between
/// the first `&` and the next `;` after it.
pub(crate) fn placeholder_interior(text: &str) -> Option<&str> {
    let start = text.find(PLACEHOLDER_OPEN)? + PLACEHOLDER_OPEN.len_utf8();
    let len = text[start..].find(PLACEHOLDER_CLOSE)?;
    Some(&text[start..start + len])
}
