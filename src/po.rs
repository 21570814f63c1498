//! Encoding and decoding of the PO catalog text.
//!
//! The two directions don't mirror each other. [`escape`] turns `"` into `\"` and
//! then doubles every backslash, so a quote is written as `\\"`. [`unescape`] turns
//! `""` into `"` and `\\` into `\`, so the same quote is read back as `\"`.
//! Text without quotes round-trips.

use crate::{
    constants::{LINE_MARKER, MSGCTXT, MSGID, MSGSTR},
    Catalog, Entry,
};
use regex::Regex;
use std::{fmt, mem::take, sync::LazyLock};

static QUOTED_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| unsafe { Regex::new(r#"^[^"]*"(.*)"$"#).unwrap_unchecked() });

/// Escapes a field segment for writing.
///
/// Quotes are replaced by `\"` first, then every backslash of the result is
/// doubled, including the ones introduced by the first pass.
#[must_use]
pub fn escape(string: &str) -> String {
    string.replace('"', "\\\"").replace('\\', "\\\\")
}

/// Reverses the read side of escaping: `""` becomes `"`, then `\\` becomes `\`.
#[must_use]
pub fn unescape(string: &str) -> String {
    string.replace("\"\"", "\"").replace("\\\\", "\\")
}

/// Writes `keyword "value"`, folding the value into one quoted line per segment if it contains line breaks.
pub fn write_field(
    f: &mut impl fmt::Write,
    keyword: &str,
    value: &str,
) -> fmt::Result {
    if !value.contains('\n') {
        return writeln!(f, "{keyword} \"{}\"", escape(value));
    }

    writeln!(f, "{keyword} \"\"")?;

    let mut segments = value.split('\n').peekable();

    while let Some(segment) = segments.next() {
        let marker = if segments.peek().is_some() {
            LINE_MARKER
        } else {
            ""
        };

        writeln!(f, "\"{}{marker}\"", escape(segment))?;
    }

    Ok(())
}

/// Extracts the text between the first and the last quote of `line` and unescapes it.
///
/// Returns an empty string if the line holds no quoted value.
#[must_use]
pub fn extract_value(line: &str) -> String {
    QUOTED_VALUE_RE
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|value| unescape(value.as_str()))
        .unwrap_or_default()
}

/// Same as [`extract_value`], but also drops the trailing line marker of a folded segment.
fn extract_segment(line: &str) -> String {
    let Some(value) = QUOTED_VALUE_RE
        .captures(line)
        .and_then(|captures| captures.get(1))
    else {
        return String::new();
    };

    unescape(strip_line_marker(value.as_str()))
}

/// Strips a trailing `\n` marker. An escaped backslash followed by `n` is text, not a marker,
/// so the marker must be preceded by an odd run of backslashes.
fn strip_line_marker(value: &str) -> &str {
    let Some(rest) = value.strip_suffix('n') else {
        return value;
    };

    let backslashes = rest.bytes().rev().take_while(|&b| b == b'\\').count();

    if backslashes % 2 == 1 {
        &rest[..rest.len() - 1]
    } else {
        value
    }
}

/// Value of a possibly folded field.
#[derive(Default)]
struct Field {
    head: String,
    segments: Vec<String>,
}

impl Field {
    fn new(head: String) -> Self {
        Self {
            head,
            segments: Vec::new(),
        }
    }

    fn push(&mut self, line: &str) {
        self.segments.push(extract_segment(line));
    }

    /// Empty head of a folded field only opens the fold and isn't a segment.
    fn finish(self) -> String {
        if self.segments.is_empty() {
            return self.head;
        }

        let mut segments = self.segments;

        if !self.head.is_empty() {
            segments.insert(0, self.head);
        }

        segments.join("\n")
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    Idle,
    Original,
    Translation,
}

/// Parses catalog text into a [`Catalog`].
///
/// This is a best-effort parser for catalogs written by [`Catalog`] itself. Comments and the
/// header are ignored, and malformed input just yields fewer entries.
#[must_use]
pub fn decode(text: &str) -> Catalog {
    let mut catalog = Catalog::new();

    let mut state = State::Header;
    let mut entry = Entry::default();
    let mut field = Field::default();

    for line in text.lines() {
        match state {
            State::Header => {
                if line.starts_with(MSGSTR) {
                    state = State::Idle;
                }
            }
            State::Idle => {
                if line.starts_with(MSGCTXT) {
                    entry.context = extract_value(line);
                } else if line.starts_with(MSGID) {
                    field = Field::new(extract_value(line));
                    state = State::Original;
                }
            }
            State::Original => {
                if line.is_empty() {
                    entry.original = take(&mut field).finish();
                    catalog.add(take(&mut entry));
                    state = State::Idle;
                } else if line.starts_with(MSGSTR) {
                    entry.original = take(&mut field).finish();
                    field = Field::new(extract_value(line));
                    state = State::Translation;
                } else {
                    field.push(line);
                }
            }
            State::Translation => {
                if line.is_empty() || line.starts_with('#') {
                    entry.translation = take(&mut field).finish();
                    catalog.add(take(&mut entry));
                    state = State::Idle;
                } else {
                    field.push(line);
                }
            }
        }
    }

    if state == State::Translation {
        entry.translation = field.finish();
        catalog.add(entry);
    }

    catalog
}
