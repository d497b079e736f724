//! Splitting path data into command segments and numeric arguments.

use crate::{Command, Error};

/// Returns an iterator over the command segments in `data`.
///
/// A segment begins at a command letter and its argument text extends to
/// the start of the next segment or the end of the input. Any text
/// preceding the first command letter is ignored.
///
/// A letter outside the command alphabet that begins a token is an unknown
/// command. It ends the preceding segment and its own segment is skipped.
/// Letters inside a token (such as the exponent in `1e5`, or the `x` in
/// `1x`) are left in place, as are tokens starting with `inf`, so these
/// fail to parse as numbers.
///
/// The iterator is lazy; to process the data again, call this function
/// again.
pub fn segments(data: &str) -> Segments<'_> {
    Segments { data, pos: 0 }
}

/// Iterator over the command segments of path data.
///
/// See [`segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = find_segment_start(self.data.as_bytes(), self.pos)?;
            let text_start = start + 1;
            let end = find_segment_start(self.data.as_bytes(), text_start)
                .unwrap_or(self.data.len());
            self.pos = end;
            // segment starts are ASCII so these are always char boundaries
            let letter = self.data.as_bytes()[start] as char;
            match Command::from_letter(letter) {
                Some(command) => {
                    return Some(Segment {
                        command,
                        offset: start,
                        text: &self.data[text_start..end],
                    })
                }
                None => log::debug!("skipping unknown path command '{letter}' at offset {start}"),
            }
        }
    }
}

impl core::iter::FusedIterator for Segments<'_> {}

/// A command letter and its raw argument text.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Segment<'a> {
    command: Command,
    offset: usize,
    text: &'a str,
}

impl<'a> Segment<'a> {
    /// Returns the command that begins this segment.
    pub fn command(&self) -> Command {
        self.command
    }

    /// Returns the byte offset of the command letter in the path data.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the raw argument text following the command letter.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns an iterator over the numeric arguments of this segment.
    ///
    /// The argument text is trimmed and split on runs of commas, spaces,
    /// tabs, newlines and carriage returns. Each token is parsed as a
    /// decimal floating point number. Tokens that fail to parse, or that
    /// parse to an infinite or NaN value, yield [`Error::InvalidNumber`].
    pub fn args(&self) -> Args<'a> {
        let trimmed = self.text.trim_start();
        let leading = self.text.len() - trimmed.len();
        Args {
            command: self.command,
            offset: self.offset + 1 + leading,
            text: trimmed.trim_end(),
            pos: 0,
        }
    }
}

/// Iterator over the numeric arguments of a segment.
///
/// See [`Segment::args`].
#[derive(Clone, Debug)]
pub struct Args<'a> {
    command: Command,
    /// Byte offset of `text` in the path data.
    offset: usize,
    text: &'a str,
    pos: usize,
}

impl Iterator for Args<'_> {
    type Item = Result<f64, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() && is_separator(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos == bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < bytes.len() && !is_separator(bytes[self.pos]) {
            self.pos += 1;
        }
        let token = &self.text[start..self.pos];
        Some(parse_number(token).ok_or_else(|| Error::InvalidNumber {
            command: self.command,
            offset: self.offset + start,
            token: token.into(),
        }))
    }
}

impl core::iter::FusedIterator for Args<'_> {}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Returns the position of the first segment start at or after `from`.
fn find_segment_start(bytes: &[u8], from: usize) -> Option<usize> {
    (from..bytes.len()).find(|&pos| is_command(bytes[pos]) || is_unknown_command(bytes, pos))
}

/// An ASCII letter outside the command alphabet that begins a token.
fn is_unknown_command(bytes: &[u8], pos: usize) -> bool {
    let b = bytes[pos];
    if !b.is_ascii_alphabetic() || is_command(b) {
        return false;
    }
    let token_start = match pos.checked_sub(1) {
        None => true,
        Some(prev) => is_separator(bytes[prev]) || is_command(bytes[prev]),
    };
    token_start && !starts_with_infinity(&bytes[pos..])
}

fn starts_with_infinity(bytes: &[u8]) -> bool {
    bytes.len() >= 3 && bytes[..3].eq_ignore_ascii_case(b"inf")
}

fn is_command(b: u8) -> bool {
    matches!(
        b.to_ascii_lowercase(),
        b'a' | b'c' | b'h' | b'l' | b'm' | b'q' | b's' | b't' | b'v' | b'z'
    )
}

fn is_separator(b: u8) -> bool {
    matches!(b, b',' | b' ' | b'\t' | b'\n' | b'\r')
}
