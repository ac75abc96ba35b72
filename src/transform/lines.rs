/*!
 * Line boundary detection over `\n`, `\r` and `\r\n`
 */

/// A line split off the front of some text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    /// The first complete line including its terminator, or `""` if the
    /// text holds no terminator
    pub line: &'a str,
    /// Everything after `line`
    pub remainder: &'a str,
}

impl<'a> LineRecord<'a> {
    /// Whether a complete line was found
    pub fn is_complete(&self) -> bool {
        !self.line.is_empty()
    }
}

/// Return the offset just past the first terminator in `bytes`.
///
/// `\r\n` is a single terminator. A `\r` in the last position is reported as
/// a terminator on its own; callers streaming data must remember it in case
/// the next chunk starts with `\n`.
pub fn find_terminator(bytes: &[u8]) -> Option<usize> {
    let pos = bytes.iter().position(|&b| b == b'\r' || b == b'\n')?;
    if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
        Some(pos + 2)
    } else {
        Some(pos + 1)
    }
}

/// Split the next complete line off `text`.
///
/// Returns `("", text)` when `text` holds no terminator.
pub fn next_line(text: &str) -> LineRecord<'_> {
    // Terminators are ASCII, so the offset is always a char boundary
    let end = find_terminator(text.as_bytes()).unwrap_or(0);
    let (line, remainder) = text.split_at(end);
    LineRecord { line, remainder }
}

/// Iterator draining `text` into successive lines.
///
/// Each item is a complete line with its terminator, except possibly the
/// last one, which is the unterminated tail.
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// See [`lines`]
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let record = next_line(self.rest);
        if record.is_complete() {
            self.rest = record.remainder;
            Some(record.line)
        } else {
            Some(std::mem::take(&mut self.rest))
        }
    }
}
