/*!
 * Line numbering stream filter
 *
 * Prefixes every line written through it with `<n>\t`, starting at 1. The
 * prefix of a line is emitted as soon as the first byte of that line arrives,
 * so output is identical however the caller chunks its writes.
 */

use std::io::{self, Write};

use super::lines::find_terminator;

/// Per-stream line counter
///
/// Owned by exactly one [`LineNumberingFilter`]; a new filter always starts
/// from zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineCounter {
    number: usize,
}

impl LineCounter {
    /// Create a counter that has not numbered any line yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the last line that received a prefix (0 before the first)
    pub fn current(&self) -> usize {
        self.number
    }

    /// Move to the next line and return its number
    pub fn advance(&mut self) -> usize {
        self.number += 1;
        self.number
    }
}

/// Where the filter stands relative to line boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Nothing written yet, not even the first prefix
    Fresh,
    /// Inside a line whose prefix is already out
    InLine,
    /// Just forwarded a `\r`; a following `\n` still belongs to this line
    AfterCr,
    /// Just forwarded a complete terminator
    AfterLf,
}

/// Writer decorator numbering each line
pub struct LineNumberingFilter<W: Write> {
    inner: W,
    counter: LineCounter,
    position: Position,
}

impl<W: Write> LineNumberingFilter<W> {
    /// Wrap `inner` with a fresh counter
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            counter: LineCounter::new(),
            position: Position::Fresh,
        }
    }

    /// Number of lines that received a prefix so far
    pub fn lines_numbered(&self) -> usize {
        self.counter.current()
    }

    /// Unwrap the filter, returning the wrapped writer
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn begin(&mut self) -> io::Result<()> {
        if self.position == Position::Fresh {
            self.write_prefix()?;
            self.position = Position::InLine;
        }
        Ok(())
    }

    fn write_prefix(&mut self) -> io::Result<()> {
        let number = self.counter.advance();
        write!(self.inner, "{}\t", number)
    }
}

impl<W: Write> Write for LineNumberingFilter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.begin()?;

        let mut rest = buf;
        while let Some(&first) = rest.first() {
            match self.position {
                Position::AfterCr if first == b'\n' => {
                    self.inner.write_all(b"\n")?;
                    self.position = Position::AfterLf;
                    rest = &rest[1..];
                    continue;
                }
                Position::AfterCr | Position::AfterLf => {
                    self.write_prefix()?;
                    self.position = Position::InLine;
                }
                Position::Fresh | Position::InLine => {}
            }

            let end = find_terminator(rest).unwrap_or(rest.len());
            let (line, tail) = rest.split_at(end);
            self.inner.write_all(line)?;
            self.position = match line.last() {
                Some(b'\r') => Position::AfterCr,
                Some(b'\n') => Position::AfterLf,
                _ => Position::InLine,
            };
            rest = tail;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // An empty stream still gets the first prefix
        self.begin()?;
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(input: &str) -> String {
        let mut filter = LineNumberingFilter::new(Vec::new());
        filter.write_all(input.as_bytes()).unwrap();
        filter.flush().unwrap();
        String::from_utf8(filter.into_inner()).unwrap()
    }

    fn number_bytewise(input: &str) -> String {
        let mut filter = LineNumberingFilter::new(Vec::new());
        for byte in input.as_bytes() {
            filter.write_all(std::slice::from_ref(byte)).unwrap();
        }
        filter.flush().unwrap();
        String::from_utf8(filter.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_input_gets_first_prefix() {
        assert_eq!(number(""), "1\t");
    }

    #[test]
    fn test_two_lines() {
        assert_eq!(number("Hello\nWorld"), "1\tHello\n2\tWorld");
    }

    #[test]
    fn test_crlf_counts_once() {
        assert_eq!(number("a\r\nb\r\nc"), "1\ta\r\n2\tb\r\n3\tc");
    }

    #[test]
    fn test_lone_cr_is_a_boundary() {
        assert_eq!(number("a\rb\rc"), "1\ta\r2\tb\r3\tc");
        assert_eq!(number("a\r\rb"), "1\ta\r2\t\r3\tb");
    }

    #[test]
    fn test_no_prefix_after_final_terminator() {
        assert_eq!(number("\n"), "1\t\n");
        assert_eq!(number("\r"), "1\t\r");
        assert_eq!(number("\r\n"), "1\t\r\n");
        assert_eq!(number("last line\n"), "1\tlast line\n");
    }

    #[test]
    fn test_empty_lines_are_numbered() {
        assert_eq!(number("a\n\nb"), "1\ta\n2\t\n3\tb");
    }

    #[test]
    fn test_crlf_split_across_writes() {
        let mut filter = LineNumberingFilter::new(Vec::new());
        filter.write_all(b"a\r").unwrap();
        filter.write_all(b"\nb").unwrap();
        filter.flush().unwrap();
        assert_eq!(filter.into_inner(), b"1\ta\r\n2\tb");
    }

    #[test]
    fn test_chunking_does_not_change_output() {
        let inputs = [
            "Hello\nWorld",
            "a\r\nb\r\nc",
            "x\ry\r\n\rz\n",
            "\r\n\r\n",
            "caf\u{e9}\r\n\u{fc}ber\n",
        ];
        for input in inputs {
            let whole = number(input);
            assert_eq!(number_bytewise(input), whole, "input {:?}", input);
            for split in 0..=input.len() {
                let (head, tail) = input.as_bytes().split_at(split);
                let mut filter = LineNumberingFilter::new(Vec::new());
                filter.write_all(head).unwrap();
                filter.write_all(tail).unwrap();
                filter.flush().unwrap();
                assert_eq!(String::from_utf8(filter.into_inner()).unwrap(), whole);
            }
        }
    }

    #[test]
    fn test_counter_tracks_prefixes() {
        let mut filter = LineNumberingFilter::new(Vec::new());
        assert_eq!(filter.lines_numbered(), 0);
        filter.write_all(b"one\ntwo\n").unwrap();
        assert_eq!(filter.lines_numbered(), 2);
        filter.write_all(b"three").unwrap();
        assert_eq!(filter.lines_numbered(), 3);
    }

    #[test]
    fn test_fresh_filters_do_not_share_numbering() {
        assert_eq!(number("a\nb\n"), "1\ta\n2\tb\n");
        assert_eq!(number("c\n"), "1\tc\n");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut filter = LineNumberingFilter::new(FailingWriter);
        let err = filter.write_all(b"text").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
