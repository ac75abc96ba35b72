/*!
 * Uppercasing stream filter
 */

use std::io::{self, Write};

const CHUNK_SIZE: usize = 4096;

/// Writer decorator mapping ASCII letters to uppercase.
///
/// The mapping ignores locale. Bytes outside `a-z` pass through untouched,
/// which keeps multi-byte UTF-8 sequences intact.
pub struct CaseUppercasingFilter<W: Write> {
    inner: W,
}

impl<W: Write> CaseUppercasingFilter<W> {
    /// Wrap `inner`
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the filter, returning the wrapped writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CaseUppercasingFilter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut scratch = [0u8; CHUNK_SIZE];
        for piece in buf.chunks(CHUNK_SIZE) {
            let out = &mut scratch[..piece.len()];
            out.copy_from_slice(piece);
            out.make_ascii_uppercase();
            self.inner.write_all(out)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(input: &str) -> String {
        let mut filter = CaseUppercasingFilter::new(Vec::new());
        filter.write_all(input.as_bytes()).unwrap();
        String::from_utf8(filter.into_inner()).unwrap()
    }

    #[test]
    fn test_letters_are_uppercased() {
        assert_eq!(upper("Hello, world!"), "HELLO, WORLD!");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(upper("1\t2\r\n#{}"), "1\t2\r\n#{}");
        assert_eq!(upper(""), "");
    }

    #[test]
    fn test_non_ascii_is_preserved() {
        assert_eq!(upper("stra\u{df}e caf\u{e9}"), "STRA\u{df}E CAF\u{e9}");
    }

    #[test]
    fn test_long_input_spans_chunks() {
        let input = "ab".repeat(CHUNK_SIZE + 7);
        assert_eq!(upper(&input), "AB".repeat(CHUNK_SIZE + 7));
    }
}
