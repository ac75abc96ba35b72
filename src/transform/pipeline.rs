/*!
 * Composition of stream filters around a terminal sink
 */

use std::fmt;
use std::io::{self, Write};

use super::numbering::LineNumberingFilter;
use super::uppercase::CaseUppercasingFilter;

/// A stream transformation that can be stacked in a [`TransformPipeline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Uppercase ASCII letters
    Uppercase,
    /// Prefix each line with its number and a tab
    LineNumbers,
}

impl Stage {
    /// Build this stage on top of `next`, which it then owns
    pub fn wrap<'a>(self, next: Box<dyn Write + 'a>) -> Box<dyn Write + 'a> {
        match self {
            Stage::Uppercase => Box::new(CaseUppercasingFilter::new(next)),
            Stage::LineNumbers => Box::new(LineNumberingFilter::new(next)),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Uppercase => write!(f, "uppercase"),
            Stage::LineNumbers => write!(f, "line-numbers"),
        }
    }
}

/// Stages applied when rewriting files: content is uppercased first, then
/// numbered, so the inserted prefixes never pass through the case mapping.
pub const DEFAULT_STAGES: [Stage; 2] = [Stage::Uppercase, Stage::LineNumbers];

/// Chain of stages in front of a sink.
///
/// Data written to the pipeline runs through the stages in list order. The
/// chain owns the sink; closing or dropping the pipeline releases it.
pub struct TransformPipeline<'a> {
    head: Box<dyn Write + 'a>,
}

impl<'a> TransformPipeline<'a> {
    /// Stack `stages` in front of `sink`; the first stage sees the data first
    pub fn new<W: Write + 'a>(stages: &[Stage], sink: W) -> Self {
        let sink: Box<dyn Write + 'a> = Box::new(sink);
        let head = stages
            .iter()
            .rev()
            .fold(sink, |next, stage| stage.wrap(next));
        Self { head }
    }

    /// Push text into the head of the chain
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.head.write_all(text.as_bytes())
    }

    /// Flush every stage down to the sink
    pub fn flush(&mut self) -> io::Result<()> {
        self.head.flush()
    }

    /// Flush, then release the chain and the sink.
    ///
    /// The chain is dropped whether or not the flush succeeds.
    pub fn close(mut self) -> io::Result<()> {
        self.head.flush()
    }
}

/// Run `text` through `stages` into a string
pub fn transform(text: &str, stages: &[Stage]) -> io::Result<String> {
    let mut output = Vec::with_capacity(text.len() + text.len() / 8 + 8);
    let mut pipeline = TransformPipeline::new(stages, &mut output);
    pipeline.write(text)?;
    pipeline.close()?;
    String::from_utf8(output).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
