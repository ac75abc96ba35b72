/*!
 * Streaming text transformations
 *
 * Filters are plain `io::Write` decorators, each owning the writer
 * downstream of it. [`TransformPipeline`] stacks them in a fixed order in
 * front of a sink.
 */

mod lines;
mod numbering;
mod pipeline;
mod uppercase;

pub use lines::{find_terminator, lines, next_line, LineRecord, Lines};
pub use numbering::{LineCounter, LineNumberingFilter};
pub use pipeline::{transform, Stage, TransformPipeline, DEFAULT_STAGES};
pub use uppercase::CaseUppercasingFilter;
