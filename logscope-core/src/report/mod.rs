//! Rendering finished metrics for people (console, Markdown, AsciiDoc) and
//! for machines (JSON), and writing the result out.

mod error;
mod format;
mod output;
mod render;
#[cfg(test)]
mod tests;

pub use error::*;
pub use format::*;
pub use output::*;
pub use render::*;
