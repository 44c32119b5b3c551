//! Where log lines come from: input discovery, transport and line framing.

mod discover;
mod error;
mod input;
mod lines;

pub use discover::*;
pub use error::*;
pub use input::*;
pub use lines::*;
