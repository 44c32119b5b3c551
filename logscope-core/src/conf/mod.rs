//! Run configuration: an optional TOML file merged with command line values
//! and resolved into an [`AnalysisPlan`].

mod error;
mod loader;
mod time;
mod types;

pub use error::*;
pub use loader::*;
pub use time::*;
pub use types::*;
