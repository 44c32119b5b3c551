mod decode;
mod error;
mod types;

pub use decode::*;
pub use error::*;
pub use types::*;
