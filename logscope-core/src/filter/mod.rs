//! Event admission: the inclusive time window and the single-field predicate.

mod field;
mod matcher;
mod window;

pub use field::*;
pub use matcher::*;
pub use window::*;
