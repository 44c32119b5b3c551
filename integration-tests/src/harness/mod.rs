pub mod fixtures;
pub mod tracing;
pub mod upstream;

pub use fixtures::{LogDir, SAMPLE_LINES};
pub use tracing::{CapturedEvent, capture_events};
pub use upstream::TestUpstream;
