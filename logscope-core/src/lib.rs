pub mod cli;
pub mod conf;
pub mod event;
pub mod filter;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod stats;

#[cfg(test)]
mod test_helpers;
