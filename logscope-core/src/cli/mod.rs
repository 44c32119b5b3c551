mod args;
mod run;

pub use args::Cli;
pub use run::run;
