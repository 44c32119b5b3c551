use clap::Parser;
use logscope_core::cli::{Cli, run};
use logscope_core::logging::{default_log_format, init_logging};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run(cli) {
        eprintln!("logscope error: {e:#}");
        std::process::exit(1);
    }
}
