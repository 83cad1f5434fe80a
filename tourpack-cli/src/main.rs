//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

fn main() {
    enable_logging();
    if let Err(err) = tourpack_cli::run() {
        eprintln!("tourpack: {err}");
        std::process::exit(1);
    }
}

fn enable_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
