use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use wanandroid::cli::{parse_args, run_cli_command};

/// Logs go to stderr so they never interleave with the printed listing.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let command = parse_args(std::env::args());
    run_cli_command(command).await
}
