//! Serves N-layer cubes over HTTP.

use clap::Parser;
use cubepuzzle_server::cli::Args;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = args.load_config()?;
    log::debug!("{config:?}");

    cubepuzzle_server::serve(&config).await
}
