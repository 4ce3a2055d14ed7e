//! HTTP server that hosts one N-layer cube per user.
//!
//! - `GET /getstate?user=<id>` returns the user's cube.
//! - `POST /maketurn` with `{"user": <id>, "move": <token>}` applies a move.
//! - Any other path is served from the static file directory.

pub mod cli;
pub mod router;
mod session;
mod settings;

use eyre::{Result, WrapErr};

pub use router::{ApiError, router};
pub use session::{CubeHandle, SessionStore, UserId};
pub use settings::{ENV_PREFIX, ServerConfig};

/// Runs the server until it fails.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let sessions = SessionStore::from_config(config).wrap_err("invalid cube settings")?;
    let app = router(sessions, &config.static_dir);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .wrap_err_with(|| format!("error binding to {}:{}", config.host, config.port))?;
    log::info!("serving at http://{}", listener.local_addr()?);
    log::info!("static files from {}", config.static_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}
