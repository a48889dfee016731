/*
 * Responsibility
 * - start the tokio runtime
 * - call app::run() (no logic lives here)
 */
use anyhow::Result;

mod api;
mod app;
mod config;
mod error;
mod middleware;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await?;
    Ok(())
}
