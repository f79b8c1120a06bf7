//! Terminal client entry point.
use anyhow::Result;
use duel_cli::{CliApp, DuelConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = DuelConfig::from_env();

    logging::setup_logging(config.log_dir.as_deref(), config.session_id.as_deref())?;

    let mut stdout = tokio::io::stdout();
    let end = CliApp::new(&config)?.run(&mut stdout).await?;
    tracing::info!("session ended: {:?}", end);

    Ok(())
}
