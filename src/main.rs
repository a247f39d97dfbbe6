use anyhow::Context;
use tracing_subscriber::EnvFilter;

use chess_actions::session::session_config::SessionConfig;
use chess_actions::session::session_top::run_stdio_loop;

fn main() -> anyhow::Result<()> {
    let config = SessionConfig::from_env().context("invalid start position")?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;

    // Stdout carries command results; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(start_fen = %config.start_position.get_fen(), "session started");
    run_stdio_loop(config).context("session I/O failed")?;

    Ok(())
}
