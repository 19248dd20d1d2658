use anyhow::Context;
use bubbletea_clock::config::{self, Cli, Config};
use bubbletea_clock::logging;
use bubbletea_clock::shell::App;
use bubbletea_rs::Program;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from(Cli::parse());

    logging::init(config.log_file.as_deref()).context("failed to set up logging")?;
    tracing::info!(
        duration = %config.timer_duration,
        sound = ?config.sound,
        "configuration loaded"
    );
    config::install(config)?;

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;

    tracing::info!("clock exited");
    Ok(())
}
