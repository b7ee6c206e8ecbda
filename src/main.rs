use clap::Parser;
use colored::Colorize;

use tinydash::cli::{commands, Cli};
use tinydash::config::DashConfig;
use tinydash::logging::init_logging;
use tinydash::tui::run_tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DashConfig::from_env();
    init_logging(&config);

    match cli.command {
        Some(command) => {
            if let Err(err) = commands::run(command, &config).await {
                if let Some(message) = err.format_simple() {
                    eprintln!("{}", message.red());
                }
                std::process::exit(1);
            }
        }
        None => {
            run_tui(config)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;
        }
    }

    Ok(())
}
