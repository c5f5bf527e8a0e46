use clap::Parser;
use noor_cli::tui::chat::{run_chat, ChatResult};
use noor_cli::Cli;
use noor_core::{config, AppConfig, GeminiGateway};
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    debug!(config = ?cli.config, model = ?cli.model, "CLI arguments parsed");

    config::ensure_env_loaded();
    let config_path = cli.config.as_deref().map(Path::new);
    let mut app_config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    }
    apply_cli_overrides(&cli, &mut app_config);

    let gateway = Arc::new(GeminiGateway::from_config(&app_config));
    info!(model = app_config.model.as_str(), "Starting chat interface");

    match run_chat(gateway, &app_config.model, cli.dark).await? {
        ChatResult::Exit => {}
    }

    info!("Chat session finished");
    Ok(())
}

/// The TUI owns the terminal, so logs stay off unless NOOR_LOG asks for
/// them (and then they belong in a redirected stderr).
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("NOOR_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn apply_cli_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(model) = &cli.model {
        info!(model = model.as_str(), "Overriding model from CLI flag");
        config.model = model.clone();
    }
    if let Some(system) = &cli.system {
        config.system_prompt = system.clone();
    }
}
