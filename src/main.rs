use anyhow::{Context, Result};

use trivialist::backend::create_backend;
use trivialist::config::Config;
use trivialist::logger::Logger;
use trivialist::ui::core::AppContext;
use trivialist::ui::run_app;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;
    let logger = Logger::from_config(config.logging.enabled)?;
    log::info!("Starting Trivialist against {}", config.api.base_url);

    let backend = create_backend(&config.api)?;
    let context = AppContext::new(config, backend, logger);

    run_app(context).await
}
