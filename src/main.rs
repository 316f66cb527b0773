use std::sync::Arc;

use anyhow::Result;

use remindr::api::HttpApi;
use remindr::config::Config;
use remindr::constants::ERROR_NO_API_TOKEN;
use remindr::logger::{self, Logger};
use remindr::service::DataService;
use remindr::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    // Check if API token is set
    let Some(token) = config.api_token() else {
        eprintln!("{ERROR_NO_API_TOKEN}");
        eprintln!("\n💡 To use this app:");
        eprintln!("1. Get an API token from your Remindr instance");
        eprintln!(
            "2. Set it as environment variable: export {}=your_token_here",
            config.api.api_token_env
        );
        eprintln!("3. Run the app again to see your actual data!");
        return Ok(());
    };

    if config.logging.enabled {
        logger::init_file_logging(log::LevelFilter::Debug)?;
    }

    let api = HttpApi::new(&config.api_base_url(), &token, config.api.timeout_secs)?;
    let logger = Logger::new();
    let service = DataService::new(Arc::new(api), logger.clone());

    // Run the TUI application
    ui::run_app(service, logger, config).await?;

    Ok(())
}
