use std::sync::Arc;

use iced::Application;
use promptconvert::client::gui::app::ConverterApp;
use promptconvert::client::services::convert_service::ConvertService;
use promptconvert::config::ClientConfig;

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    let config = ClientConfig::from_env();
    std::env::set_var("RUST_LOG", &config.log_level);
    env_logger::init();

    log::info!("using conversion endpoint {}", config.server_url);
    let service = Arc::new(ConvertService::new(&config)?);

    ConverterApp::run(iced::Settings::with_flags(service))?;
    Ok(())
}
