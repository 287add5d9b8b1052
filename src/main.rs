use copilot_client::client::config::ClientConfig;
use copilot_client::client::gui::app::{CopilotApp, CopilotFlags};
use copilot_client::client::services::copilot_service::CopilotService;
use iced::{Application, Settings};

fn main() -> anyhow::Result<()> {
    // load environment from .env (optional)
    let config = ClientConfig::from_env();
    config.init_logger();

    let service = CopilotService::new(&config)?;
    CopilotApp::run(Settings::with_flags(CopilotFlags {
        theme: config.theme,
        service,
    }))?;
    Ok(())
}
