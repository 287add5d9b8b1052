use std::io::Write;

use copilot_client::client::config::ClientConfig;
use copilot_client::client::models::app_state::QueryAppState;
use copilot_client::client::models::ui_state::Panel;
use copilot_client::client::services::copilot_service::CopilotService;
use log::info;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use url::Url;

const BANNER: &str = "MoonbergGPT 🚀";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    config.init_logger();

    // optional first argument: full endpoint URL
    let service = match std::env::args().nth(1) {
        Some(raw) => CopilotService::with_endpoint(Url::parse(&raw)?, config.request_timeout)?,
        None => CopilotService::new(&config)?,
    };
    info!("[CLIENT] Query endpoint: {}", service.endpoint());

    println!("{}", BANNER);
    println!("Ask a question about the database, /quit to exit.");

    let mut state = QueryAppState::new(config.theme);
    let mut lines = BufReader::new(stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else { break };
        if line.trim() == "/quit" {
            break;
        }

        state.set_query(line);
        let Some(query) = state.submit() else { continue };
        println!("{}", state.submit_label());

        let result = service.query(&query).await;
        state.complete(result);

        match state.panel() {
            Panel::Response(response) => println!("{}", response),
            Panel::Error(message) => eprintln!("{}", message),
            Panel::Empty => {}
        }
    }

    Ok(())
}
